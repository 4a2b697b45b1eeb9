pub mod details;
pub mod list;
mod page;
pub mod view;

pub use page::AdminPage;
