mod admin;
mod filter_bar;
mod table;

pub use admin::AdminInquiriesPage;
pub use filter_bar::{FilterScope, InquiryFilterBar};
pub use table::InquiryTable;
