//! Entity create/edit form
//!
//! MVVM split:
//! - view_model.rs: form signals, load and save commands
//! - fields.rs: one control per field type
//! - view.rs: Leptos component (pure UI)

mod fields;
mod view;
mod view_model;

pub use view::EntityDetails;
pub use view_model::{EntityDetailsViewModel, SaveTarget};
