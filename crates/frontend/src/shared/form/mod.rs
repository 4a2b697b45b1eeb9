//! Generic, metadata-driven entity forms

pub mod encoder;
pub mod normalizer;
pub mod slug;
pub mod state;
pub mod submit;
pub mod validation;
pub mod value;

pub use encoder::encode;
pub use state::FormState;
pub use submit::{submit, FormError};
pub use validation::{validate, FieldErrors};
pub use value::{FieldValue, FileField, Record};
