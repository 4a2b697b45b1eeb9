//! Metadata types describing admin entities and their form fields
//!
//! This module provides compile-time metadata for every entity managed by
//! the admin UI. All types use 'static lifetimes for zero-cost access to
//! compile-time constants.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a009_admission::ADMISSION;
//!
//! println!("Entity: {}", ADMISSION.info.ui.element_name);
//! for field in ADMISSION.fields {
//!     println!("{}: {}", field.name, field.ui.label);
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::{FieldType, ListEncoding, PrimitiveKind, UploadKind};
pub use types::{
    EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo, EntityUiMetadata,
    FieldDefault, FieldMetadata, FieldUiMetadata,
};
pub use validation::{CrossFieldRule, TextPattern, ValidationRules};
