//! Common types shared by all admin entities

pub mod entity_key;
pub mod nested;

pub use entity_key::EntityKey;
