//! Core metadata types for admin entities
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_type::{FieldType, ListEncoding};
use super::validation::{CrossFieldRule, ValidationRules};
use crate::shared::dropdown::DropdownKey;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Which attribute addresses a single resource in the REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKeyKind {
    Slug,
    Id,
}

impl EntityKeyKind {
    /// Name of the attribute in entity payloads and of the URL query parameter
    pub fn param_name(&self) -> &'static str {
        match self {
            Self::Slug => "slug",
            Self::Id => "id",
        }
    }
}

/// Metadata for an entity
/// All string fields are 'static for zero-cost compile-time access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadataInfo {
    pub entity_index: &'static str,
    pub entity_name: &'static str,
    /// REST collection path segment, e.g. "admissions"
    pub collection_name: &'static str,
    pub key_kind: EntityKeyKind,
    /// Dropdown list fed by this entity, invalidated on every write
    pub feeds_dropdown: Option<DropdownKey>,
    pub ui: EntityUiMetadata,
}

/// UI metadata for entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    pub element_name: &'static str,
    pub list_name: &'static str,
    pub icon: &'static str,
    /// Field used as the row/heading title
    pub title_field: &'static str,
}

/// Which admin actions the entity supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityCapabilities {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
    pub view: bool,
}

impl EntityCapabilities {
    pub const fn full() -> Self {
        Self {
            create: true,
            edit: true,
            delete: true,
            view: true,
        }
    }

    pub const fn read_only() -> Self {
        Self {
            create: false,
            edit: false,
            delete: false,
            view: true,
        }
    }
}

/// Everything the generic admin pages need to instantiate one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityDescriptor {
    pub info: EntityMetadataInfo,
    pub fields: &'static [FieldMetadata],
    pub rules: &'static [CrossFieldRule],
    pub capabilities: EntityCapabilities,
}

impl EntityDescriptor {
    pub fn field(&self, name: &str) -> Option<&'static FieldMetadata> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Dropdown sources used by the form, deduplicated, in field order
    pub fn dropdowns(&self) -> Vec<DropdownKey> {
        let mut keys = Vec::new();
        let nested = self.fields.iter().flat_map(|f| f.nested().iter());
        for key in self
            .fields
            .iter()
            .chain(nested)
            .filter_map(|f| f.field_type.dropdown())
        {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    /// Fields rendered as list columns
    pub fn list_columns(&self) -> impl Iterator<Item = &'static FieldMetadata> {
        self.fields.iter().filter(|f| f.ui.visible_in_list)
    }

    /// Field whose value is auto-derived from `source`
    pub fn derived_from(&self, source: &str) -> Option<&'static FieldMetadata> {
        self.fields.iter().find(|f| f.derive_from == Some(source))
    }
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// Initial value of a field in create mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldDefault {
    #[default]
    Empty,
    Text(&'static str),
    Flag(bool),
}

/// Metadata for a single field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    pub name: &'static str,
    /// Multipart key when it differs from `name`
    pub wire_name: Option<&'static str>,
    pub field_type: FieldType,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
    pub default: FieldDefault,
    /// Source field this one is slugified from
    pub derive_from: Option<&'static str>,
    /// Sub-fields for NestedTable
    pub nested_fields: Option<&'static [FieldMetadata]>,
}

impl FieldMetadata {
    /// Optional field shown in the form only; refine with the builder methods below
    pub const fn new(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            wire_name: None,
            field_type,
            ui: FieldUiMetadata::labeled(label),
            validation: ValidationRules::none(),
            default: FieldDefault::Empty,
            derive_from: None,
            nested_fields: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub const fn rules(mut self, validation: ValidationRules) -> Self {
        self.validation = validation;
        self
    }

    pub const fn in_list(mut self) -> Self {
        self.ui.visible_in_list = true;
        self
    }

    pub const fn hidden_in_form(mut self) -> Self {
        self.ui.visible_in_form = false;
        self
    }

    pub const fn section(mut self, section: &'static str) -> Self {
        self.ui.section = section;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.ui.placeholder = Some(placeholder);
        self
    }

    pub const fn hint(mut self, hint: &'static str) -> Self {
        self.ui.hint = Some(hint);
        self
    }

    pub const fn wire(mut self, wire_name: &'static str) -> Self {
        self.wire_name = Some(wire_name);
        self
    }

    pub const fn default_value(mut self, default: FieldDefault) -> Self {
        self.default = default;
        self
    }

    pub const fn derived_from(mut self, source: &'static str) -> Self {
        self.derive_from = Some(source);
        self
    }

    pub const fn with_nested(mut self, fields: &'static [FieldMetadata]) -> Self {
        self.nested_fields = Some(fields);
        self
    }

    /// Key used in the multipart body
    pub fn wire_name(&self) -> &'static str {
        self.wire_name.unwrap_or(self.name)
    }

    /// Get nested fields metadata (for NestedTable)
    pub fn nested(&self) -> &'static [FieldMetadata] {
        self.nested_fields.unwrap_or(&[])
    }

    /// Check if field is optional
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    /// Nested table whose rows carry an upload sub-field
    pub fn has_nested_upload(&self) -> bool {
        self.nested()
            .iter()
            .any(|f| matches!(f.field_type, FieldType::Upload(_)))
    }

    pub fn list_encoding(&self) -> Option<ListEncoding> {
        match self.field_type {
            FieldType::AggregateRefs(_, encoding) | FieldType::NestedTable(encoding) => {
                Some(encoding)
            }
            _ => None,
        }
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub hint: Option<&'static str>,
    pub visible_in_list: bool,
    pub visible_in_form: bool,
    /// Form section heading the control is grouped under
    pub section: &'static str,
}

impl FieldUiMetadata {
    pub const fn labeled(label: &'static str) -> Self {
        Self {
            label,
            placeholder: None,
            hint: None,
            visible_in_list: false,
            visible_in_form: true,
            section: "Basic Information",
        }
    }
}

/// Default values for FieldUiMetadata
impl Default for FieldUiMetadata {
    fn default() -> Self {
        Self::labeled("")
    }
}
