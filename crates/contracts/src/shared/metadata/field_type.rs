//! Field type enumeration for metadata system

use crate::shared::dropdown::DropdownKey;

/// Scalar kinds rendered as a single input control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimitiveKind {
    #[default]
    Text,
    LongText,
    Date,
    Time,
    Integer,
    Decimal,
    Url,
    Email,
}

impl PrimitiveKind {
    /// HTML input type for the control
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::LongText => "text",
            Self::Date => "date",
            Self::Time => "time",
            Self::Integer | Self::Decimal => "number",
            Self::Url => "url",
            Self::Email => "email",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Decimal)
    }
}

/// How a list value travels in a multipart body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListEncoding {
    /// One field holding a JSON array
    #[default]
    Json,
    /// The same key appended once per element
    Repeated,
}

/// What an upload control accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Document,
}

impl UploadKind {
    /// Value for the `accept` attribute of the file input
    pub fn accept(&self) -> &'static str {
        match self {
            Self::Image => "image/*",
            Self::Document => ".pdf,.doc,.docx,image/*",
        }
    }
}

/// Category of field type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Primitive(PrimitiveKind),
    /// Boolean checkbox
    Flag,
    /// Fixed choice list: (value, label)
    Enum(&'static [(&'static str, &'static str)]),
    /// Single reference to another entity by id
    AggregateRef(DropdownKey),
    /// Many references to another entity by id
    AggregateRefs(DropdownKey, ListEncoding),
    /// Vec of embedded sub-records, described by `FieldMetadata::nested_fields`
    NestedTable(ListEncoding),
    /// Binary upload or an already stored remote file
    Upload(UploadKind),
}

impl Default for FieldType {
    fn default() -> Self {
        Self::Primitive(PrimitiveKind::Text)
    }
}

impl FieldType {
    pub const TEXT: FieldType = FieldType::Primitive(PrimitiveKind::Text);
    pub const LONG_TEXT: FieldType = FieldType::Primitive(PrimitiveKind::LongText);
    pub const DATE: FieldType = FieldType::Primitive(PrimitiveKind::Date);
    pub const TIME: FieldType = FieldType::Primitive(PrimitiveKind::Time);
    pub const INTEGER: FieldType = FieldType::Primitive(PrimitiveKind::Integer);
    pub const DECIMAL: FieldType = FieldType::Primitive(PrimitiveKind::Decimal);
    pub const URL: FieldType = FieldType::Primitive(PrimitiveKind::Url);
    pub const EMAIL: FieldType = FieldType::Primitive(PrimitiveKind::Email);
    pub const IMAGE: FieldType = FieldType::Upload(UploadKind::Image);
    pub const DOCUMENT: FieldType = FieldType::Upload(UploadKind::Document);

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primitive(_) => "primitive",
            Self::Flag => "flag",
            Self::Enum(_) => "enum",
            Self::AggregateRef(_) => "aggregate_ref",
            Self::AggregateRefs(_, _) => "aggregate_refs",
            Self::NestedTable(_) => "nested_table",
            Self::Upload(_) => "upload",
        }
    }

    /// Dropdown source this field reads its options from
    pub fn dropdown(&self) -> Option<DropdownKey> {
        match self {
            Self::AggregateRef(key) | Self::AggregateRefs(key, _) => Some(*key),
            _ => None,
        }
    }
}
