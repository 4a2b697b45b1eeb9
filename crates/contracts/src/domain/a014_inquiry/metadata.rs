use crate::shared::metadata::{
    EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo, EntityUiMetadata,
    FieldMetadata, FieldType,
};

/// Inquiries addressed to the signed-in school; the inbox never writes
pub static INQUIRY: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a014",
        entity_name: "inquiry",
        collection_name: "schools/me/inquiries",
        key_kind: EntityKeyKind::Id,
        feeds_dropdown: None,
        ui: EntityUiMetadata {
            element_name: "Inquiry",
            list_name: "Inquiries",
            icon: "inbox",
            title_field: "full_name",
        },
    },
    fields: FIELDS,
    rules: &[],
    capabilities: EntityCapabilities::read_only(),
};

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("full_name", "Full name", FieldType::TEXT).in_list(),
    FieldMetadata::new("phone", "Phone", FieldType::TEXT).in_list(),
    FieldMetadata::new("email", "Email", FieldType::EMAIL).in_list(),
    FieldMetadata::new("message", "Message", FieldType::LONG_TEXT),
    FieldMetadata::new("created_at", "Received", FieldType::DATE).in_list(),
];
