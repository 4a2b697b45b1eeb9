use crate::shared::dropdown::DropdownKey;
use crate::shared::metadata::{
    EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo, EntityUiMetadata,
    FieldMetadata, FieldType, TextPattern, ValidationRules,
};

pub static LEVEL: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a001",
        entity_name: "level",
        collection_name: "levels",
        key_kind: EntityKeyKind::Slug,
        feeds_dropdown: Some(DropdownKey::Levels),
        ui: EntityUiMetadata {
            element_name: "Level",
            list_name: "Levels",
            icon: "layers",
            title_field: "title",
        },
    },
    fields: FIELDS,
    rules: &[],
    capabilities: EntityCapabilities::full(),
};

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("title", "Title", FieldType::TEXT)
        .required()
        .in_list()
        .placeholder("Enter level title"),
    FieldMetadata::new("slug", "Slug", FieldType::TEXT)
        .rules(ValidationRules::pattern(TextPattern::Slug))
        .derived_from("title")
        .in_list()
        .placeholder("Auto-generated from title")
        .hint("Leave empty to auto-generate from title"),
];
