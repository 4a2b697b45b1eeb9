use crate::shared::dropdown::DropdownKey;
use crate::shared::metadata::{
    EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo, EntityUiMetadata,
    FieldMetadata, FieldType, TextPattern, ValidationRules,
};

pub static DISCIPLINE: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a004",
        entity_name: "discipline",
        collection_name: "disciplines",
        key_kind: EntityKeyKind::Slug,
        feeds_dropdown: Some(DropdownKey::Disciplines),
        ui: EntityUiMetadata {
            element_name: "Discipline",
            list_name: "Disciplines",
            icon: "book",
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
        .placeholder("Enter discipline title"),
    FieldMetadata::new("slug", "Slug", FieldType::TEXT)
        .rules(ValidationRules::pattern(TextPattern::Slug))
        .derived_from("title")
        .in_list(),
];
