use crate::shared::dropdown::DropdownKey;
use crate::shared::metadata::{
    EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo, EntityUiMetadata,
    FieldMetadata, FieldType, TextPattern, ValidationRules,
};

pub static DISTRICT: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a002",
        entity_name: "district",
        collection_name: "districts",
        key_kind: EntityKeyKind::Slug,
        feeds_dropdown: Some(DropdownKey::Districts),
        ui: EntityUiMetadata {
            element_name: "District",
            list_name: "Districts",
            icon: "map-pin",
            title_field: "name",
        },
    },
    fields: FIELDS,
    rules: &[],
    capabilities: EntityCapabilities::full(),
};

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Name", FieldType::TEXT)
        .required()
        .in_list()
        .placeholder("Enter district name"),
    FieldMetadata::new("slug", "Slug", FieldType::TEXT)
        .rules(ValidationRules::pattern(TextPattern::Slug))
        .derived_from("name")
        .in_list()
        .placeholder("Auto-generated from name"),
];
