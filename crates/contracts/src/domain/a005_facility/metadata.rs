use crate::shared::dropdown::DropdownKey;
use crate::shared::metadata::{
    EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo, EntityUiMetadata,
    FieldMetadata, FieldType, TextPattern, ValidationRules,
};

pub static FACILITY: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a005",
        entity_name: "facility",
        collection_name: "facilities",
        key_kind: EntityKeyKind::Slug,
        feeds_dropdown: Some(DropdownKey::Facilities),
        ui: EntityUiMetadata {
            element_name: "Facility",
            list_name: "Facilities",
            icon: "building",
            title_field: "name",
        },
    },
    fields: FIELDS,
    rules: &[],
    capabilities: EntityCapabilities::full(),
};

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Name", FieldType::TEXT)
        .rules(ValidationRules {
            required: true,
            custom_error: Some("Facility name is required"),
            ..ValidationRules::none()
        })
        .in_list()
        .placeholder("e.g. Library, Hostel, Cafeteria"),
    FieldMetadata::new("slug", "Slug", FieldType::TEXT)
        .rules(ValidationRules::pattern(TextPattern::Slug))
        .derived_from("name")
        .in_list(),
    FieldMetadata::new("icon", "Icon", FieldType::IMAGE).hint("PNG or SVG, shown next to the name"),
];
