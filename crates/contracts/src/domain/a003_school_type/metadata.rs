use crate::shared::dropdown::DropdownKey;
use crate::shared::metadata::{
    EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo, EntityUiMetadata,
    FieldMetadata, FieldType,
};

/// Ownership type of a school (public, private, community...)
pub static SCHOOL_TYPE: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a003",
        entity_name: "type",
        collection_name: "types",
        key_kind: EntityKeyKind::Slug,
        feeds_dropdown: Some(DropdownKey::Types),
        ui: EntityUiMetadata {
            element_name: "Type",
            list_name: "Types",
            icon: "tag",
            title_field: "name",
        },
    },
    fields: FIELDS,
    rules: &[],
    capabilities: EntityCapabilities::full(),
};

const FIELDS: &[FieldMetadata] = &[FieldMetadata::new("name", "Name", FieldType::TEXT)
    .required()
    .in_list()
    .placeholder("Enter type name")];
