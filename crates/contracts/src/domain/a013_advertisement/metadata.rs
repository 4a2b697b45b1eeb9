use crate::shared::metadata::{
    EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo, EntityUiMetadata,
    FieldDefault, FieldMetadata, FieldType, TextPattern, ValidationRules,
};

pub static ADVERTISEMENT: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a013",
        entity_name: "advertisement",
        collection_name: "advertisements",
        key_kind: EntityKeyKind::Id,
        feeds_dropdown: None,
        ui: EntityUiMetadata {
            element_name: "Advertisement",
            list_name: "Advertisements",
            icon: "megaphone",
            title_field: "title",
        },
    },
    fields: FIELDS,
    rules: &[],
    capabilities: EntityCapabilities::full(),
};

pub const PLACEMENTS: &[(&str, &str)] = &[
    ("home-1", "Home 1"),
    ("home-2", "Home 2"),
    ("home-3", "Home 3"),
    ("home-4", "Home 4"),
    ("home-5", "Home 5"),
    ("home-6", "Home 6"),
    ("home-7", "Home 7"),
    ("home-8", "Home 8"),
    ("home-9", "Home 9"),
    ("home-10", "Home 10"),
    ("home-11", "Home 11"),
    ("home-12", "Home 12"),
];

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("title", "Title", FieldType::TEXT)
        .required()
        .in_list(),
    FieldMetadata::new("link", "Link", FieldType::URL)
        .rules(ValidationRules {
            required: true,
            pattern: Some(TextPattern::HttpUrl),
            ..ValidationRules::none()
        })
        .placeholder("https://"),
    FieldMetadata::new("placement", "Placement", FieldType::Enum(PLACEMENTS))
        .required()
        .in_list(),
    FieldMetadata::new("is_active", "Active", FieldType::Flag)
        .default_value(FieldDefault::Flag(true))
        .in_list(),
    FieldMetadata::new("image_mobile", "Mobile image", FieldType::IMAGE)
        .rules(ValidationRules::required_on_create())
        .section("Images"),
    FieldMetadata::new("image_desktop", "Desktop image", FieldType::IMAGE)
        .rules(ValidationRules::required_on_create())
        .section("Images"),
];
