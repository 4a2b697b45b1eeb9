use crate::domain::common::nested::{EMAIL_FIELDS, GALLERY_FIELDS, PHONE_FIELDS, SEO_SECTION};
use crate::shared::dropdown::DropdownKey;
use crate::shared::metadata::{
    EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo, EntityUiMetadata,
    FieldDefault, FieldMetadata, FieldType, ListEncoding, TextPattern, ValidationRules,
};

pub static UNIVERSITY: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a006",
        entity_name: "university",
        collection_name: "universities",
        key_kind: EntityKeyKind::Slug,
        feeds_dropdown: Some(DropdownKey::Universities),
        ui: EntityUiMetadata {
            element_name: "University",
            list_name: "Universities",
            icon: "graduation-cap",
            title_field: "name",
        },
    },
    fields: FIELDS,
    rules: &[],
    capabilities: EntityCapabilities::full(),
};

const MEDIA: &str = "Media";
const CONTACT: &str = "Contact";
const ABOUT: &str = "About";

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Name", FieldType::TEXT)
        .required()
        .in_list(),
    FieldMetadata::new("slug", "Slug", FieldType::TEXT)
        .rules(ValidationRules::pattern(TextPattern::Slug))
        .derived_from("name"),
    FieldMetadata::new("address", "Address", FieldType::TEXT)
        .required()
        .in_list(),
    FieldMetadata::new("established_date", "Established", FieldType::DATE),
    FieldMetadata::new("type", "Type", FieldType::AggregateRef(DropdownKey::Types)),
    FieldMetadata::new("priority", "Priority", FieldType::INTEGER)
        .rules(ValidationRules::range(0.0, 9999.0))
        .default_value(FieldDefault::Text("999"))
        .in_list()
        .hint("Lower numbers are listed first"),
    FieldMetadata::new("foreign_affiliated", "Foreign affiliated", FieldType::Flag),
    FieldMetadata::new("is_verified", "Verified", FieldType::Flag).in_list(),
    FieldMetadata::new("status", "Active", FieldType::Flag)
        .default_value(FieldDefault::Flag(true))
        .in_list(),
    FieldMetadata::new("website", "Website", FieldType::URL)
        .rules(ValidationRules::pattern(TextPattern::HttpUrl))
        .section(CONTACT),
    FieldMetadata::new("location", "Location", FieldType::TEXT)
        .section(CONTACT)
        .hint("Map link or location text"),
    FieldMetadata::new("phones", "Phones", FieldType::NestedTable(ListEncoding::Json))
        .with_nested(PHONE_FIELDS)
        .section(CONTACT),
    FieldMetadata::new("emails", "Emails", FieldType::NestedTable(ListEncoding::Json))
        .with_nested(EMAIL_FIELDS)
        .section(CONTACT),
    FieldMetadata::new("salient_features", "Salient features", FieldType::LONG_TEXT)
        .section(ABOUT),
    FieldMetadata::new("about", "About", FieldType::LONG_TEXT).section(ABOUT),
    FieldMetadata::new("logo", "Logo", FieldType::IMAGE).section(MEDIA),
    FieldMetadata::new("cover_photo", "Cover photo", FieldType::IMAGE).section(MEDIA),
    FieldMetadata::new("gallery", "Gallery", FieldType::NestedTable(ListEncoding::Json))
        .with_nested(GALLERY_FIELDS)
        .section(MEDIA),
    FieldMetadata::new("meta_title", "Meta title", FieldType::TEXT)
        .rules(ValidationRules::max_length(255))
        .section(SEO_SECTION),
    FieldMetadata::new("meta_description", "Meta description", FieldType::LONG_TEXT)
        .section(SEO_SECTION),
    FieldMetadata::new("og_title", "OG title", FieldType::TEXT)
        .rules(ValidationRules::max_length(255))
        .section(SEO_SECTION),
    FieldMetadata::new("og_description", "OG description", FieldType::LONG_TEXT)
        .section(SEO_SECTION),
    FieldMetadata::new("og_image", "OG image", FieldType::IMAGE).section(SEO_SECTION),
];
