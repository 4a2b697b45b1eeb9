use crate::domain::common::nested::SEO_SECTION;
use crate::shared::dropdown::DropdownKey;
use crate::shared::metadata::{
    EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo, EntityUiMetadata,
    FieldMetadata, FieldType, ListEncoding, TextPattern, ValidationRules,
};

pub static COURSE: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a007",
        entity_name: "course",
        collection_name: "courses",
        key_kind: EntityKeyKind::Slug,
        feeds_dropdown: Some(DropdownKey::Courses),
        ui: EntityUiMetadata {
            element_name: "Course",
            list_name: "Courses",
            icon: "book-open",
            title_field: "name",
        },
    },
    fields: FIELDS,
    rules: &[],
    capabilities: EntityCapabilities::full(),
};

const CONTENT: &str = "Content";

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("name", "Name", FieldType::TEXT)
        .required()
        .in_list(),
    FieldMetadata::new("abbreviation", "Abbreviation", FieldType::TEXT)
        .rules(ValidationRules::max_length(50))
        .in_list()
        .placeholder("e.g. BSc CSIT"),
    FieldMetadata::new("slug", "Slug", FieldType::TEXT)
        .rules(ValidationRules::pattern(TextPattern::Slug))
        .derived_from("name"),
    FieldMetadata::new(
        "university",
        "University",
        FieldType::AggregateRef(DropdownKey::Universities),
    )
    .required()
    .in_list(),
    FieldMetadata::new("level", "Level", FieldType::AggregateRef(DropdownKey::Levels)).in_list(),
    FieldMetadata::new("duration", "Duration", FieldType::TEXT).placeholder("e.g. 4 years"),
    FieldMetadata::new(
        "disciplines",
        "Disciplines",
        FieldType::AggregateRefs(DropdownKey::Disciplines, ListEncoding::Json),
    ),
    FieldMetadata::new("short_description", "Short description", FieldType::LONG_TEXT)
        .section(CONTENT),
    FieldMetadata::new("long_description", "Long description", FieldType::LONG_TEXT)
        .section(CONTENT),
    FieldMetadata::new("outcome", "Outcome", FieldType::LONG_TEXT).section(CONTENT),
    FieldMetadata::new("eligibility", "Eligibility", FieldType::LONG_TEXT).section(CONTENT),
    FieldMetadata::new("curriculum", "Curriculum", FieldType::LONG_TEXT).section(CONTENT),
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
