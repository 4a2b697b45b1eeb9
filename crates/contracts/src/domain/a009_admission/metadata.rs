use crate::shared::dropdown::DropdownKey;
use crate::shared::metadata::{
    CrossFieldRule, EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo,
    EntityUiMetadata, FieldMetadata, FieldType, ListEncoding, TextPattern, ValidationRules,
};

pub static ADMISSION: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a009",
        entity_name: "admission",
        collection_name: "admissions",
        key_kind: EntityKeyKind::Slug,
        feeds_dropdown: None,
        ui: EntityUiMetadata {
            element_name: "Admission",
            list_name: "Admissions",
            icon: "clipboard-list",
            title_field: "title",
        },
    },
    fields: FIELDS,
    rules: RULES,
    capabilities: EntityCapabilities::full(),
};

const SCHEDULE: &str = "Schedule";

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("title", "Title", FieldType::TEXT)
        .required()
        .in_list()
        .placeholder("e.g. BSc CSIT Admission Open 2082"),
    FieldMetadata::new("slug", "Slug", FieldType::TEXT)
        .rules(ValidationRules::pattern(TextPattern::Slug))
        .derived_from("title"),
    FieldMetadata::new("school", "School", FieldType::AggregateRef(DropdownKey::Schools))
        .wire("school_id")
        .required()
        .in_list(),
    FieldMetadata::new(
        "courses",
        "Courses",
        FieldType::AggregateRefs(DropdownKey::Courses, ListEncoding::Json),
    ),
    FieldMetadata::new("level", "Level", FieldType::AggregateRef(DropdownKey::Levels)),
    FieldMetadata::new(
        "university",
        "University",
        FieldType::AggregateRef(DropdownKey::Universities),
    ),
    FieldMetadata::new("featured", "Featured", FieldType::Flag).in_list(),
    FieldMetadata::new("published_date", "Published date", FieldType::DATE)
        .required()
        .section(SCHEDULE),
    FieldMetadata::new("active_from", "Active from date", FieldType::DATE)
        .required()
        .in_list()
        .section(SCHEDULE),
    FieldMetadata::new("active_until", "Active until date", FieldType::DATE)
        .required()
        .in_list()
        .section(SCHEDULE),
    FieldMetadata::new("description", "Description", FieldType::LONG_TEXT).section("About"),
];

const RULES: &[CrossFieldRule] = &[
    CrossFieldRule::DateAfter {
        earlier: "active_from",
        later: "active_until",
        message: "Active until date must be after active from date",
    },
    CrossFieldRule::DateNotBefore {
        earlier: "published_date",
        later: "active_from",
        error_field: "active_from",
        message: "Active from date should not be before published date",
    },
];
