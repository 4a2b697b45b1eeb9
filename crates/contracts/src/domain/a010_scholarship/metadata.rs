use crate::shared::dropdown::DropdownKey;
use crate::shared::metadata::{
    CrossFieldRule, EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo,
    EntityUiMetadata, FieldMetadata, FieldType, ListEncoding, TextPattern, ValidationRules,
};

pub static SCHOLARSHIP: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a010",
        entity_name: "scholarship",
        collection_name: "scholarships",
        key_kind: EntityKeyKind::Slug,
        feeds_dropdown: None,
        ui: EntityUiMetadata {
            element_name: "Scholarship",
            list_name: "Scholarships",
            icon: "award",
            title_field: "title",
        },
    },
    fields: FIELDS,
    rules: RULES,
    capabilities: EntityCapabilities::full(),
};

const SCHEDULE: &str = "Schedule";
const ORGANIZER: &str = "Organizer";

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("title", "Title", FieldType::TEXT)
        .required()
        .in_list(),
    FieldMetadata::new("slug", "Slug", FieldType::TEXT)
        .rules(ValidationRules::pattern(TextPattern::Slug))
        .derived_from("title"),
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
    FieldMetadata::new(
        "organizer_school",
        "Organizing school",
        FieldType::AggregateRef(DropdownKey::Schools),
    )
    .section(ORGANIZER),
    FieldMetadata::new(
        "organizer_university",
        "Organizing university",
        FieldType::AggregateRef(DropdownKey::Universities),
    )
    .section(ORGANIZER),
    FieldMetadata::new("organizer_custom", "Other organizer", FieldType::TEXT)
        .section(ORGANIZER)
        .hint("If the organizer is not a listed school or university"),
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
    FieldMetadata::new("description", "Description", FieldType::LONG_TEXT).section("About"),
    FieldMetadata::new("attachment", "Attachment", FieldType::DOCUMENT)
        .section("About")
        .hint("Scholarship brochure or related documents"),
];

const RULES: &[CrossFieldRule] = &[
    CrossFieldRule::DateAfter {
        earlier: "active_from",
        later: "active_until",
        message: "Active until date must be after active from date",
    },
    CrossFieldRule::AtLeastOneOf {
        fields: &["organizer_school", "organizer_university", "organizer_custom"],
        error_key: "organizer",
        message: "Please specify at least one organizer",
    },
];
