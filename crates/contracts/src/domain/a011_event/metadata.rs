use crate::shared::dropdown::DropdownKey;
use crate::shared::metadata::{
    CrossFieldRule, EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo,
    EntityUiMetadata, FieldDefault, FieldMetadata, FieldType, TextPattern, ValidationRules,
};

pub static EVENT: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a011",
        entity_name: "event",
        collection_name: "events",
        key_kind: EntityKeyKind::Slug,
        feeds_dropdown: None,
        ui: EntityUiMetadata {
            element_name: "Event",
            list_name: "Events",
            icon: "calendar",
            title_field: "title",
        },
    },
    fields: FIELDS,
    rules: RULES,
    capabilities: EntityCapabilities::full(),
};

pub const EVENT_TYPES: &[(&str, &str)] = &[
    ("physical", "Physical"),
    ("online", "Online"),
    ("hybrid", "Hybrid"),
];

pub const REGISTRATION_TYPES: &[(&str, &str)] = &[("free", "Free"), ("paid", "Paid")];

const SCHEDULE: &str = "Date & Time";
const ORGANIZER: &str = "Organizer";
const REGISTRATION: &str = "Registration";
const MEDIA: &str = "Media";
const SEO: &str = "SEO";

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("title", "Title", FieldType::TEXT)
        .required()
        .in_list(),
    FieldMetadata::new("slug", "Slug", FieldType::TEXT)
        .rules(ValidationRules::pattern(TextPattern::Slug))
        .derived_from("title"),
    FieldMetadata::new("short_description", "Short description", FieldType::TEXT)
        .rules(ValidationRules::max_length(500)),
    FieldMetadata::new("description", "Description", FieldType::LONG_TEXT),
    FieldMetadata::new("event_type", "Event type", FieldType::Enum(EVENT_TYPES))
        .default_value(FieldDefault::Text("physical"))
        .in_list(),
    FieldMetadata::new("venue", "Venue", FieldType::TEXT)
        .required()
        .in_list(),
    FieldMetadata::new("seat_limit", "Seat limit", FieldType::INTEGER)
        .rules(ValidationRules {
            min: Some(0.0),
            ..ValidationRules::none()
        }),
    FieldMetadata::new("featured", "Featured", FieldType::Flag),
    FieldMetadata::new("is_active", "Active", FieldType::Flag)
        .default_value(FieldDefault::Flag(true))
        .in_list(),
    FieldMetadata::new("event_date", "Event date", FieldType::DATE)
        .required()
        .in_list()
        .section(SCHEDULE),
    FieldMetadata::new("event_end_date", "End date", FieldType::DATE).section(SCHEDULE),
    FieldMetadata::new("time", "Time", FieldType::TEXT)
        .required()
        .section(SCHEDULE)
        .placeholder("e.g. 10:00 AM - 5:00 PM"),
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
        .rules(ValidationRules::max_length(120))
        .section(ORGANIZER),
    FieldMetadata::new(
        "registration_type",
        "Registration type",
        FieldType::Enum(REGISTRATION_TYPES),
    )
    .default_value(FieldDefault::Text("free"))
    .section(REGISTRATION),
    FieldMetadata::new("registration_price", "Registration price", FieldType::DECIMAL)
        .rules(ValidationRules {
            min: Some(0.0),
            ..ValidationRules::none()
        })
        .section(REGISTRATION),
    FieldMetadata::new("registration_link", "Registration link", FieldType::URL)
        .rules(ValidationRules::pattern(TextPattern::HttpUrl))
        .section(REGISTRATION),
    FieldMetadata::new("registration_deadline", "Registration deadline", FieldType::DATE)
        .section(REGISTRATION),
    FieldMetadata::new("featured_image", "Featured image", FieldType::IMAGE).section(MEDIA),
    FieldMetadata::new("banner_image", "Banner image", FieldType::IMAGE).section(MEDIA),
    FieldMetadata::new("meta_title", "Meta title", FieldType::TEXT)
        .rules(ValidationRules::max_length(200))
        .section(SEO),
    FieldMetadata::new("meta_description", "Meta description", FieldType::LONG_TEXT)
        .rules(ValidationRules::max_length(500))
        .section(SEO),
    FieldMetadata::new("meta_keywords", "Meta keywords", FieldType::TEXT)
        .rules(ValidationRules::max_length(500))
        .section(SEO),
];

const RULES: &[CrossFieldRule] = &[
    CrossFieldRule::AtLeastOneOf {
        fields: &["organizer_school", "organizer_university", "organizer_custom"],
        error_key: "organizer",
        message: "Please specify at least one organizer",
    },
    CrossFieldRule::RequiredWhen {
        field: "registration_price",
        when_field: "registration_type",
        equals: "paid",
        message: "Registration price is required for paid events",
    },
];
