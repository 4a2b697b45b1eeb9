use crate::shared::dropdown::DropdownKey;
use crate::shared::metadata::{
    EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo, EntityUiMetadata,
    FieldDefault, FieldMetadata, FieldType, ListEncoding, TextPattern, ValidationRules,
};

pub static INFORMATION: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a012",
        entity_name: "information",
        collection_name: "information",
        key_kind: EntityKeyKind::Slug,
        feeds_dropdown: None,
        ui: EntityUiMetadata {
            element_name: "Information",
            list_name: "Information",
            icon: "file-text",
            title_field: "title",
        },
    },
    fields: FIELDS,
    rules: &[],
    capabilities: EntityCapabilities::full(),
};

const CONTENT: &str = "Content";
const MEDIA: &str = "Media";
const RELATIONS: &str = "Related";
const SEO: &str = "SEO";

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("title", "Title", FieldType::TEXT)
        .required()
        .in_list(),
    FieldMetadata::new("slug", "Slug", FieldType::TEXT)
        .rules(ValidationRules::pattern(TextPattern::Slug))
        .derived_from("title"),
    FieldMetadata::new(
        "category",
        "Category",
        FieldType::AggregateRef(DropdownKey::InformationCategories),
    )
    .required()
    .in_list(),
    FieldMetadata::new("published_date", "Published date", FieldType::DATE)
        .required()
        .in_list(),
    FieldMetadata::new("summary", "Summary", FieldType::TEXT)
        .rules(ValidationRules::max_length(500))
        .hint("Brief summary for listings"),
    FieldMetadata::new("featured", "Featured", FieldType::Flag),
    FieldMetadata::new("is_active", "Active", FieldType::Flag)
        .default_value(FieldDefault::Flag(true))
        .in_list(),
    FieldMetadata::new("top_description", "Top description", FieldType::LONG_TEXT)
        .section(CONTENT),
    FieldMetadata::new("content", "Content", FieldType::LONG_TEXT).section(CONTENT),
    FieldMetadata::new("below_description", "Below description", FieldType::LONG_TEXT)
        .section(CONTENT),
    FieldMetadata::new("featured_image", "Featured image", FieldType::IMAGE).section(MEDIA),
    FieldMetadata::new("banner_image", "Banner image", FieldType::IMAGE).section(MEDIA),
    FieldMetadata::new(
        "universities",
        "Universities",
        FieldType::AggregateRefs(DropdownKey::Universities, ListEncoding::Json),
    )
    .section(RELATIONS),
    FieldMetadata::new(
        "levels",
        "Levels",
        FieldType::AggregateRefs(DropdownKey::Levels, ListEncoding::Json),
    )
    .section(RELATIONS),
    FieldMetadata::new(
        "courses",
        "Courses",
        FieldType::AggregateRefs(DropdownKey::Courses, ListEncoding::Json),
    )
    .section(RELATIONS),
    FieldMetadata::new(
        "schools",
        "Schools",
        FieldType::AggregateRefs(DropdownKey::Schools, ListEncoding::Json),
    )
    .section(RELATIONS),
    FieldMetadata::new("meta_title", "Meta title", FieldType::TEXT)
        .rules(ValidationRules::max_length(200))
        .section(SEO),
    FieldMetadata::new("meta_description", "Meta description", FieldType::LONG_TEXT)
        .rules(ValidationRules::max_length(500))
        .section(SEO),
    FieldMetadata::new("meta_keywords", "Meta keywords", FieldType::TEXT)
        .rules(ValidationRules::max_length(255))
        .section(SEO)
        .hint("Comma separated"),
];
