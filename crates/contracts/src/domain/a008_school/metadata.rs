use crate::domain::common::nested::{
    BROCHURE_FIELDS, EMAIL_FIELDS, FAQ_FIELDS, GALLERY_FIELDS, MESSAGE_FIELDS, PHONE_FIELDS,
    SCHOOL_COURSE_FIELDS, SEO_SECTION, SOCIAL_FIELDS,
};
use crate::shared::dropdown::DropdownKey;
use crate::shared::metadata::{
    EntityCapabilities, EntityDescriptor, EntityKeyKind, EntityMetadataInfo, EntityUiMetadata,
    FieldDefault, FieldMetadata, FieldType, ListEncoding, TextPattern, ValidationRules,
};

pub static SCHOOL: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a008",
        entity_name: "school",
        collection_name: "schools",
        key_kind: EntityKeyKind::Slug,
        feeds_dropdown: Some(DropdownKey::Schools),
        ui: EntityUiMetadata {
            element_name: "School",
            list_name: "Schools",
            icon: "school",
            title_field: "name",
        },
    },
    fields: FIELDS,
    rules: &[],
    capabilities: EntityCapabilities::full(),
};

/// The school bound to the signed-in owner, served from `schools/me`
pub static OWN_PROFILE: EntityDescriptor = EntityDescriptor {
    info: EntityMetadataInfo {
        entity_index: "a008",
        entity_name: "own_profile",
        collection_name: "schools/me",
        key_kind: EntityKeyKind::Slug,
        feeds_dropdown: Some(DropdownKey::Schools),
        ui: EntityUiMetadata {
            element_name: "School Profile",
            list_name: "School Profile",
            icon: "school",
            title_field: "name",
        },
    },
    fields: OWN_FIELDS,
    rules: &[],
    capabilities: EntityCapabilities {
        create: false,
        edit: true,
        delete: false,
        view: true,
    },
};

const CONTACT: &str = "Contact";
const ABOUT: &str = "About";
const MEDIA: &str = "Media";
const ACADEMICS: &str = "Academics";

/// School form fields; `admin` fields are spliced in after the classification refs
macro_rules! school_fields {
    ($($admin:expr,)*) => {
        &[
            FieldMetadata::new("name", "Name", FieldType::TEXT)
                .required()
                .in_list(),
            FieldMetadata::new("slug", "Slug", FieldType::TEXT)
                .rules(ValidationRules::pattern(TextPattern::Slug))
                .derived_from("name"),
            FieldMetadata::new("address", "Address", FieldType::TEXT).in_list(),
            FieldMetadata::new("established_date", "Established", FieldType::DATE),
            FieldMetadata::new("district", "District", FieldType::AggregateRef(DropdownKey::Districts))
                .in_list(),
            FieldMetadata::new("level", "Level", FieldType::AggregateRef(DropdownKey::Levels)),
            FieldMetadata::new("level_text", "Level text", FieldType::TEXT)
                .hint("Free-text level shown when no level fits, e.g. \"+2 and Bachelor\""),
            FieldMetadata::new("type", "Type", FieldType::AggregateRef(DropdownKey::Types)),
            $($admin,)*
            FieldMetadata::new("website", "Website", FieldType::URL)
                .rules(ValidationRules::pattern(TextPattern::HttpUrl))
                .section(CONTACT),
            FieldMetadata::new("map_link", "Map link", FieldType::URL)
                .rules(ValidationRules::max_length(1024))
                .section(CONTACT),
            FieldMetadata::new("phones", "Phones", FieldType::NestedTable(ListEncoding::Json))
                .with_nested(PHONE_FIELDS)
                .section(CONTACT),
            FieldMetadata::new("emails", "Emails", FieldType::NestedTable(ListEncoding::Json))
                .with_nested(EMAIL_FIELDS)
                .section(CONTACT),
            FieldMetadata::new(
                "social_media",
                "Social media",
                FieldType::NestedTable(ListEncoding::Json),
            )
            .with_nested(SOCIAL_FIELDS)
            .section(CONTACT),
            FieldMetadata::new("salient_feature", "Salient features", FieldType::LONG_TEXT)
                .section(ABOUT),
            FieldMetadata::new("scholarship", "Scholarship", FieldType::LONG_TEXT).section(ABOUT),
            FieldMetadata::new("about_college", "About", FieldType::LONG_TEXT).section(ABOUT),
            FieldMetadata::new("faqs", "FAQs", FieldType::NestedTable(ListEncoding::Json))
                .with_nested(FAQ_FIELDS)
                .section(ABOUT),
            FieldMetadata::new("messages", "Messages", FieldType::NestedTable(ListEncoding::Json))
                .with_nested(MESSAGE_FIELDS)
                .section(ABOUT),
            FieldMetadata::new(
                "facilities",
                "Facilities",
                FieldType::AggregateRefs(DropdownKey::Facilities, ListEncoding::Repeated),
            )
            .section(ACADEMICS),
            FieldMetadata::new(
                "universities",
                "Affiliated universities",
                FieldType::AggregateRefs(DropdownKey::Universities, ListEncoding::Repeated),
            )
            .section(ACADEMICS),
            FieldMetadata::new(
                "school_courses",
                "Courses offered",
                FieldType::NestedTable(ListEncoding::Json),
            )
            .with_nested(SCHOOL_COURSE_FIELDS)
            .section(ACADEMICS),
            FieldMetadata::new("logo", "Logo", FieldType::IMAGE).section(MEDIA),
            FieldMetadata::new("cover_photo", "Cover photo", FieldType::IMAGE).section(MEDIA),
            FieldMetadata::new("gallery", "Gallery", FieldType::NestedTable(ListEncoding::Json))
                .with_nested(GALLERY_FIELDS)
                .section(MEDIA),
            FieldMetadata::new("brochures", "Brochures", FieldType::NestedTable(ListEncoding::Json))
                .with_nested(BROCHURE_FIELDS)
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
        ]
    };
}

/// Ranking and verification are decided by the portal staff
const PRIORITY: FieldMetadata = FieldMetadata::new("priority", "Priority", FieldType::INTEGER)
    .rules(ValidationRules::range(0.0, 9999.0))
    .default_value(FieldDefault::Text("999"))
    .in_list();
const VERIFICATION: FieldMetadata =
    FieldMetadata::new("verification", "Verified", FieldType::Flag).in_list();
const FEATURED: FieldMetadata = FieldMetadata::new("featured", "Featured", FieldType::Flag);

const FIELDS: &[FieldMetadata] = school_fields![PRIORITY, VERIFICATION, FEATURED,];
const OWN_FIELDS: &[FieldMetadata] = school_fields![];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_form_hides_staff_fields() {
        for name in ["priority", "verification", "featured"] {
            assert!(SCHOOL.field(name).is_some(), "{}", name);
            assert!(OWN_PROFILE.field(name).is_none(), "{}", name);
        }
        assert_eq!(OWN_PROFILE.fields.len() + 3, SCHOOL.fields.len());
        assert!(OWN_PROFILE.field("gallery").is_some());
    }
}
