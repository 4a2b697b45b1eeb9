//! Sub-record layouts shared by schools and universities

use crate::shared::dropdown::DropdownKey;
use crate::shared::metadata::{FieldDefault, FieldMetadata, FieldType};

pub const SOCIAL_PLATFORMS: &[(&str, &str)] = &[
    ("facebook", "Facebook"),
    ("instagram", "Instagram"),
    ("twitter", "Twitter"),
    ("youtube", "YouTube"),
    ("linkedin", "LinkedIn"),
    ("tiktok", "TikTok"),
];

pub const PHONE_FIELDS: &[FieldMetadata] =
    &[FieldMetadata::new("phone", "Phone", FieldType::TEXT).placeholder("+977-1-4XXXXXX")];

pub const EMAIL_FIELDS: &[FieldMetadata] =
    &[FieldMetadata::new("email", "Email", FieldType::EMAIL).placeholder("info@example.edu.np")];

pub const GALLERY_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("image", "Image", FieldType::IMAGE),
    FieldMetadata::new("caption", "Caption", FieldType::TEXT),
];

pub const BROCHURE_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("file", "File", FieldType::DOCUMENT),
    FieldMetadata::new("description", "Description", FieldType::TEXT),
];

pub const MESSAGE_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("title", "Title", FieldType::TEXT),
    FieldMetadata::new("message", "Message", FieldType::LONG_TEXT),
    FieldMetadata::new("name", "Name", FieldType::TEXT),
    FieldMetadata::new("designation", "Designation", FieldType::TEXT),
    FieldMetadata::new("image", "Photo", FieldType::IMAGE),
];

pub const SOCIAL_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("platform", "Platform", FieldType::Enum(SOCIAL_PLATFORMS)),
    FieldMetadata::new("url", "URL", FieldType::URL),
];

pub const FAQ_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("question", "Question", FieldType::TEXT),
    FieldMetadata::new("answer", "Answer", FieldType::LONG_TEXT),
];

pub const SCHOOL_COURSE_STATUSES: &[(&str, &str)] = &[("Open", "Open"), ("Closed", "Closed")];

pub const SCHOOL_COURSE_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("course", "Course", FieldType::AggregateRef(DropdownKey::Courses)),
    FieldMetadata::new("fee", "Fee", FieldType::TEXT),
    FieldMetadata::new("status", "Status", FieldType::Enum(SCHOOL_COURSE_STATUSES))
        .default_value(FieldDefault::Text("Open")),
    FieldMetadata::new("admin_open", "Admission open", FieldType::Flag)
        .default_value(FieldDefault::Flag(true)),
];

pub const SEO_SECTION: &str = "SEO";
