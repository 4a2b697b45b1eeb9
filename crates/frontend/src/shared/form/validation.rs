//! Per-field and cross-field checks run before any network call

use super::state::FormState;
use super::value::FieldValue;
use contracts::shared::metadata::{FieldMetadata, FieldType};
use std::collections::BTreeMap;
use std::fmt;

/// Inline messages keyed by field name (or a rule's error key)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Drop the message of a field the user is fixing
    pub fn clear(&mut self, key: &str) {
        self.0.remove(key);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Please fix the errors below")
    }
}

/// Check every field rule, then the entity's cross-field rules.
/// `creating` enables rules that only apply to a first save.
pub fn validate(state: &FormState, creating: bool) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    for (field, value) in state.iter() {
        if let Err(message) = check_field(field, value, creating) {
            errors.insert(field.name, message);
        }
    }

    for rule in state.descriptor().rules {
        if let Some((key, message)) = rule.check(|name| state.text(name)) {
            errors.insert(key, message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_field(field: &FieldMetadata, value: &FieldValue, creating: bool) -> Result<(), String> {
    let rules = &field.validation;
    let label = field.ui.label;

    match value {
        FieldValue::Text(text) => {
            rules.validate_string(text, label)?;
            if let FieldType::Primitive(kind) = field.field_type {
                if kind.is_numeric() && !text.trim().is_empty() {
                    let number: f64 = text
                        .trim()
                        .parse()
                        .map_err(|_| format!("{} must be a number", label))?;
                    rules.validate_number(number, label)?;
                }
            }
            Ok(())
        }
        FieldValue::File(file) => {
            let needs_file = rules.required || (creating && rules.required_on_create);
            if needs_file && file.is_empty() {
                Err(rules.missing_message(label))
            } else {
                Ok(())
            }
        }
        FieldValue::Flag(_) => Ok(()),
        other => {
            if rules.required && other.is_blank() {
                Err(rules.missing_message(label))
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_facility::FACILITY;
    use contracts::domain::a009_admission::ADMISSION;
    use contracts::domain::a010_scholarship::SCHOLARSHIP;
    use contracts::domain::a011_event::EVENT;
    use contracts::domain::a012_information::INFORMATION;
    use contracts::domain::a013_advertisement::ADVERTISEMENT;
    use crate::shared::form::value::FileField;
    use contracts::shared::multipart::FileBlob;
    use serde_json::json;

    fn admission(from: &str, until: &str) -> FormState {
        FormState::initialize(
            &ADMISSION,
            Some(&json!({
                "title": "Fall Intake",
                "slug": "fall-intake",
                "published_date": "2025-05-01",
                "active_from": from,
                "active_until": until,
                "school": {"id": 4}
            })),
        )
    }

    #[test]
    fn test_active_until_must_follow_active_from() {
        let errors = validate(&admission("2025-06-10", "2025-06-01"), false).unwrap_err();
        assert_eq!(
            errors.get("active_until"),
            Some("Active until date must be after active from date")
        );
        assert_eq!(errors.len(), 1);
        assert!(validate(&admission("2025-06-01", "2025-06-10"), false).is_ok());
    }

    #[test]
    fn test_active_from_not_before_published() {
        let errors = validate(&admission("2025-04-01", "2025-06-10"), false).unwrap_err();
        assert_eq!(
            errors.get("active_from"),
            Some("Active from date should not be before published date")
        );
    }

    #[test]
    fn test_required_messages() {
        let errors = validate(&FormState::initialize(&ADMISSION, None), true).unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("school"), Some("School is required"));
        assert_eq!(errors.get("published_date"), Some("Published date is required"));
        assert!(!errors.contains("courses"));

        let errors = validate(&FormState::initialize(&FACILITY, None), true).unwrap_err();
        assert_eq!(errors.get("name"), Some("Facility name is required"));
    }

    #[test]
    fn test_organizer_and_paid_price() {
        let mut state = FormState::initialize(&EVENT, None);
        state.set_field("registration_type", FieldValue::Text("paid".into()));
        let errors = validate(&state, true).unwrap_err();
        assert_eq!(errors.get("organizer"), Some("Please specify at least one organizer"));
        assert_eq!(
            errors.get("registration_price"),
            Some("Registration price is required for paid events")
        );

        let mut state = FormState::initialize(&SCHOLARSHIP, None);
        state.set_field("organizer_custom", FieldValue::Text("Rotary Club".into()));
        let errors = validate(&state, true).unwrap_err();
        assert!(!errors.contains("organizer"));
    }

    #[test]
    fn test_length_caps_and_slug_pattern() {
        let mut state = FormState::initialize(&INFORMATION, None);
        state.set_field("meta_title", FieldValue::Text("x".repeat(201)));
        state.set_field("slug", FieldValue::Text("Not A Slug".into()));
        let errors = validate(&state, true).unwrap_err();
        assert_eq!(
            errors.get("meta_title"),
            Some("Meta title must be 200 characters or less")
        );
        assert_eq!(
            errors.get("slug"),
            Some("Slug can only contain lowercase letters, numbers, and hyphens")
        );
    }

    #[test]
    fn test_images_required_only_on_create() {
        let mut state = FormState::initialize(&ADVERTISEMENT, None);
        state.set_field("title", FieldValue::Text("Spring banner".into()));
        state.set_field("link", FieldValue::Text("https://example.edu.np".into()));
        state.set_field("placement", FieldValue::Text("home-1".into()));
        let errors = validate(&state, true).unwrap_err();
        assert_eq!(errors.get("image_mobile"), Some("Mobile image is required"));

        let blob = FileBlob::new("m.png", "image/png", vec![1]);
        state.set_field("image_mobile", FieldValue::File(FileField::Pending(blob.clone())));
        state.set_field("image_desktop", FieldValue::File(FileField::Pending(blob)));
        assert!(validate(&state, true).is_ok());

        let stored = FormState::initialize(
            &ADVERTISEMENT,
            Some(&json!({
                "id": 3,
                "title": "Spring banner",
                "link": "https://example.edu.np",
                "placement": "home-1",
                "image_mobile": "/media/ads/m.png",
                "image_desktop": "/media/ads/d.png"
            })),
        );
        assert!(validate(&stored, false).is_ok());
    }

    #[test]
    fn test_numeric_fields() {
        let mut state = FormState::initialize(&EVENT, None);
        state.set_field("seat_limit", FieldValue::Text("many".into()));
        let errors = validate(&state, true).unwrap_err();
        assert_eq!(errors.get("seat_limit"), Some("Seat limit must be a number"));
    }
}
