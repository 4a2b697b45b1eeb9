//! Form state → multipart body

use super::normalizer::to_payload_value;
use super::state::FormState;
use super::value::{FieldValue, FileField, Record};
use contracts::shared::metadata::{FieldMetadata, ListEncoding};
use contracts::shared::multipart::{MultipartPayload, PositionalFileKey};
use serde_json::Value;

/// Encode every field of the form, in declaration order.
///
/// - non-blank scalars once under their wire name; flags as `true`/`false`
/// - JSON-encoded lists always (`[]` when empty); repeated lists once per element
/// - pending files as binary parts; stored and empty uploads are omitted
/// - new files of nested rows under `<collection>_<row>_<subfield>`
pub fn encode(state: &FormState) -> MultipartPayload {
    let mut payload = MultipartPayload::new();
    for (field, value) in state.iter() {
        encode_field(&mut payload, field, value);
    }
    payload
}

fn encode_field(payload: &mut MultipartPayload, field: &FieldMetadata, value: &FieldValue) {
    let key = field.wire_name();
    let encoding = field.list_encoding().unwrap_or_default();

    match value {
        FieldValue::Text(s) => {
            if !s.trim().is_empty() {
                payload.append_text(key, s.as_str());
            }
        }
        FieldValue::Flag(b) => payload.append_text(key, b.to_string()),
        FieldValue::Ref(Some(id)) => payload.append_text(key, id.to_string()),
        FieldValue::Ref(None) => {}
        FieldValue::Refs(ids) => match encoding {
            ListEncoding::Json => {
                payload.append_text(key, to_payload_value(&Value::from(ids.clone())).to_string())
            }
            ListEncoding::Repeated => {
                for id in ids {
                    payload.append_text(key, id.to_string());
                }
            }
        },
        FieldValue::Records(rows) => {
            match encoding {
                ListEncoding::Json => {
                    let meta: Vec<Value> = rows.iter().map(Record::to_json).collect();
                    payload.append_text(key, Value::Array(meta).to_string());
                }
                ListEncoding::Repeated => {
                    for row in rows {
                        payload.append_text(key, row.to_json().to_string());
                    }
                }
            }
            if field.has_nested_upload() {
                append_row_files(payload, key, rows);
            }
        }
        FieldValue::File(FileField::Pending(blob)) => payload.append_file(key, blob.clone()),
        FieldValue::File(_) => {}
    }
}

fn append_row_files(payload: &mut MultipartPayload, collection: &str, rows: &[Record]) {
    for (index, row) in rows.iter().enumerate() {
        for (subfield, value) in &row.values {
            if let FieldValue::File(FileField::Pending(blob)) = value {
                let key = PositionalFileKey {
                    collection,
                    index,
                    subfield,
                };
                payload.append_file(key.to_string(), blob.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a008_school::{OWN_PROFILE, SCHOOL};
    use contracts::domain::a009_admission::ADMISSION;
    use contracts::shared::multipart::{FileBlob, PartValue};
    use serde_json::json;

    fn png(name: &str) -> FileBlob {
        FileBlob::new(name, "image/png", vec![137, 80, 78, 71])
    }

    #[test]
    fn test_admission_payload() {
        let entity = json!({
            "title": "Fall Intake",
            "slug": "fall-intake",
            "published_date": "2025-05-01",
            "active_from": "2025-05-10",
            "active_until": "2025-06-10",
            "school": {"id": 4},
            "courses": [{"id": 1}, {"id": 2}],
            "level": {"id": 7, "title": "Bachelor"},
            "featured": false,
            "description": ""
        });
        let state = FormState::initialize(&ADMISSION, Some(&entity));
        let payload = encode(&state);

        assert_eq!(payload.text("title"), Some("Fall Intake"));
        assert_eq!(payload.text("school_id"), Some("4"));
        assert!(!payload.contains("school"));
        assert_eq!(payload.text("courses"), Some("[1,2]"));
        assert_eq!(payload.text("level"), Some("7"));
        assert_eq!(payload.text("featured"), Some("false"));
        assert!(!payload.contains("university"));
        assert!(!payload.contains("description"));
        for part in payload.parts() {
            assert_eq!(payload.count(&part.name), 1, "{}", part.name);
        }
    }

    #[test]
    fn test_empty_json_list_is_still_sent() {
        let state = FormState::initialize(&ADMISSION, None);
        let payload = encode(&state);
        assert_eq!(payload.text("courses"), Some("[]"));
        assert!(!payload.contains("title"));
    }

    #[test]
    fn test_repeated_refs_and_files() {
        let mut state = FormState::initialize(&SCHOOL, None);
        state.set_field("name", FieldValue::Text("Everest College".into()));
        state.toggle_ref("facilities", 3, true);
        state.toggle_ref("facilities", 5, true);
        state.set_field("logo", FieldValue::File(FileField::Pending(png("logo.png"))));
        state.set_field(
            "cover_photo",
            FieldValue::File(FileField::Persisted("/media/school/covers/c.jpg".into())),
        );

        let payload = encode(&state);
        let facilities: Vec<_> = payload.get_all("facilities").collect();
        assert_eq!(
            facilities,
            vec![&PartValue::Text("3".into()), &PartValue::Text("5".into())]
        );
        assert!(!payload.contains("universities"));
        assert!(matches!(
            payload.get_all("logo").next(),
            Some(PartValue::File(blob)) if blob.file_name == "logo.png"
        ));
        assert!(!payload.contains("cover_photo"));
        assert_eq!(payload.text("phones"), Some("[]"));
    }

    #[test]
    fn test_gallery_split_into_metadata_and_positional_files() {
        let entity = json!({
            "name": "Everest College",
            "gallery": [
                {"image": "/media/school/gallery/a.jpg", "caption": "Old"}
            ]
        });
        let mut state = FormState::initialize(&SCHOOL, Some(&entity));
        state.append_empty_row("gallery");
        state.set_list_item("gallery", 1, "image", FieldValue::File(FileField::Pending(png("new.png"))));
        state.set_list_item("gallery", 1, "caption", FieldValue::Text("New".into()));

        let payload = encode(&state);
        let meta: Value = serde_json::from_str(payload.text("gallery").unwrap_or("null")).unwrap();
        assert_eq!(
            meta,
            json!([
                {"image": "/media/school/gallery/a.jpg", "caption": "Old"},
                {"caption": "New"}
            ])
        );
        assert!(matches!(
            payload.get_all("gallery_1_image").next(),
            Some(PartValue::File(blob)) if blob.file_name == "new.png"
        ));
        assert!(!payload.contains("gallery_0_image"));
    }

    #[test]
    fn test_blank_text_is_not_sent() {
        let mut state = FormState::initialize(&ADMISSION, None);
        state.set_field("description", FieldValue::Text("   ".into()));
        state.set_field("title", FieldValue::Text("  Fall Intake ".into()));
        let payload = encode(&state);
        assert!(!payload.contains("description"));
        assert_eq!(payload.text("title"), Some("  Fall Intake "));
    }

    #[test]
    fn test_owner_profile_never_sends_staff_fields() {
        let entity = json!({
            "name": "Everest College",
            "slug": "everest-college",
            "verification": false,
            "featured": true,
            "priority": 3
        });
        let mut state = FormState::initialize(&OWN_PROFILE, Some(&entity));
        state.set_field("verification", FieldValue::Flag(true));
        state.set_field("about_college", FieldValue::Text("Since 1998".into()));

        let payload = encode(&state);
        assert_eq!(payload.text("name"), Some("Everest College"));
        assert_eq!(payload.text("about_college"), Some("Since 1998"));
        for staff_only in ["verification", "featured", "priority"] {
            assert!(!payload.contains(staff_only), "{}", staff_only);
        }
    }
}
