use super::filter::InquiryFilter;
use crate::shared::api::{client, ApiError};
use contracts::shared::pagination::ListResponse;
use serde_json::Value;

/// The two message kinds a school receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboxKind {
    Inquiry,
    PreRegistration,
}

impl InboxKind {
    pub const ALL: [InboxKind; 2] = [Self::Inquiry, Self::PreRegistration];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Inquiry => "Inquiry",
            Self::PreRegistration => "Pre-registration",
        }
    }

    fn admin_path(&self) -> &'static str {
        match self {
            Self::Inquiry => "/inquiries/admin/inquiries/",
            Self::PreRegistration => "/inquiries/admin/pre-registrations/",
        }
    }
}

/// Pre-registrations name the student in `student_full_name`; copy it to
/// `full_name` so both kinds render through the same columns
pub fn normalize(mut entry: Value) -> Value {
    if let Value::Object(map) = &mut entry {
        if map.get("full_name").map_or(true, Value::is_null) {
            if let Some(name) = map.get("student_full_name").cloned() {
                map.insert("full_name".to_string(), name);
            }
        }
    }
    entry
}

/// Id of a relation sent either bare or populated as `{"id": ..}`
pub fn relation_id(entry: &Value, field: &str) -> Option<i64> {
    match entry.get(field)? {
        Value::Number(n) => n.as_i64(),
        Value::Object(map) => map.get("id").and_then(Value::as_i64),
        _ => None,
    }
}

/// Name of a populated relation
pub fn relation_name<'a>(entry: &'a Value, field: &str) -> Option<&'a str> {
    entry
        .get(field)
        .and_then(|r| r.get("name"))
        .and_then(Value::as_str)
}

pub fn admin_list_path(kind: InboxKind, filter: &InquiryFilter) -> String {
    format!("{}{}", kind.admin_path(), filter.query_string())
}

/// Every message of `kind` across schools, filtered by the server
pub async fn fetch_admin(kind: InboxKind, filter: &InquiryFilter) -> Result<Vec<Value>, ApiError> {
    let response: ListResponse<Value> = client::get_json(&admin_list_path(kind, filter)).await?;
    Ok(response
        .into_page()
        .results
        .into_iter()
        .map(normalize)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pre_registration_gets_full_name() {
        let entry = normalize(json!({
            "student_full_name": "Sita Sharma",
            "parent_name": "Ram Sharma",
            "grade_or_class": "11"
        }));
        assert_eq!(entry["full_name"], "Sita Sharma");
        assert_eq!(entry["parent_name"], "Ram Sharma");

        let inquiry = normalize(json!({"full_name": "Hari", "student_full_name": "ignored"}));
        assert_eq!(inquiry["full_name"], "Hari");
    }

    #[test]
    fn test_relations_bare_or_populated() {
        let entry = json!({"school": 4, "course": {"id": 9, "name": "BBA"}});
        assert_eq!(relation_id(&entry, "school"), Some(4));
        assert_eq!(relation_id(&entry, "course"), Some(9));
        assert_eq!(relation_name(&entry, "course"), Some("BBA"));
        assert_eq!(relation_name(&entry, "school"), None);
        assert_eq!(relation_id(&entry, "level"), None);
    }

    #[test]
    fn test_admin_paths_carry_the_filter() {
        let filter = InquiryFilter {
            school: Some(4),
            ..Default::default()
        };
        assert_eq!(
            admin_list_path(InboxKind::PreRegistration, &filter),
            "/inquiries/admin/pre-registrations/?school=4"
        );
        assert_eq!(
            admin_list_path(InboxKind::Inquiry, &InquiryFilter::default()),
            "/inquiries/admin/inquiries/"
        );
    }
}
