use crate::domain::inquiries::filter::InquiryFilter;
use crate::domain::inquiries::model::{normalize, relation_name};
use crate::shared::api::{client, ApiError};
use crate::shared::api::gateway::OWN_PROFILE_PATH;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;

pub use crate::domain::inquiries::model::InboxKind;

const INBOX_PATH: &str = "/schools/me/inquiries/";

/// Fields counted towards profile completeness
const PROFILE_FIELDS: [&str; 8] = [
    "name",
    "admin_email",
    "address",
    "district",
    "level",
    "type",
    "about_college",
    "logo",
];

/// Everything addressed to the signed-in school
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryInbox {
    pub inquiries: Vec<Value>,
    pub pre_registrations: Vec<Value>,
}

impl<'de> Deserialize<'de> for InquiryInbox {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Split {
            #[serde(default)]
            inquiries: Vec<Value>,
            #[serde(default)]
            pre_registrations: Vec<Value>,
        }

        // Older deployments answer with a bare list of inquiries
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Split(Split),
            Plain(Vec<Value>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Split(s) => InquiryInbox {
                inquiries: s.inquiries,
                pre_registrations: s.pre_registrations.into_iter().map(normalize).collect(),
            },
            Raw::Plain(inquiries) => InquiryInbox {
                inquiries,
                pre_registrations: Vec::new(),
            },
        })
    }
}

impl InquiryInbox {
    pub fn total(&self) -> usize {
        self.inquiries.len() + self.pre_registrations.len()
    }

    pub fn entries(&self, kind: InboxKind) -> &[Value] {
        match kind {
            InboxKind::Inquiry => &self.inquiries,
            InboxKind::PreRegistration => &self.pre_registrations,
        }
    }

    /// Entries of `kind` the filter keeps, in received order
    pub fn filtered(&self, kind: InboxKind, filter: &InquiryFilter) -> Vec<Value> {
        self.entries(kind)
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InboxEntry {
    pub kind: InboxKind,
    pub entity: Value,
}

impl InboxEntry {
    fn received_at(&self) -> Option<DateTime<FixedOffset>> {
        self.entity
            .get("created_at")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }

    /// Name of the course the message is about, when the backend populated it
    pub fn course_name(&self) -> Option<&str> {
        relation_name(&self.entity, "course")
    }
}

/// Newest `limit` entries of both kinds, newest first. Undated entries sort last.
pub fn merge_recent(inbox: &InquiryInbox, limit: usize) -> Vec<InboxEntry> {
    let tagged = |kind: InboxKind, items: &[Value]| {
        items
            .iter()
            .map(move |e| InboxEntry {
                kind,
                entity: e.clone(),
            })
            .collect::<Vec<_>>()
    };
    let mut entries = tagged(InboxKind::Inquiry, &inbox.inquiries);
    entries.extend(tagged(InboxKind::PreRegistration, &inbox.pre_registrations));
    entries.sort_by_key(|e| std::cmp::Reverse(e.received_at()));
    entries.truncate(limit);
    entries
}

/// Share of the key profile fields that are filled, 0..=100
pub fn profile_completeness(school: &Value) -> u8 {
    let filled = PROFILE_FIELDS
        .iter()
        .filter(|name| match school.get(**name) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        })
        .count();
    ((filled * 100 + PROFILE_FIELDS.len() / 2) / PROFILE_FIELDS.len()) as u8
}

pub fn is_verified(school: &Value) -> bool {
    school
        .get("verification")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

pub async fn fetch_own_profile() -> Result<Value, ApiError> {
    client::get_json(OWN_PROFILE_PATH).await
}

pub async fn fetch_inbox() -> Result<InquiryInbox, ApiError> {
    client::get_json(INBOX_PATH).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inbox_accepts_split_and_bare_list() {
        let split: InquiryInbox = serde_json::from_value(json!({
            "inquiries": [{"id": 1}],
            "pre_registrations": [{"id": 2}, {"id": 3}]
        }))
        .unwrap();
        assert_eq!(split.inquiries.len(), 1);
        assert_eq!(split.pre_registrations.len(), 2);
        assert_eq!(split.total(), 3);

        let partial: InquiryInbox = serde_json::from_value(json!({"inquiries": []})).unwrap();
        assert!(partial.pre_registrations.is_empty());

        let plain: InquiryInbox = serde_json::from_value(json!([{"id": 4}])).unwrap();
        assert_eq!(plain.inquiries.len(), 1);
        assert!(plain.pre_registrations.is_empty());
    }

    #[test]
    fn test_inbox_filter_applies_per_kind() {
        let inbox: InquiryInbox = serde_json::from_value(json!({
            "inquiries": [
                {"id": 1, "full_name": "Hari Thapa", "contacted": true},
                {"id": 2, "full_name": "Gita Rai"}
            ],
            "pre_registrations": [
                {"id": 3, "student_full_name": "Sita Sharma", "parent_name": "Ram Sharma"}
            ]
        }))
        .unwrap();
        assert_eq!(inbox.pre_registrations[0]["full_name"], "Sita Sharma");

        let pending = InquiryFilter {
            contacted: Some(false),
            ..Default::default()
        };
        let ids: Vec<_> = inbox
            .filtered(InboxKind::Inquiry, &pending)
            .iter()
            .filter_map(|e| e["id"].as_i64())
            .collect();
        assert_eq!(ids, vec![2]);

        let sita = InquiryFilter {
            search: "sita".to_string(),
            ..Default::default()
        };
        assert!(inbox.filtered(InboxKind::Inquiry, &sita).is_empty());
        assert_eq!(inbox.filtered(InboxKind::PreRegistration, &sita).len(), 1);
        assert_eq!(inbox.entries(InboxKind::PreRegistration).len(), 1);
    }

    #[test]
    fn test_merge_recent_orders_newest_first() {
        let inbox = InquiryInbox {
            inquiries: vec![
                json!({"id": 1, "created_at": "2024-03-01T10:00:00Z"}),
                json!({"id": 2}),
            ],
            pre_registrations: vec![json!({
                "id": 3,
                "created_at": "2024-03-02T08:30:00+05:45",
                "course": {"name": "BBA"}
            })],
        };

        let recent = merge_recent(&inbox, 6);
        let ids: Vec<_> = recent.iter().map(|e| e.entity["id"].as_i64()).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
        assert_eq!(recent[0].kind, InboxKind::PreRegistration);
        assert_eq!(recent[0].course_name(), Some("BBA"));
        assert_eq!(recent[1].course_name(), None);

        assert_eq!(merge_recent(&inbox, 1).len(), 1);
    }

    #[test]
    fn test_profile_completeness() {
        assert_eq!(profile_completeness(&json!({})), 0);
        let half = json!({
            "name": "Everest College",
            "admin_email": "admin@everest.edu.np",
            "address": "  ",
            "district": 3,
            "level": [1],
            "logo": null
        });
        assert_eq!(profile_completeness(&half), 50);
    }

    #[test]
    fn test_unverified_by_default() {
        assert!(!is_verified(&json!({"name": "x"})));
        assert!(is_verified(&json!({"verification": true})));
    }
}
