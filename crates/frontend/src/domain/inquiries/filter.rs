//! Filters over inquiry lists. Admin lists are narrowed by the server
//! through the query string; the owner inbox is narrowed in place.

use super::model::relation_id;
use chrono::{DateTime, NaiveDate};
use contracts::shared::dropdown::DropdownKey;
use serde::Serialize;
use serde_json::Value;

/// Fields the free-text search looks into
const SEARCHED_FIELDS: [&str; 5] = ["full_name", "student_full_name", "parent_name", "email", "phone"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InquiryFilter {
    /// Name, email or phone
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<i64>,
    /// Inbox only; the admin endpoints take no such parameter
    #[serde(skip)]
    pub contacted: Option<bool>,
    /// `YYYY-MM-DD`, inclusive
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub end_date: String,
}

/// One removable part of a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSlot {
    Search,
    School,
    Course,
    Contacted,
    StartDate,
    EndDate,
}

impl InquiryFilter {
    pub fn is_empty(&self) -> bool {
        self.trimmed() == Self::default()
    }

    /// Copy with surrounding whitespace removed, as applied
    pub fn trimmed(&self) -> Self {
        Self {
            search: self.search.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
            ..self.clone()
        }
    }

    /// `?key=value&..` with unset parts left out, empty when nothing is set
    pub fn query_string(&self) -> String {
        match serde_qs::to_string(self) {
            Ok(query) if !query.is_empty() => format!("?{}", query),
            Ok(_) => String::new(),
            Err(e) => {
                log::warn!("Inquiry filter not encoded: {}", e);
                String::new()
            }
        }
    }

    pub fn matches(&self, entry: &Value) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let hit = SEARCHED_FIELDS
                .iter()
                .filter_map(|f| entry.get(*f).and_then(Value::as_str))
                .any(|v| v.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if self.school.is_some() && relation_id(entry, "school") != self.school {
            return false;
        }
        if self.course.is_some() && relation_id(entry, "course") != self.course {
            return false;
        }

        if let Some(wanted) = self.contacted {
            let contacted = entry.get("contacted").and_then(Value::as_bool).unwrap_or(false);
            if contacted != wanted {
                return false;
            }
        }

        let received = received_on(entry);
        if let Some(from) = parse_day(&self.start_date) {
            if !received.is_some_and(|day| day >= from) {
                return false;
            }
        }
        if let Some(until) = parse_day(&self.end_date) {
            if !received.is_some_and(|day| day <= until) {
                return false;
            }
        }
        true
    }

    /// Chip text per set slot. `name_of` resolves a selected school or course.
    pub fn chips<F>(&self, name_of: F) -> Vec<(FilterSlot, String)>
    where
        F: Fn(DropdownKey, i64) -> Option<String>,
    {
        let named = |key: DropdownKey, id: i64| name_of(key, id).unwrap_or_else(|| id.to_string());
        let mut chips = Vec::new();
        if !self.search.trim().is_empty() {
            chips.push((FilterSlot::Search, format!("Search: {}", self.search.trim())));
        }
        if let Some(id) = self.school {
            chips.push((FilterSlot::School, format!("School: {}", named(DropdownKey::Schools, id))));
        }
        if let Some(id) = self.course {
            chips.push((FilterSlot::Course, format!("Course: {}", named(DropdownKey::Courses, id))));
        }
        if let Some(contacted) = self.contacted {
            let status = if contacted { "Contacted" } else { "Not Contacted" };
            chips.push((FilterSlot::Contacted, format!("Status: {}", status)));
        }
        if !self.start_date.trim().is_empty() {
            chips.push((FilterSlot::StartDate, format!("From: {}", self.start_date.trim())));
        }
        if !self.end_date.trim().is_empty() {
            chips.push((FilterSlot::EndDate, format!("To: {}", self.end_date.trim())));
        }
        chips
    }

    pub fn clear(&mut self, slot: FilterSlot) {
        match slot {
            FilterSlot::Search => self.search.clear(),
            FilterSlot::School => self.school = None,
            FilterSlot::Course => self.course = None,
            FilterSlot::Contacted => self.contacted = None,
            FilterSlot::StartDate => self.start_date.clear(),
            FilterSlot::EndDate => self.end_date.clear(),
        }
    }
}

/// Select value of the contact-status control: "", "true" or "false"
pub fn parse_contacted(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Calendar day of `created_at`, in the offset the server sent
fn received_on(entry: &Value) -> Option<NaiveDate> {
    let raw = entry.get("created_at").and_then(Value::as_str)?;
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.date_naive())
        .ok()
        .or_else(|| raw.get(..10).and_then(parse_day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries() -> Vec<Value> {
        vec![
            json!({
                "id": 1,
                "full_name": "Hari Thapa",
                "email": "hari@mail.com",
                "phone": "9841000000",
                "school": {"id": 4, "name": "Everest College"},
                "course": 9,
                "created_at": "2025-03-01T10:00:00+05:45"
            }),
            json!({
                "id": 2,
                "student_full_name": "Sita Sharma",
                "parent_name": "Ram Sharma",
                "email": "ram@mail.com",
                "phone": "9800000001",
                "school": 5,
                "contacted": true,
                "created_at": "2025-03-20T23:30:00Z"
            }),
        ]
    }

    fn ids(filter: &InquiryFilter) -> Vec<i64> {
        entries()
            .iter()
            .filter(|e| filter.matches(e))
            .filter_map(|e| e["id"].as_i64())
            .collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = InquiryFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter), vec![1, 2]);
        assert_eq!(filter.query_string(), "");
    }

    #[test]
    fn test_search_spans_names_and_contacts() {
        let by = |search: &str| InquiryFilter {
            search: search.to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by("  ram ")), vec![2]);
        assert_eq!(ids(&by("9841")), vec![1]);
        assert_eq!(ids(&by("MAIL.COM")), vec![1, 2]);
        assert!(ids(&by("nobody")).is_empty());
    }

    #[test]
    fn test_school_course_and_status() {
        let school = InquiryFilter {
            school: Some(4),
            ..Default::default()
        };
        assert_eq!(ids(&school), vec![1]);

        let course = InquiryFilter {
            course: Some(9),
            ..Default::default()
        };
        assert_eq!(ids(&course), vec![1]);

        let pending = InquiryFilter {
            contacted: Some(false),
            ..Default::default()
        };
        assert_eq!(ids(&pending), vec![1]);
        assert_eq!(pending.query_string(), "");
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let range = |from: &str, until: &str| InquiryFilter {
            start_date: from.to_string(),
            end_date: until.to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&range("2025-03-01", "2025-03-01")), vec![1]);
        assert_eq!(ids(&range("2025-03-02", "")), vec![2]);
        assert_eq!(ids(&range("", "2025-03-20")), vec![1, 2]);
        assert!(ids(&range("2025-04-01", "")).is_empty());
    }

    #[test]
    fn test_query_string_skips_unset_parts() {
        let filter = InquiryFilter {
            search: "hari".to_string(),
            school: Some(4),
            contacted: Some(true),
            end_date: "2025-03-31".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.query_string(), "?search=hari&school=4&end_date=2025-03-31");
    }

    #[test]
    fn test_chips_name_selections_and_clear() {
        let mut filter = InquiryFilter {
            search: "hari".to_string(),
            school: Some(4),
            course: Some(12),
            contacted: Some(false),
            start_date: "2025-03-01".to_string(),
            ..Default::default()
        };
        let schools = |key: DropdownKey, id: i64| {
            (key == DropdownKey::Schools && id == 4).then(|| "Everest College".to_string())
        };
        let labels: Vec<_> = filter.chips(schools).into_iter().map(|(_, l)| l).collect();
        assert_eq!(
            labels,
            vec![
                "Search: hari",
                "School: Everest College",
                "Course: 12",
                "Status: Not Contacted",
                "From: 2025-03-01",
            ]
        );

        filter.clear(FilterSlot::School);
        filter.clear(FilterSlot::Contacted);
        assert_eq!(filter.school, None);
        assert_eq!(filter.contacted, None);
        assert_eq!(filter.chips(|_, _| None).len(), 3);
    }

    #[test]
    fn test_parse_contacted() {
        assert_eq!(parse_contacted("true"), Some(true));
        assert_eq!(parse_contacted("false"), Some(false));
        assert_eq!(parse_contacted(""), None);
    }
}
