//! Values held by a form, one variant per control family

use super::normalizer::{as_id, to_form_value};
use contracts::shared::metadata::{FieldDefault, FieldMetadata, FieldType};
use contracts::shared::multipart::FileBlob;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Upload control state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileField {
    #[default]
    Empty,
    /// Picked in this session, not uploaded yet
    Pending(FileBlob),
    /// Already stored; holds the URL the backend returned
    Persisted(String),
}

impl FileField {
    fn from_json(value: &Value) -> Self {
        match value {
            Value::String(url) if !url.is_empty() => Self::Persisted(url.clone()),
            _ => Self::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn persisted_url(&self) -> Option<&str> {
        match self {
            Self::Persisted(url) => Some(url),
            _ => None,
        }
    }
}

/// One row of a nested table
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Stable identity for keyed rendering; never sent to the backend
    pub row_key: Uuid,
    pub values: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(values: BTreeMap<String, FieldValue>) -> Self {
        Self {
            row_key: Uuid::new_v4(),
            values,
        }
    }

    /// Row with every sub-field at its default
    pub fn empty(fields: &[FieldMetadata]) -> Self {
        Self::new(
            fields
                .iter()
                .map(|f| (f.name.to_string(), FieldValue::empty_for(f)))
                .collect(),
        )
    }

    fn from_json(fields: &[FieldMetadata], value: &Value) -> Self {
        Self::new(
            fields
                .iter()
                .map(|f| {
                    let v = value
                        .get(f.name)
                        .map(|raw| FieldValue::from_json(f, raw))
                        .unwrap_or_else(|| FieldValue::empty_for(f));
                    (f.name.to_string(), v)
                })
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> String {
        self.get(name).map(FieldValue::as_text).unwrap_or_default()
    }

    /// Metadata object sent in place of the row. Pending files are left out;
    /// they travel as separate parts.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.values {
            if let Some(json) = value.to_json() {
                map.insert(name.clone(), json);
            }
        }
        Value::Object(map)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text, long text, dates, numbers and enum choices
    Text(String),
    Flag(bool),
    Ref(Option<i64>),
    Refs(Vec<i64>),
    Records(Vec<Record>),
    File(FileField),
}

impl FieldValue {
    /// Create-mode value: the declared default, otherwise the type's empty value
    pub fn empty_for(field: &FieldMetadata) -> Self {
        match (field.field_type, field.default) {
            (FieldType::Flag, FieldDefault::Flag(b)) => Self::Flag(b),
            (FieldType::Flag, _) => Self::Flag(false),
            (FieldType::AggregateRef(_), _) => Self::Ref(None),
            (FieldType::AggregateRefs(_, _), _) => Self::Refs(Vec::new()),
            (FieldType::NestedTable(_), _) => Self::Records(Vec::new()),
            (FieldType::Upload(_), _) => Self::File(FileField::Empty),
            (_, FieldDefault::Text(s)) => Self::Text(s.to_string()),
            _ => Self::Text(String::new()),
        }
    }

    /// Edit-mode value read from a fetched entity attribute
    pub fn from_json(field: &FieldMetadata, raw: &Value) -> Self {
        if raw.is_null() {
            return Self::empty_for(field);
        }
        match field.field_type {
            FieldType::Primitive(_) | FieldType::Enum(_) => match raw {
                Value::String(s) => Self::Text(s.clone()),
                Value::Number(n) => Self::Text(n.to_string()),
                Value::Bool(b) => Self::Text(b.to_string()),
                _ => Self::empty_for(field),
            },
            FieldType::Flag => Self::Flag(match raw {
                Value::Bool(b) => *b,
                Value::String(s) => s == "true",
                Value::Number(n) => n.as_i64().unwrap_or(0) != 0,
                _ => false,
            }),
            FieldType::AggregateRef(_) => Self::Ref(as_id(&to_form_value(raw))),
            FieldType::AggregateRefs(_, _) => match to_form_value(raw) {
                Value::Array(items) => Self::Refs(items.iter().filter_map(as_id).collect()),
                _ => Self::Refs(Vec::new()),
            },
            FieldType::NestedTable(_) => match raw {
                Value::Array(rows) => Self::Records(
                    rows.iter()
                        .filter(|row| row.is_object())
                        .map(|row| Record::from_json(field.nested(), row))
                        .collect(),
                ),
                _ => Self::Records(Vec::new()),
            },
            FieldType::Upload(_) => Self::File(FileField::from_json(raw)),
        }
    }

    /// Text form used by cross-field rules and list cells; empty when unset
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Flag(b) => b.to_string(),
            Self::Ref(Some(id)) => id.to_string(),
            Self::Ref(None) => String::new(),
            Self::Refs(ids) => ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
            Self::Records(_) => String::new(),
            Self::File(file) => file.persisted_url().unwrap_or_default().to_string(),
        }
    }

    /// Nothing the backend would store
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Flag(_) => false,
            Self::Ref(id) => id.is_none(),
            Self::Refs(ids) => ids.is_empty(),
            Self::Records(rows) => rows.is_empty(),
            Self::File(file) => file.is_empty(),
        }
    }

    /// JSON form inside a row's metadata; `None` drops the key
    pub fn to_json(&self) -> Option<Value> {
        match self {
            Self::Text(s) => Some(Value::String(s.clone())),
            Self::Flag(b) => Some(Value::Bool(*b)),
            Self::Ref(id) => Some(id.map(Value::from).unwrap_or(Value::Null)),
            Self::Refs(ids) => Some(Value::from(ids.clone())),
            Self::Records(rows) => Some(Value::Array(rows.iter().map(Record::to_json).collect())),
            Self::File(FileField::Persisted(url)) => Some(Value::String(url.clone())),
            Self::File(_) => None,
        }
    }

    pub fn records(&self) -> &[Record] {
        match self {
            Self::Records(rows) => rows,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::nested::{GALLERY_FIELDS, SCHOOL_COURSE_FIELDS};
    use contracts::shared::dropdown::DropdownKey;
    use serde_json::json;

    #[test]
    fn test_defaults_follow_type() {
        let priority = FieldMetadata::new("priority", "Priority", FieldType::INTEGER)
            .default_value(FieldDefault::Text("999"));
        assert_eq!(FieldValue::empty_for(&priority), FieldValue::Text("999".into()));

        let active = FieldMetadata::new("is_active", "Active", FieldType::Flag)
            .default_value(FieldDefault::Flag(true));
        assert_eq!(FieldValue::empty_for(&active), FieldValue::Flag(true));

        let logo = FieldMetadata::new("logo", "Logo", FieldType::IMAGE);
        assert_eq!(FieldValue::empty_for(&logo), FieldValue::File(FileField::Empty));
    }

    #[test]
    fn test_ref_hydrates_from_object_or_id() {
        let level = FieldMetadata::new("level", "Level", FieldType::AggregateRef(DropdownKey::Levels));
        assert_eq!(
            FieldValue::from_json(&level, &json!({"id": 7, "title": "Bachelor"})),
            FieldValue::Ref(Some(7))
        );
        assert_eq!(FieldValue::from_json(&level, &json!(7)), FieldValue::Ref(Some(7)));
        assert_eq!(FieldValue::from_json(&level, &json!(null)), FieldValue::Ref(None));
    }

    #[test]
    fn test_nested_rows_keep_persisted_urls() {
        let gallery = FieldMetadata::new(
            "gallery",
            "Gallery",
            FieldType::NestedTable(contracts::shared::metadata::ListEncoding::Json),
        )
        .with_nested(GALLERY_FIELDS);
        let value = FieldValue::from_json(
            &gallery,
            &json!([{"id": 3, "image": "/media/g/1.jpg", "caption": "Library"}]),
        );
        let rows = value.records();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].get("image"),
            Some(&FieldValue::File(FileField::Persisted("/media/g/1.jpg".into())))
        );
        assert_eq!(
            rows[0].to_json(),
            json!({"image": "/media/g/1.jpg", "caption": "Library"})
        );
    }

    #[test]
    fn test_nested_ref_is_normalized() {
        let row = Record::from_json(
            SCHOOL_COURSE_FIELDS,
            &json!({"course": {"id": 11, "name": "BBA"}, "fee": "4 lakh"}),
        );
        assert_eq!(row.get("course"), Some(&FieldValue::Ref(Some(11))));
        assert_eq!(row.get("status"), Some(&FieldValue::Text("Open".into())));
        assert_eq!(row.get("admin_open"), Some(&FieldValue::Flag(true)));
    }
}
