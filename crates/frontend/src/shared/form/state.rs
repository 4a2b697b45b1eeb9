//! Form state container
//!
//! Holds one value per descriptor field. Views keep it in an `RwSignal` and
//! mutate it only through the methods below.

use super::slug::slugify;
use super::value::{FieldValue, Record};
use contracts::shared::metadata::{EntityDescriptor, FieldMetadata, FieldType};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    descriptor: &'static EntityDescriptor,
    values: BTreeMap<&'static str, FieldValue>,
    /// Derived fields the user typed into; derivation stops for them
    edited: BTreeSet<&'static str>,
}

impl FormState {
    /// Empty form for create mode, or one hydrated from a fetched entity.
    pub fn initialize(descriptor: &'static EntityDescriptor, entity: Option<&Value>) -> Self {
        let mut values = BTreeMap::new();
        let mut edited = BTreeSet::new();

        for field in descriptor.fields {
            let value = match entity.and_then(|e| e.get(field.name)) {
                Some(raw) => FieldValue::from_json(field, raw),
                None => FieldValue::empty_for(field),
            };
            // an existing slug is never rewritten by a title edit
            if entity.is_some() && field.derive_from.is_some() && !value.is_blank() {
                edited.insert(field.name);
            }
            values.insert(field.name, value);
        }

        Self {
            descriptor,
            values,
            edited,
        }
    }

    pub fn descriptor(&self) -> &'static EntityDescriptor {
        self.descriptor
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text form of a field, empty when unset or unknown
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(FieldValue::as_text).unwrap_or_default()
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(FieldValue::Flag(true)))
    }

    /// Rows of a nested table; never fails, unknown names yield no rows
    pub fn records(&self, name: &str) -> &[Record] {
        self.get(name).map(FieldValue::records).unwrap_or(&[])
    }

    pub fn refs(&self, name: &str) -> &[i64] {
        match self.get(name) {
            Some(FieldValue::Refs(ids)) => ids,
            _ => &[],
        }
    }

    pub fn is_edited(&self, name: &str) -> bool {
        self.edited.contains(name)
    }

    /// Fields in declaration order with their current values
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldMetadata, &FieldValue)> {
        self.descriptor
            .fields
            .iter()
            .filter_map(move |f| self.values.get(f.name).map(|v| (f, v)))
    }

    /// Replace one field. Setting a derive source refreshes the derived field
    /// until the user edits that field directly.
    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        let Some(field) = self.descriptor.field(name) else {
            log::warn!("{}: unknown field {}", self.descriptor.info.entity_name, name);
            return;
        };

        if field.derive_from.is_some() {
            self.edited.insert(field.name);
        }

        if let Some(derived) = self.descriptor.derived_from(field.name) {
            if !self.edited.contains(derived.name) {
                let slug = slugify(&value.as_text());
                self.values.insert(derived.name, FieldValue::Text(slug));
            }
        }

        self.values.insert(field.name, value);
    }

    /// Set one sub-field of row `index`
    pub fn set_list_item(&mut self, name: &str, index: usize, subfield: &str, value: FieldValue) {
        if let Some(FieldValue::Records(rows)) = self.values.get_mut(name) {
            if let Some(row) = rows.get_mut(index) {
                row.values.insert(subfield.to_string(), value);
            }
        }
    }

    pub fn append_list_item(&mut self, name: &str, item: Record) {
        if let Some(FieldValue::Records(rows)) = self.values.get_mut(name) {
            rows.push(item);
        }
    }

    /// Append a row with every sub-field at its default
    pub fn append_empty_row(&mut self, name: &str) {
        let Some(field) = self.descriptor.field(name) else {
            return;
        };
        if matches!(field.field_type, FieldType::NestedTable(_)) {
            self.append_list_item(name, Record::empty(field.nested()));
        }
    }

    /// Remove row `index`; surviving rows keep their keys
    pub fn remove_list_item(&mut self, name: &str, index: usize) {
        if let Some(FieldValue::Records(rows)) = self.values.get_mut(name) {
            if index < rows.len() {
                rows.remove(index);
            }
        }
    }

    /// Add or drop one id of a many-reference field
    pub fn toggle_ref(&mut self, name: &str, id: i64, selected: bool) {
        if let Some(FieldValue::Refs(ids)) = self.values.get_mut(name) {
            let present = ids.contains(&id);
            if selected && !present {
                ids.push(id);
            } else if !selected && present {
                ids.retain(|x| *x != id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::value::FileField;
    use contracts::domain::a008_school::SCHOOL;
    use contracts::domain::a009_admission::ADMISSION;
    use contracts::domain::a013_advertisement::ADVERTISEMENT;
    use serde_json::json;

    #[test]
    fn test_create_mode_defaults() {
        let state = FormState::initialize(&SCHOOL, None);
        assert_eq!(state.get("name"), Some(&FieldValue::Text(String::new())));
        assert_eq!(state.get("priority"), Some(&FieldValue::Text("999".into())));
        assert_eq!(state.get("district"), Some(&FieldValue::Ref(None)));
        assert_eq!(state.get("logo"), Some(&FieldValue::File(FileField::Empty)));
        assert!(state.records("gallery").is_empty());

        let ad = FormState::initialize(&ADVERTISEMENT, None);
        assert!(ad.flag("is_active"));
    }

    #[test]
    fn test_hydrates_relations_as_ids() {
        let entity = json!({
            "title": "Fall Intake",
            "slug": "fall-intake",
            "school": {"id": 4, "name": "Everest"},
            "courses": [{"id": 1, "name": "BBA"}, {"id": 2, "name": "BBS"}],
            "level": {"id": 7, "title": "Bachelor"},
            "university": null,
            "featured": true
        });
        let state = FormState::initialize(&ADMISSION, Some(&entity));
        assert_eq!(state.get("level"), Some(&FieldValue::Ref(Some(7))));
        assert_eq!(state.get("school"), Some(&FieldValue::Ref(Some(4))));
        assert_eq!(state.refs("courses"), &[1, 2]);
        assert_eq!(state.get("university"), Some(&FieldValue::Ref(None)));
        assert!(state.flag("featured"));
        assert_eq!(state.text("description"), "");
    }

    #[test]
    fn test_missing_lists_hydrate_empty() {
        let state = FormState::initialize(&SCHOOL, Some(&json!({"name": "Everest", "phones": null})));
        assert!(state.records("phones").is_empty());
        assert!(state.records("faqs").is_empty());
        assert!(state.records("no_such_field").is_empty());
        assert!(state.refs("facilities").is_empty());
    }

    #[test]
    fn test_set_field_touches_one_field() {
        let mut state = FormState::initialize(&ADMISSION, None);
        let before = state.clone();
        state.set_field("description", FieldValue::Text("Open to all".into()));
        for field in ADMISSION.fields {
            if field.name != "description" {
                assert_eq!(state.get(field.name), before.get(field.name), "{}", field.name);
            }
        }
        assert_eq!(state.text("description"), "Open to all");
    }

    #[test]
    fn test_slug_follows_title_until_edited() {
        let mut state = FormState::initialize(&ADMISSION, None);
        state.set_field("title", FieldValue::Text("CS & Engineering  101!".into()));
        assert_eq!(state.text("slug"), "cs-engineering-101");

        state.set_field("slug", FieldValue::Text("custom".into()));
        state.set_field("title", FieldValue::Text("Something Else".into()));
        assert_eq!(state.text("slug"), "custom");
        assert!(state.is_edited("slug"));
    }

    #[test]
    fn test_hydrated_slug_is_kept() {
        let entity = json!({"title": "Fall Intake", "slug": "fall-2024"});
        let mut state = FormState::initialize(&ADMISSION, Some(&entity));
        state.set_field("title", FieldValue::Text("Spring Intake".into()));
        assert_eq!(state.text("slug"), "fall-2024");

        let blank = json!({"title": "Fall Intake", "slug": ""});
        let mut state = FormState::initialize(&ADMISSION, Some(&blank));
        state.set_field("title", FieldValue::Text("Spring Intake".into()));
        assert_eq!(state.text("slug"), "spring-intake");
    }

    #[test]
    fn test_rows_keep_keys_on_removal() {
        let mut state = FormState::initialize(&SCHOOL, None);
        for _ in 0..3 {
            state.append_empty_row("faqs");
        }
        let keys: Vec<_> = state.records("faqs").iter().map(|r| r.row_key).collect();
        state.set_list_item("faqs", 2, "question", FieldValue::Text("Hostel?".into()));
        state.remove_list_item("faqs", 0);
        state.remove_list_item("faqs", 9);

        let rows = state.records("faqs");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_key, keys[1]);
        assert_eq!(rows[1].row_key, keys[2]);
        assert_eq!(rows[1].text("question"), "Hostel?");
    }

    #[test]
    fn test_toggle_ref() {
        let mut state = FormState::initialize(&SCHOOL, None);
        state.toggle_ref("facilities", 3, true);
        state.toggle_ref("facilities", 5, true);
        state.toggle_ref("facilities", 3, true);
        state.toggle_ref("facilities", 5, false);
        assert_eq!(state.refs("facilities"), &[3]);
    }
}
