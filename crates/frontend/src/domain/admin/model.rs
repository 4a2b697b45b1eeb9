//! Read and delete calls shared by every admin entity page, plus the
//! text rendering of list cells

use crate::shared::api::{client, ApiError};
use crate::shared::api_utils::{delete_path, detail_path, list_path};
use crate::shared::date_utils::format_date;
use crate::shared::dropdowns::DROPDOWN_CACHE;
use contracts::domain::common::EntityKey;
use contracts::shared::metadata::{EntityDescriptor, FieldMetadata, FieldType, PrimitiveKind};
use contracts::shared::pagination::{ListResponse, Page};
use serde_json::Value;

pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [12, 24, 48];

pub async fn fetch_page(
    descriptor: &EntityDescriptor,
    page: usize,
    page_size: usize,
) -> Result<Page<Value>, ApiError> {
    let path = list_path(descriptor.info.collection_name, page, page_size);
    let response: ListResponse<Value> = client::get_json(&path).await?;
    Ok(response.into_page_window(page, page_size))
}

pub async fn fetch_entity(descriptor: &EntityDescriptor, key: &EntityKey) -> Result<Value, ApiError> {
    client::get_json(&detail_path(descriptor.info.collection_name, key)).await
}

pub async fn delete_entity(descriptor: &EntityDescriptor, key: &EntityKey) -> Result<(), ApiError> {
    client::delete(&delete_path(descriptor.info.collection_name, key)).await?;
    DROPDOWN_CACHE.invalidate_fed_by(descriptor);
    Ok(())
}

/// Heading for a fetched entity
pub fn row_title(descriptor: &EntityDescriptor, entity: &Value) -> String {
    match entity.get(descriptor.info.ui.title_field) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => format!("{} #{}", descriptor.info.ui.element_name, plain(entity.get("id"))),
    }
}

/// Text shown in a list cell or a read-only detail row
pub fn cell_text(field: &FieldMetadata, value: Option<&Value>) -> String {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return "-".to_string();
    };
    let text = match (field.field_type, value) {
        (FieldType::Flag, Value::Bool(b)) => if *b { "Yes" } else { "No" }.to_string(),
        (FieldType::Primitive(PrimitiveKind::Date), Value::String(s)) => format_date(s),
        (FieldType::Enum(options), Value::String(s)) => options
            .iter()
            .find(|(v, _)| v == s)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| s.clone()),
        (FieldType::NestedTable(_), Value::Array(rows)) => format!("{} items", rows.len()),
        (FieldType::Upload(_), Value::String(s)) => {
            if s.is_empty() { "-" } else { "Uploaded" }.to_string()
        }
        (_, Value::Array(items)) => items.iter().map(label_of).collect::<Vec<_>>().join(", "),
        (_, other) => label_of(other),
    };
    if text.is_empty() {
        "-".to_string()
    } else {
        text
    }
}

/// Populated relations are labelled by `name` or `title`
fn label_of(value: &Value) -> String {
    match value {
        Value::Object(map) => ["name", "title"]
            .iter()
            .find_map(|k| map.get(*k).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", plain(map.get("id")))),
        other => plain(Some(other)),
    }
}

fn plain(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a009_admission::ADMISSION;
    use contracts::domain::a013_advertisement::ADVERTISEMENT;
    use serde_json::json;

    fn field(name: &str) -> &'static FieldMetadata {
        ADMISSION.field(name).unwrap()
    }

    #[test]
    fn test_cells_render_relations_by_label() {
        let entity = json!({
            "school": {"id": 3, "name": "Everest College"},
            "courses": [{"id": 1, "title": "BSc CSIT"}, {"id": 2}],
            "featured": true,
            "active_from": "2025-02-01",
            "level": null
        });
        assert_eq!(cell_text(field("school"), entity.get("school")), "Everest College");
        assert_eq!(cell_text(field("courses"), entity.get("courses")), "BSc CSIT, #2");
        assert_eq!(cell_text(field("featured"), entity.get("featured")), "Yes");
        assert_eq!(cell_text(field("active_from"), entity.get("active_from")), "Feb 1, 2025");
        assert_eq!(cell_text(field("level"), entity.get("level")), "-");
        assert_eq!(cell_text(field("title"), None), "-");
    }

    #[test]
    fn test_enum_cells_use_option_label() {
        let placement = ADVERTISEMENT.field("placement").unwrap();
        assert_eq!(cell_text(placement, Some(&json!("home-3"))), "Home 3");
    }

    #[test]
    fn test_row_title_falls_back_to_id() {
        assert_eq!(row_title(&ADMISSION, &json!({"title": "Fall Intake"})), "Fall Intake");
        assert_eq!(row_title(&ADVERTISEMENT, &json!({"id": 12})), "Advertisement #12");
    }
}
