//! Read-only presentation of one entity

use crate::domain::admin::model::{cell_text, delete_entity, fetch_entity, row_title};
use crate::shared::api_utils::media_url;
use crate::shared::icons::icon;
use contracts::domain::common::EntityKey;
use contracts::shared::metadata::{EntityDescriptor, FieldMetadata, FieldType, UploadKind};
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

fn detail_value(field: &'static FieldMetadata, value: Option<&Value>) -> AnyView {
    match (field.field_type, value) {
        (FieldType::Upload(UploadKind::Image), Some(Value::String(url))) if !url.is_empty() => {
            view! { <img class="upload__preview" src=media_url(url) alt=field.ui.label /> }.into_any()
        }
        (FieldType::Upload(UploadKind::Document), Some(Value::String(url))) if !url.is_empty() => {
            view! { <a href=media_url(url) target="_blank">"Open file"</a> }.into_any()
        }
        (FieldType::NestedTable(_), Some(Value::Array(rows))) if !rows.is_empty() => {
            let sub_fields = field.nested();
            view! {
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {sub_fields.iter().map(|s| view! {
                                <th class="table__header-cell">{s.ui.label}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows.iter().map(|row| view! {
                            <tr class="table__row">
                                {sub_fields.iter().map(|s| view! {
                                    <td class="table__cell">{detail_value(s, row.get(s.name))}</td>
                                }).collect_view()}
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            }
            .into_any()
        }
        _ => cell_text(field, value).into_any(),
    }
}

#[component]
pub fn EntityView(
    descriptor: &'static EntityDescriptor,
    key: EntityKey,
    on_back: Callback<()>,
    on_edit: Callback<EntityKey>,
    /// Called after a successful delete
    on_deleted: Callback<()>,
    on_load_failed: Callback<()>,
) -> impl IntoView {
    let entity = RwSignal::new(None::<Value>);
    let capabilities = descriptor.capabilities;

    {
        let key = key.clone();
        leptos::task::spawn_local(async move {
            match fetch_entity(descriptor, &key).await {
                Ok(value) => {
                    entity.try_set(Some(value));
                }
                Err(e) => {
                    log::error!("Failed to load {} {}: {}", descriptor.info.entity_name, key, e);
                    on_load_failed.run(());
                }
            }
        });
    }

    let key = StoredValue::new(key);
    let delete = move |_: leptos::ev::MouseEvent| {
        let key = key.get_value();
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete this {}?", descriptor.info.ui.element_name.to_lowercase()))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        leptos::task::spawn_local(async move {
            match delete_entity(descriptor, &key).await {
                Ok(()) => on_deleted.run(()),
                Err(e) => {
                    if let Some(w) = web_sys::window() {
                        let _ = w.alert_with_message(&format!("Delete failed: {}", e));
                    }
                }
            }
        });
    };

    view! {
        <div class="details-container">
            {move || match entity.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(value) => view! {
                    <div class="details-header">
                        <h3>{row_title(descriptor, &value)}</h3>
                    </div>
                    <dl class="details-list">
                        {descriptor.fields.iter().map(|field| view! {
                            <dt>{field.ui.label}</dt>
                            <dd>{detail_value(field, value.get(field.name))}</dd>
                        }).collect_view()}
                    </dl>
                }
                .into_any(),
            }}

            <div class="details-actions">
                {capabilities.edit.then(|| view! {
                    <button class="button button--primary" on:click=move |_| on_edit.run(key.get_value())>
                        {icon("edit")}
                        "Edit"
                    </button>
                })}
                {capabilities.delete.then(|| view! {
                    <button class="button button--secondary" on:click=delete>
                        {icon("delete")}
                        "Delete"
                    </button>
                })}
                <button class="button button--secondary" on:click=move |_| on_back.run(())>
                    {icon("chevron-left")}
                    "Back to list"
                </button>
            </div>
        </div>
    }
}
