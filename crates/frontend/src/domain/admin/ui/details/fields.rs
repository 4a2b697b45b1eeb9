//! One control per field type. Top-level fields and nested-row sub-fields
//! share `value_control`; only the value source and setter differ.

use super::view_model::EntityDetailsViewModel;
use crate::shared::api_utils::media_url;
use crate::shared::form::{FieldValue, FileField};
use crate::shared::icons::icon;
use contracts::shared::dropdown::DropdownItem;
use contracts::shared::metadata::{FieldMetadata, FieldType, PrimitiveKind, UploadKind};
use leptos::prelude::*;
use uuid::Uuid;
use web_sys::HtmlInputElement;

/// Labelled control for a top-level field with its inline error
#[component]
pub fn FieldControl(vm: EntityDetailsViewModel, field: &'static FieldMetadata) -> impl IntoView {
    let name = field.name;
    let control = match field.field_type {
        FieldType::AggregateRefs(key, _) => view! {
            <div class="checkbox-group">
                {move || {
                    let items = vm.dropdowns.with(|d| d.get(&key).cloned().unwrap_or_default());
                    if items.is_empty() {
                        return view! { <span class="form-hint">"No options available"</span> }.into_any();
                    }
                    items.into_iter().map(|item| {
                        let id = item.id;
                        view! {
                            <label class="checkbox-group__item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || vm.form.with(|f| f.refs(name).contains(&id))
                                    on:change=move |ev| vm.toggle_ref(name, id, event_target_checked(&ev))
                                />
                                {item.label}
                            </label>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        }
        .into_any(),
        FieldType::NestedTable(_) => view! { <NestedTableControl vm=vm field=field /> }.into_any(),
        _ => {
            let value = Signal::derive(move || {
                vm.form
                    .with(|f| f.get(name).cloned())
                    .unwrap_or_else(|| FieldValue::empty_for(field))
            });
            let on_change = Callback::new(move |v: FieldValue| vm.set_field(name, v));
            value_control(vm, field, name.to_string(), value, on_change)
        }
    };

    view! {
        <div
            class="form-group"
            class:form-group--error=move || vm.errors.with(|e| e.contains(name))
        >
            <label for=name>
                {field.ui.label}
                {field.validation.required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            {control}
            {field.ui.hint.map(|h| view! { <div class="form-hint">{h}</div> })}
            {move || vm.errors.with(|e| e.get(name).map(str::to_string)).map(|m| view! {
                <div class="field-error">{m}</div>
            })}
        </div>
    }
}

fn value_control(
    vm: EntityDetailsViewModel,
    field: &'static FieldMetadata,
    id: String,
    value: Signal<FieldValue>,
    on_change: Callback<FieldValue>,
) -> AnyView {
    let placeholder = field.ui.placeholder.unwrap_or_default();
    match field.field_type {
        FieldType::Primitive(PrimitiveKind::LongText) => view! {
            <textarea
                id=id
                rows="4"
                placeholder=placeholder
                prop:value=move || value.with(FieldValue::as_text)
                on:input=move |ev| on_change.run(FieldValue::Text(event_target_value(&ev)))
            />
        }
        .into_any(),
        FieldType::Primitive(kind) => view! {
            <input
                type=kind.input_type()
                id=id
                placeholder=placeholder
                step=kind.is_numeric().then_some("any")
                prop:value=move || value.with(FieldValue::as_text)
                on:input=move |ev| on_change.run(FieldValue::Text(event_target_value(&ev)))
            />
        }
        .into_any(),
        FieldType::Flag => view! {
            <input
                type="checkbox"
                id=id
                prop:checked=move || value.with(|v| matches!(v, FieldValue::Flag(true)))
                on:change=move |ev| on_change.run(FieldValue::Flag(event_target_checked(&ev)))
            />
        }
        .into_any(),
        FieldType::Enum(options) => view! {
            <select
                id=id
                prop:value=move || value.with(FieldValue::as_text)
                on:change=move |ev| on_change.run(FieldValue::Text(event_target_value(&ev)))
            >
                <option value="">"Select..."</option>
                {options.iter().map(|(v, label)| view! {
                    <option value=*v>{*label}</option>
                }).collect_view()}
            </select>
        }
        .into_any(),
        FieldType::AggregateRef(key) => view! {
            <select
                id=id
                prop:value=move || {
                    // options may arrive after the value
                    vm.dropdowns.track();
                    value.with(FieldValue::as_text)
                }
                on:change=move |ev| {
                    let id = event_target_value(&ev).parse::<i64>().ok();
                    on_change.run(FieldValue::Ref(id));
                }
            >
                <option value="">{format!("Select {}", field.ui.label.to_lowercase())}</option>
                {move || {
                    let current = value.with(FieldValue::as_text);
                    let items = vm.dropdowns.with(|d| d.get(&key).cloned().unwrap_or_default());
                    ref_options(&items, &current)
                        .into_iter()
                        .map(|(option, label, selected)| view! {
                            <option value=option selected=selected>{label}</option>
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
        FieldType::Upload(kind) => {
            let file = Signal::derive(move || match value.get() {
                FieldValue::File(file) => file,
                _ => FileField::Empty,
            });
            let on_pick = Callback::new(move |picked: web_sys::File| {
                vm.pick_file(picked, move |v| on_change.run(v));
            });
            let on_clear = Callback::new(move |_| on_change.run(FieldValue::File(FileField::Empty)));
            view! { <UploadControl id=id kind=kind file=file on_pick=on_pick on_clear=on_clear /> }
                .into_any()
        }
        FieldType::AggregateRefs(_, _) | FieldType::NestedTable(_) => ().into_any(),
    }
}

/// `(value, label, selected)` per option of a single-reference select
fn ref_options(items: &[DropdownItem], current: &str) -> Vec<(String, String, bool)> {
    items
        .iter()
        .map(|item| {
            let value = item.id.to_string();
            let selected = value == current;
            (value, item.label.clone(), selected)
        })
        .collect()
}

#[component]
fn UploadControl(
    id: String,
    kind: UploadKind,
    #[prop(into)] file: Signal<FileField>,
    on_pick: Callback<web_sys::File>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="upload">
            {move || match file.get() {
                FileField::Persisted(url) => match kind {
                    UploadKind::Image => view! {
                        <img class="upload__preview" src=media_url(&url) alt="" />
                    }
                    .into_any(),
                    UploadKind::Document => view! {
                        <a class="upload__link" href=media_url(&url) target="_blank">"Current file"</a>
                    }
                    .into_any(),
                },
                FileField::Pending(blob) => view! {
                    <div class="upload__pending">
                        {icon("upload")}
                        <span>{format!("{} ({} KB)", blob.file_name, blob.size().div_ceil(1024))}</span>
                        <button class="button button--ghost" on:click=move |_| on_clear.run(())>
                            {icon("x")}
                        </button>
                    </div>
                }
                .into_any(),
                FileField::Empty => ().into_any(),
            }}
            <input
                type="file"
                id=id
                accept=kind.accept()
                on:change=move |ev| {
                    let input: HtmlInputElement = event_target(&ev);
                    if let Some(picked) = input.files().and_then(|list| list.get(0)) {
                        on_pick.run(picked);
                    }
                }
            />
        </div>
    }
}

/// Editable rows of sub-records, keyed by each row's stable id
#[component]
fn NestedTableControl(vm: EntityDetailsViewModel, field: &'static FieldMetadata) -> impl IntoView {
    let name = field.name;
    let sub_fields = field.nested();
    let row_keys =
        move || vm.form.with(|f| f.records(name).iter().map(|r| r.row_key).collect::<Vec<Uuid>>());

    view! {
        <div class="nested-table">
            <For
                each=row_keys
                key=|row_key| *row_key
                children=move |row_key| view! {
                    <div class="nested-table__row">
                        {sub_fields.iter().map(|sub| {
                            let sub_name = sub.name;
                            let value = Signal::derive(move || {
                                vm.row_value(name, row_key, sub_name)
                                    .unwrap_or_else(|| FieldValue::empty_for(sub))
                            });
                            let on_change = Callback::new(move |v: FieldValue| {
                                vm.set_row_value(name, row_key, sub_name, v)
                            });
                            let id = format!("{}-{}-{}", name, row_key, sub_name);
                            view! {
                                <div class="nested-table__cell">
                                    <label for=id.clone()>{sub.ui.label}</label>
                                    {value_control(vm, sub, id, value, on_change)}
                                </div>
                            }
                        }).collect_view()}
                        <button
                            class="button button--ghost"
                            title="Remove"
                            on:click=move |_| vm.remove_row(name, row_key)
                        >
                            {icon("delete")}
                        </button>
                    </div>
                }
            />
            <button class="button button--secondary" on:click=move |_| vm.append_row(name)>
                {icon("plus")}
                {format!("Add {}", field.ui.label.to_lowercase())}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_options_mark_current_value() {
        let items = vec![
            DropdownItem {
                id: 3,
                label: "Diploma".to_string(),
            },
            DropdownItem {
                id: 7,
                label: "Bachelor".to_string(),
            },
        ];
        let options = ref_options(&items, "7");
        assert_eq!(
            options,
            vec![
                ("3".to_string(), "Diploma".to_string(), false),
                ("7".to_string(), "Bachelor".to_string(), true),
            ]
        );
        assert!(ref_options(&items, "").iter().all(|(_, _, selected)| !selected));
        assert!(ref_options(&[], "7").is_empty());
    }
}
