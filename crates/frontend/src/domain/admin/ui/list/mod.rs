use crate::domain::admin::model::{
    cell_text, delete_entity, fetch_page, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use contracts::domain::common::EntityKey;
use contracts::shared::metadata::{EntityDescriptor, FieldType};
use contracts::shared::pagination::Page;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct EntityRow {
    pub key: Option<EntityKey>,
    pub entity: Value,
}

impl EntityRow {
    pub fn new(descriptor: &EntityDescriptor, entity: Value) -> Self {
        Self {
            key: EntityKey::from_entity(descriptor.info.key_kind, &entity),
            entity,
        }
    }
}

/// Paginated table of one entity collection
#[component]
pub fn EntityList(
    descriptor: &'static EntityDescriptor,
    /// 1-based page
    #[prop(into)]
    page: Signal<usize>,
    on_page_change: Callback<usize>,
    on_create: Callback<()>,
    on_view: Callback<EntityKey>,
    on_edit: Callback<EntityKey>,
) -> impl IntoView {
    let rows = RwSignal::new(Vec::<EntityRow>::new());
    let total_count = RwSignal::new(0usize);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let page_size = RwSignal::new(DEFAULT_PAGE_SIZE);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        let page = page.get();
        let size = page_size.get();
        reload.track();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match fetch_page(descriptor, page, size).await {
                Ok(Page { count, results, .. }) => {
                    let loaded = results
                        .into_iter()
                        .map(|e| EntityRow::new(descriptor, e))
                        .collect();
                    rows.try_set(loaded);
                    total_count.try_set(count);
                    error.try_set(None);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {}", descriptor.info.collection_name, e);
                    error.try_set(Some(e.to_string()));
                }
            }
            loading.try_set(false);
        });
    });

    let refresh = move || reload.update(|n| *n += 1);

    let delete = move |key: EntityKey| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!(
                    "Delete {} '{}'?",
                    descriptor.info.ui.element_name.to_lowercase(),
                    key
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        leptos::task::spawn_local(async move {
            match delete_entity(descriptor, &key).await {
                Ok(()) => refresh(),
                Err(e) => {
                    if let Some(w) = web_sys::window() {
                        let _ = w.alert_with_message(&format!("Delete failed: {}", e));
                    }
                }
            }
        });
    };

    let columns: Vec<_> = descriptor.list_columns().collect();
    let body_columns = columns.clone();
    let capabilities = descriptor.capabilities;
    let total_pages = Signal::derive(move || total_count.get().div_ceil(page_size.get().max(1)));

    view! {
        <div class="page">
            <PageHeader title=descriptor.info.ui.list_name subtitle=Signal::derive(move || format!("{} total", total_count.get()))>
                {capabilities.create.then(|| view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_create.run(())
                    >
                        {icon("plus")}
                        {format!("New {}", descriptor.info.ui.element_name)}
                    </Button>
                })}
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| refresh()
                >
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns.iter().map(|c| view! {
                                <th class="table__header-cell">{c.ui.label}</th>
                            }).collect_view()}
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let columns = body_columns.clone();
                            if loading.get() && rows.with(Vec::is_empty) {
                                return view! {
                                    <tr><td class="table__cell" colspan=columns.len() + 1><Spinner /></td></tr>
                                }
                                .into_any();
                            }
                            if rows.with(Vec::is_empty) {
                                return view! {
                                    <tr><td class="table__cell" colspan=columns.len() + 1>
                                        {format!("No {} found", descriptor.info.ui.list_name.to_lowercase())}
                                    </td></tr>
                                }
                                .into_any();
                            }
                            rows.get().into_iter().map(move |row| {
                                let cells = columns.iter().copied().map(|c| {
                                    let label = c.ui.label;
                                    let value = row.entity.get(c.name);
                                    match (c.field_type, value) {
                                        (FieldType::Flag, Some(Value::Bool(true))) => view! {
                                            <td class="table__cell">
                                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>{label}</Badge>
                                            </td>
                                        }
                                        .into_any(),
                                        _ => {
                                            let text = cell_text(c, value);
                                            view! { <td class="table__cell">{text}</td> }.into_any()
                                        }
                                    }
                                }).collect_view();
                                let actions = row.key.clone().map(|key| {
                                    let (k_view, k_edit, k_delete) = (key.clone(), key.clone(), key);
                                    view! {
                                        {capabilities.view.then(|| view! {
                                            <button class="button button--ghost" title="View" on:click=move |_| on_view.run(k_view.clone())>
                                                {icon("eye")}
                                            </button>
                                        })}
                                        {capabilities.edit.then(|| view! {
                                            <button class="button button--ghost" title="Edit" on:click=move |_| on_edit.run(k_edit.clone())>
                                                {icon("edit")}
                                            </button>
                                        })}
                                        {capabilities.delete.then(|| view! {
                                            <button class="button button--ghost" title="Delete" on:click=move |_| delete(k_delete.clone())>
                                                {icon("delete")}
                                            </button>
                                        })}
                                    }
                                });
                                view! {
                                    <tr class="table__row">
                                        {cells}
                                        <td class="table__cell table__cell--actions">{actions}</td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=on_page_change
                on_page_size_change=Callback::new(move |size| {
                    page_size.set(size);
                    on_page_change.run(1);
                })
                page_size_options=PAGE_SIZE_OPTIONS.to_vec()
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a013_advertisement::ADVERTISEMENT;
    use serde_json::json;

    #[test]
    fn test_row_key_follows_entity_key_kind() {
        let row = EntityRow::new(&ADVERTISEMENT, json!({"id": 12, "slug": "banner"}));
        assert_eq!(row.key, Some(EntityKey::id("12")));

        let keyless = EntityRow::new(&ADVERTISEMENT, json!({"title": "orphan"}));
        assert_eq!(keyless.key, None);
    }
}
