use crate::domain::inquiries::filter::{parse_contacted, InquiryFilter};
use crate::shared::dropdowns::DropdownMap;
use crate::shared::icons::icon;
use contracts::shared::dropdown::DropdownKey;
use leptos::prelude::*;
use thaw::*;

/// Controls a filter bar offers besides search and dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterScope {
    /// School and course selects, for lists spanning schools
    AcrossSchools,
    /// Contact status, for one school's inbox
    OwnInbox,
}

/// Edits `draft`; nothing is applied until Apply
#[component]
pub fn InquiryFilterBar(
    draft: RwSignal<InquiryFilter>,
    scope: FilterScope,
    #[prop(into)] dropdowns: Signal<DropdownMap>,
    on_apply: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let name_of = move |key: DropdownKey, id: i64| {
        dropdowns.with(|d| {
            d.get(&key)
                .and_then(|items| items.iter().find(|i| i.id == id))
                .map(|i| i.label.clone())
        })
    };

    let ref_select = move |key: DropdownKey,
                           label: &'static str,
                           all: &'static str,
                           get: fn(&InquiryFilter) -> Option<i64>,
                           set: fn(&mut InquiryFilter, Option<i64>)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <select
                    prop:value=move || {
                        dropdowns.track();
                        draft.with(get).map(|id| id.to_string()).unwrap_or_default()
                    }
                    on:change=move |ev| {
                        let id = event_target_value(&ev).parse::<i64>().ok();
                        draft.update(|f| set(f, id));
                    }
                >
                    <option value="">{all}</option>
                    {move || {
                        let current = draft.with(get);
                        dropdowns
                            .with(|d| d.get(&key).cloned().unwrap_or_default())
                            .into_iter()
                            .map(|item| {
                                let selected = current == Some(item.id);
                                view! {
                                    <option value=item.id.to_string() selected=selected>{item.label}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
        }
    };

    let scope_controls = match scope {
        FilterScope::AcrossSchools => view! {
            {ref_select(DropdownKey::Schools, "School", "All Schools", |f| f.school, |f, id| f.school = id)}
            {ref_select(DropdownKey::Courses, "Course", "All Courses", |f| f.course, |f, id| f.course = id)}
        }
        .into_any(),
        FilterScope::OwnInbox => view! {
            <div class="form-group">
                <label for="contacted">"Contact Status"</label>
                <select
                    id="contacted"
                    prop:value=move || draft.with(|f| match f.contacted {
                        Some(true) => "true",
                        Some(false) => "false",
                        None => "",
                    })
                    on:change=move |ev| {
                        let contacted = parse_contacted(&event_target_value(&ev));
                        draft.update(|f| f.contacted = contacted);
                    }
                >
                    <option value="">"All"</option>
                    <option value="true">"Contacted"</option>
                    <option value="false">"Not Contacted"</option>
                </select>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="filter-bar">
            <div class="filter-bar__grid">
                <div class="form-group">
                    <label for="search">"Search"</label>
                    <input
                        type="text"
                        id="search"
                        placeholder="Name, Email, Phone..."
                        prop:value=move || draft.with(|f| f.search.clone())
                        on:input=move |ev| {
                            let search = event_target_value(&ev);
                            draft.update(|f| f.search = search);
                        }
                    />
                </div>
                {scope_controls}
                <div class="form-group">
                    <label for="start_date">"From"</label>
                    <input
                        type="date"
                        id="start_date"
                        prop:value=move || draft.with(|f| f.start_date.clone())
                        on:input=move |ev| {
                            let day = event_target_value(&ev);
                            draft.update(|f| f.start_date = day);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="end_date">"To"</label>
                    <input
                        type="date"
                        id="end_date"
                        prop:value=move || draft.with(|f| f.end_date.clone())
                        on:input=move |ev| {
                            let day = event_target_value(&ev);
                            draft.update(|f| f.end_date = day);
                        }
                    />
                </div>
            </div>

            {move || {
                let chips = draft.with(|f| f.chips(name_of));
                (!chips.is_empty()).then(|| view! {
                    <div class="filter-bar__chips">
                        {chips.into_iter().map(|(slot, label)| view! {
                            <span class="filter-chip">
                                {label}
                                <button
                                    class="button button--ghost"
                                    title="Remove filter"
                                    on:click=move |_| draft.update(|f| f.clear(slot))
                                >
                                    {icon("x")}
                                </button>
                            </span>
                        }).collect_view()}
                    </div>
                })
            }}

            <div class="filter-bar__actions">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_reset.run(())
                >
                    "Reset Filters"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_apply.run(())
                >
                    "Apply Filters"
                </Button>
            </div>
        </div>
    }
}
