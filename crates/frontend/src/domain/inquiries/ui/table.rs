use crate::domain::admin::model::cell_text;
use crate::domain::inquiries::model::{relation_name, InboxKind};
use crate::shared::icons::icon;
use contracts::domain::a014_inquiry::INQUIRY;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

fn text_of(entry: &Value, field: &str) -> String {
    entry
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("-")
        .to_string()
}

/// Messages of one kind; a row unfolds to show the message text
#[component]
pub fn InquiryTable(
    kind: InboxKind,
    #[prop(into)] entries: Signal<Vec<Value>>,
    #[prop(into)] loading: Signal<bool>,
    /// Add a school column, for lists spanning schools
    #[prop(optional)]
    show_school: bool,
) -> impl IntoView {
    // Row whose message is unfolded
    let expanded = RwSignal::new(None::<usize>);
    let columns: Vec<_> = INQUIRY.list_columns().collect();
    let head_columns = columns.clone();
    let pre_registration = kind == InboxKind::PreRegistration;
    let column_count =
        columns.len() + 2 + usize::from(show_school) + usize::from(pre_registration);

    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {head_columns.iter().map(|c| view! {
                            <th class="table__header-cell">{c.ui.label}</th>
                        }).collect_view()}
                        {show_school.then(|| view! { <th class="table__header-cell">"School"</th> })}
                        <th class="table__header-cell">"Course"</th>
                        {pre_registration.then(|| view! { <th class="table__header-cell">"Grade"</th> })}
                        <th class="table__header-cell table__header-cell--actions"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = entries.get();
                        if loading.get() && rows.is_empty() {
                            return view! {
                                <tr><td class="table__cell" colspan=column_count><Spinner /></td></tr>
                            }
                            .into_any();
                        }
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td class="table__cell" colspan=column_count>
                                        {format!("No {}s found", kind.label().to_lowercase())}
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        let columns = columns.clone();
                        rows.into_iter().enumerate().map(move |(index, entry)| {
                            let cells = columns.iter().copied().map(|c| {
                                let text = cell_text(c, entry.get(c.name));
                                view! { <td class="table__cell">{text}</td> }
                            }).collect_view();
                            let school = show_school.then(|| {
                                let name = relation_name(&entry, "school").unwrap_or("-").to_string();
                                view! { <td class="table__cell">{name}</td> }
                            });
                            let course = relation_name(&entry, "course").unwrap_or("-").to_string();
                            let grade = pre_registration.then(|| {
                                let grade = text_of(&entry, "grade_or_class");
                                view! { <td class="table__cell">{grade}</td> }
                            });
                            let parent = pre_registration.then(|| text_of(&entry, "parent_name"));
                            let message = text_of(&entry, "message");
                            let is_open = move || expanded.get() == Some(index);
                            view! {
                                <tr class="table__row">
                                    {cells}
                                    {school}
                                    <td class="table__cell">{course}</td>
                                    {grade}
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--ghost"
                                            title="Message"
                                            on:click=move |_| expanded.update(|e| {
                                                *e = if *e == Some(index) { None } else { Some(index) };
                                            })
                                        >
                                            {move || icon(if is_open() { "chevron-down" } else { "chevron-right" })}
                                        </button>
                                    </td>
                                </tr>
                                <Show when=is_open>
                                    <tr class="table__row">
                                        <td class="table__cell" colspan=column_count>
                                            {parent.clone().map(|p| view! {
                                                <Badge appearance=BadgeAppearance::Tint>{format!("Parent: {}", p)}</Badge>
                                                " "
                                            })}
                                            {message.clone()}
                                        </td>
                                    </tr>
                                </Show>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_or_empty_text_shows_dash() {
        let entry = json!({"message": "", "parent_name": "Ram Sharma", "grade_or_class": 11});
        assert_eq!(text_of(&entry, "parent_name"), "Ram Sharma");
        assert_eq!(text_of(&entry, "message"), "-");
        assert_eq!(text_of(&entry, "grade_or_class"), "-");
        assert_eq!(text_of(&entry, "level"), "-");
    }
}
