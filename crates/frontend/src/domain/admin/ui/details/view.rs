use super::fields::FieldControl;
use super::view_model::{EntityDetailsViewModel, SaveTarget};
use crate::shared::icons::icon;
use contracts::domain::common::EntityKey;
use contracts::shared::metadata::{EntityDescriptor, FieldMetadata};
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

/// Visible form fields grouped by section, sections in first-seen order
fn sections(descriptor: &'static EntityDescriptor) -> Vec<(&'static str, Vec<&'static FieldMetadata>)> {
    let mut groups: Vec<(&'static str, Vec<&'static FieldMetadata>)> = Vec::new();
    for field in descriptor.fields.iter().filter(|f| f.ui.visible_in_form) {
        match groups.iter_mut().find(|(s, _)| *s == field.ui.section) {
            Some((_, fields)) => fields.push(field),
            None => groups.push((field.ui.section, vec![field])),
        }
    }
    groups
}

#[component]
pub fn EntityDetails(
    descriptor: &'static EntityDescriptor,
    /// Entity to edit; `None` creates a new one
    key: Option<EntityKey>,
    #[prop(optional)] target: SaveTarget,
    on_saved: Callback<Value>,
    /// Hidden when the form cannot be left (own profile)
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
    on_load_failed: Callback<()>,
) -> impl IntoView {
    let vm = EntityDetailsViewModel::new(descriptor, target);
    vm.load(key, on_load_failed);

    let element_name = descriptor.info.ui.element_name;

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() {
                        format!("Edit {}", element_name)
                    } else {
                        format!("New {}", element_name)
                    }}
                </h3>
            </div>

            {move || vm.submit_error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            {move || (!vm.errors.with(|e| e.is_empty())).then(|| view! {
                <div class="warning-box">
                    <span class="warning-box__text">
                        {move || vm.errors.with(|e| e.to_string())}
                    </span>
                </div>
            })}

            <Show
                when=move || !vm.loading.get()
                fallback=|| view! { <Spinner /> }
            >
                <div class="details-form">
                    {sections(descriptor).into_iter().map(|(section, fields)| view! {
                        <fieldset class="details-section">
                            <legend>{section}</legend>
                            {fields.into_iter().map(|field| view! {
                                <FieldControl vm=vm field=field />
                            }).collect_view()}
                        </fieldset>
                    }).collect_view()}
                </div>
            </Show>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || vm.saving.get() || vm.loading.get()
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
                {on_cancel.map(|cancel| view! {
                    <button
                        class="button button--secondary"
                        on:click=move |_| cancel.run(())
                        disabled=move || vm.saving.get()
                    >
                        {icon("cancel")}
                        "Cancel"
                    </button>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a009_admission::ADMISSION;

    #[test]
    fn test_sections_keep_declaration_order() {
        let groups = sections(&ADMISSION);
        let names: Vec<&str> = groups.iter().map(|(s, _)| *s).collect();
        assert_eq!(names, vec!["Basic Information", "Schedule", "About"]);
        assert_eq!(groups[1].1.len(), 3);
    }
}
