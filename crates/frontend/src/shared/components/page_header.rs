use leptos::prelude::*;

/// Title row of a list page with its action buttons on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional)]
    subtitle: Option<Signal<String>>,

    /// Action buttons
    children: Children,
) -> impl IntoView {
    view! {
        <div class="header">
            <div class="header__content">
                <h1 class="header__title">{title}</h1>
                {subtitle.map(|s| view! {
                    <div class="header__subtitle">{move || s.get()}</div>
                })}
            </div>
            <div class="header__actions">
                {children()}
            </div>
        </div>
    }
}
