use leptos::prelude::*;

use super::context::{use_auth, Role};

/// Component that requires a stored session
/// Shows fallback if not authenticated
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! {
                <div class="warning-box">
                    <span class="warning-box__text">"Not authenticated. Please sign in."</span>
                </div>
            }
        >
            {children()}
        </Show>
    }
}

/// Component that requires the given role
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().role == role
            fallback=|| view! {
                <div class="warning-box">
                    <span class="warning-box__text">"Access denied."</span>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
