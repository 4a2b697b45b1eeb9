mod inbox;
mod overview;

use super::OWNER_HOME;
use crate::domain::admin::ui::details::{EntityDetails, SaveTarget};
use crate::system::auth::context::Role;
use crate::system::auth::guard::RequireRole;
use contracts::domain::a008_school::OWN_PROFILE;
use leptos::prelude::*;

pub use inbox::InquiryInboxPage;
pub use overview::OwnerOverview;

/// Content of an owner section; sections outside the owner set render nothing
#[component]
pub fn SchoolOwnerPage(section: String) -> impl IntoView {
    view! {
        <RequireRole role=Role::School>
            {
                let section = section.clone();
                move || match section.as_str() {
                    OWNER_HOME => view! { <OwnerOverview /> }.into_any(),
                    "own_profile" => view! { <OwnProfileForm /> }.into_any(),
                    "inquiry" => view! { <InquiryInboxPage /> }.into_any(),
                    _ => ().into_any(),
                }
            }
        </RequireRole>
    }
}

/// The school form bound to `schools/me`; stays open after saving
#[component]
fn OwnProfileForm() -> impl IntoView {
    let saved = RwSignal::new(false);
    // Remount the form so the saved entity is fetched again
    let generation = RwSignal::new(0u32);

    let on_saved = Callback::new(move |_: serde_json::Value| {
        saved.set(true);
        generation.update(|n| *n += 1);
    });
    let on_load_failed = Callback::new(move |_| {
        log::warn!("School profile could not be loaded");
    });

    view! {
        <div class="page">
            {move || saved.get().then(|| view! {
                <div class="warning-box" style="background: var(--color-success-50); border-color: var(--color-success-100);">
                    <span class="warning-box__text">"Profile updated"</span>
                </div>
            })}
            {move || {
                generation.track();
                view! {
                    <EntityDetails
                        descriptor=&OWN_PROFILE
                        key=None
                        target=SaveTarget::OwnProfile
                        on_saved=on_saved
                        on_load_failed=on_load_failed
                    />
                }
            }}
        </div>
    }
}
