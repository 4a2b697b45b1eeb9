use crate::domain::admin::ui::AdminPage;
use crate::domain::inquiries::ui::AdminInquiriesPage;
use crate::domain::school_owner::ui::SchoolOwnerPage;
use crate::domain::school_owner::is_owner_section;
use crate::domain::school_owner::OWNER_HOME;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::{use_auth, Role};
use crate::system::auth::guard::RequireAuth;
use contracts::domain::a014_inquiry::INQUIRY;
use contracts::domain::admin_entity;
use leptos::prelude::*;

/// Section a school owner is sent to when the URL names one they cannot open
fn owner_redirect(role: Role, section: &str) -> Option<&'static str> {
    (role == Role::School && !is_owner_section(section)).then_some(OWNER_HOME)
}

/// Page for the active section; unknown sections show a notice
#[component]
fn SectionContent() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let (auth_state, _) = use_auth();

    Effect::new(move |_| {
        let role = auth_state.with(|s| s.role);
        if let Some(home) = owner_redirect(role, &ctx.section()) {
            ctx.open_section(home);
        }
    });

    move || {
        let section = ctx.section();
        match auth_state.get().role {
            Role::School => view! { <SchoolOwnerPage section=section /> }.into_any(),
            Role::Admin => match admin_entity(&section) {
                Some(descriptor) => view! { <AdminPage descriptor=descriptor /> }.into_any(),
                None if section == INQUIRY.info.entity_name => {
                    view! { <AdminInquiriesPage /> }.into_any()
                }
                None => view! {
                    <div class="warning-box">
                        <span class="warning-box__text">{format!("Unknown section '{}'", section)}</span>
                    </div>
                }
                .into_any(),
            },
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <SectionContent /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_redirected_from_admin_sections() {
        assert_eq!(owner_redirect(Role::School, "school"), Some(OWNER_HOME));
        assert_eq!(owner_redirect(Role::School, "inquiry"), None);
        assert_eq!(owner_redirect(Role::School, OWNER_HOME), None);
        assert_eq!(owner_redirect(Role::Admin, "dashboard"), None);
    }
}
