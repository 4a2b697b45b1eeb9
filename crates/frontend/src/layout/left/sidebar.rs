//! Sidebar component with collapsible menu groups

use crate::domain::school_owner::OWNER_HOME;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, Role};
use contracts::domain::a008_school::OWN_PROFILE;
use contracts::domain::a014_inquiry::INQUIRY;
use contracts::domain::ADMIN_ENTITIES;
use contracts::shared::metadata::EntityDescriptor;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (section, label, icon)
}

fn menu_item(d: &EntityDescriptor) -> (&'static str, &'static str, &'static str) {
    (d.info.entity_name, d.info.ui.list_name, d.info.ui.icon)
}

/// Reference lists (a001..a005) are grouped apart from the portal content
fn is_reference(d: &EntityDescriptor) -> bool {
    d.info.entity_index <= "a005"
}

fn get_menu_groups(role: Role) -> Vec<MenuGroup> {
    match role {
        Role::Admin => vec![
            MenuGroup {
                id: "content",
                label: "Content",
                icon: "layers",
                items: ADMIN_ENTITIES
                    .iter()
                    .filter(|d| !is_reference(d))
                    .map(|d| menu_item(d))
                    .collect(),
            },
            MenuGroup {
                id: "references",
                label: "References",
                icon: "book",
                items: ADMIN_ENTITIES
                    .iter()
                    .filter(|d| is_reference(d))
                    .map(|d| menu_item(d))
                    .collect(),
            },
            MenuGroup {
                id: "messages",
                label: "Messages",
                icon: "inbox",
                items: vec![menu_item(&INQUIRY)],
            },
        ],
        Role::School => vec![MenuGroup {
            id: "dashboard",
            label: "My School",
            icon: "school",
            items: vec![
                (OWNER_HOME, "Overview", "layout-dashboard"),
                menu_item(&OWN_PROFILE),
                menu_item(&INQUIRY),
            ],
        }],
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let (auth_state, _) = use_auth();

    let groups = get_menu_groups(auth_state.with_untracked(|s| s.role));
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id.to_string()).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {group.items.clone().into_iter().map(|(section, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.section() == section
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_section(section)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(role: Role) -> Vec<&'static str> {
        get_menu_groups(role)
            .into_iter()
            .flat_map(|g| g.items)
            .map(|(section, _, _)| section)
            .collect()
    }

    #[test]
    fn test_admin_menu_reaches_inquiries() {
        let admin = sections(Role::Admin);
        assert!(admin.contains(&"inquiry"));
        assert!(admin.contains(&"school"));
        assert!(!admin.contains(&"own_profile"));
    }

    #[test]
    fn test_owner_menu_is_owner_sections_only() {
        let owner = sections(Role::School);
        assert_eq!(owner.len(), 3);
        assert!(owner.iter().all(|s| crate::domain::school_owner::is_owner_section(s)));
    }
}
