use super::details::EntityDetails;
use super::list::EntityList;
use super::view::EntityView;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::page_state::{AdminView, PageState};
use contracts::domain::common::EntityKey;
use contracts::shared::metadata::EntityDescriptor;
use leptos::prelude::*;

/// List/create/edit/view page of one entity, driven by the URL query
#[component]
pub fn AdminPage(descriptor: &'static EntityDescriptor) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let kind = descriptor.info.key_kind;
    let state = Memo::new(move |_| ctx.query.with(|q| PageState::from_query(kind, q)));

    let go = move |next: PageState| ctx.navigate(&next);
    let back_to_list = Callback::new(move |_: ()| go(state.get_untracked().back_to_list()));
    let load_failed = Callback::new(move |_: ()| {
        log::warn!("Returning to the {} list", descriptor.info.entity_name);
        go(state.get_untracked().back_to_list());
    });
    let on_saved = Callback::new(move |_: serde_json::Value| go(state.get_untracked().back_to_list()));
    let open_create = Callback::new(move |_: ()| go(state.get_untracked().open_create()));
    let open_edit = Callback::new(move |key: EntityKey| go(state.get_untracked().open_edit(key)));
    let open_view = Callback::new(move |key: EntityKey| go(state.get_untracked().open_view(key)));
    let goto_page = Callback::new(move |page: usize| go(state.get_untracked().goto_page(page)));
    let page = Signal::derive(move || state.with(|s| s.page));
    // Page turns must not remount the list
    let current_view = Memo::new(move |_| state.with(|s| s.view.clone()));

    move || match current_view.get() {
        AdminView::List => view! {
            <EntityList
                descriptor=descriptor
                page=page
                on_page_change=goto_page
                on_create=open_create
                on_view=open_view
                on_edit=open_edit
            />
        }
        .into_any(),
        AdminView::Create => view! {
            <EntityDetails
                descriptor=descriptor
                key=None
                on_saved=on_saved
                on_cancel=back_to_list
                on_load_failed=load_failed
            />
        }
        .into_any(),
        AdminView::Edit(key) => view! {
            <EntityDetails
                descriptor=descriptor
                key=Some(key)
                on_saved=on_saved
                on_cancel=back_to_list
                on_load_failed=load_failed
            />
        }
        .into_any(),
        AdminView::View(key) => view! {
            <EntityView
                descriptor=descriptor
                key=key
                on_back=back_to_list
                on_edit=open_edit
                on_deleted=back_to_list
                on_load_failed=load_failed
            />
        }
        .into_any(),
    }
}
