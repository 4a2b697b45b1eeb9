use crate::domain::inquiries::filter::InquiryFilter;
use crate::domain::inquiries::ui::{FilterScope, InquiryFilterBar, InquiryTable};
use crate::domain::school_owner::model::{fetch_inbox, InboxKind, InquiryInbox};
use crate::shared::components::page_header::PageHeader;
use crate::shared::dropdowns::DropdownMap;
use crate::shared::icons::icon;
use contracts::domain::a014_inquiry::INQUIRY;
use leptos::prelude::*;
use thaw::*;

/// Inquiries and pre-registrations received by the signed-in school
#[component]
pub fn InquiryInboxPage() -> impl IntoView {
    let inbox = RwSignal::new(InquiryInbox::default());
    let active = RwSignal::new(InboxKind::Inquiry);
    let draft = RwSignal::new(InquiryFilter::default());
    let applied = RwSignal::new(InquiryFilter::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match fetch_inbox().await {
                Ok(loaded) => {
                    log::debug!("Loaded {} inbox entries", loaded.total());
                    inbox.try_set(loaded);
                    error.try_set(None);
                }
                Err(e) => {
                    log::error!("Failed to load inquiries: {}", e);
                    error.try_set(Some(e.to_string()));
                }
            }
            loading.try_set(false);
        });
    });

    let visible = move |kind: InboxKind| {
        Signal::derive(move || applied.with(|f| inbox.with(|i| i.filtered(kind, f))))
    };

    let tab = move |kind: InboxKind| {
        let count = visible(kind);
        view! {
            <Button
                size=ButtonSize::Small
                appearance=Signal::derive(move || if active.get() == kind {
                    ButtonAppearance::Primary
                } else {
                    ButtonAppearance::Subtle
                })
                on_click=move |_| active.set(kind)
            >
                {format!("{}s", kind.label())}
                " "
                <Badge appearance=BadgeAppearance::Tint>{move || count.with(Vec::len)}</Badge>
            </Button>
        }
    };

    let on_apply = Callback::new(move |_| applied.set(draft.get_untracked().trimmed()));
    let on_reset = Callback::new(move |_| {
        draft.set(InquiryFilter::default());
        applied.set(InquiryFilter::default());
    });

    view! {
        <div class="page">
            <PageHeader title=INQUIRY.info.ui.list_name subtitle=Signal::derive(move || {
                format!("{} total", inbox.with(InquiryInbox::total))
            })>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload.update(|n| *n += 1)
                >
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            <InquiryFilterBar
                draft=draft
                scope=FilterScope::OwnInbox
                dropdowns=Signal::derive(DropdownMap::new)
                on_apply=on_apply
                on_reset=on_reset
            />

            <div class="header__actions">
                {tab(InboxKind::Inquiry)}
                {tab(InboxKind::PreRegistration)}
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            {move || {
                let kind = active.get();
                view! { <InquiryTable kind=kind entries=visible(kind) loading=loading /> }
            }}
        </div>
    }
}
