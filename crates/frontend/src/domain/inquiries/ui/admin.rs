use super::{FilterScope, InquiryFilterBar, InquiryTable};
use crate::domain::inquiries::filter::InquiryFilter;
use crate::domain::inquiries::model::{fetch_admin, InboxKind};
use crate::shared::components::page_header::PageHeader;
use crate::shared::dropdowns::{fetch_dropdown, DropdownMap, DROPDOWN_CACHE};
use crate::shared::icons::icon;
use contracts::shared::dropdown::DropdownKey;
use futures_util::future::join_all;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

const FILTER_DROPDOWNS: [DropdownKey; 2] = [DropdownKey::Schools, DropdownKey::Courses];

/// Tabs of the admin inquiry page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    All,
    Only(InboxKind),
}

impl AdminTab {
    const TABS: [AdminTab; 3] = [
        Self::All,
        Self::Only(InboxKind::Inquiry),
        Self::Only(InboxKind::PreRegistration),
    ];

    /// Kinds fetched and shown while the tab is active
    pub fn kinds(&self) -> Vec<InboxKind> {
        match self {
            Self::All => InboxKind::ALL.to_vec(),
            Self::Only(kind) => vec![*kind],
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::All => "All Inquiries",
            Self::Only(InboxKind::Inquiry) => "Regular Inquiries",
            Self::Only(InboxKind::PreRegistration) => "Pre-Registration Inquiries",
        }
    }
}

/// Inquiries and pre-registrations across every school
#[component]
pub fn AdminInquiriesPage() -> impl IntoView {
    let tab = RwSignal::new(AdminTab::All);
    let draft = RwSignal::new(InquiryFilter::default());
    let applied = RwSignal::new(InquiryFilter::default());
    let inquiries = RwSignal::new(Vec::<Value>::new());
    let pre_registrations = RwSignal::new(Vec::<Value>::new());
    let dropdowns = RwSignal::new(DropdownMap::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let reload = RwSignal::new(0u32);

    let entries_of = move |kind: InboxKind| match kind {
        InboxKind::Inquiry => inquiries,
        InboxKind::PreRegistration => pre_registrations,
    };

    leptos::task::spawn_local(async move {
        let loaded = DROPDOWN_CACHE.load_all(&FILTER_DROPDOWNS, fetch_dropdown).await;
        dropdowns.try_set(loaded);
    });

    Effect::new(move |_| {
        let kinds = tab.get().kinds();
        let filter = applied.get();
        reload.track();
        loading.set(true);
        leptos::task::spawn_local(async move {
            let results = join_all(kinds.iter().map(|kind| fetch_admin(*kind, &filter))).await;
            let mut failed = false;
            for (kind, result) in kinds.iter().zip(results) {
                match result {
                    Ok(loaded) => {
                        log::debug!("Loaded {} {} entries", loaded.len(), kind.label());
                        entries_of(*kind).try_set(loaded);
                    }
                    Err(e) => {
                        log::error!("Failed to load {} entries: {}", kind.label(), e);
                        entries_of(*kind).try_set(Vec::new());
                        failed = true;
                    }
                }
            }
            error.try_set(failed.then(|| "Failed to load inquiries. Please try again.".to_string()));
            loading.try_set(false);
        });
    });

    let on_apply = Callback::new(move |_| applied.set(draft.get_untracked().trimmed()));
    let on_reset = Callback::new(move |_| {
        draft.set(InquiryFilter::default());
        applied.set(InquiryFilter::default());
    });

    let subtitle = Signal::derive(move || {
        let shown: usize = tab
            .get()
            .kinds()
            .into_iter()
            .map(|kind| entries_of(kind).with(Vec::len))
            .sum();
        format!("{} shown", shown)
    });

    view! {
        <div class="page">
            <PageHeader title="Inquiries" subtitle=subtitle>
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
                scope=FilterScope::AcrossSchools
                dropdowns=dropdowns
                on_apply=on_apply
                on_reset=on_reset
            />

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <div class="header__actions">
                {AdminTab::TABS.into_iter().map(|t| view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=Signal::derive(move || if tab.get() == t {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Subtle
                        })
                        on_click=move |_| tab.set(t)
                    >
                        {t.label()}
                    </Button>
                }).collect_view()}
            </div>

            {move || tab.get().kinds().into_iter().map(|kind| view! {
                <h3 class="details-header">{format!("{}s", kind.label())}</h3>
                <InquiryTable kind=kind entries=entries_of(kind) loading=loading show_school=true />
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_select_kinds() {
        assert_eq!(
            AdminTab::All.kinds(),
            vec![InboxKind::Inquiry, InboxKind::PreRegistration]
        );
        assert_eq!(
            AdminTab::Only(InboxKind::PreRegistration).kinds(),
            vec![InboxKind::PreRegistration]
        );
        assert_eq!(AdminTab::TABS[1].label(), "Regular Inquiries");
    }
}
