use crate::domain::school_owner::model::{
    fetch_inbox, fetch_own_profile, is_verified, merge_recent, profile_completeness, InboxEntry,
    InquiryInbox,
};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use chrono::Timelike;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

const RECENT_LIMIT: usize = 6;

fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    }
}

#[component]
fn StatTile(label: &'static str, icon_name: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(icon_name)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">{move || value.get()}</div>
        </div>
    }
}

/// Landing page of a school owner
#[component]
pub fn OwnerOverview() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let school = RwSignal::new(None::<Value>);
    let inbox = RwSignal::new(InquiryInbox::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    leptos::task::spawn_local(async move {
        match fetch_own_profile().await {
            Ok(profile) => {
                // Unverified schools do not receive inquiries
                if is_verified(&profile) {
                    match fetch_inbox().await {
                        Ok(loaded) => {
                            inbox.try_set(loaded);
                        }
                        Err(e) => log::error!("Failed to load inquiries: {}", e),
                    }
                }
                school.try_set(Some(profile));
            }
            Err(e) => {
                log::error!("Failed to load school profile: {}", e);
                error.try_set(Some(e.to_string()));
            }
        }
        loading.try_set(false);
    });

    let name = move || {
        school.with(|s| {
            s.as_ref()
                .and_then(|s| s.get("name"))
                .and_then(Value::as_str)
                .unwrap_or("School Dashboard")
                .to_string()
        })
    };
    let verified = Memo::new(move |_| school.with(|s| s.as_ref().is_some_and(is_verified)));
    let hour = chrono::Local::now().hour();

    let completeness = Signal::derive(move || {
        school.with(|s| format!("{}%", s.as_ref().map(profile_completeness).unwrap_or(0)))
    });
    let inquiries = Signal::derive(move || inbox.with(|i| i.inquiries.len().to_string()));
    let pre_registrations =
        Signal::derive(move || inbox.with(|i| i.pre_registrations.len().to_string()));

    view! {
        <div class="page">
            <PageHeader
                title=greeting(hour)
                subtitle=Signal::derive(name)
            >
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.open_section("own_profile")
                >
                    {icon("edit")}
                    "Edit Profile"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <div class="details-header">
                    {move || if verified.get() {
                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Verified"</Badge> }.into_any()
                    } else {
                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"Pending verification"</Badge> }.into_any()
                    }}
                </div>

                <div class="stat-grid">
                    <StatTile label="Profile completeness" icon_name="user" value=completeness />
                    <StatTile label="Inquiries" icon_name="inbox" value=inquiries />
                    <StatTile label="Pre-registrations" icon_name="clipboard-list" value=pre_registrations />
                </div>

                <Show
                    when=move || verified.get()
                    fallback=|| view! {
                        <div class="warning-box">
                            <span class="warning-box__icon">"ℹ"</span>
                            <span class="warning-box__text">
                                "Inquiries become available once your school is verified."
                            </span>
                        </div>
                    }
                >
                    <RecentInquiries entries=Signal::derive(move || inbox.with(|i| merge_recent(i, RECENT_LIMIT))) />
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctx.open_section("inquiry")
                    >
                        {icon("chevron-right")}
                        "All inquiries"
                    </Button>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn RecentInquiries(entries: Signal<Vec<InboxEntry>>) -> impl IntoView {
    view! {
        <div class="details-container">
            <h2 class="details-header">"Recent inquiries"</h2>
            {move || {
                let entries = entries.get();
                if entries.is_empty() {
                    return view! { <p>"No inquiries yet"</p> }.into_any();
                }
                view! {
                    <ul class="recent-list">
                        {entries.into_iter().map(|entry| {
                            let text = |k: &str| {
                                entry.entity.get(k).and_then(Value::as_str).unwrap_or("-").to_string()
                            };
                            let received = entry
                                .entity
                                .get("created_at")
                                .and_then(Value::as_str)
                                .map(format_datetime)
                                .unwrap_or_default();
                            view! {
                                <li class="recent-list__item">
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{entry.kind.label()}</Badge>
                                    <strong>{text("full_name")}</strong>
                                    <span>{text("email")}</span>
                                    {entry.course_name().map(|c| view! { <span>{c.to_string()}</span> })}
                                    <span class="recent-list__date">{received}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting(0), "Good Morning");
        assert_eq!(greeting(11), "Good Morning");
        assert_eq!(greeting(12), "Good Afternoon");
        assert_eq!(greeting(17), "Good Afternoon");
        assert_eq!(greeting(18), "Good Evening");
    }
}
