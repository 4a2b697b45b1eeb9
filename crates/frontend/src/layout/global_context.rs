use crate::shared::page_state::{parse_query, query_string, AdminQuery, PageState};
use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

/// Section shown when the URL names none
pub const DEFAULT_SECTION: &str = "school";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// The URL query; every page derives its state from it
    pub query: RwSignal<AdminQuery>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(AdminQuery::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Active sidebar section
    pub fn section(&self) -> String {
        self.query
            .with(|q| q.section.clone())
            .unwrap_or_else(|| DEFAULT_SECTION.to_string())
    }

    /// Switch section and start from its list
    pub fn open_section(&self, section: &str) {
        log::debug!("open section '{}'", section);
        self.query.set(AdminQuery {
            section: Some(section.to_string()),
            ..Default::default()
        });
    }

    /// Move the current section's page to `state`
    pub fn navigate(&self, state: &PageState) {
        let section = self.section();
        self.query.set(state.to_query(&section));
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.query.set(parse_query(&search));

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_string(&this.query.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
