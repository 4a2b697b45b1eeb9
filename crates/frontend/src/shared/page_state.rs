//! List/table page state machine, addressed entirely by the URL query.
//!
//! `?section=admission&action=edit&slug=fall-intake&page=2`

use contracts::domain::common::EntityKey;
use contracts::shared::metadata::EntityKeyKind;
use serde::{Deserialize, Serialize};

/// Query parameters owned by the admin pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminView {
    List,
    Create,
    Edit(EntityKey),
    View(EntityKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub view: AdminView,
    /// 1-based list page, kept while a form is open
    pub page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            view: AdminView::List,
            page: 1,
        }
    }
}

impl PageState {
    /// Unknown actions, and edit/view without a key, fall back to the list
    pub fn from_query(kind: EntityKeyKind, query: &AdminQuery) -> Self {
        let raw_key = match kind {
            EntityKeyKind::Slug => query.slug.as_deref(),
            EntityKeyKind::Id => query.id.as_deref(),
        };
        let key = raw_key
            .filter(|k| !k.is_empty())
            .map(|k| EntityKey::new(kind, k));

        let view = match (query.action.as_deref(), key) {
            (Some("create"), _) => AdminView::Create,
            (Some("edit"), Some(key)) => AdminView::Edit(key),
            (Some("view"), Some(key)) => AdminView::View(key),
            _ => AdminView::List,
        };
        Self {
            view,
            page: query.page.filter(|p| *p >= 1).unwrap_or(1),
        }
    }

    pub fn to_query(&self, section: &str) -> AdminQuery {
        let mut query = AdminQuery {
            section: Some(section.to_string()),
            action: self.action().map(str::to_string),
            page: (self.page > 1).then_some(self.page),
            ..Default::default()
        };
        if let Some(key) = self.key() {
            let value = Some(key.as_str().to_string());
            match key.kind() {
                EntityKeyKind::Slug => query.slug = value,
                EntityKeyKind::Id => query.id = value,
            }
        }
        query
    }

    pub fn action(&self) -> Option<&'static str> {
        match self.view {
            AdminView::List => None,
            AdminView::Create => Some("create"),
            AdminView::Edit(_) => Some("edit"),
            AdminView::View(_) => Some("view"),
        }
    }

    pub fn key(&self) -> Option<&EntityKey> {
        match &self.view {
            AdminView::Edit(key) | AdminView::View(key) => Some(key),
            AdminView::List | AdminView::Create => None,
        }
    }

    fn with_view(&self, view: AdminView) -> Self {
        Self {
            view,
            page: self.page,
        }
    }

    pub fn open_create(&self) -> Self {
        self.with_view(AdminView::Create)
    }

    pub fn open_edit(&self, key: EntityKey) -> Self {
        self.with_view(AdminView::Edit(key))
    }

    pub fn open_view(&self, key: EntityKey) -> Self {
        self.with_view(AdminView::View(key))
    }

    /// Cancel, successful save and failed single-entity fetch all land here
    pub fn back_to_list(&self) -> Self {
        self.with_view(AdminView::List)
    }

    pub fn goto_page(&self, page: usize) -> Self {
        Self {
            view: AdminView::List,
            page: page.max(1),
        }
    }
}

/// Parse `location.search`; malformed input yields the empty query
pub fn parse_query(search: &str) -> AdminQuery {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

pub fn query_string(query: &AdminQuery) -> String {
    format!("?{}", serde_qs::to_string(query).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_round_trip() {
        let query = parse_query("?section=admission&action=edit&slug=fall-intake&page=2");
        let state = PageState::from_query(EntityKeyKind::Slug, &query);
        assert_eq!(state.view, AdminView::Edit(EntityKey::slug("fall-intake")));
        assert_eq!(state.page, 2);
        assert_eq!(state.to_query("admission"), query);
    }

    #[test]
    fn test_key_parameter_follows_key_kind() {
        let query = parse_query("section=advertisement&action=view&slug=ignored&id=12");
        let state = PageState::from_query(EntityKeyKind::Id, &query);
        assert_eq!(state.view, AdminView::View(EntityKey::id("12")));

        let back = state.to_query("advertisement");
        assert_eq!(back.id.as_deref(), Some("12"));
        assert_eq!(back.slug, None);
        assert_eq!(
            query_string(&back),
            "?section=advertisement&action=view&id=12"
        );
    }

    #[test]
    fn test_edit_without_key_falls_back_to_list() {
        let query = parse_query("action=edit");
        let state = PageState::from_query(EntityKeyKind::Slug, &query);
        assert_eq!(state, PageState::default());

        let garbage = parse_query("page=zero&action=delete");
        assert_eq!(PageState::from_query(EntityKeyKind::Slug, &garbage).view, AdminView::List);
    }

    #[test]
    fn test_transitions_keep_list_page() {
        let list = PageState::default().goto_page(3);
        let create = list.open_create();
        assert_eq!(create.action(), Some("create"));
        assert_eq!(create.key(), None);

        let back = create.back_to_list();
        assert_eq!(back, list);
        assert_eq!(list.to_query("level").page, Some(3));
        assert_eq!(PageState::default().to_query("level").page, None);
    }
}
