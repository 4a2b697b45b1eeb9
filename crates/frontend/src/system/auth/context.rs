use super::storage;
use crate::shared::dropdowns::DROPDOWN_CACHE;
use leptos::prelude::*;

/// Which dashboard the signed-in account may use
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Admin,
    School,
}

impl Role {
    /// Unknown or missing roles are treated as admin
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("school") => Self::School,
            _ => Self::Admin,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub role: Role,
}

impl AuthState {
    /// Session as left in localStorage by the sign-in page
    pub fn from_storage() -> Self {
        Self {
            access_token: storage::get_access_token(),
            role: Role::parse(storage::get_role().as_deref()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::from_storage());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    (expect_context(), expect_context())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    DROPDOWN_CACHE.clear();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse(Some("school")), Role::School);
        assert_eq!(Role::parse(Some("admin")), Role::Admin);
        assert_eq!(Role::parse(None), Role::Admin);
    }
}
