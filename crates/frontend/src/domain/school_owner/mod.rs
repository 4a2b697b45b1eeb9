//! Pages available to a signed-in school owner

pub mod model;
pub mod ui;

/// Section shown after sign-in
pub const OWNER_HOME: &str = "dashboard";

/// Sections a school owner may open
pub fn is_owner_section(section: &str) -> bool {
    matches!(section, OWNER_HOME | "own_profile" | "inquiry")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_sections() {
        assert!(is_owner_section("dashboard"));
        assert!(is_owner_section("own_profile"));
        assert!(is_owner_section("inquiry"));
        assert!(!is_owner_section("school"));
        assert!(!is_owner_section(""));
    }
}
