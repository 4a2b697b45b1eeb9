//! Validation rules for metadata fields

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Shape constraint checked on non-empty text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPattern {
    /// Lowercase letters, digits and hyphens
    Slug,
    /// Absolute http(s) link
    HttpUrl,
    Email,
}

static SLUG_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").ok());

static URL_RE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*(?::\d{1,5})?(?:[/?#]\S*)?$").ok()
});

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$").ok()
});

impl TextPattern {
    fn regex(&self) -> Option<&'static Regex> {
        match self {
            Self::Slug => SLUG_RE.as_ref(),
            Self::HttpUrl => URL_RE.as_ref(),
            Self::Email => EMAIL_RE.as_ref(),
        }
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex().is_some_and(|re| re.is_match(value))
    }

    fn default_error(&self, field_label: &str) -> String {
        match self {
            Self::Slug => format!(
                "{} can only contain lowercase letters, numbers, and hyphens",
                field_label
            ),
            Self::HttpUrl => format!("{} must be a valid URL", field_label),
            Self::Email => format!("{} must be a valid email address", field_label),
        }
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    /// Required only while creating (uploads that must exist on first save)
    pub required_on_create: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<TextPattern>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            required_on_create: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            pattern: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn required_on_create() -> Self {
        Self {
            required_on_create: true,
            ..Self::none()
        }
    }

    pub const fn max_length(max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..Self::none()
        }
    }

    pub const fn pattern(pattern: TextPattern) -> Self {
        Self {
            pattern: Some(pattern),
            ..Self::none()
        }
    }

    pub const fn range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::none()
        }
    }

    /// Message reported for a missing required value
    pub fn missing_message(&self, field_label: &str) -> String {
        match self.custom_error {
            Some(msg) => msg.to_string(),
            None => format!("{} is required", field_label),
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(self.missing_message(field_label));
        }
        if value.is_empty() {
            return Ok(());
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} must be at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "{} must be {} characters or less",
                    field_label, max
                ));
            }
        }

        if let Some(pattern) = self.pattern {
            if !pattern.is_match(value) {
                return Err(pattern.default_error(field_label));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

/// Rule spanning more than one field, evaluated after the per-field rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossFieldRule {
    /// `later` must be strictly after `earlier` (both dates); error lands on `later`
    DateAfter {
        earlier: &'static str,
        later: &'static str,
        message: &'static str,
    },
    /// `later` must not be before `earlier`; error lands on `error_field`
    DateNotBefore {
        earlier: &'static str,
        later: &'static str,
        error_field: &'static str,
        message: &'static str,
    },
    /// At least one of `fields` must be filled; error lands on `error_key`
    AtLeastOneOf {
        fields: &'static [&'static str],
        error_key: &'static str,
        message: &'static str,
    },
    /// `field` is required while `when_field` holds `equals`
    RequiredWhen {
        field: &'static str,
        when_field: &'static str,
        equals: &'static str,
        message: &'static str,
    },
}

impl CrossFieldRule {
    /// Evaluate the rule. `value` yields the text form of a field, empty when unset.
    /// Returns the error key and message on violation.
    pub fn check<F>(&self, value: F) -> Option<(&'static str, &'static str)>
    where
        F: Fn(&str) -> String,
    {
        match *self {
            Self::DateAfter {
                earlier,
                later,
                message,
            } => match (parse_date(&value(earlier)), parse_date(&value(later))) {
                (Some(from), Some(until)) if until <= from => Some((later, message)),
                _ => None,
            },
            Self::DateNotBefore {
                earlier,
                later,
                error_field,
                message,
            } => match (parse_date(&value(earlier)), parse_date(&value(later))) {
                (Some(first), Some(second)) if second < first => Some((error_field, message)),
                _ => None,
            },
            Self::AtLeastOneOf {
                fields,
                error_key,
                message,
            } => {
                let any = fields.iter().any(|f| !value(f).trim().is_empty());
                (!any).then_some((error_key, message))
            }
            Self::RequiredWhen {
                field,
                when_field,
                equals,
                message,
            } => {
                let active = value(when_field) == equals;
                (active && value(field).trim().is_empty()).then_some((field, message))
            }
        }
    }
}

/// Dates travel as `YYYY-MM-DD`
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("  ", "Title"),
            Err("Title is required".to_string())
        );
        assert!(rules.validate_string("Fall Intake", "Title").is_ok());
    }

    #[test]
    fn test_length_cap_counts_chars() {
        let rules = ValidationRules::max_length(3);
        assert!(rules.validate_string("नेपा", "Meta").is_err());
        assert!(rules.validate_string("नेप", "Meta").is_ok());
        assert!(rules.validate_string("", "Meta").is_ok());
    }

    #[test]
    fn test_slug_pattern() {
        let rules = ValidationRules::pattern(TextPattern::Slug);
        assert!(rules.validate_string("bachelor-of-science-2", "Slug").is_ok());
        assert_eq!(
            rules.validate_string("Bad Slug", "Slug"),
            Err("Slug can only contain lowercase letters, numbers, and hyphens".to_string())
        );
    }

    #[test]
    fn test_url_and_email_patterns() {
        assert!(TextPattern::HttpUrl.is_match("https://example.edu.np"));
        assert!(!TextPattern::HttpUrl.is_match("example.edu.np"));
        assert!(!TextPattern::HttpUrl.is_match("https://"));
        assert!(TextPattern::Email.is_match("info@school.edu.np"));
        assert!(!TextPattern::Email.is_match("info@school"));
    }

    #[test]
    fn test_patterns_compile() {
        for pattern in [TextPattern::Slug, TextPattern::HttpUrl, TextPattern::Email] {
            assert!(pattern.regex().is_some(), "{:?}", pattern);
        }
    }

    #[test]
    fn test_malformed_links_and_addresses_rejected() {
        for bad in ["a@@b.c", "x@y@z.com", "a@.", "a@b.", "a b@c.de", "@school.edu"] {
            assert!(!TextPattern::Email.is_match(bad), "{}", bad);
        }
        for bad in ["http://.", "http://%%%", "https://a..b", "http:// x.com", "ftp://x.com"] {
            assert!(!TextPattern::HttpUrl.is_match(bad), "{}", bad);
        }
        assert!(TextPattern::HttpUrl.is_match("http://localhost:8000/media/a.jpg?v=2"));
        assert!(TextPattern::HttpUrl.is_match("https://www.facebook.com/everest-college"));
        assert!(TextPattern::Email.is_match("first.last+admissions@everest-college.edu.np"));
        assert!(!TextPattern::Slug.is_match("bachelor_of_science"));
    }

    #[test]
    fn test_number_range() {
        let rules = ValidationRules::range(1.0, 999.0);
        assert!(rules.validate_number(0.0, "Priority").is_err());
        assert!(rules.validate_number(999.0, "Priority").is_ok());
    }

    #[test]
    fn test_date_after_is_strict() {
        let rule = CrossFieldRule::DateAfter {
            earlier: "active_from",
            later: "active_until",
            message: "Active until date must be after active from date",
        };
        let values = |from: &'static str, until: &'static str| {
            move |name: &str| match name {
                "active_from" => from.to_string(),
                _ => until.to_string(),
            }
        };
        assert_eq!(
            rule.check(values("2025-06-01", "2025-05-01")),
            Some(("active_until", "Active until date must be after active from date"))
        );
        assert!(rule.check(values("2025-06-01", "2025-06-01")).is_some());
        assert_eq!(rule.check(values("2025-06-01", "2025-06-02")), None);
        assert_eq!(rule.check(values("", "2025-06-02")), None);
    }

    #[test]
    fn test_at_least_one_and_required_when() {
        let organizer = CrossFieldRule::AtLeastOneOf {
            fields: &["organizer_school", "organizer_custom"],
            error_key: "organizer",
            message: "Please specify at least one organizer",
        };
        assert_eq!(
            organizer.check(|_| String::new()).map(|(key, _)| key),
            Some("organizer")
        );
        assert_eq!(organizer.check(|_| "3".to_string()), None);

        let price = CrossFieldRule::RequiredWhen {
            field: "registration_price",
            when_field: "registration_type",
            equals: "paid",
            message: "Registration price is required for paid events",
        };
        let paid = |name: &str| match name {
            "registration_type" => "paid".to_string(),
            _ => String::new(),
        };
        assert_eq!(price.check(paid).map(|(key, _)| key), Some("registration_price"));
        assert_eq!(price.check(|_| "free".to_string()), None);
    }
}
