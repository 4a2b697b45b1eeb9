/// URL slug from free text: lower-case, only `[a-z0-9-]`, single hyphens, none at the ends.
pub fn slugify(source: &str) -> String {
    let mut slug = String::with_capacity(source.len());
    let mut pending_hyphen = false;

    for c in source.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_hyphen = true;
        }
        // anything else is dropped without splitting words
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("CS & Engineering  101!"), "cs-engineering-101");
        assert_eq!(slugify("  --Bachelor of Science-- "), "bachelor-of-science");
        assert_eq!(slugify("Don't Stop"), "dont-stop");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }
}
