//! String inspection and transformation

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@label(.label)+` with no whitespace and no second `@`
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@(?:[^@\s.]+\.)+[^@\s.]+$").expect("email pattern is valid")
});

/// Whether `s` reads the same both ways, ignoring case and anything outside `[a-z0-9]`
///
/// The empty string (and any string with no alphanumerics) is a palindrome.
#[must_use]
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Whether `s` is a plausible email address
///
/// Requires exactly one `@`, a non-empty local part, and a domain made of
/// at least two non-empty dot-separated labels.
#[must_use]
pub fn validate_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// First character upper-cased, the rest lower-cased
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// [`capitalize`] over an optional input; `None` yields an empty string
#[must_use]
pub fn capitalize_opt(s: Option<&str>) -> String {
    s.map(capitalize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palindrome_empty_is_true() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("!!! ,,"));
    }

    #[test]
    fn palindrome_ignores_case_and_punctuation() {
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(is_palindrome("No 'x' in Nixon"));
        assert!(is_palindrome("12321"));
    }

    #[test]
    fn palindrome_rejects() {
        assert!(!is_palindrome("hello"));
        assert!(!is_palindrome("ab"));
    }

    #[test]
    fn email_accepts_plausible() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("first.last+tag@mail.example.co.uk"));
    }

    #[test]
    fn email_rejects_bare_at() {
        assert!(!validate_email("@"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@localhost"));
        assert!(!validate_email("a@b@c.com"));
        assert!(!validate_email("user @example.com"));
        assert!(!validate_email("user@.com"));
        assert!(!validate_email("user@example."));
        assert!(!validate_email("user@example..com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn capitalize_cases() {
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize("h"), "H");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan VITAL"), "Élan vital");
    }

    #[test]
    fn capitalize_absent() {
        assert_eq!(capitalize_opt(None), "");
        assert_eq!(capitalize_opt(Some("rust")), "Rust");
    }
}
