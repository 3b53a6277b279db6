//! Contact-form field validation.
//!
//! Rejections are phrased for the banner, first violation wins. Nothing here
//! blocks typing; the form only validates on submit.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum message body length the form accepts.
pub const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Check a submission, returning the first violated rule.
pub fn validate_submission(name: &str, email: &str, message: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Please enter your name.".to_string());
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address.".to_string());
    }
    if message.trim().chars().count() < MIN_MESSAGE_LEN {
        return Err(format!(
            "Message must be at least {MIN_MESSAGE_LEN} characters."
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plausible_emails() {
        assert!(is_valid_email("alex@rivera.dev"));
        assert!(is_valid_email("  first.last+tag@sub.example.org  "));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn first_violation_wins() {
        let err = validate_submission("", "not-an-email", "hi").expect_err("empty name");
        assert!(err.contains("name"));

        let err = validate_submission("Alex", "not-an-email", "hi").expect_err("bad email");
        assert!(err.contains("email"));

        let err = validate_submission("Alex", "alex@rivera.dev", "hi").expect_err("short message");
        assert!(err.contains("at least"));
    }

    #[test]
    fn whitespace_padding_does_not_rescue_a_short_message() {
        let padded = "hey       \n\n";
        assert!(validate_submission("Alex", "alex@rivera.dev", padded).is_err());
    }

    #[test]
    fn full_submission_passes() {
        assert!(
            validate_submission("Alex", "alex@rivera.dev", "I would like to talk about a project.")
                .is_ok()
        );
    }
}
