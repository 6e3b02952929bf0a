// Input validation rules. All functions here are pure.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `local@domain.tld` with no `@` or whitespace in any part. Not RFC 5322.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@ \t\r\n]+@[^@ \t\r\n]+\.[^@ \t\r\n]+$").unwrap());

/// Returns `true` when `email` has the simple `local@domain.tld` shape.
///
/// The domain part may itself contain dots (`a@mail.example.com`); the
/// regex only requires that at least one dot follows the `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns `true` for empty or whitespace-only text answers.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Why a password/confirmation pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    Empty,
    Mismatch,
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordError::Empty => write!(f, "Password is required."),
            PasswordError::Mismatch => write!(f, "Passwords do not match, try again."),
        }
    }
}

impl std::error::Error for PasswordError {}

/// Accept a password only if it is non-empty and the confirmation is
/// exactly equal. No trimming: surrounding spaces are part of the secret.
pub fn check_password(password: &str, confirmation: &str) -> Result<(), PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Empty);
    }
    if password != confirmation {
        return Err(PasswordError::Mismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        // non-ASCII is allowed as long as there is no whitespace or extra '@'
        assert!(is_valid_email("élodie@exemple.fr"));
    }

    #[test]
    fn generated_local_and_domain_parts_are_accepted() {
        for s in ["x", "user", "a-b_c", "12345", "ünï"] {
            let email = format!("{s}@{s}.tld");
            assert!(is_valid_email(&email), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@example."));
    }

    #[test]
    fn rejects_extra_at_sign() {
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("ada@ex@ample.com"));
    }

    #[test]
    fn rejects_any_whitespace() {
        for email in [
            "ada lovelace@example.com",
            "ada@exa mple.com",
            "ada@example.c om",
            "ada\t@example.com",
            "ada@example.com\n",
            "ada@example.com\r",
            " ada@example.com",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(" Ada "));
    }

    #[test]
    fn password_rules() {
        assert_eq!(check_password("", ""), Err(PasswordError::Empty));
        assert_eq!(check_password("", "x"), Err(PasswordError::Empty));
        assert_eq!(check_password("secret", "Secret"), Err(PasswordError::Mismatch));
        assert_eq!(check_password("secret", "secret "), Err(PasswordError::Mismatch));
        assert_eq!(check_password("secret123", "secret123"), Ok(()));
        assert_eq!(check_password(" ", " "), Ok(()));
    }
}
