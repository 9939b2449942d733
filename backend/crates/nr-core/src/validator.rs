//! Syntax rules for nurse credentials.
//!
//! These are deliberately simple pattern checks, equivalent to
//! `^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$` for emails and a
//! four-class, eight-character rule for passwords. They are not RFC 5322
//! or NIST validators and must not be tightened or loosened.

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The only characters that satisfy the "special character" class
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "@$!%*?&";

/// Pure credential validators
pub struct Validator;

impl Validator {
    /// `local-part @ domain-labels . tld`, tld being two or more ASCII letters.
    pub fn validate_email(value: &str) -> bool {
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };

        if local.is_empty() || !local.chars().all(Self::is_local_part_char) {
            return false;
        }

        // The tld cannot contain a dot, so only the last dot can separate it
        let Some((labels, tld)) = domain.rsplit_once('.') else {
            return false;
        };

        !labels.is_empty()
            && labels.chars().all(Self::is_domain_char)
            && tld.len() >= 2
            && tld.chars().all(|c| c.is_ascii_alphabetic())
    }

    /// At least eight characters with a lowercase letter, an uppercase
    /// letter, a digit and one of [`PASSWORD_SPECIAL_CHARACTERS`].
    pub fn validate_password(value: &str) -> bool {
        if value.chars().count() < MIN_PASSWORD_LENGTH {
            return false;
        }

        let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = value.chars().any(|c| c.is_ascii_digit());
        let has_special = value
            .chars()
            .any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c));

        has_lower && has_upper && has_digit && has_special
    }

    /// Display names only need to be present
    pub fn validate_name(value: &str) -> bool {
        !value.trim().is_empty()
    }

    fn is_local_part_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-')
    }

    fn is_domain_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '-')
    }
}
