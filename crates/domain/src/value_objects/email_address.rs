//! Email address value object with validation
//!
//! Provides a syntactically validated email address. The check is a
//! deliberately lightweight gate: one-or-more of `[A-Za-z0-9._%+-]`, an `@`,
//! one-or-more of `[A-Za-z0-9.-]`, a dot, and at least two trailing letters.
//! It says nothing about deliverability and is not an RFC 5322 parser.
//!
//! # Examples
//!
//! ```
//! use domain::EmailAddress;
//!
//! let email = EmailAddress::new("user@example.com").unwrap();
//! assert_eq!(email.as_str(), "user@example.com");
//!
//! // Surrounding whitespace is trimmed, case is preserved as given
//! let email = EmailAddress::new("  User@Example.COM ").unwrap();
//! assert_eq!(email.as_str(), "User@Example.COM");
//!
//! assert!(EmailAddress::new("not-an-email").is_err());
//! ```

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("address pattern is a valid regex")
});

/// A syntactically validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress {
    value: String,
}

impl EmailAddress {
    /// Create a new email address, validating the format
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidEmailAddress`] if the trimmed input
    /// does not match the address pattern.
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let value = email.into().trim().to_string();

        if !ADDRESS_PATTERN.is_match(&value) {
            return Err(DomainError::InvalidEmailAddress(value));
        }

        Ok(Self { value })
    }

    /// Get the email address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Strategy for generating valid email local parts
    fn valid_local_part() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9][a-zA-Z0-9._%+-]{0,15}"
    }

    /// Strategy for generating valid email domains
    fn valid_domain() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,10}\\.[a-z]{2,4}"
    }

    proptest! {
        #[test]
        fn valid_emails_are_accepted(
            local in valid_local_part(),
            domain in valid_domain()
        ) {
            let email_str = format!("{local}@{domain}");
            let email = EmailAddress::new(&email_str).unwrap();
            prop_assert_eq!(email.as_str(), email_str.as_str());
        }

        #[test]
        fn strings_without_at_are_rejected(s in "[a-zA-Z0-9.]+") {
            prop_assume!(!s.contains('@'));
            prop_assert!(EmailAddress::new(&s).is_err());
        }

        #[test]
        fn whitespace_never_survives_parsing(
            ws_before in "\\s{0,3}",
            local in "[a-z]{3,8}",
            domain in "[a-z]{3,8}\\.[a-z]{2,3}",
            ws_after in "\\s{0,3}"
        ) {
            let email_str = format!("{ws_before}{local}@{domain}{ws_after}");
            let email = EmailAddress::new(&email_str).unwrap();
            prop_assert!(!email.as_str().starts_with(char::is_whitespace));
            prop_assert!(!email.as_str().ends_with(char::is_whitespace));
        }

        #[test]
        fn email_roundtrips_through_display(
            local in valid_local_part(),
            domain in valid_domain()
        ) {
            let email_str = format!("{local}@{domain}");
            if let Ok(email) = EmailAddress::new(&email_str) {
                let reparsed = EmailAddress::new(email.to_string()).unwrap();
                prop_assert_eq!(email, reparsed);
            }
        }
    }
}
