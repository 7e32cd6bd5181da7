//! Recipient list parsed from comma-separated user input
//!
//! Splits on commas, trims each fragment, and drops empty fragments before
//! validating. Ordering and duplicates are preserved as given. When any
//! fragment fails the address check, parsing fails with the complete set of
//! offending fragments so a caller can surface all problems at once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::EmailAddress};

/// An ordered list of validated recipient addresses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipientList {
    recipients: Vec<EmailAddress>,
}

impl RecipientList {
    /// Parse a comma-separated string of addresses
    ///
    /// An input of only commas and whitespace yields an EMPTY list; callers
    /// that require at least one recipient must reject that case themselves.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRecipients`] carrying every fragment
    /// that failed validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::RecipientList;
    ///
    /// let list = RecipientList::parse("a@b.com, , c@d.co").unwrap();
    /// assert_eq!(list.joined(), "a@b.com, c@d.co");
    ///
    /// let err = RecipientList::parse("a@b.com, not-an-email").unwrap_err();
    /// assert!(err.to_string().contains("not-an-email"));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let mut recipients = Vec::new();
        let mut invalid = Vec::new();

        for fragment in raw.split(',') {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }
            match EmailAddress::new(fragment) {
                Ok(address) => recipients.push(address),
                Err(_) => invalid.push(fragment.to_string()),
            }
        }

        if !invalid.is_empty() {
            return Err(DomainError::InvalidRecipients(invalid));
        }

        Ok(Self { recipients })
    }

    /// Build a list from already-validated addresses
    pub fn from_addresses(recipients: Vec<EmailAddress>) -> Self {
        Self { recipients }
    }

    /// Whether the list holds no recipients
    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }

    /// Number of recipients
    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    /// Iterate over the recipients in order
    pub fn iter(&self) -> std::slice::Iter<'_, EmailAddress> {
        self.recipients.iter()
    }

    /// The recipients as a slice, in the order given
    pub fn as_slice(&self) -> &[EmailAddress] {
        &self.recipients
    }

    /// Render the list as `"a@b.com, c@d.co"` for display
    pub fn joined(&self) -> String {
        self.recipients
            .iter()
            .map(EmailAddress::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RecipientList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}

impl<'a> IntoIterator for &'a RecipientList {
    type Item = &'a EmailAddress;
    type IntoIter = std::slice::Iter<'a, EmailAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipients.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiple_addresses_in_order() {
        let list = RecipientList::parse("a@b.com, c@d.co").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0].as_str(), "a@b.com");
        assert_eq!(list.as_slice()[1].as_str(), "c@d.co");
    }

    #[test]
    fn empty_fragments_are_dropped() {
        let list = RecipientList::parse("a@b.com, , c@d.co").unwrap();
        assert_eq!(list.joined(), "a@b.com, c@d.co");
    }

    #[test]
    fn only_commas_and_whitespace_yield_empty_list() {
        let list = RecipientList::parse(" , ,,  ").unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let list = RecipientList::parse("").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn duplicates_are_preserved() {
        let list = RecipientList::parse("a@b.com, a@b.com").unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn all_invalid_fragments_are_reported() {
        let err = RecipientList::parse("good@b.com, not-an-email, @bad, also@ok.co").unwrap_err();
        let DomainError::InvalidRecipients(invalid) = err else {
            unreachable!("expected InvalidRecipients");
        };
        assert_eq!(invalid, vec!["not-an-email".to_string(), "@bad".to_string()]);
    }

    #[test]
    fn single_invalid_fragment_fails_the_whole_parse() {
        assert!(RecipientList::parse("not-an-email").is_err());
    }

    #[test]
    fn fragments_are_trimmed_before_validation() {
        let list = RecipientList::parse("  a@b.com  ,c@d.co   ").unwrap();
        assert_eq!(list.joined(), "a@b.com, c@d.co");
    }

    #[test]
    fn display_matches_joined() {
        let list = RecipientList::parse("a@b.com, c@d.co").unwrap();
        assert_eq!(list.to_string(), list.joined());
    }

    #[test]
    fn iterates_in_order() {
        let list = RecipientList::parse("a@b.com, c@d.co").unwrap();
        let collected: Vec<&str> = list.iter().map(EmailAddress::as_str).collect();
        assert_eq!(collected, vec!["a@b.com", "c@d.co"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let list = RecipientList::parse("a@b.com").unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[\"a@b.com\"]");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn valid_address() -> impl Strategy<Value = String> {
        "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,3}"
    }

    proptest! {
        #[test]
        fn joined_roundtrips_through_parse(addresses in prop::collection::vec(valid_address(), 1..5)) {
            let raw = addresses.join(", ");
            let list = RecipientList::parse(&raw).unwrap();
            prop_assert_eq!(list.joined(), raw);
        }

        #[test]
        fn parse_never_returns_more_recipients_than_fragments(raw in ".{0,64}") {
            if let Ok(list) = RecipientList::parse(&raw) {
                prop_assert!(list.len() <= raw.split(',').count());
            }
        }

        #[test]
        fn extra_commas_do_not_change_the_result(addresses in prop::collection::vec(valid_address(), 0..4)) {
            let plain = addresses.join(",");
            let noisy = format!(" ,{}, ", addresses.join(" , ,"));
            let a = RecipientList::parse(&plain).unwrap();
            let b = RecipientList::parse(&noisy).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
