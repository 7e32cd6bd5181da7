//! Delivery receipt entity
//!
//! Typed outcome of one accepted email send. The provider only confirms
//! acceptance (200/201/202), not delivery; this entity records exactly that.
//! Human-readable outcome strings are rendered at the presentation boundary,
//! never here.

use serde::{Deserialize, Serialize};

use crate::value_objects::RecipientList;

/// Proof that the email provider accepted a send request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    status: u16,
    recipients: RecipientList,
}

impl DeliveryReceipt {
    /// Create a receipt from the provider's accepted status code
    pub fn new(status: u16, recipients: RecipientList) -> Self {
        Self { status, recipients }
    }

    /// HTTP status the provider answered with (one of 200, 201, 202)
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The recipients the send was addressed to
    pub fn recipients(&self) -> &RecipientList {
        &self.recipients
    }
}
