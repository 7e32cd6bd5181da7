//! Value objects

mod email_address;
mod recipient_list;

pub use email_address::EmailAddress;
pub use recipient_list::RecipientList;
