//! Domain entities

mod delivery_receipt;
mod travel_plan;

pub use delivery_receipt::DeliveryReceipt;
pub use travel_plan::TravelPlan;
