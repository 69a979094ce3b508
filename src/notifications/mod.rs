//! Notification wire contract.
//!
//! Consumed by UI components outside this crate; specified here as a
//! data contract only. Records are tagged by event type and carry
//! exactly one populated payload field matching that type.

pub mod types;

pub use types::{
    NotificationError, NotificationRecord, NotificationStatusUpdate, NotificationType,
    NotificationsQuery,
};
