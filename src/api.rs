//! Public API surface for the calendar backend.
//!
//! This file consolidates the identifier newtypes and re-exports the domain
//! types consumed by the HTTP layer and by embedding applications.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::booking::Booking;
pub use crate::models::booking::BookingStatus;
pub use crate::models::booking::CallType;
pub use crate::models::booking::Client;
pub use crate::models::booking::ClientStatus;
pub use crate::models::booking::Occurrence;
pub use crate::models::schedule::DaySchedule;
pub use crate::models::schedule::TimeSlot;
pub use crate::models::time::SlotTime;

use crate::define_string_id;

// Store-assigned document identifiers. All three are opaque strings: the
// external store mints them on insert and the core only ever compares them.

define_string_id!(BookingId);
define_string_id!(ClientId);
define_string_id!(CoachId);
