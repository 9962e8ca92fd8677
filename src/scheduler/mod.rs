//! Schedule reconciliation engine.
//!
//! Pure, synchronous functions over in-memory values supplied by the caller:
//! no I/O, no locks, no shared state between invocations. Callers obtain the
//! booking collection however they like (fetched, streamed, cached) and pass
//! a snapshot in; every call returns a new derived value.
//!
//! Three pieces:
//!
//! - [`slots`]: the fixed daily grid of bookable times
//! - [`matcher`]: does a booking occupy a given calendar date?
//! - [`composer`]: merge grid + bookings into a day schedule, and the
//!   conflict queries run before a booking is committed

pub mod composer;
pub mod matcher;
pub mod slots;

pub use composer::{
    compose_schedule, find_duplicates, find_recurring_conflicts, find_same_client_same_slot,
    CONFLICT_HORIZON_DAYS,
};
pub use matcher::occupies_date;
pub use slots::{generate_slots, SLOT_COUNT, SLOT_GRID_END, SLOT_GRID_START, SLOT_STEP_MINUTES};

#[cfg(test)]
mod tests;
