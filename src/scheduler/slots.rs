//! The fixed daily slot grid.

use crate::models::time::SlotTime;

/// First bookable slot of the day.
pub const SLOT_GRID_START: SlotTime = SlotTime {
    hour: 10,
    minute: 30,
};

/// Last bookable slot of the day (inclusive).
pub const SLOT_GRID_END: SlotTime = SlotTime {
    hour: 19,
    minute: 30,
};

/// Spacing between consecutive slots.
pub const SLOT_STEP_MINUTES: u16 = 20;

/// Number of slots the grid yields under the current parameters.
pub const SLOT_COUNT: usize = 28;

/// Generate the day's ordered slot grid.
///
/// Deterministic and input-free: every day has the same grid, from
/// [`SLOT_GRID_START`] to [`SLOT_GRID_END`] inclusive in
/// [`SLOT_STEP_MINUTES`] steps.
pub fn generate_slots() -> Vec<SlotTime> {
    let mut slots = Vec::with_capacity(SLOT_COUNT);
    let end = SLOT_GRID_END.minutes_from_midnight();

    let mut minutes = SLOT_GRID_START.minutes_from_midnight();
    while minutes <= end {
        slots.push(SlotTime {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        });
        minutes += SLOT_STEP_MINUTES;
    }

    slots
}

/// Whether `time` is one of the grid's bookable slots.
pub fn is_grid_slot(time: SlotTime) -> bool {
    let minutes = time.minutes_from_midnight();
    let start = SLOT_GRID_START.minutes_from_midnight();
    let end = SLOT_GRID_END.minutes_from_midnight();

    minutes >= start && minutes <= end && (minutes - start) % SLOT_STEP_MINUTES == 0
}
