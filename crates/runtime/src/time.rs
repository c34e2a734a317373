use types::TimeVal;

use crate::board::Clock;

/// Reads the board clock and splits it into seconds and microseconds.
pub fn current_time_split<C: Clock + ?Sized>(clock: &C) -> TimeVal {
    TimeVal::from_millis(clock.current_millis())
}
