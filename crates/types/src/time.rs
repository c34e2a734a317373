/// Seconds and microseconds since the board clock's epoch.
///
/// Laid out like newlib's `struct timeval` on m68k so `gettimeofday` can
/// write it through the caller's pointer verbatim.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeVal {
    pub tv_sec: i64,
    pub tv_usec: i32,
}

impl TimeVal {
    pub const MILLIS_PER_SEC: i64 = 1000;
    pub const MICROS_PER_MILLI: i64 = 1000;

    /// Splits a millisecond count. Division truncates toward zero.
    pub const fn from_millis(millis: i64) -> Self {
        Self {
            tv_sec: millis / Self::MILLIS_PER_SEC,
            tv_usec: ((millis % Self::MILLIS_PER_SEC) * Self::MICROS_PER_MILLI) as i32,
        }
    }
}
