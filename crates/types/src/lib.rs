#![no_std]
//! Shared vocabulary for the 68k runtime shim.
//!
//! Everything here is plain data with a fixed layout so the runtime, the
//! demo programs and C callers linked against newlib agree on it.

pub mod radix;
pub use radix::{Radix, CONVERSION_BUFFER_LEN, DIGITS};

pub mod error;
pub use error::{Errno, FatalError};

pub mod time;
pub use time::TimeVal;

pub mod stat;
pub use stat::{FileStat, S_IFCHR, S_IFMT};
