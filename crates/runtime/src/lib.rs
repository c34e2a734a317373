#![cfg_attr(target_arch = "m68k", no_std)]
#![cfg_attr(target_arch = "m68k", feature(asm_experimental_arch))]
//! Runtime support for programs on a bare-metal 68k board.
//!
//! Provides what newlib and Rust programs expect from an operating system
//! when there is none:
//! - a heap arena that grows from the end of the image toward the stack,
//! - console output through the board's single-character write,
//! - wall-clock time from the board's millisecond counter,
//! - process exit as a processor halt,
//! - integer <-> text conversion in radix 2..=16.
//!
//! On non-68k hosts the crate builds against [`host::HostBoard`] so the
//! same logic can be tested without hardware.

pub use types;

pub mod board;
pub mod codec;
pub mod config;
pub mod console;
pub mod context;
pub mod heap;
pub mod interrupt;
pub mod logging;
pub mod syscalls;
pub mod time;

#[macro_use]
pub mod entrypoint;

#[cfg(target_arch = "m68k")]
pub mod global;

#[cfg(target_arch = "m68k")]
pub mod ffi;

#[cfg(target_arch = "m68k")]
mod panic;

#[cfg(not(target_arch = "m68k"))]
pub mod host;

pub use board::{Board, Clock, Device, Halt, MemoryMap};
pub use config::Config;
pub use console::Console;
pub use context::Runtime;
pub use heap::HeapArena;
