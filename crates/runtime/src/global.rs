//! The process-wide runtime on the 68k target.
//!
//! One [`Runtime`] over [`ServicesBoard`], reachable only through
//! [`with_runtime`], which masks interrupts for the duration.
use core::alloc::{GlobalAlloc, Layout};
use core::fmt::{self, Write};

use spin::Mutex;

use crate::board::{Device, ServicesBoard};
use crate::config::Config;
use crate::context::Runtime;
use crate::interrupt;
use crate::logging::{self, ConsoleLogger};

static RUNTIME: Mutex<Runtime<ServicesBoard>> = Mutex::new(Runtime::new(ServicesBoard));

static LOGGER: ConsoleLogger = ConsoleLogger::new(emit_raw, Config::LOG_LEVEL);

pub fn with_runtime<R>(f: impl FnOnce(&mut Runtime<ServicesBoard>) -> R) -> R {
    interrupt::free(|| f(&mut *RUNTIME.lock()))
}

/// Called once by [`crate::entrypoint!`] before the program body.
pub fn init() {
    // a second install only happens if a program calls init itself
    let _ = logging::init(&LOGGER);
}

pub fn print(args: fmt::Arguments) {
    with_runtime(|rt| {
        let _ = rt.console().write_fmt(args);
    });
}

/// Interrupts stay masked: there is nothing to come back to.
pub fn exit(status: i32) -> ! {
    interrupt::disable();
    RUNTIME.lock().exit(status)
}

/// Straight to the device. Log records are emitted while the runtime
/// lock is held, so this path must not take it.
fn emit_raw(byte: u8) {
    interrupt::free(|| ServicesBoard.put_char(byte));
}

/// Rust heap on top of the arena. Memory is never given back.
pub struct ArenaAllocator;

unsafe impl GlobalAlloc for ArenaAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        with_runtime(|rt| rt.allocate(layout))
    }

    unsafe fn dealloc(&self, _ptr: *mut u8, _layout: Layout) {}
}

/// Print to the console using the format string and arguments.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::global::print(format_args!($($arg)*))
    };
}

/// Print a line to the console using the format string and arguments.
#[macro_export]
macro_rules! println {
    () => {
        $crate::global::print(format_args!("\n"))
    };
    ($($arg:tt)*) => {
        $crate::global::print(format_args!("{}\n", format_args!($($arg)*)))
    };
}
