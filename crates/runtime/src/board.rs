//! Capabilities the runtime consumes from the board.
//!
//! Each one is a separate trait so tests can fabricate exactly the piece
//! they exercise. [`Board`] is the union a [`crate::Runtime`] needs.

/// Raw single-byte console write. Assumed never to fail.
pub trait Device {
    fn put_char(&mut self, c: u8);
}

/// Monotonic millisecond clock since an arbitrary epoch.
pub trait Clock {
    fn current_millis(&self) -> i64;
}

/// Where the static image ends and where the stack currently is.
pub trait MemoryMap {
    /// First address after the program's static data (`_end`).
    fn image_end(&self) -> usize;
    /// Live stack pointer. The stack grows downward toward the heap.
    fn stack_pointer(&self) -> usize;
}

/// Stops the processor. There is no OS to return to.
pub trait Halt {
    fn halt(&mut self) -> !;
}

pub trait Board: Device + Clock + MemoryMap + Halt {}

impl<T: Device + Clock + MemoryMap + Halt> Board for T {}

impl<D: Device + ?Sized> Device for &mut D {
    #[inline]
    fn put_char(&mut self, c: u8) {
        (**self).put_char(c)
    }
}

#[cfg(target_arch = "m68k")]
pub use self::services::ServicesBoard;

#[cfg(target_arch = "m68k")]
mod services {
    use super::{Clock, Device, Halt, MemoryMap};
    use core::ffi::c_char;

    unsafe extern "C" {
        fn outc(c: c_char);
        fn halt() -> !;
        #[link_name = "currentTime"]
        fn current_time() -> i64;
        /// Defined by the linker script.
        static _end: u8;
    }

    /// The board services linked into every image.
    #[derive(Copy, Clone, Debug, Default)]
    pub struct ServicesBoard;

    impl Device for ServicesBoard {
        #[inline]
        fn put_char(&mut self, c: u8) {
            unsafe { outc(c as c_char) }
        }
    }

    impl Clock for ServicesBoard {
        #[inline]
        fn current_millis(&self) -> i64 {
            unsafe { current_time() }
        }
    }

    impl MemoryMap for ServicesBoard {
        fn image_end(&self) -> usize {
            unsafe { core::ptr::addr_of!(_end) as usize }
        }

        #[inline(never)]
        fn stack_pointer(&self) -> usize {
            // address of a slot in this frame, one frame below the caller
            let marker = 0u8;
            core::hint::black_box(&marker) as *const u8 as usize
        }
    }

    impl Halt for ServicesBoard {
        fn halt(&mut self) -> ! {
            unsafe { halt() }
        }
    }
}
