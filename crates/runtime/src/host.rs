//! Simulated board for running the runtime on a development machine.
//!
//! State lives behind `Rc` so a test can keep a clone of the board to
//! inspect output and move the stack pointer while a [`Runtime`] owns the
//! original.
//!
//! [`Runtime`]: crate::Runtime
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use crate::board::{Clock, Device, Halt, MemoryMap};

/// Panic payload raised by [`HostBoard::halt`].
pub const HALT_MESSAGE: &str = "board halted";

#[derive(Clone, Debug)]
pub struct HostBoard {
    output: Rc<RefCell<Vec<u8>>>,
    millis: Rc<Cell<i64>>,
    image_end: usize,
    stack_pointer: Rc<Cell<usize>>,
    halts: Rc<Cell<usize>>,
}

impl HostBoard {
    pub const DEFAULT_IMAGE_END: usize = 0x0000_8000;
    pub const DEFAULT_STACK_POINTER: usize = 0x0010_0000;

    pub fn new() -> Self {
        Self::with_layout(Self::DEFAULT_IMAGE_END, Self::DEFAULT_STACK_POINTER)
    }

    pub fn with_layout(image_end: usize, stack_pointer: usize) -> Self {
        Self {
            output: Rc::new(RefCell::new(Vec::new())),
            millis: Rc::new(Cell::new(0)),
            image_end,
            stack_pointer: Rc::new(Cell::new(stack_pointer)),
            halts: Rc::new(Cell::new(0)),
        }
    }

    pub fn output(&self) -> Vec<u8> {
        self.output.borrow().clone()
    }

    pub fn output_string(&self) -> String {
        String::from_utf8_lossy(&self.output.borrow()).into_owned()
    }

    pub fn clear_output(&self) {
        self.output.borrow_mut().clear();
    }

    pub fn set_millis(&self, millis: i64) {
        self.millis.set(millis);
    }

    pub fn set_stack_pointer(&self, stack_pointer: usize) {
        self.stack_pointer.set(stack_pointer);
    }

    pub fn halted(&self) -> bool {
        self.halts.get() > 0
    }
}

impl Default for HostBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for HostBoard {
    fn put_char(&mut self, c: u8) {
        self.output.borrow_mut().push(c);
    }
}

impl Clock for HostBoard {
    fn current_millis(&self) -> i64 {
        self.millis.get()
    }
}

impl MemoryMap for HostBoard {
    fn image_end(&self) -> usize {
        self.image_end
    }

    fn stack_pointer(&self) -> usize {
        self.stack_pointer.get()
    }
}

impl Halt for HostBoard {
    fn halt(&mut self) -> ! {
        self.halts.set(self.halts.get() + 1);
        panic!("{HALT_MESSAGE}");
    }
}

/// Marker returned by [`intercept_halt`] when the closure halted the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Halted;

/// Runs `f`, turning a board halt into `Err(Halted)`. Any other panic
/// keeps unwinding.
pub fn intercept_halt<R>(f: impl FnOnce() -> R) -> Result<R, Halted> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            let is_halt = payload
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| payload.downcast_ref::<&str>().copied())
                == Some(HALT_MESSAGE);
            if is_halt {
                Err(Halted)
            } else {
                panic::resume_unwind(payload)
            }
        }
    }
}
