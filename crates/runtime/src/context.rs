//! The runtime context: one board plus the heap cursor it guards.
//!
//! Library operations return [`FatalError`] values. The methods here are
//! the embedded contract on top of them: report on the console and halt.
use core::alloc::Layout;

use log::{debug, error};
use types::{FatalError, Radix, TimeVal};

use crate::board::Board;
use crate::codec;
use crate::console::Console;
use crate::heap::HeapArena;
use crate::time;

pub struct Runtime<B> {
    board: B,
    heap: HeapArena,
}

impl<B> Runtime<B> {
    pub const fn new(board: B) -> Self {
        Self {
            board,
            heap: HeapArena::new(),
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn heap(&self) -> &HeapArena {
        &self.heap
    }
}

impl<B: Board> Runtime<B> {
    pub fn console(&mut self) -> Console<'_, B> {
        Console::new(&mut self.board)
    }

    /// Arena bump. Returns the previous end of the heap; never returns if
    /// the heap would meet the stack.
    pub fn sbrk(&mut self, increment: isize) -> usize {
        match self.heap.grow(&self.board, increment) {
            Ok(prev_end) => prev_end,
            Err(err) => self.fatal(err),
        }
    }

    /// Aligned block for a Rust allocation. Halts on collision.
    pub fn allocate(&mut self, layout: Layout) -> *mut u8 {
        match self.heap.allocate(&self.board, layout) {
            Ok(addr) => addr as *mut u8,
            Err(err) => self.fatal(err),
        }
    }

    pub fn parse_integer(&mut self, text: impl AsRef<[u8]>, radix: Radix) -> i64 {
        match codec::text_to_integer(text, radix) {
            Ok(value) => value,
            Err(err) => self.fatal(err),
        }
    }

    pub fn parse_unsigned(&mut self, text: impl AsRef<[u8]>, radix: Radix) -> u64 {
        match codec::text_to_unsigned(text, radix) {
            Ok(value) => value,
            Err(err) => self.fatal(err),
        }
    }

    pub fn current_time(&self) -> TimeVal {
        time::current_time_split(&self.board)
    }

    pub fn terminate(&mut self) -> ! {
        debug!("halting");
        self.board.halt()
    }

    /// Emits the error's fixed diagnostic and halts.
    pub fn fatal(&mut self, err: FatalError) -> ! {
        error!("{err}");
        self.console().emit_string(err.diagnostic());
        self.board.halt()
    }
}
