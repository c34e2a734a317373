//! Bump arena between the end of the static image and the stack.
//!
//! The cursor only moves up. The stack pointer is sampled on every call
//! because the stack keeps moving under us.
use core::alloc::Layout;

use log::trace;
use types::FatalError;

use crate::board::MemoryMap;

#[derive(Debug, Default)]
pub struct HeapArena {
    heap_end: Option<usize>,
}

impl HeapArena {
    pub const fn new() -> Self {
        Self { heap_end: None }
    }

    /// `None` until the first grow request seeds the cursor.
    pub fn heap_end(&self) -> Option<usize> {
        self.heap_end
    }

    /// Moves the end of the arena up by `increment` bytes and returns the
    /// previous end.
    ///
    /// Negative increments leave the cursor where it is and report the
    /// current end. Callers that speak the C `sbrk` contract must turn a
    /// shrink into a failure; see [`Runtime::brk`](crate::Runtime::brk).
    pub fn grow<M: MemoryMap + ?Sized>(
        &mut self,
        map: &M,
        increment: isize,
    ) -> Result<usize, FatalError> {
        let prev_end = *self.heap_end.get_or_insert_with(|| map.image_end());
        let stack_pointer = map.stack_pointer();

        match prev_end.checked_add(increment.max(0) as usize) {
            Some(new_end) if new_end < stack_pointer => {
                if increment < 0 {
                    trace!("heap: ignoring shrink by {} bytes", increment.unsigned_abs());
                } else if increment > 0 {
                    trace!("heap: {prev_end:#x} -> {new_end:#x} (sp {stack_pointer:#x})");
                }
                self.heap_end = Some(new_end);
                Ok(prev_end)
            }
            _ => Err(FatalError::HeapCollision {
                heap_end: prev_end,
                increment,
                stack_pointer,
            }),
        }
    }

    /// Carves an aligned block for `layout` out of the arena and returns
    /// its address. The alignment padding is consumed along with the block.
    pub fn allocate<M: MemoryMap + ?Sized>(
        &mut self,
        map: &M,
        layout: Layout,
    ) -> Result<usize, FatalError> {
        let current = self.grow(map, 0)?;
        let padding = current.wrapping_neg() & (layout.align() - 1);

        let total = padding
            .checked_add(layout.size())
            .and_then(|total| isize::try_from(total).ok())
            .ok_or(FatalError::HeapCollision {
                heap_end: current,
                increment: isize::MAX,
                stack_pointer: map.stack_pointer(),
            })?;

        self.grow(map, total)?;
        Ok(current + padding)
    }
}
