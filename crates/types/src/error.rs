use thiserror::Error;

/// Conditions the runtime cannot recover from.
///
/// Library calls surface these as values so a hosted build can inspect
/// them; the runtime wrappers report [`FatalError::diagnostic`] on the
/// console and halt the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum FatalError {
    /// A byte outside the alphabet for the radix, or no digits at all.
    /// `found` is `None` when the digit sequence ended early.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: Option<u8> },

    /// Growing the heap would reach the live stack pointer.
    #[error(
        "heap end {heap_end:#x} + {increment} collides with stack pointer {stack_pointer:#x}"
    )]
    HeapCollision {
        heap_end: usize,
        increment: isize,
        stack_pointer: usize,
    },
}

impl FatalError {
    /// The fixed console message emitted before halting.
    pub const fn diagnostic(&self) -> &'static str {
        match self {
            FatalError::InvalidDigit { .. } => "invalid number\n",
            FatalError::HeapCollision { .. } => "Heap and stack collision\n",
        }
    }
}

/// newlib errno values the system-call stubs can report.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[repr(i32)]
pub enum Errno {
    #[error("bad file descriptor")]
    BadFd = 9,
    #[error("out of memory")]
    NoMemory = 12,
    #[error("invalid argument")]
    Invalid = 22,
}

impl Errno {
    pub const EBADF: Errno = Errno::BadFd;
    pub const ENOMEM: Errno = Errno::NoMemory;
    pub const EINVAL: Errno = Errno::Invalid;

    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }
}
