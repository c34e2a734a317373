//! The newlib system-call surface for a machine with one console and no
//! processes. Most of it is canned answers.
use log::{debug, trace};
use types::{Errno, FileStat, TimeVal};

use crate::board::Board;
use crate::config::Config;
use crate::context::Runtime;

/// `lseek` whence values as newlib defines them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Whence {
    Set = 0,
    Current = 1,
    End = 2,
}

impl Whence {
    pub const fn from_raw(raw: i32) -> Option<Whence> {
        match raw {
            0 => Some(Whence::Set),
            1 => Some(Whence::Current),
            2 => Some(Whence::End),
            _ => None,
        }
    }
}

impl<B: Board> Runtime<B> {
    /// Nothing can be closed.
    pub fn close(&mut self, fd: i32) -> Result<(), Errno> {
        trace!("close({fd})");
        Err(Errno::EBADF)
    }

    /// Every descriptor is the console, a character device.
    pub fn fstat(&mut self, _fd: i32) -> FileStat {
        FileStat::char_device()
    }

    pub fn isatty(&mut self, _fd: i32) -> bool {
        true
    }

    /// The console has no position.
    pub fn lseek(&mut self, _fd: i32, _offset: i64, _whence: Whence) -> i64 {
        0
    }

    /// There is no input device; every read is end of file.
    pub fn read(&mut self, _fd: i32, _buf: &mut [u8]) -> usize {
        0
    }

    pub fn write(&mut self, fd: i32, bytes: &[u8]) -> usize {
        self.console().write(fd, bytes)
    }

    /// `sbrk` as newlib sees it. The arena never gives memory back, so a
    /// shrink fails with `ENOMEM`; malloc then re-reads the break with
    /// `sbrk(0)` instead of assuming the top of the heap moved down.
    pub fn brk(&mut self, increment: isize) -> Result<usize, Errno> {
        if increment < 0 {
            trace!("sbrk({increment}) refused");
            return Err(Errno::ENOMEM);
        }
        Ok(self.sbrk(increment))
    }

    pub fn getpid(&self) -> i32 {
        Config::PID
    }

    /// There is no one to signal.
    pub fn kill(&mut self, pid: i32, sig: i32) -> Result<(), Errno> {
        debug!("kill({pid}, {sig}) rejected");
        Err(Errno::EINVAL)
    }

    pub fn gettimeofday(&self) -> TimeVal {
        self.current_time()
    }

    /// `_exit`: the status has nowhere to go.
    pub fn exit(&mut self, status: i32) -> ! {
        debug!("exit({status})");
        self.terminate()
    }
}
