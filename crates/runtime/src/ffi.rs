//! C entry points for newlib and for C programs linked against the
//! runtime. Thin adapters over [`Runtime`](crate::Runtime).
use core::ffi::{CStr, c_char, c_int, c_long, c_void};

use types::{Errno, Radix, TimeVal};

use crate::codec::{self, ConversionBuffer};
use crate::global::with_runtime;
use crate::syscalls::Whence;

unsafe extern "C" {
    fn __errno() -> *mut c_int;
}

fn set_errno(errno: Errno) {
    unsafe { *__errno() = errno.code() }
}

/// Leading fields of newlib's `struct stat`; only `st_mode` is written.
#[repr(C)]
pub struct StatPrefix {
    pub st_dev: i16,
    pub st_ino: u16,
    pub st_mode: u32,
}

#[unsafe(no_mangle)]
pub extern "C" fn close(fd: c_int) -> c_int {
    match with_runtime(|rt| rt.close(fd)) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn fstat(fd: c_int, st: *mut StatPrefix) -> c_int {
    let stat = with_runtime(|rt| rt.fstat(fd));
    if let Some(st) = unsafe { st.as_mut() } {
        st.st_mode = stat.mode;
    }
    0
}

#[unsafe(no_mangle)]
pub extern "C" fn isatty(fd: c_int) -> c_int {
    with_runtime(|rt| rt.isatty(fd)) as c_int
}

#[unsafe(no_mangle)]
pub extern "C" fn lseek(fd: c_int, offset: c_int, dir: c_int) -> c_int {
    let whence = Whence::from_raw(dir).unwrap_or(Whence::Set);
    with_runtime(|rt| rt.lseek(fd, offset as i64, whence)) as c_int
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn read(fd: c_int, ptr: *mut c_char, len: c_int) -> c_int {
    if ptr.is_null() || len <= 0 {
        return 0;
    }
    let buf = unsafe { core::slice::from_raw_parts_mut(ptr as *mut u8, len as usize) };
    with_runtime(|rt| rt.read(fd, buf)) as c_int
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn write(fd: c_int, ptr: *const c_char, len: c_int) -> c_int {
    if ptr.is_null() || len <= 0 {
        return 0;
    }
    let bytes = unsafe { core::slice::from_raw_parts(ptr as *const u8, len as usize) };
    with_runtime(|rt| rt.write(fd, bytes)) as c_int
}

#[unsafe(no_mangle)]
pub extern "C" fn sbrk(increment: c_int) -> *mut c_void {
    match with_runtime(|rt| rt.brk(increment as isize)) {
        Ok(prev_end) => prev_end as *mut c_void,
        Err(errno) => {
            set_errno(errno);
            usize::MAX as *mut c_void
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn _exit(status: c_int) -> ! {
    crate::global::exit(status)
}

#[unsafe(no_mangle)]
pub extern "C" fn getpid() -> c_int {
    with_runtime(|rt| rt.getpid())
}

#[unsafe(no_mangle)]
pub extern "C" fn kill(pid: c_int, sig: c_int) -> c_int {
    match with_runtime(|rt| rt.kill(pid, sig)) {
        Ok(()) => 0,
        Err(errno) => {
            set_errno(errno);
            -1
        }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn gettimeofday(tv: *mut TimeVal, _tz: *mut c_void) -> c_int {
    let now = with_runtime(|rt| rt.gettimeofday());
    if let Some(tv) = unsafe { tv.as_mut() } {
        *tv = now;
    }
    0
}

/// Out-of-range radixes are treated like malformed input: fatal.
fn radix_or_halt(radix: c_int) -> Radix {
    match u32::try_from(radix).ok().and_then(Radix::new) {
        Some(radix) => radix,
        None => with_runtime(|rt| {
            rt.fatal(types::FatalError::InvalidDigit {
                position: 0,
                found: None,
            })
        }),
    }
}

/// `buf` must hold at least 66 bytes. The result points into it.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn int2str64(n: i64, radix: c_int, buf: *mut c_char) -> *mut c_char {
    let radix = radix_or_halt(radix);
    let buf = unsafe { &mut *(buf as *mut ConversionBuffer) };
    codec::integer_to_text(n, radix, buf).as_ptr() as *mut c_char
}

/// `buf` must hold at least 66 bytes. The result points into it.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn int2str64u(n: u64, radix: c_int, buf: *mut c_char) -> *mut c_char {
    let radix = radix_or_halt(radix);
    let buf = unsafe { &mut *(buf as *mut ConversionBuffer) };
    codec::unsigned_to_text(n, radix, buf).as_ptr() as *mut c_char
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn str2int64(text: *const c_char, radix: c_int) -> i64 {
    let radix = radix_or_halt(radix);
    let text = unsafe { CStr::from_ptr(text) };
    with_runtime(|rt| rt.parse_integer(text.to_bytes(), radix))
}

/// 32-bit decode for callers built around `int`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn str2int(text: *const c_char, radix: c_int) -> c_long {
    unsafe { str2int64(text, radix) as c_long }
}
