/// File type mask and the character-device type from newlib's `<sys/stat.h>`.
pub const S_IFMT: u32 = 0o170000;
pub const S_IFCHR: u32 = 0o020000;

/// The part of `struct stat` the runtime fills in. Every descriptor is
/// the console, so only the mode carries information.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FileStat {
    pub mode: u32,
}

impl FileStat {
    pub const fn char_device() -> Self {
        Self { mode: S_IFCHR }
    }

    #[inline]
    pub const fn is_char_device(&self) -> bool {
        self.mode & S_IFMT == S_IFCHR
    }
}
