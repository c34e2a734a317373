/// Digit alphabet shared by encode and decode. Upper case only.
pub const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Capacity needed to render any 64-bit value in base 2: 64 digits, an
/// optional sign and the trailing NUL.
pub const CONVERSION_BUFFER_LEN: usize = 66;

/// A numeric base in `2..=16`.
///
/// Holding a `Radix` is proof the base indexes into [`DIGITS`], so the
/// codec never has to re-check it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u8);

impl Radix {
    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEX: Radix = Radix(16);

    pub const MIN: u32 = 2;
    pub const MAX: u32 = 16;

    /// Returns `None` when `radix` falls outside `2..=16`.
    pub const fn new(radix: u32) -> Option<Radix> {
        if radix >= Self::MIN && radix <= Self::MAX {
            Some(Radix(radix as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// Index of `byte` in the alphabet if it is a valid digit for this base.
    #[inline]
    pub fn digit_value(self, byte: u8) -> Option<u32> {
        DIGITS
            .iter()
            .position(|&d| d == byte)
            .map(|idx| idx as u32)
            .filter(|&idx| idx < self.get())
    }
}

impl TryFrom<u32> for Radix {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Radix::new(value).ok_or(value)
    }
}
