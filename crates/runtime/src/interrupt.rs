//! Interrupt masking for the one shared critical resource.
//!
//! The autovector interrupt path may print. Anything that touches the
//! heap cursor or the console runs with the processor priority raised to
//! 7, so the main path and the handler never interleave.

/// Runs `f` with all maskable interrupts held off, then restores the
/// previous status register.
#[cfg(target_arch = "m68k")]
#[inline]
pub fn free<R>(f: impl FnOnce() -> R) -> R {
    let sr: u16;
    unsafe {
        core::arch::asm!(
            "move.w %sr, {sr}",
            "ori.w #0x0700, %sr",
            sr = out(reg_data) sr,
        );
    }
    let result = f();
    unsafe {
        core::arch::asm!("move.w {sr}, %sr", sr = in(reg_data) sr);
    }
    result
}

/// Host builds have no interrupts to mask.
#[cfg(not(target_arch = "m68k"))]
#[inline]
pub fn free<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Masks interrupts for good. Used on the way to a halt.
#[cfg(target_arch = "m68k")]
#[inline]
pub fn disable() {
    unsafe {
        core::arch::asm!("ori.w #0x0700, %sr");
    }
}

#[cfg(not(target_arch = "m68k"))]
#[inline]
pub fn disable() {}
