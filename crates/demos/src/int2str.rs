#![no_std]
#![no_main]

use runtime::codec::{ConversionBuffer, integer_to_text, unsigned_to_text};
use runtime::entrypoint;
use runtime::global::with_runtime;
use runtime::types::{CONVERSION_BUFFER_LEN, Radix};

entrypoint!(run);
fn run() -> i32 {
    let signed: [(i64, Radix); 9] = [
        (0, Radix::DECIMAL),
        (123, Radix::DECIMAL),
        (0x12AB, Radix::HEX),
        (2_000_000_000, Radix::DECIMAL),
        (20_000_000_000, Radix::DECIMAL),
        (-123, Radix::DECIMAL),
        (-0x12AB, Radix::HEX),
        (-2_000_000_000, Radix::DECIMAL),
        (-20_000_000_000, Radix::DECIMAL),
    ];
    let unsigned: [(u64, Radix); 2] = [
        (20_000_000_000, Radix::DECIMAL),
        (0xF000_0000_0000_0000, Radix::HEX),
    ];

    let mut buf: ConversionBuffer = [0; CONVERSION_BUFFER_LEN];
    for (n, radix) in signed {
        let text = integer_to_text(n, radix, &mut buf);
        with_runtime(|rt| rt.console().emit_line(text));
    }
    for (n, radix) in unsigned {
        let text = unsigned_to_text(n, radix, &mut buf);
        with_runtime(|rt| rt.console().emit_line(text));
    }
    0
}
