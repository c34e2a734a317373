#![no_std]
#![no_main]

use runtime::entrypoint;
use runtime::global::with_runtime;
use runtime::types::Radix;

entrypoint!(run);
fn run() -> i32 {
    let cases: [(&str, Radix, i64); 9] = [
        ("0", Radix::DECIMAL, 0),
        ("123", Radix::DECIMAL, 123),
        ("123", Radix::HEX, 0x123),
        ("123", Radix::OCTAL, 0o123),
        ("-123", Radix::OCTAL, -0o123),
        ("-123", Radix::DECIMAL, -123),
        ("-123", Radix::HEX, -0x123),
        ("-9223372036854775808", Radix::DECIMAL, i64::MIN),
        ("7FFFFFFFFFFFFFFF", Radix::HEX, i64::MAX),
    ];

    for (text, radix, expected) in cases {
        with_runtime(|rt| {
            let verdict = if rt.parse_integer(text, radix) == expected { "yes" } else { "no" };
            rt.console().emit_line(verdict);
        });
    }

    // halts with "invalid number"
    with_runtime(|rt| rt.parse_integer("12G", Radix::HEX));
    1
}
