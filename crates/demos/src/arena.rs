#![no_std]
#![no_main]

extern crate alloc;

use alloc::vec::Vec;
use runtime::global::with_runtime;
use runtime::types::Radix;
use runtime::{entrypoint, println};

// Fills a Vec from the arena, then reports where the heap ended and how
// long it took.
entrypoint!(run);
fn run() -> i32 {
    let start = with_runtime(|rt| rt.gettimeofday());

    let mut values: Vec<u64> = Vec::new();
    for i in 0..512u64 {
        values.push(i * i);
    }
    let sum: u64 = values.iter().sum();

    let heap_end = with_runtime(|rt| rt.heap().heap_end());
    let end = with_runtime(|rt| rt.gettimeofday());

    println!("sum of squares below 512: {}", sum);
    if let Some(heap_end) = heap_end {
        with_runtime(|rt| {
            let mut console = rt.console();
            console.emit_string("heap end: 0x");
            console.emit_unsigned(heap_end as u64, Radix::HEX);
            console.emit_char(b'\n');
        });
    }
    println!(
        "elapsed: {} us",
        (end.tv_sec - start.tv_sec) * 1_000_000 + (end.tv_usec - start.tv_usec) as i64
    );
    0
}
