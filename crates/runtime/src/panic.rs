use core::fmt::Write;

use heapless::String;

use crate::board::{Halt, ServicesBoard};
use crate::config::Config;
use crate::console::Console;
use crate::interrupt;

/// Formats `panic at file:line:col: message`, writes it straight to the
/// board and halts. The runtime lock may be held by the panicking code, so
/// this never goes through it.
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    let mut line: String<{ Config::PANIC_BUFFER_LEN }> = String::new();

    if let Some(location) = info.location() {
        let _ = write!(
            line,
            "panic at {}:{}:{}: ",
            location.file(),
            location.line(),
            location.column()
        );
    }
    let _ = write!(line, "{}", info.message());

    interrupt::free(|| {
        let mut board = ServicesBoard;
        let mut console = Console::new(&mut board);
        console.emit_line(line.as_bytes());
        board.halt()
    })
}
