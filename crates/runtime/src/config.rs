use log::LevelFilter;

/// Build-time runtime settings.
pub struct Config;

impl Config {
    pub const CONVERSION_BUFFER_LEN: usize = types::CONVERSION_BUFFER_LEN;

    /// Set with `RUNTIME_LOG=trace|debug|info|warn|error|off` at build time.
    /// Defaults to `off` so program output is not interleaved with records.
    pub const LOG_LEVEL: LevelFilter = parse_level(option_env!("RUNTIME_LOG"));

    /// Longest log line; longer records are cut.
    pub const LOG_LINE_CAPACITY: usize = 128;

    /// Room for `panic at file:line:col: message`.
    pub const PANIC_BUFFER_LEN: usize = 128;

    /// The only process there is.
    pub const PID: i32 = 1;
}

pub const fn parse_level(value: Option<&str>) -> LevelFilter {
    let Some(value) = value else {
        return LevelFilter::Off;
    };
    let bytes = value.as_bytes();
    if eq_ignore_case(bytes, b"trace") {
        LevelFilter::Trace
    } else if eq_ignore_case(bytes, b"debug") {
        LevelFilter::Debug
    } else if eq_ignore_case(bytes, b"info") {
        LevelFilter::Info
    } else if eq_ignore_case(bytes, b"warn") {
        LevelFilter::Warn
    } else if eq_ignore_case(bytes, b"error") {
        LevelFilter::Error
    } else {
        LevelFilter::Off
    }
}

const fn eq_ignore_case(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i].to_ascii_lowercase() != b[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}
