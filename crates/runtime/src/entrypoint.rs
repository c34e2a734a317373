/// Declares the program entry point.
///
/// Installs the arena as the global allocator, sets up logging, runs
/// `$func` and halts with its status. `$func` is `fn() -> i32`.
#[macro_export]
macro_rules! entrypoint {
    ($func:path) => {
        #[global_allocator]
        static ALLOCATOR: $crate::global::ArenaAllocator = $crate::global::ArenaAllocator;

        #[unsafe(no_mangle)]
        pub extern "C" fn main() -> i32 {
            $crate::global::init();
            let status: i32 = $func();
            $crate::global::exit(status)
        }
    };
}
