use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize logging at the given level; `RUST_LOG` still takes precedence.
/// Output goes to standard error.
pub fn init_logging(level: LevelFilter) {
    let _ = SimpleLogger::new()
        .with_level(level)
        .env()
        .init();
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
