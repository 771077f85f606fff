// crates/isolate_tests/src/logging.rs

use tracing_subscriber::filter::LevelFilter;

/// Installs a stderr subscriber; `log` records from the library crates are
/// forwarded to it. Warnings only, unless `verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    // Fails only if a global subscriber is already installed; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
