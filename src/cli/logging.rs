use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Change the active log level after start-up
pub fn set_log_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Initialize logging with the specified level
pub fn init_logging(debug: bool) -> LevelFilter {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // The backend accepts everything; the global max level does the filtering
    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Trace)
        .with_module_level("hyper", LevelFilter::Info)
        .with_module_level("h2", LevelFilter::Info)
        .init()
    {
        eprintln!("Failed to initialise logging: {}", e);
    }
    set_log_level(log_level);

    log_level
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
