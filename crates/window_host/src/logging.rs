//! Logging setup

/// Initialize the logger at `Info`, letting `RUST_LOG` override the filter.
pub fn init() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
