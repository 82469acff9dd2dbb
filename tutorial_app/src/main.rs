//! Tutorial entry point
//!
//! Prints a greeting, a sum computed through the feature-selected path and
//! the build version, then opens a window and idles until it is closed.

mod sum;
mod version;

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;
use window_host::{ConfigError, GlfwSystem, HostConfig, WindowError, WindowHost};

/// Environment variable naming an optional TOML/RON host config file
const CONFIG_ENV: &str = "TUTORIAL_CONFIG";

/// Operands for the greeting sum
#[allow(clippy::approx_constant)]
const OPERANDS: (f32, f32) = (3.14, 4.93);

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn run(program: &str) -> Result<(), AppError> {
    println!("Hello World!");
    println!("{}", sum::sum_line(OPERANDS.0, OPERANDS.1));
    println!("{}", version::version_line(program));
    log::debug!("Sum computed via {}", sum::SUM_SOURCE);

    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = HostConfig::load_or_default(config_path.as_deref())?;

    let mut host = WindowHost::new(config.window);
    let summary = host.run(GlfwSystem::init)?;
    log::info!("Host {} after {} frames", host.state(), summary.frames);
    Ok(())
}

fn main() -> ExitCode {
    window_host::logging::init();

    let program = std::env::args().next().unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string());

    match run(&program) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Tutorial failed: {e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
