//! # Window Host
//!
//! Owns the windowing lifecycle for the tutorial binary: initialize GLFW,
//! open a single window, spin an empty present/poll loop until the user
//! closes it, then tear everything down.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use window_host::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     window_host::logging::init();
//!     let config = HostConfig::default();
//!     let mut host = WindowHost::new(config.window);
//!     let summary = host.run(GlfwSystem::init)?;
//!     log::info!("closed after {} frames", summary.frames);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod config;
pub mod glfw_backend;
pub mod host;
pub mod logging;

pub use backend::{WindowBackend, WindowError, WindowResult, WindowSystem};
pub use config::{Config, ConfigError, HostConfig, WindowSettings};
pub use glfw_backend::{GlfwSystem, GlfwWindow};
pub use host::{HostState, RunSummary, WindowHost};

/// Common imports for host users
pub mod prelude {
    pub use crate::{
        Config, ConfigError, GlfwSystem, HostConfig, HostState, RunSummary, WindowError,
        WindowHost, WindowResult, WindowSettings,
    };
}
