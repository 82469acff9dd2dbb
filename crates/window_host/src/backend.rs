//! Backend traits for the window host
//!
//! The host loop only talks to these two traits, so the GLFW implementation
//! can be swapped for a recording fake in tests.

use thiserror::Error;

use crate::config::WindowSettings;

/// Window management errors
///
/// The display strings are the diagnostics written to stderr.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// The windowing subsystem could not be initialized
    #[error("Failed to initialize GLFW")]
    InitializationFailed,

    /// The subsystem came up but refused to create a window
    #[error("Failed to open GLFW window")]
    CreationFailed,
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// An initialized windowing subsystem.
///
/// Dropping the value terminates the subsystem. Any window it created must
/// be dropped first.
pub trait WindowSystem {
    /// Window type produced by this subsystem
    type Window: WindowBackend;

    /// Create a window with the given settings
    fn create_window(&mut self, settings: &WindowSettings) -> WindowResult<Self::Window>;

    /// Dispatch pending OS events to their windows without blocking
    fn poll_events(&mut self);
}

/// A single open window.
///
/// Dropping the value destroys the window.
pub trait WindowBackend {
    /// Check if the user or the OS asked the window to close
    fn should_close(&self) -> bool;

    /// Raise or clear the close signal
    fn set_should_close(&mut self, should_close: bool);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Consume the events delivered by the last poll, returning how many there were
    fn drain_events(&mut self) -> usize;
}
