//! Window host loop
//!
//! Drives the lifecycle
//! `Uninitialized -> Initialized -> WindowOpen -> Closing -> Terminated`.
//! Initialization failures jump straight to `Terminated`. The loop itself
//! cannot fail; it only watches the close signal.

use std::fmt;

use crate::backend::{WindowBackend, WindowResult, WindowSystem};
use crate::config::WindowSettings;

/// Lifecycle state of a [`WindowHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    /// Nothing acquired yet
    Uninitialized,
    /// Subsystem is up, no window
    Initialized,
    /// Window is open and the loop is running
    WindowOpen,
    /// Close signal observed, tearing down
    Closing,
    /// Everything released
    Terminated,
}

impl fmt::Display for HostState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Initialized => "initialized",
            Self::WindowOpen => "window-open",
            Self::Closing => "closing",
            Self::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Outcome of a run that ended with the user closing the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames presented before the close signal was seen
    pub frames: u64,
    /// Window events drained over the whole run
    pub events: u64,
}

/// Single-window host
pub struct WindowHost {
    settings: WindowSettings,
    state: HostState,
    transitions: Vec<HostState>,
}

impl WindowHost {
    /// Create a host that will open a window with `settings`
    #[must_use]
    pub fn new(settings: WindowSettings) -> Self {
        Self {
            settings,
            state: HostState::Uninitialized,
            transitions: vec![HostState::Uninitialized],
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> HostState {
        self.state
    }

    /// Every state entered so far, starting with `Uninitialized`
    #[must_use]
    pub fn transitions(&self) -> &[HostState] {
        &self.transitions
    }

    /// Initialize the subsystem with `init`, open the window and loop until
    /// the close signal is raised.
    ///
    /// Every acquired resource is released before this returns, on both the
    /// success and the error path.
    ///
    /// # Errors
    ///
    /// Returns the error from `init` or from window creation. Neither is
    /// retried.
    pub fn run<S, F>(&mut self, init: F) -> WindowResult<RunSummary>
    where
        S: WindowSystem,
        F: FnOnce() -> WindowResult<S>,
    {
        let mut system = match init() {
            Ok(system) => system,
            Err(e) => {
                log::debug!("Subsystem init failed: {e:?}");
                self.transition(HostState::Terminated);
                return Err(e);
            }
        };
        self.transition(HostState::Initialized);

        let mut window = match system.create_window(&self.settings) {
            Ok(window) => window,
            Err(e) => {
                log::debug!("Window creation failed: {e:?}");
                drop(system);
                self.transition(HostState::Terminated);
                return Err(e);
            }
        };
        self.transition(HostState::WindowOpen);

        let mut frames = 0u64;
        let mut events = 0u64;
        while !window.should_close() {
            window.swap_buffers();
            system.poll_events();
            events += window.drain_events() as u64;
            frames += 1;
        }
        self.transition(HostState::Closing);

        drop(window);
        drop(system);
        self.transition(HostState::Terminated);

        log::info!("Window closed after {frames} frames, {events} events");
        Ok(RunSummary { frames, events })
    }

    fn transition(&mut self, next: HostState) {
        log::debug!("Host state {} -> {}", self.state, next);
        self.state = next;
        self.transitions.push(next);
    }
}
