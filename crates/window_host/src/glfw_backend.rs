//! GLFW-backed implementation of the window host traits
//!
//! GLFW terminates itself once the last `glfw::Glfw` handle is dropped. Each
//! `PWindow` keeps a handle of its own, so the subsystem always outlives the
//! window and teardown happens in the right order without explicit calls.

use glfw::Context;

use crate::backend::{WindowBackend, WindowError, WindowResult, WindowSystem};
use crate::config::WindowSettings;

/// Initialized GLFW library
pub struct GlfwSystem {
    glfw: glfw::Glfw,
}

impl GlfwSystem {
    /// Initialize GLFW, routing its error callback into the `log` crate
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InitializationFailed`] when `glfwInit` fails,
    /// typically because no display is available.
    pub fn init() -> WindowResult<Self> {
        let glfw = glfw::init(glfw::log_errors).map_err(|e| {
            log::debug!("glfwInit failed: {e:?}");
            WindowError::InitializationFailed
        })?;

        log::info!("GLFW {} initialized", glfw::get_version_string());
        Ok(Self { glfw })
    }
}

impl WindowSystem for GlfwSystem {
    type Window = GlfwWindow;

    fn create_window(&mut self, settings: &WindowSettings) -> WindowResult<GlfwWindow> {
        self.glfw.window_hint(glfw::WindowHint::Resizable(settings.resizable));

        let (mut window, events) = self
            .glfw
            .create_window(settings.width, settings.height, &settings.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        // Buffer swaps need a current GL context
        window.make_current();
        window.set_close_polling(true);

        log::info!(
            "Opened window \"{}\" ({}x{})",
            settings.title,
            settings.width,
            settings.height
        );

        Ok(GlfwWindow { window, events })
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }
}

/// GLFW window plus its event receiver
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl WindowBackend for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn drain_events(&mut self) -> usize {
        let mut count = 0;
        for (_, event) in glfw::flush_messages(&self.events) {
            match event {
                glfw::WindowEvent::Close => log::debug!("Close requested"),
                other => log::trace!("Window event: {other:?}"),
            }
            count += 1;
        }
        count
    }
}

impl Drop for GlfwWindow {
    fn drop(&mut self) {
        let (width, height) = self.window.get_size();
        log::debug!("Destroying {width}x{height} window");
    }
}
