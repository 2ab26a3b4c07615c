//! The windowing side of the program: a window with a GL context, the event
//! pump that keeps it alive and the close flag it raises.
//!
//! Everything here is thread-affine. A platform, its windows and the GL
//! wrapper loaded from them must be created and used on one thread; the real
//! backend additionally requires that thread to be the main thread.

use crate::config::{ContextRequest, Extent2D};
use crate::error::Result;
use crate::gl::Gl;

pub mod native;
#[cfg(test)]
pub mod headless;

pub trait Platform {
    type Window: Window;

    /// Brings up the windowing subsystem. Nothing else may be called before
    /// this succeeds.
    fn init(&mut self) -> Result<()>;

    /// Records the context the next window must be created with.
    fn context_hints(&mut self, request: ContextRequest);

    fn create_window(&mut self, dims: Extent2D, title: &str) -> Result<Self::Window>;

    /// Drains pending events without blocking, updating the close flag of
    /// every window this platform created.
    fn poll_events(&mut self);

    fn terminate(&mut self);
}

pub trait Window {
    type Gl: Gl;

    fn make_current(&mut self) -> Result<()>;

    /// Resolves the GL entry points against this window's context, which must
    /// already be current.
    fn load_gl(&self) -> Result<Self::Gl>;

    fn should_close(&self) -> bool;

    fn swap_buffers(&mut self) -> Result<()>;
}
