use log::{debug, info, trace};

use crate::config::Config;
use crate::error::Result;
use crate::gl::Gl;
use crate::platform::{Platform, Window};
use crate::renderer::Renderer;

/// Opens the window, builds the renderer and draws until the window is asked
/// to close.
///
/// Must be invoked from the thread that is to own the graphics context; with
/// the desktop backend that is the main thread. The platform is terminated
/// on every path once `init` has succeeded.
pub fn run<P: Platform>(platform: &mut P, config: &Config) -> Result<()> {
    platform.init()?;
    debug!("windowing subsystem initialized");

    let result = open_and_render(platform, config);
    platform.terminate();
    result
}

fn open_and_render<P: Platform>(platform: &mut P, config: &Config) -> Result<()> {
    platform.context_hints(config.context);
    let mut window = platform.create_window(config.dims, &config.title)?;
    window.make_current()?;

    let gl = window.load_gl()?;
    println!("OpenGL version {}", gl.version());

    let renderer = Renderer::new(&gl)?;
    info!("entering render loop");
    let frames = frame_loop(platform, &mut window, &renderer)?;
    info!("window closed after {} frames", frames);

    Ok(())
}

/// Clear, draw, present, poll; repeated until the close flag is raised.
/// Returns the number of frames presented.
pub fn frame_loop<P: Platform>(
    platform: &mut P,
    window: &mut P::Window,
    renderer: &Renderer<'_, <P::Window as Window>::Gl>,
) -> Result<u64> {
    let mut frames = 0;
    while !window.should_close() {
        renderer.render();
        window.swap_buffers()?;
        platform.poll_events();

        frames += 1;
        trace!("frame: {}", frames);
    }
    Ok(frames)
}
