//! Desktop backend: a winit event loop polled by hand and a glutin windowed
//! context.

use std::any::Any;
use std::cell::Cell;
use std::panic;
use std::rc::Rc;

use glutin::{
    Api, ContextBuilder, GlProfile as GlutinProfile, GlRequest, NotCurrent, PossiblyCurrent,
    WindowedContext,
};
use log::{debug, info, warn};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::desktop::EventLoopExtDesktop;
use winit::window::{WindowBuilder, WindowId};

use super::{Platform, Window};
use crate::config::{ContextRequest, Extent2D, GlProfile};
use crate::error::{Error, Result};
use crate::gl::GlowApi;

#[derive(Default)]
pub struct GlutinPlatform {
    event_loop: Option<EventLoop<()>>,
    request: Option<ContextRequest>,
    windows: Vec<(WindowId, Rc<Cell<bool>>)>,
}

impl GlutinPlatform {
    pub fn new() -> Self {
        Self::default()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "event loop creation panicked".to_owned()
    }
}

impl Platform for GlutinPlatform {
    type Window = GlutinWindow;

    fn init(&mut self) -> Result<()> {
        if self.event_loop.is_some() {
            return Ok(());
        }

        // winit panics instead of returning an error when no display is
        // reachable.
        let hook = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        let event_loop = panic::catch_unwind(EventLoop::<()>::new);
        panic::set_hook(hook);

        self.event_loop = Some(event_loop.map_err(|payload| Error::Init(panic_message(payload)))?);
        debug!("event loop created");
        Ok(())
    }

    fn context_hints(&mut self, request: ContextRequest) {
        debug!("context hints: {:?}", request);
        self.request = Some(request);
    }

    fn create_window(&mut self, dims: Extent2D, title: &str) -> Result<GlutinWindow> {
        let event_loop = self.event_loop.as_ref().ok_or_else(|| {
            Error::WindowCreation("the windowing subsystem is not initialized".to_owned())
        })?;
        let request = self.request.unwrap_or_default();

        let wb = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(winit::dpi::Size::Logical(winit::dpi::LogicalSize::new(
                dims.width as f64,
                dims.height as f64,
            )))
            .with_resizable(false);

        let settings = context_settings(&request);
        if let Some(note) = forward_compatibility_note(&request, &settings) {
            warn!("{}", note);
        }

        let windowed_context = ContextBuilder::new()
            .with_gl(settings.gl)
            .with_gl_profile(settings.profile)
            .with_double_buffer(Some(true))
            .with_depth_buffer(24)
            .build_windowed(wb, event_loop)
            .map_err(|err| Error::WindowCreation(err.to_string()))?;

        let should_close = Rc::new(Cell::new(false));
        self.windows
            .push((windowed_context.window().id(), Rc::clone(&should_close)));
        info!("created {}x{} window {:?}", dims.width, dims.height, title);

        Ok(GlutinWindow {
            context: Some(Context::NotCurrent(windowed_context)),
            should_close,
        })
    }

    fn poll_events(&mut self) {
        let windows = &self.windows;
        let event_loop = match self.event_loop.as_mut() {
            Some(event_loop) => event_loop,
            None => return,
        };

        event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;
            match event {
                Event::WindowEvent { window_id, event } => match event {
                    WindowEvent::CloseRequested
                    | WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(VirtualKeyCode::Escape),
                                ..
                            },
                        ..
                    } => {
                        for (id, should_close) in windows {
                            if *id == window_id {
                                should_close.set(true);
                            }
                        }
                        info!("close requested");
                    }
                    _ => {}
                },
                Event::MainEventsCleared => *control_flow = ControlFlow::Exit,
                _ => {}
            }
        });
    }

    fn terminate(&mut self) {
        self.windows.clear();
        if self.event_loop.take().is_some() {
            debug!("event loop released");
        }
    }
}

/// What glutin is asked for once a `ContextRequest` has been mapped onto it.
#[derive(Debug, Clone, Copy)]
struct ContextSettings {
    gl: GlRequest,
    profile: GlutinProfile,
    forward_compatible: bool,
}

// glutin 0.23 has no forward-compatibility switch. Core contexts created
// through CGL are always forward-compatible; GLX and WGL never set the flag.
const FORWARD_COMPATIBLE_CORE: bool = cfg!(target_os = "macos");

fn context_settings(request: &ContextRequest) -> ContextSettings {
    let profile = match request.profile {
        GlProfile::Core => GlutinProfile::Core,
    };
    ContextSettings {
        gl: GlRequest::Specific(Api::OpenGl, (request.major, request.minor)),
        profile,
        forward_compatible: FORWARD_COMPATIBLE_CORE,
    }
}

/// Describes how the created context will differ from `request` on the
/// forward-compatibility flag, if it does.
fn forward_compatibility_note(
    request: &ContextRequest,
    settings: &ContextSettings,
) -> Option<&'static str> {
    match (request.forward_compatible, settings.forward_compatible) {
        (true, false) => Some(
            "forward-compatible contexts cannot be requested on this platform, \
             creating a plain core context",
        ),
        (false, true) => Some(
            "core contexts are always forward-compatible on this platform, \
             ignoring the request to disable it",
        ),
        _ => None,
    }
}

enum Context {
    NotCurrent(WindowedContext<NotCurrent>),
    Current(WindowedContext<PossiblyCurrent>),
}

pub struct GlutinWindow {
    // Only `None` while `make_current` is swapping the state.
    context: Option<Context>,
    should_close: Rc<Cell<bool>>,
}

impl GlutinWindow {
    fn current(&self) -> Option<&WindowedContext<PossiblyCurrent>> {
        match &self.context {
            Some(Context::Current(context)) => Some(context),
            _ => None,
        }
    }
}

impl Window for GlutinWindow {
    type Gl = GlowApi;

    fn make_current(&mut self) -> Result<()> {
        let next = match self.context.take() {
            Some(Context::NotCurrent(context)) => match unsafe { context.make_current() } {
                Ok(context) => Context::Current(context),
                Err((context, err)) => {
                    self.context = Some(Context::NotCurrent(context));
                    return Err(Error::ContextActivation(format!("{:?}", err)));
                }
            },
            Some(Context::Current(context)) => Context::Current(context),
            None => {
                return Err(Error::ContextActivation(
                    "the window has no context".to_owned(),
                ))
            }
        };
        self.context = Some(next);
        debug!("context made current");
        Ok(())
    }

    fn load_gl(&self) -> Result<GlowApi> {
        let context = self
            .current()
            .ok_or_else(|| Error::ApiLoad("the context is not current".to_owned()))?;

        // SAFETY: the context is current on this thread and `GlutinWindow` is
        // `!Send`, so the loaded functions are only ever called from here.
        unsafe {
            GlowApi::from_loader_function(|symbol| context.get_proc_address(symbol) as *const _)
        }
    }

    fn should_close(&self) -> bool {
        self.should_close.get()
    }

    fn swap_buffers(&mut self) -> Result<()> {
        let context = self
            .current()
            .ok_or_else(|| Error::Present("the context is not current".to_owned()))?;
        context
            .swap_buffers()
            .map_err(|err| Error::Present(format!("{:?}", err)))
    }
}
