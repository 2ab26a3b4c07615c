//! A backend with no window and no GPU. It hands out sequential handles and
//! records every call, in order, into a log shared by the platform, its window
//! and the GL wrapper loaded from it. Status and info-log queries are answered
//! but not recorded.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::{Platform, Window};
use crate::config::{ContextRequest, Extent2D};
use crate::error::{Error, Result, ShaderStage};
use crate::gl::Gl;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Init,
    ContextHints(ContextRequest),
    CreateWindow { dims: Extent2D, title: String },
    MakeCurrent,
    LoadGl,
    SwapBuffers,
    PollEvents,
    Terminate,

    CreateVertexArray,
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer,
    BindArrayBuffer(Option<u32>),
    ArrayBufferDataStatic(Vec<u8>),
    DeleteBuffer(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    CreateShader(ShaderStage),
    ShaderSource(u32, String),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram,
    AttachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    ClearColorAndDepth,
    DrawTriangles { first: i32, count: i32 },
}

type CallLog = Rc<RefCell<Vec<Call>>>;

#[derive(Debug, Clone, Default)]
struct GlFailures {
    create: Option<&'static str>,
    compile: Option<(ShaderStage, String)>,
    link: Option<String>,
}

pub struct RecordingGl {
    log: CallLog,
    next_handle: Cell<u32>,
    shader_stages: RefCell<HashMap<u32, ShaderStage>>,
    failures: RefCell<GlFailures>,
}

impl Default for RecordingGl {
    fn default() -> Self {
        RecordingGl::with_log(CallLog::default(), GlFailures::default())
    }
}

impl RecordingGl {
    fn with_log(log: CallLog, failures: GlFailures) -> Self {
        RecordingGl {
            log,
            next_handle: Cell::new(1),
            shader_stages: RefCell::new(HashMap::new()),
            failures: RefCell::new(failures),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.log.borrow_mut().clear();
    }

    /// Makes `create_*` fail for one kind of object: `"vertex_array"`,
    /// `"buffer"`, `"shader"` or `"program"`.
    pub fn fail_create(&self, kind: &'static str) {
        self.failures.borrow_mut().create = Some(kind);
    }

    pub fn fail_compile(&self, stage: ShaderStage, log: &str) {
        self.failures.borrow_mut().compile = Some((stage, log.to_owned()));
    }

    pub fn fail_link(&self, log: &str) {
        self.failures.borrow_mut().link = Some(log.to_owned());
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }

    fn create(&self, kind: &'static str, call: Call) -> std::result::Result<u32, String> {
        self.record(call);
        if self.failures.borrow().create == Some(kind) {
            return Err(format!("out of {} names", kind));
        }
        let handle = self.next_handle.get();
        self.next_handle.set(handle + 1);
        Ok(handle)
    }

    fn failing_compile(&self, shader: u32) -> Option<String> {
        let stage = self.shader_stages.borrow().get(&shader).copied()?;
        match &self.failures.borrow().compile {
            Some((failing, log)) if *failing == stage => Some(log.clone()),
            _ => None,
        }
    }
}

impl Gl for RecordingGl {
    type VertexArray = u32;
    type Buffer = u32;
    type Shader = u32;
    type Program = u32;

    fn version(&self) -> String {
        "3.2.0 headless".to_owned()
    }

    fn create_vertex_array(&self) -> std::result::Result<u32, String> {
        self.create("vertex_array", Call::CreateVertexArray)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(Call::DeleteVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> std::result::Result<u32, String> {
        self.create("buffer", Call::CreateBuffer)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.record(Call::BindArrayBuffer(buffer));
    }

    fn array_buffer_data_static(&self, data: &[u8]) {
        self.record(Call::ArrayBufferDataStatic(data.to_vec()));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        self.record(Call::VertexAttribPointer {
            index,
            size,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    fn create_shader(&self, stage: ShaderStage) -> std::result::Result<u32, String> {
        let shader = self.create("shader", Call::CreateShader(stage))?;
        self.shader_stages.borrow_mut().insert(shader, stage);
        Ok(shader)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.record(Call::ShaderSource(shader, source.to_owned()));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.failing_compile(shader).is_none()
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.failing_compile(shader).unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> std::result::Result<u32, String> {
        self.create("program", Call::CreateProgram)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        self.failures.borrow().link.is_none()
    }

    fn program_info_log(&self, _program: u32) -> String {
        self.failures.borrow().link.clone().unwrap_or_default()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn clear_color_and_depth(&self) {
        self.record(Call::ClearColorAndDepth);
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(Call::DrawTriangles { first, count });
    }
}

/// Closes its window once `poll_events` has run `close_after_polls` times.
pub struct RecordingPlatform {
    log: CallLog,
    polls: Rc<Cell<usize>>,
    pub close_after_polls: usize,
    pub fail_init: bool,
    pub fail_window: bool,
    pub fail_load: bool,
    pub fail_swap: bool,
    gl_failures: GlFailures,
}

impl RecordingPlatform {
    pub fn new(close_after_polls: usize) -> Self {
        RecordingPlatform {
            log: CallLog::default(),
            polls: Rc::new(Cell::new(0)),
            close_after_polls,
            fail_init: false,
            fail_window: false,
            fail_load: false,
            fail_swap: false,
            gl_failures: GlFailures::default(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn fail_compile(&mut self, stage: ShaderStage, log: &str) {
        self.gl_failures.compile = Some((stage, log.to_owned()));
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl Platform for RecordingPlatform {
    type Window = RecordingWindow;

    fn init(&mut self) -> Result<()> {
        self.record(Call::Init);
        if self.fail_init {
            return Err(Error::Init("no display available".to_owned()));
        }
        Ok(())
    }

    fn context_hints(&mut self, request: ContextRequest) {
        self.record(Call::ContextHints(request));
    }

    fn create_window(&mut self, dims: Extent2D, title: &str) -> Result<RecordingWindow> {
        self.record(Call::CreateWindow {
            dims,
            title: title.to_owned(),
        });
        if self.fail_window {
            return Err(Error::WindowCreation(
                "requested context profile is unsupported".to_owned(),
            ));
        }
        Ok(RecordingWindow {
            log: Rc::clone(&self.log),
            polls: Rc::clone(&self.polls),
            close_after_polls: self.close_after_polls,
            fail_load: self.fail_load,
            fail_swap: self.fail_swap,
            gl_failures: self.gl_failures.clone(),
        })
    }

    fn poll_events(&mut self) {
        self.record(Call::PollEvents);
        self.polls.set(self.polls.get() + 1);
    }

    fn terminate(&mut self) {
        self.record(Call::Terminate);
    }
}

pub struct RecordingWindow {
    log: CallLog,
    polls: Rc<Cell<usize>>,
    close_after_polls: usize,
    fail_load: bool,
    fail_swap: bool,
    gl_failures: GlFailures,
}

impl Window for RecordingWindow {
    type Gl = RecordingGl;

    fn make_current(&mut self) -> Result<()> {
        self.log.borrow_mut().push(Call::MakeCurrent);
        Ok(())
    }

    fn load_gl(&self) -> Result<RecordingGl> {
        self.log.borrow_mut().push(Call::LoadGl);
        if self.fail_load {
            return Err(Error::ApiLoad("glGenVertexArrays could not be resolved".to_owned()));
        }
        Ok(RecordingGl::with_log(
            Rc::clone(&self.log),
            self.gl_failures.clone(),
        ))
    }

    fn should_close(&self) -> bool {
        self.polls.get() >= self.close_after_polls
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.log.borrow_mut().push(Call::SwapBuffers);
        if self.fail_swap {
            return Err(Error::Present("context lost".to_owned()));
        }
        Ok(())
    }
}
