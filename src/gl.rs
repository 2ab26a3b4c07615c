//! The slice of the OpenGL API the renderer talks to.
//!
//! Every call goes to whichever context is current on the calling thread, so
//! implementations are only valid on the thread that owns that context.

use std::marker::PhantomData;
use std::os::raw::c_void;

use glow::HasContext;
use log::trace;

use crate::error::{Error, Result, ShaderStage};

/// Entry points probed before the wrapper is handed out.
const REQUIRED_SYMBOLS: &[&str] = &[
    "glGetString",
    "glGenVertexArrays",
    "glBindVertexArray",
    "glDeleteVertexArrays",
    "glGenBuffers",
    "glBindBuffer",
    "glBufferData",
    "glDeleteBuffers",
    "glVertexAttribPointer",
    "glEnableVertexAttribArray",
    "glCreateShader",
    "glShaderSource",
    "glCompileShader",
    "glGetShaderiv",
    "glGetShaderInfoLog",
    "glDeleteShader",
    "glCreateProgram",
    "glAttachShader",
    "glLinkProgram",
    "glGetProgramiv",
    "glGetProgramInfoLog",
    "glUseProgram",
    "glDeleteProgram",
    "glClear",
    "glDrawArrays",
];

pub trait Gl {
    type VertexArray: Copy;
    type Buffer: Copy;
    type Shader: Copy;
    type Program: Copy;

    fn version(&self) -> String;

    fn create_vertex_array(&self) -> std::result::Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    fn create_buffer(&self) -> std::result::Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads `data` into the bound array buffer with a static-draw hint.
    fn array_buffer_data_static(&self, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    /// Declares a non-normalized float attribute; `stride` and `offset` are in bytes.
    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32);
    fn enable_vertex_attrib_array(&self, index: u32);

    fn create_shader(&self, stage: ShaderStage) -> std::result::Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> std::result::Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    /// Clears color and depth to their default clear values.
    fn clear_color_and_depth(&self);
    fn draw_triangles(&self, first: i32, count: i32);
}

/// `glow` bound to the context that was current when it was loaded.
pub struct GlowApi {
    gl: glow::Context,
    // Pins the wrapper to the thread owning the context.
    _not_send: PhantomData<*const ()>,
}

impl GlowApi {
    /// Resolves every entry point through `loader`, failing on the first one
    /// that comes back null.
    ///
    /// # Safety
    ///
    /// The context `loader` resolves against must be current on the calling
    /// thread and must stay current for as long as the returned value is used.
    pub unsafe fn from_loader_function<F>(mut loader: F) -> Result<Self>
    where
        F: FnMut(&str) -> *const c_void,
    {
        for &symbol in REQUIRED_SYMBOLS {
            if loader(symbol).is_null() {
                return Err(Error::ApiLoad(format!("{} could not be resolved", symbol)));
            }
            trace!("resolved {}", symbol);
        }

        Ok(GlowApi {
            gl: glow::Context::from_loader_function(loader),
            _not_send: PhantomData,
        })
    }
}

// SAFETY (all methods below): `GlowApi` can only be built through
// `from_loader_function`, whose contract keeps the context current on this
// thread, and it is `!Send`, so it never leaves that thread.
impl Gl for GlowApi {
    type VertexArray = <glow::Context as HasContext>::VertexArray;
    type Buffer = <glow::Context as HasContext>::Buffer;
    type Shader = <glow::Context as HasContext>::Shader;
    type Program = <glow::Context as HasContext>::Program;

    fn version(&self) -> String {
        unsafe { self.gl.get_parameter_string(glow::VERSION) }
    }

    fn create_vertex_array(&self) -> std::result::Result<Self::VertexArray, String> {
        unsafe { self.gl.create_vertex_array() }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { self.gl.bind_vertex_array(vertex_array) }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { self.gl.delete_vertex_array(vertex_array) }
    }

    fn create_buffer(&self) -> std::result::Result<Self::Buffer, String> {
        unsafe { self.gl.create_buffer() }
    }

    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, buffer) }
    }

    fn array_buffer_data_static(&self, data: &[u8]) {
        unsafe {
            self.gl
                .buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STATIC_DRAW)
        }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) }
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        unsafe {
            self.gl
                .vertex_attrib_pointer_f32(index, size, glow::FLOAT, false, stride, offset)
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(index) }
    }

    fn create_shader(&self, stage: ShaderStage) -> std::result::Result<Self::Shader, String> {
        let ty = match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        };
        unsafe { self.gl.create_shader(ty) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { self.gl.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.compile_shader(shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_program(&self) -> std::result::Result<Self::Program, String> {
        unsafe { self.gl.create_program() }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.attach_shader(program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { self.gl.link_program(program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { self.gl.use_program(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn clear_color_and_depth(&self) {
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) }
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        unsafe { self.gl.draw_arrays(glow::TRIANGLES, first, count) }
    }
}
