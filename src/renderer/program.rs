use log::{debug, trace};

use crate::error::{Error, Result, ShaderStage};
use crate::gl::Gl;

pub const VERTEX_SOURCE: &str = include_str!("../data/triangle.vert");
pub const FRAGMENT_SOURCE: &str = include_str!("../data/triangle.frag");

/// A linked vertex + fragment program. The shader units are released as soon
/// as the link has happened.
pub struct Program<'a, G: Gl> {
    gl: &'a G,
    pub program: G::Program,
}

impl<'a, G: Gl> Program<'a, G> {
    pub fn new(gl: &'a G, vs_source: &str, fs_source: &str) -> Result<Self> {
        let vs = Self::compile(gl, ShaderStage::Vertex, vs_source)?;
        let fs = match Self::compile(gl, ShaderStage::Fragment, fs_source) {
            Ok(fs) => fs,
            Err(err) => {
                gl.delete_shader(vs);
                return Err(err);
            }
        };

        let program = match gl.create_program() {
            Ok(program) => program,
            Err(reason) => {
                gl.delete_shader(vs);
                gl.delete_shader(fs);
                return Err(Error::resource("shader program")(reason));
            }
        };

        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.link_program(program);

        gl.delete_shader(vs);
        gl.delete_shader(fs);

        if !gl.program_link_status(program) {
            let log = gl.program_info_log(program);
            gl.delete_program(program);
            return Err(Error::ProgramLink(log));
        }
        debug!("shader program linked");

        Ok(Program { gl, program })
    }

    fn compile(gl: &G, stage: ShaderStage, source: &str) -> Result<G::Shader> {
        let object = match stage {
            ShaderStage::Vertex => "vertex shader",
            ShaderStage::Fragment => "fragment shader",
        };
        let shader = gl.create_shader(stage).map_err(Error::resource(object))?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.shader_compile_status(shader) {
            let log = gl.shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(Error::ShaderCompile { stage, log });
        }
        trace!("compiled {}", object);

        Ok(shader)
    }

    pub fn bind(&self) {
        self.gl.use_program(Some(self.program));
    }
}

impl<'a, G: Gl> Drop for Program<'a, G> {
    fn drop(&mut self) {
        self.gl.delete_program(self.program);
    }
}
