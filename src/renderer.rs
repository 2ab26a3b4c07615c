use log::debug;

mod buffer;
mod program;
mod vertex;
mod vertex_array;

use crate::error::Result;
use crate::gl::Gl;
use buffer::Buffer;
use program::{Program, FRAGMENT_SOURCE, VERTEX_SOURCE};
use vertex::TRIANGLE;
use vertex_array::VertexArray;

/// Owns every GPU object the frame loop touches. All of them are created in
/// `new` and live until the renderer is dropped.
///
/// Must be created and used on the thread whose context `gl` was loaded from.
pub struct Renderer<'a, G: Gl> {
    gl: &'a G,
    // Held only so it is released with the renderer.
    _program: Program<'a, G>,
    buffer: Buffer<'a, G>,
    vertex_array: VertexArray<'a, G>,
}

impl<'a, G> Renderer<'a, G>
where
    G: Gl,
{
    pub fn new(gl: &'a G) -> Result<Self> {
        let vertex_array = VertexArray::new(gl)?;
        let buffer = Buffer::new(gl, &TRIANGLE)?;
        vertex_array.declare_vertex_attributes();
        debug!("uploaded {} vertices", TRIANGLE.len());

        let program = Program::new(gl, VERTEX_SOURCE, FRAGMENT_SOURCE)?;
        program.bind();
        debug!("shader program bound");

        Ok(Renderer {
            gl,
            _program: program,
            buffer,
            vertex_array,
        })
    }

    pub fn render(&self) {
        self.gl.clear_color_and_depth();
        self.vertex_array.bind();
        self.gl.draw_triangles(0, TRIANGLE.len() as i32);
    }
}

impl<'a, G: Gl> Drop for Renderer<'a, G> {
    fn drop(&mut self) {
        // Fields drop in declaration order: program, buffer, vertex array.
        self.gl.use_program(None);
        debug!(
            "releasing renderer ({} bytes of vertex data)",
            self.buffer.len
        );
    }
}
