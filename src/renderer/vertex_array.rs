use log::trace;

use super::vertex::Vertex;
use crate::error::{Error, Result};
use crate::gl::Gl;

/// The attribute layout the draw call reads vertices through.
pub struct VertexArray<'a, G: Gl> {
    gl: &'a G,
    pub vao: G::VertexArray,
}

impl<'a, G: Gl> VertexArray<'a, G> {
    /// Creates the vertex array and leaves it bound, so attribute declarations
    /// made afterwards are recorded into it.
    pub fn new(gl: &'a G) -> Result<Self> {
        let vao = gl
            .create_vertex_array()
            .map_err(Error::resource("vertex array"))?;
        gl.bind_vertex_array(Some(vao));
        Ok(VertexArray { gl, vao })
    }

    /// Points position and color at the currently bound array buffer and
    /// enables both slots.
    pub fn declare_vertex_attributes(&self) {
        for &(location, offset) in &[
            (Vertex::POSITION_LOCATION, Vertex::POSITION_OFFSET),
            (Vertex::COLOR_LOCATION, Vertex::COLOR_OFFSET),
        ] {
            self.gl.vertex_attrib_pointer_f32(
                location,
                Vertex::COMPONENTS,
                Vertex::STRIDE,
                offset,
            );
            self.gl.enable_vertex_attrib_array(location);
            trace!(
                "attribute {}: {} floats, stride {}, offset {}",
                location,
                Vertex::COMPONENTS,
                Vertex::STRIDE,
                offset
            );
        }
    }

    pub fn bind(&self) {
        self.gl.bind_vertex_array(Some(self.vao));
    }
}

impl<'a, G: Gl> Drop for VertexArray<'a, G> {
    fn drop(&mut self) {
        self.gl.delete_vertex_array(self.vao);
    }
}
