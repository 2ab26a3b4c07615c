use bytemuck::Pod;
use log::trace;

use crate::error::{Error, Result};
use crate::gl::Gl;

/// An array buffer filled once at creation and never written again.
pub struct Buffer<'a, G: Gl> {
    gl: &'a G,
    pub buf: G::Buffer,
    pub len: usize,
}

impl<'a, G: Gl> Buffer<'a, G> {
    /// Creates the buffer, binds it as the array buffer and uploads `content`.
    /// The buffer stays bound so attribute pointers can be declared against it.
    pub fn new<T: Pod>(gl: &'a G, content: &[T]) -> Result<Self> {
        let bytes: &[u8] = bytemuck::cast_slice(content);
        debug_assert_ne!(bytes.len(), 0);

        let buf = gl.create_buffer().map_err(Error::resource("vertex buffer"))?;
        gl.bind_array_buffer(Some(buf));
        gl.array_buffer_data_static(bytes);
        trace!("uploaded {} bytes of vertex data", bytes.len());

        Ok(Buffer {
            gl,
            buf,
            len: bytes.len(),
        })
    }
}

impl<'a, G: Gl> Drop for Buffer<'a, G> {
    fn drop(&mut self) {
        self.gl.delete_buffer(self.buf);
    }
}
