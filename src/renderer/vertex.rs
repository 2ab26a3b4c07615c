use bytemuck::{Pod, Zeroable};
use std::mem;

const R: [f32; 3] = [1.0, 0.0, 0.0];
const G: [f32; 3] = [0.0, 1.0, 0.0];
const B: [f32; 3] = [0.0, 0.0, 1.0];

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub a_pos: [f32; 3],
    pub a_color: [f32; 3],
}

impl Vertex {
    /// Byte distance between consecutive vertices.
    pub const STRIDE: i32 = mem::size_of::<Vertex>() as i32;
    pub const POSITION_LOCATION: u32 = 0;
    pub const POSITION_OFFSET: i32 = 0;
    pub const COLOR_LOCATION: u32 = 1;
    pub const COLOR_OFFSET: i32 = mem::size_of::<[f32; 3]>() as i32;
    pub const COMPONENTS: i32 = 3;
}

pub const TRIANGLE: [Vertex; 3] = [
    Vertex {
        a_pos: [0.0, 0.5, 0.0],
        a_color: R,
    },
    Vertex {
        a_pos: [-0.5, -0.5, 0.0],
        a_color: G,
    },
    Vertex {
        a_pos: [0.5, -0.5, 0.0],
        a_color: B,
    },
];
