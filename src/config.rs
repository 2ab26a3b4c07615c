//! Fixed startup parameters. Nothing here is read from the environment.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent2D {
    pub width: u32,
    pub height: u32,
}

pub const DIMS: Extent2D = Extent2D {
    width: 800,
    height: 600,
};

pub const TITLE: &str = "OpenGL Triangle Example";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlProfile {
    Core,
}

/// Context hints handed to the platform before the window is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextRequest {
    pub major: u8,
    pub minor: u8,
    pub profile: GlProfile,
    pub forward_compatible: bool,
}

impl Default for ContextRequest {
    fn default() -> Self {
        ContextRequest {
            major: 3,
            minor: 2,
            profile: GlProfile::Core,
            forward_compatible: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dims: Extent2D,
    pub title: String,
    pub context: ContextRequest,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dims: DIMS,
            title: TITLE.to_owned(),
            context: ContextRequest::default(),
        }
    }
}
