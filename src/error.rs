use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Every error here is fatal: `main` logs it and exits with status 1.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to initialize the windowing subsystem: {0}")]
    Init(String),
    #[error("failed to create window: {0}")]
    WindowCreation(String),
    #[error("failed to make the context current: {0}")]
    ContextActivation(String),
    #[error("failed to load OpenGL entry points: {0}")]
    ApiLoad(String),
    #[error("failed to create {object}: {reason}")]
    ResourceCreation {
        object: &'static str,
        reason: String,
    },
    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("shader program failed to link: {0}")]
    ProgramLink(String),
    #[error("failed to present frame: {0}")]
    Present(String),
}

impl Error {
    pub(crate) fn resource(object: &'static str) -> impl FnOnce(String) -> Self {
        move |reason| Error::ResourceCreation { object, reason }
    }
}
