//! Errors raised at the boundary between the renderer and its host.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Framebuffer holds {actual} bytes but the image needs {expected}")]
    FramebufferSize { expected: usize, actual: usize },

    #[error("Cannot render a {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },
}
