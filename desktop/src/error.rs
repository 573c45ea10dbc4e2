use std::{fmt, path::PathBuf};

use calanim_core::pic::PicError;

#[derive(Debug)]
pub enum ToolError {
    Io(std::io::Error),
    Image(image::ImageError),
    Pic(PicError),
    Window(minifb::Error),
    ImageTooLarge { width: u32, height: u32 },
    MissingFrame(PathBuf),
    FrameIndex(usize),
}

pub type Result<T> = core::result::Result<T, ToolError>;

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::Io(err) => write!(f, "I/O error: {err}"),
            ToolError::Image(err) => write!(f, "image error: {err}"),
            ToolError::Pic(err) => write!(f, "invalid pic resource: {err}"),
            ToolError::Window(err) => write!(f, "unable to open window: {err}"),
            ToolError::ImageTooLarge { width, height } => {
                write!(f, "image is too large ({width}x{height}, max {0}x{0})", u16::MAX)
            }
            ToolError::MissingFrame(path) => write!(f, "missing frame {}", path.display()),
            ToolError::FrameIndex(index) => write!(f, "no frame with index {index}"),
        }
    }
}

impl std::error::Error for ToolError {}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        ToolError::Io(err)
    }
}

impl From<image::ImageError> for ToolError {
    fn from(err: image::ImageError) -> Self {
        ToolError::Image(err)
    }
}

impl From<PicError> for ToolError {
    fn from(err: PicError) -> Self {
        ToolError::Pic(err)
    }
}

impl From<minifb::Error> for ToolError {
    fn from(err: minifb::Error) -> Self {
        ToolError::Window(err)
    }
}
