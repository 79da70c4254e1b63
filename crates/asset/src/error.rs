use thiserror::Error;

use crate::image::PixelFormat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("image data size mismatch: {width}x{height} {format:?} needs {expected} bytes, got {got}")]
    ImageDataSize {
        width: u32,
        height: u32,
        format: PixelFormat,
        expected: usize,
        got: usize,
    },

    #[error("image size {width}x{height} {format:?} does not fit in memory")]
    ImageTooLarge {
        width: u32,
        height: u32,
        format: PixelFormat,
    },

    #[error("attribute arrays don't have the same length, expected {expected} but got {got}")]
    AttributeCountMismatch { expected: usize, got: usize },

    #[error("the data buffer is too small, expected {expected} but got {got}")]
    BufferTooSmall { expected: usize, got: usize },
}

pub type AssetResult<T> = Result<T, AssetError>;
