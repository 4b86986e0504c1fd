use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected {width}x{height} RGBA pixels but got {len} bytes")]
    InvalidImage { width: u32, height: u32, len: usize },

    #[error("camera provides {actual} ray directions but the viewport has {expected} pixels")]
    ViewportMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
