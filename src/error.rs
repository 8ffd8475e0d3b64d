#[derive(Debug, thiserror::Error)]
pub enum ContourError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image has no alpha channel (decoded as {0:?})")]
    MissingAlpha(image::ColorType),

    #[error("cell size must be at least 1x1, got {width}x{height}")]
    BadCellSize { width: u32, height: u32 },

    #[error("render failed: {0}")]
    Render(String),
}
