pub mod contour;
pub mod error;
pub mod grid;
pub mod mask;
pub mod overlay;

pub use error::ContourError;
