use image::{GenericImageView, RgbaImage};

use crate::error::ContourError;
use crate::grid::CellRect;

/// Binary opacity mask of one cell, padded with one transparent pixel on
/// every side so shapes touching a cell edge still trace as closed loops.
///
/// Mask dimensions are therefore cell dimensions + 2 in each axis.
#[derive(Debug, Clone)]
pub struct AlphaMask {
    pub width: usize,
    pub height: usize,
    data: Vec<u8>,
}

impl AlphaMask {
    /// Thresholds the cell's alpha channel: any nonzero alpha counts as
    /// opaque.
    pub fn from_cell(image: &RgbaImage, cell: &CellRect) -> Self {
        let view = image::imageops::crop_imm(image, cell.x, cell.y, cell.width, cell.height);

        let width = cell.width as usize + 2;
        let height = cell.height as usize + 2;
        let mut data = vec![0u8; width * height];

        for (x, y, px) in view.pixels() {
            if px[3] > 0 {
                data[(y as usize + 1) * width + (x as usize + 1)] = 1;
            }
        }

        Self {
            width,
            height,
            data,
        }
    }

    /// Sample value at mask coordinates: 1 opaque, 0 transparent.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    pub fn opaque_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

/// The pipeline only ever reads alpha, so images that decode without an
/// alpha channel (RGB JPEGs and the like) are rejected up front. Converting
/// them to RGBA would synthesize alpha = 255 everywhere and silently trace
/// every cell's full border.
pub fn ensure_alpha(color: image::ColorType) -> Result<(), ContourError> {
    if color.has_alpha() {
        Ok(())
    } else {
        Err(ContourError::MissingAlpha(color))
    }
}
