use crate::error::ContourError;

/// A fixed-size cell grid laid over a source image.
///
/// Remainder pixels on the right/bottom edge that do not fill a whole cell
/// belong to no cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub cell_width: u32,
    pub cell_height: u32,
    pub cols: u32,
    pub rows: u32,
}

/// One cell's grid position and pixel rectangle within the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub col: u32,
    pub row: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl GridSpec {
    /// Lays a `cell_width` x `cell_height` grid over an image.
    ///
    /// Zero cell dimensions are rejected. Cells larger than the image are
    /// allowed and simply produce an empty grid.
    pub fn new(
        image_width: u32,
        image_height: u32,
        cell_width: u32,
        cell_height: u32,
    ) -> Result<Self, ContourError> {
        if cell_width == 0 || cell_height == 0 {
            return Err(ContourError::BadCellSize {
                width: cell_width,
                height: cell_height,
            });
        }

        Ok(Self {
            cell_width,
            cell_height,
            cols: image_width / cell_width,
            rows: image_height / cell_height,
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Cells in row-major order: index `i` sits at column `i % cols`,
    /// row `i / cols`.
    pub fn cells(&self) -> Vec<CellRect> {
        let mut out = Vec::with_capacity(self.cell_count());
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(CellRect {
                    col,
                    row,
                    x: col * self.cell_width,
                    y: row * self.cell_height,
                    width: self.cell_width,
                    height: self.cell_height,
                });
            }
        }
        out
    }
}
