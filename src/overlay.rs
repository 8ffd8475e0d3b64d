use std::path::Path;

use image::RgbaImage;
use plotters::prelude::*;

use crate::contour::Contour;
use crate::error::ContourError;
use crate::grid::CellRect;

/// Renders the source image with every traced outline drawn on top.
///
/// Returns a width x height RGBA pixel buffer. The source is composited
/// over white (the bitmap backend has no alpha), and each contour is
/// translated from cell-local to image coordinates by its cell's pixel
/// origin before being drawn as a red polyline.
pub fn render_overlay_rgba(
    image: &RgbaImage,
    traced: &[(CellRect, Vec<Contour>)],
) -> Result<Vec<u8>, ContourError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Ok(Vec::new());
    }

    let pixel_count = width as usize * height as usize;
    let mut rgb = vec![255u8; pixel_count * 3];

    for (i, px) in image.pixels().enumerate() {
        let a = px[3] as u32;
        for c in 0..3 {
            rgb[i * 3 + c] = ((px[c] as u32 * a + 255 * (255 - a)) / 255) as u8;
        }
    }

    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();

        for (cell, contours) in traced {
            for contour in contours {
                let path: Vec<(i32, i32)> = contour
                    .points
                    .iter()
                    .map(|p| {
                        let x = (p.x + cell.x as f32).round() as i32;
                        let y = (p.y + cell.y as f32).round() as i32;
                        (
                            x.clamp(0, width.saturating_sub(1) as i32),
                            y.clamp(0, height.saturating_sub(1) as i32),
                        )
                    })
                    .collect();
                root.draw(&PathElement::new(path, RED))
                    .map_err(|e| ContourError::Render(e.to_string()))?;
            }
        }

        root.present()
            .map_err(|e| ContourError::Render(e.to_string()))?;
    }

    let mut rgba = vec![255u8; pixel_count * 4];
    for i in 0..pixel_count {
        rgba[i * 4..i * 4 + 3].copy_from_slice(&rgb[i * 3..i * 3 + 3]);
    }

    Ok(rgba)
}

/// Writes an overlay buffer from [`render_overlay_rgba`] out as a PNG.
pub fn save_overlay(
    path: &Path,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
) -> Result<(), ContourError> {
    let rgba = RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
        ContourError::Render(format!("overlay buffer does not match {width}x{height}"))
    })?;
    rgba.save(path)?;
    Ok(())
}
