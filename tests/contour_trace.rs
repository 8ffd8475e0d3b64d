use image::{Rgba, RgbaImage};
use spritecells::contour::trace_outlines;
use spritecells::grid::CellRect;
use spritecells::mask::AlphaMask;

fn cell(width: u32, height: u32) -> CellRect {
    CellRect {
        col: 0,
        row: 0,
        x: 0,
        y: 0,
        width,
        height,
    }
}

#[test]
fn transparent_cell_has_no_contours() {
    let img = RgbaImage::new(8, 8);
    let mask = AlphaMask::from_cell(&img, &cell(8, 8));
    assert_eq!(mask.opaque_count(), 0);
    assert!(trace_outlines(&mask).is_empty());
}

// Pins the padding correction: the 1px mask pad must not leak into the
// traced coordinates, so a fully opaque cell's outline hugs the cell
// border at the half-pixel mark.
#[test]
fn opaque_cell_contour_aligns_to_cell_border() {
    let img = RgbaImage::from_pixel(8, 8, Rgba([200, 100, 50, 255]));
    let mask = AlphaMask::from_cell(&img, &cell(8, 8));
    let contours = trace_outlines(&mask);

    assert_eq!(contours.len(), 1);
    let c = &contours[0];
    assert!(c.closed);

    let (min_x, min_y, max_x, max_y) = c.bounding_box().expect("nonempty contour");
    assert!((min_x + 0.5).abs() < 1e-6);
    assert!((min_y + 0.5).abs() < 1e-6);
    assert!((max_x - 7.5).abs() < 1e-6);
    assert!((max_y - 7.5).abs() < 1e-6);
}

#[test]
fn centered_square_bounding_box_matches() {
    let mut img = RgbaImage::new(8, 8);
    for y in 2..=5 {
        for x in 2..=5 {
            img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }

    let mask = AlphaMask::from_cell(&img, &cell(8, 8));
    let contours = trace_outlines(&mask);

    assert_eq!(contours.len(), 1);
    let (min_x, min_y, max_x, max_y) = contours[0].bounding_box().expect("nonempty contour");
    assert!((min_x - 1.5).abs() < 1e-6);
    assert!((min_y - 1.5).abs() < 1e-6);
    assert!((max_x - 5.5).abs() < 1e-6);
    assert!((max_y - 5.5).abs() < 1e-6);
}

#[test]
fn disjoint_blobs_trace_separately() {
    let mut img = RgbaImage::new(12, 6);
    for y in 1..=4 {
        for x in 1..=3 {
            img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
        }
        for x in 8..=10 {
            img.put_pixel(x, y, Rgba([0, 0, 0, 128]));
        }
    }

    let mask = AlphaMask::from_cell(&img, &cell(12, 6));
    let contours = trace_outlines(&mask);

    assert_eq!(contours.len(), 2);
    assert!(contours.iter().all(|c| c.closed));
}

#[test]
fn any_nonzero_alpha_is_opaque() {
    let mut img = RgbaImage::new(3, 3);
    img.put_pixel(1, 1, Rgba([0, 0, 0, 1]));

    let mask = AlphaMask::from_cell(&img, &cell(3, 3));
    assert_eq!(mask.opaque_count(), 1);
    assert_eq!(trace_outlines(&mask).len(), 1);
}
