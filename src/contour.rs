//! Boundary tracing of a cell's binary opacity mask.
//!
//! Marching squares at isovalue 0.5. With strictly 0/1 samples every level
//! crossing lands exactly on an edge midpoint, so no interpolation is needed.
//! Segments are emitted with the opaque region on a consistent side, which
//! lets the chainer follow start-to-end keys until each loop closes.

use std::collections::HashMap;

use crate::mask::AlphaMask;

/// A point on a traced outline, in unpadded cell-local coordinates:
/// `x` runs along columns, `y` along rows, pixel centers at integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourPoint {
    pub x: f32,
    pub y: f32,
}

/// One traced boundary polyline. Closed contours repeat their first point
/// as the last.
#[derive(Debug, Clone)]
pub struct Contour {
    pub points: Vec<ContourPoint>,
    pub closed: bool,
}

impl Contour {
    /// `(min_x, min_y, max_x, max_y)` over all points, `None` when empty.
    pub fn bounding_box(&self) -> Option<(f32, f32, f32, f32)> {
        let first = self.points.first()?;
        let mut bbox = (first.x, first.y, first.x, first.y);
        for p in &self.points {
            bbox.0 = bbox.0.min(p.x);
            bbox.1 = bbox.1.min(p.y);
            bbox.2 = bbox.2.max(p.x);
            bbox.3 = bbox.3.max(p.y);
        }
        Some(bbox)
    }
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    start: ContourPoint,
    end: ContourPoint,
}

/// Traces every boundary of the mask's opaque region.
///
/// Coordinates are shifted back by the mask's 1-pixel pad so the result
/// lines up with the cell's own pixels (the outline of a pixel at integer
/// position p runs through p ± 0.5).
pub fn trace_outlines(mask: &AlphaMask) -> Vec<Contour> {
    let mut contours = chain_segments(march_squares(mask));
    for contour in &mut contours {
        for p in &mut contour.points {
            p.x -= 1.0;
            p.y -= 1.0;
        }
    }
    contours
}

fn march_squares(mask: &AlphaMask) -> Vec<Segment> {
    let mut segments = Vec::new();
    if mask.width < 2 || mask.height < 2 {
        return segments;
    }

    for y in 0..mask.height - 1 {
        for x in 0..mask.width - 1 {
            let mut case = 0u8;
            if mask.get(x, y) != 0 {
                case |= 1; // top-left
            }
            if mask.get(x + 1, y) != 0 {
                case |= 2; // top-right
            }
            if mask.get(x + 1, y + 1) != 0 {
                case |= 4; // bottom-right
            }
            if mask.get(x, y + 1) != 0 {
                case |= 8; // bottom-left
            }
            emit_cell_segments(case, x as f32, y as f32, &mut segments);
        }
    }

    segments
}

/// Segments for one 2x2 sample square, oriented so the opaque side is
/// always to the segment's left.
fn emit_cell_segments(case: u8, x: f32, y: f32, out: &mut Vec<Segment>) {
    let top = ContourPoint { x: x + 0.5, y };
    let right = ContourPoint { x: x + 1.0, y: y + 0.5 };
    let bottom = ContourPoint { x: x + 0.5, y: y + 1.0 };
    let left = ContourPoint { x, y: y + 0.5 };

    let seg = |start, end| Segment { start, end };

    match case {
        0 | 15 => {}
        1 => out.push(seg(top, left)),
        2 => out.push(seg(right, top)),
        3 => out.push(seg(right, left)),
        4 => out.push(seg(bottom, right)),
        5 => {
            // Saddle: resolved as two opaque corners kissing diagonally.
            out.push(seg(top, left));
            out.push(seg(bottom, right));
        }
        6 => out.push(seg(bottom, top)),
        7 => out.push(seg(bottom, left)),
        8 => out.push(seg(left, bottom)),
        9 => out.push(seg(top, bottom)),
        10 => {
            out.push(seg(right, top));
            out.push(seg(left, bottom));
        }
        11 => out.push(seg(right, bottom)),
        12 => out.push(seg(left, right)),
        13 => out.push(seg(top, right)),
        14 => out.push(seg(left, top)),
        _ => unreachable!("marching squares case out of range"),
    }
}

// All coordinates are multiples of 0.5, so doubling gives an exact
// integer key for endpoint matching.
fn key(p: ContourPoint) -> (i32, i32) {
    ((p.x * 2.0).round() as i32, (p.y * 2.0).round() as i32)
}

fn chain_segments(segments: Vec<Segment>) -> Vec<Contour> {
    let mut by_start: HashMap<(i32, i32), Vec<usize>> = HashMap::new();
    for (i, s) in segments.iter().enumerate() {
        by_start.entry(key(s.start)).or_default().push(i);
    }

    let mut used = vec![false; segments.len()];
    let mut contours = Vec::new();

    for i in 0..segments.len() {
        if used[i] {
            continue;
        }
        used[i] = true;

        let mut points = vec![segments[i].start, segments[i].end];
        loop {
            let tail = key(points[points.len() - 1]);
            let next = by_start
                .get(&tail)
                .and_then(|candidates| candidates.iter().copied().find(|&j| !used[j]));
            let Some(next) = next else {
                break;
            };
            used[next] = true;
            points.push(segments[next].end);
        }

        let closed = points.len() > 2 && key(points[0]) == key(points[points.len() - 1]);
        contours.push(Contour { points, closed });
    }

    contours
}
