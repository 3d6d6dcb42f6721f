//! Integer hit boxes around the drawn pendulum shapes

use glam::DVec2;
use sfml::graphics::IntRect;

/// Square of side `2 * radius` centred on `centre`
pub fn circle_hitbox(centre: DVec2, radius: f64) -> IntRect {
    let corner = (centre - DVec2::splat(radius)).round();
    let side = (radius * 2.0).round() as i32;

    IntRect::new(corner.x as i32, corner.y as i32, side, side)
}

/// Bounding box of a line drawn `stroke` pixels thick.
///
/// Thick lines are widened across their minor axis: steep lines grow
/// sideways, shallow ones grow up and down.
pub fn segment_hitbox(start: DVec2, end: DVec2, stroke: f64) -> IntRect {
    let half = stroke * 0.5;
    let delta = (end - start).abs();

    let pad = if delta.y > delta.x {
        DVec2::new(half, 0.0)
    } else {
        DVec2::new(0.0, half)
    };

    let min = (start.min(end) - pad).round();
    let max = (start.max(end) + pad).round();

    IntRect::new(
        min.x as i32,
        min.y as i32,
        (max.x - min.x) as i32,
        (max.y - min.y) as i32,
    )
}

/// Half-open containment: the right and bottom edges are outside.
pub fn inside_boundary(boundary: &IntRect, (x, y): (i32, i32)) -> bool {
    let IntRect {
        left,
        top,
        width,
        height,
    } = *boundary;

    (left <= x && x < left + width) && (top <= y && y < top + height)
}

pub fn center(rect: &IntRect) -> (i32, i32) {
    (rect.left + rect.width / 2, rect.top + rect.height / 2)
}

pub fn mid_top(rect: &IntRect) -> (i32, i32) {
    (rect.left + rect.width / 2, rect.top)
}

pub fn mid_bottom(rect: &IntRect) -> (i32, i32) {
    (rect.left + rect.width / 2, rect.top + rect.height)
}
