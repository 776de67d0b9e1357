//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in screen space.

use glam::{Mat2, Vec2};
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Axis-aligned rectangle with a vertical gradient (`top` to `bottom`)
pub fn gradient_rect(min: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, top),
        Vertex::new(max.x, min.y, top),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(max.x, min.y, top),
        Vertex::new(max.x, max.y, bottom),
    ]
}

/// Solid axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    gradient_rect(min, size, color, color)
}

/// Rectangle rotated by `angle` radians about its centre.
///
/// `top_inset` > 0 only keeps the top band of that height (used for the
/// frosting strip on a tumbling fragment).
pub fn rotated_rect(
    center: Vec2,
    size: Vec2,
    angle: f32,
    top_inset: Option<f32>,
    top: [f32; 4],
    bottom: [f32; 4],
) -> Vec<Vertex> {
    let rot = Mat2::from_angle(angle);
    let half = size / 2.0;
    let bottom_y = match top_inset {
        Some(h) => -half.y + h.min(size.y),
        None => half.y,
    };

    let corner = |x: f32, y: f32| center + rot * Vec2::new(x, y);
    let tl = corner(-half.x, -half.y);
    let tr = corner(half.x, -half.y);
    let bl = corner(-half.x, bottom_y);
    let br = corner(half.x, bottom_y);

    vec![
        Vertex::new(tl.x, tl.y, top),
        Vertex::new(tr.x, tr.y, top),
        Vertex::new(bl.x, bl.y, bottom),
        Vertex::new(bl.x, bl.y, bottom),
        Vertex::new(tr.x, tr.y, top),
        Vertex::new(br.x, br.y, bottom),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Rectangle outline of the given stroke width
pub fn outline(min: Vec2, size: Vec2, stroke: f32, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(min, Vec2::new(size.x, stroke), color));
    vertices.extend(rect(Vec2::new(min.x, max.y - stroke), Vec2::new(size.x, stroke), color));
    vertices.extend(rect(min, Vec2::new(stroke, size.y), color));
    vertices.extend(rect(Vec2::new(max.x - stroke, min.y), Vec2::new(stroke, size.y), color));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    fn bounds(verts: &[Vertex]) -> (Vec2, Vec2) {
        let mut lo = Vec2::splat(f32::MAX);
        let mut hi = Vec2::splat(f32::MIN);
        for v in verts {
            let p = Vec2::from(v.position);
            lo = lo.min(p);
            hi = hi.max(p);
        }
        (lo, hi)
    }

    #[test]
    fn test_rect_covers_bounds() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 5.0), RED);
        assert_eq!(verts.len(), 6);
        let (lo, hi) = bounds(&verts);
        assert_eq!(lo, Vec2::new(10.0, 20.0));
        assert_eq!(hi, Vec2::new(40.0, 25.0));
    }

    #[test]
    fn test_rotated_rect_unrotated_matches_rect() {
        let verts = rotated_rect(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0), 0.0, None, RED, RED);
        let (lo, hi) = bounds(&verts);
        assert!((lo - Vec2::new(40.0, 45.0)).length() < 1e-4);
        assert!((hi - Vec2::new(60.0, 55.0)).length() < 1e-4);
    }

    #[test]
    fn test_rotated_rect_quarter_turn_swaps_extent() {
        let verts = rotated_rect(Vec2::ZERO, Vec2::new(20.0, 10.0), PI / 2.0, None, RED, RED);
        let (lo, hi) = bounds(&verts);
        assert!((hi.x - lo.x - 10.0).abs() < 1e-3);
        assert!((hi.y - lo.y - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_top_inset_keeps_top_band() {
        let verts = rotated_rect(Vec2::ZERO, Vec2::new(20.0, 30.0), 0.0, Some(3.0), RED, RED);
        let (lo, hi) = bounds(&verts);
        assert!((lo.y - -15.0).abs() < 1e-4);
        assert!((hi.y - -12.0).abs() < 1e-4);
    }

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 2.0, RED, 12).len(), 36);
    }

    #[test]
    fn test_outline_stays_inside() {
        let verts = outline(Vec2::ZERO, Vec2::new(10.0, 10.0), 0.5, RED);
        assert_eq!(verts.len(), 24);
        let (lo, hi) = bounds(&verts);
        assert_eq!(lo, Vec2::ZERO);
        assert_eq!(hi, Vec2::new(10.0, 10.0));
    }
}
