//! Shape generation for 2D primitives
//!
//! Everything becomes a triangle list in canvas pixels.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x + w, y + h, color),
    ]
}

/// Generate vertices for a rectangle outline centered on its edges
pub fn rect_outline(x: f32, y: f32, w: f32, h: f32, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = width / 2.0;
    let mut vertices = Vec::with_capacity(24);
    // Top and bottom span the full width including corners
    vertices.extend(rect(x - half, y - half, w + width, width, color));
    vertices.extend(rect(x - half, y + h - half, w + width, width, color));
    // Sides fill the gap between them
    vertices.extend(rect(x - half, y + half, width, h - width, color));
    vertices.extend(rect(x + w - half, y + half, width, h - width, color));
    vertices
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

/// Generate vertices for a convex polygon (fan from the first point)
pub fn convex_polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    let anchor = points[0];
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(anchor.x, anchor.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}

/// Generate vertices for a thick line segment
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let b1 = from - perp;
    let a2 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Generate vertices for a connected run of thick segments
pub fn polyline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    points
        .windows(2)
        .flat_map(|pair| line(pair[0], pair[1], width, color))
        .collect()
}

/// Generate vertices for a dashed line (`dash` drawn, `gap` skipped, repeating)
pub fn dashed_line(from: Vec2, to: Vec2, width: f32, dash: f32, gap: f32, color: [f32; 4]) -> Vec<Vertex> {
    let length = from.distance(to);
    if length <= 0.0 || dash <= 0.0 {
        return Vec::new();
    }

    let dir = (to - from) / length;
    let mut vertices = Vec::new();
    let mut start = 0.0;
    while start < length {
        let end = (start + dash).min(length);
        vertices.extend(line(from + dir * start, from + dir * end, width, color));
        start = end + gap.max(0.0);
    }
    vertices
}

/// Sample a quadratic Bézier curve into `segments + 1` points
pub fn quadratic_curve(start: Vec2, control: Vec2, end: Vec2, segments: u32) -> Vec<Vec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let u = 1.0 - t;
            start * (u * u) + control * (2.0 * u * t) + end * (t * t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_is_two_triangles() {
        let v = rect(10.0, 20.0, 30.0, 40.0, WHITE);
        assert_eq!(v.len(), 6);
        assert!(v.iter().all(|v| (10.0..=40.0).contains(&v.position[0])));
        assert!(v.iter().all(|v| (20.0..=60.0).contains(&v.position[1])));
    }

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 5.0, WHITE, 16).len(), 48);
    }

    #[test]
    fn test_convex_polygon_fan() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        assert_eq!(convex_polygon(&square, WHITE).len(), 6);
        assert!(convex_polygon(&square[..2], WHITE).is_empty());
    }

    #[test]
    fn test_zero_length_line_is_empty() {
        assert!(line(Vec2::ONE, Vec2::ONE, 3.0, WHITE).is_empty());
        assert!(dashed_line(Vec2::ONE, Vec2::ONE, 3.0, 10.0, 5.0, WHITE).is_empty());
    }

    #[test]
    fn test_dash_count() {
        // 40px with 10 on / 5 off: dashes start at 0, 15 and 30
        let v = dashed_line(Vec2::ZERO, Vec2::new(40.0, 0.0), 2.0, 10.0, 5.0, WHITE);
        assert_eq!(v.len(), 3 * 6);
    }

    #[test]
    fn test_quadratic_curve_endpoints() {
        let start = Vec2::new(0.0, 0.0);
        let end = Vec2::new(10.0, 0.0);
        let points = quadratic_curve(start, Vec2::new(5.0, 10.0), end, 8);
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], start);
        assert_eq!(points[8], end);
        assert!((points[4].y - 5.0).abs() < 1e-5);
    }
}
