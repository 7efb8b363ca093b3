//! Ear-clipping triangulation of simple polygons

use glam::Vec2;

use crate::error::{Result, TerrainError};

/// Signed area of a polygon (shoelace formula)
///
/// Positive for counter-clockwise vertex order, negative for clockwise.
pub fn polygon_area(points: &[Vec2]) -> f32 {
    let Some(&last) = points.last() else {
        return 0.0;
    };

    let mut previous = last;
    let mut twice_area = 0.0;
    for &point in points {
        twice_area += previous.perp_dot(point);
        previous = point;
    }
    twice_area * 0.5
}

/// Split a simple polygon into triangles
///
/// Works with either winding. Every triangle indexes into `points` and is
/// counter-clockwise; a polygon of `n` vertices yields `n - 2` triangles.
///
/// # Errors
///
/// - `InvalidArgument` if fewer than 3 points are given
/// - `DegeneratePolygon` if no ear can be cut (self-intersecting or
///   collinear input); it carries the triangles cut so far
pub fn triangulate(points: &[Vec2]) -> Result<Vec<[usize; 3]>> {
    let n = points.len();
    if n < 3 {
        return Err(TerrainError::InvalidArgument(format!(
            "Triangulation needs at least 3 points (got {})",
            n
        )));
    }

    let mut remaining: Vec<usize> = if polygon_area(points) > 0.0 {
        (0..n).collect()
    } else {
        (0..n).rev().collect()
    };
    let mut triangles = Vec::with_capacity(n - 2);

    let mut attempts = 2 * remaining.len();
    let mut v = remaining.len() - 1;
    while remaining.len() > 2 {
        if attempts == 0 {
            return Err(TerrainError::DegeneratePolygon {
                remaining: remaining.len(),
                triangles,
            });
        }
        attempts -= 1;

        let count = remaining.len();
        let u = if v < count { v } else { 0 };
        v = if u + 1 < count { u + 1 } else { 0 };
        let w = if v + 1 < count { v + 1 } else { 0 };

        if is_ear(points, &remaining, [u, v, w]) {
            triangles.push([remaining[u], remaining[v], remaining[w]]);
            remaining.remove(v);
            attempts = 2 * remaining.len();
        }
    }

    Ok(triangles)
}

/// Whether the corner at `v` is convex and no other vertex lies in it
fn is_ear(points: &[Vec2], remaining: &[usize], [u, v, w]: [usize; 3]) -> bool {
    let a = points[remaining[u]];
    let b = points[remaining[v]];
    let c = points[remaining[w]];

    if (b - a).perp_dot(c - a) <= 0.0 {
        return false;
    }

    !remaining
        .iter()
        .enumerate()
        .filter(|&(p, _)| p != u && p != v && p != w)
        .any(|(_, &index)| inside_triangle(a, b, c, points[index]))
}

/// Point in counter-clockwise triangle test, edges included
fn inside_triangle(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> bool {
    (c - b).perp_dot(p - b) >= 0.0 && (a - c).perp_dot(p - c) >= 0.0 && (b - a).perp_dot(p - a) >= 0.0
}
