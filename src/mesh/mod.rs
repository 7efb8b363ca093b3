//! Fill mesh generation for terrain curves
//!
//! Generates engine-agnostic mesh data for the ground below a
//! [`TerrainCurve`].

mod triangulator;

pub use triangulator::{polygon_area, triangulate};

use glam::Vec2;
use log::debug;

use crate::curve::TerrainCurve;
use crate::error::{Result, TerrainError};

/// Relative area mismatch tolerated when accepting a partial triangulation
const COVERAGE_TOLERANCE: f32 = 1e-4;

/// Engine-agnostic fill mesh output
///
/// Contains raw vertex data suitable for any rendering engine:
/// - Bevy: Convert to `Mesh` with attributes
/// - Godot: Convert to `ArrayMesh`
/// - wgpu: Use directly as vertex buffers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillMesh {
    /// Outline of the filled area: the curve nodes followed by the bottom corners
    pub vertices: Vec<Vec2>,
    /// Counter-clockwise triangles indexing into `vertices`
    pub triangles: Vec<[usize; 3]>,
}

impl FillMesh {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Vertex positions in the `z = 0` plane
    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(|v| [v.x, v.y, 0.0]).collect()
    }

    /// Flat triangle index buffer
    pub fn indices(&self) -> Vec<u32> {
        self.triangles
            .iter()
            .flat_map(|triangle| triangle.iter().map(|&i| i as u32))
            .collect()
    }

    /// Texture coordinates tiling a texture of `tile_size` world units,
    /// shifted by `tile_offset`
    pub fn uvs(&self, tile_offset: Vec2, tile_size: Vec2) -> Vec<Vec2> {
        self.vertices
            .iter()
            .map(|&v| (v - tile_offset) / tile_size)
            .collect()
    }

    /// Total area covered by the triangles
    pub fn area(&self) -> f32 {
        self.triangles
            .iter()
            .map(|&[a, b, c]| polygon_area(&[self.vertices[a], self.vertices[b], self.vertices[c]]))
            .sum()
    }
}

/// Generate the fill mesh below a curve
///
/// The ground between the curve and the bottom edge of its target area is
/// triangulated with the ear-clipping triangulator. Nodes resting on the
/// bottom edge pinch the outline; the zero-area sliver they leave behind is
/// dropped as long as the triangles found cover the whole outline.
///
/// # Errors
///
/// Returns `DegeneratePolygon` if the outline cannot be covered, for example
/// when the whole curve lies on the bottom edge
pub fn generate_fill_mesh(curve: &TerrainCurve) -> Result<FillMesh> {
    let vertices = curve.fill_polygon();
    let triangles = match triangulate(&vertices) {
        Ok(triangles) => triangles,
        Err(TerrainError::DegeneratePolygon {
            remaining,
            triangles,
        }) if covers_outline(&vertices, &triangles) => {
            debug!(
                "Fill mesh left {} collinear vertices out of the triangulation",
                remaining
            );
            triangles
        }
        Err(err) => return Err(err),
    };
    Ok(FillMesh { vertices, triangles })
}

/// Whether the triangles add up to the area of the outline
fn covers_outline(outline: &[Vec2], triangles: &[[usize; 3]]) -> bool {
    let expected = polygon_area(outline).abs();
    let covered: f32 = triangles
        .iter()
        .map(|&[a, b, c]| polygon_area(&[outline[a], outline[b], outline[c]]))
        .sum();
    expected > 0.0 && (covered - expected).abs() <= COVERAGE_TOLERANCE * expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CurveConfigBuilder, TargetArea};
    use crate::generation::CurveGenerator;

    fn area() -> TargetArea {
        TargetArea::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0), 0.0)
    }

    #[test]
    fn test_fill_mesh_covers_ground() {
        let curve = TerrainCurve::from_heights(area(), &[0.5, 0.7, 0.5]).unwrap();
        let mesh = generate_fill_mesh(&curve).unwrap();

        assert_eq!(mesh.vertex_count(), 5);
        assert_eq!(mesh.triangle_count(), 3);
        // two trapezoids of width 5 with heights 5 and 7
        assert!((mesh.area() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_generated_curve_mesh() {
        let config = CurveConfigBuilder::new().seed(42).build().unwrap();
        let curve = CurveGenerator::new(config).generate_seeded().unwrap();
        let mesh = generate_fill_mesh(&curve).unwrap();

        assert!(!mesh.is_empty());
        assert!(mesh.triangle_count() <= mesh.vertex_count() - 2);
        assert_eq!(mesh.indices().len(), mesh.triangle_count() * 3);
        assert_eq!(mesh.positions().len(), mesh.vertex_count());

        let outline = polygon_area(&mesh.vertices).abs();
        assert!((mesh.area() - outline).abs() <= 1e-3 * outline);
    }

    #[test]
    fn test_curve_touching_floor_is_covered() {
        // the middle node rests on the bottom edge and pinches the outline
        let curve = TerrainCurve::from_heights(area(), &[0.5, 0.0, 0.5]).unwrap();
        let mesh = generate_fill_mesh(&curve).unwrap();

        assert_eq!(mesh.triangle_count(), 2);
        assert!((mesh.area() - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_mesh_consistency() {
        let curve = TerrainCurve::from_heights(area(), &[0.2, 0.9, 0.4, 0.6]).unwrap();
        let mesh1 = generate_fill_mesh(&curve).unwrap();
        let mesh2 = generate_fill_mesh(&curve).unwrap();
        assert_eq!(mesh1, mesh2);
    }

    #[test]
    fn test_flat_curve_on_floor_is_degenerate() {
        let curve = TerrainCurve::from_heights(area(), &[0.0; 4]).unwrap();
        assert!(matches!(
            generate_fill_mesh(&curve),
            Err(TerrainError::DegeneratePolygon { .. })
        ));
    }

    #[test]
    fn test_uvs_tile_over_world_space() {
        let mesh = FillMesh {
            vertices: vec![Vec2::new(2.0, 4.0), Vec2::new(6.0, 0.0)],
            triangles: Vec::new(),
        };
        let uvs = mesh.uvs(Vec2::new(2.0, 0.0), Vec2::new(4.0, 8.0));
        assert_eq!(uvs, vec![Vec2::new(0.0, 0.5), Vec2::new(1.0, 0.0)]);
    }
}
