//! Terrain curve laid out in the target area
//!
//! A [`TerrainCurve`] owns one [`CurveNode`] per height sample. Nodes are
//! spread evenly along the bottom edge of the target area and lifted towards
//! the top edge by their normalized height, so the curve follows the area's
//! rotation.

mod surface;

pub use surface::{GrassRules, TextureRules};

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::TargetArea;
use crate::error::{Result, TerrainError};

/// One point of the terrain surface
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveNode {
    /// World position of the node
    pub position: Vec2,
    /// Normalized height within the target area (0 = bottom edge, 1 = top edge)
    pub height: f32,
    /// Index of the surface texture used from this node on
    pub texture: usize,
    /// Amount of grass at this node, in `[0, 1]`
    pub grass_ratio: f32,
}

/// Generated terrain surface over a target area
///
/// # Example
///
/// ```
/// use terrain_curve::*;
///
/// let mut curve = TerrainCurve::from_heights(TargetArea::default(), &[0.0, 1.0, 0.0]).unwrap();
/// curve.smooth(1);
/// assert_eq!(curve.heights(), vec![0.0, 0.5, 0.0]);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainCurve {
    area: TargetArea,
    nodes: Vec<CurveNode>,
}

impl TerrainCurve {
    /// Lay out normalized heights as nodes across the target area
    ///
    /// Every node starts with texture 0 and no grass.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if fewer than two heights are given
    pub fn from_heights(area: TargetArea, heights: &[f32]) -> Result<Self> {
        if heights.len() < 2 {
            return Err(TerrainError::InvalidArgument(format!(
                "A terrain curve needs at least 2 nodes (got {})",
                heights.len()
            )));
        }

        let nodes = heights
            .iter()
            .map(|&height| CurveNode {
                position: Vec2::ZERO,
                height,
                texture: 0,
                grass_ratio: 0.0,
            })
            .collect();

        let mut curve = Self { area, nodes };
        curve.layout();
        Ok(curve)
    }

    #[inline]
    pub fn area(&self) -> &TargetArea {
        &self.area
    }

    pub fn nodes(&self) -> &[CurveNode] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// World positions of all nodes, left to right
    pub fn points(&self) -> Vec<Vec2> {
        self.nodes.iter().map(|node| node.position).collect()
    }

    /// Normalized heights of all nodes, left to right
    pub fn heights(&self) -> Vec<f32> {
        self.nodes.iter().map(|node| node.height).collect()
    }

    /// Average every interior node with its neighbours `iterations` times
    ///
    /// Each pass moves a node halfway towards the mean of its two
    /// neighbours. The end nodes never move.
    pub fn smooth(&mut self, iterations: usize) {
        let n = self.nodes.len();
        if n < 3 || iterations == 0 {
            return;
        }

        let mut heights = self.heights();
        let mut next = heights.clone();
        for _ in 0..iterations {
            for i in 1..n - 1 {
                let average = 0.5 * (heights[i - 1] + heights[i + 1]);
                next[i] = 0.5 * (average + heights[i]);
            }
            std::mem::swap(&mut heights, &mut next);
        }

        for (node, height) in self.nodes.iter_mut().zip(heights) {
            node.height = height;
        }
        self.layout();
    }

    /// Outline of the ground below the curve
    ///
    /// The curve nodes followed by the bottom-right and bottom-left corners
    /// of the target area. A corner is left out when the curve already ends
    /// on it.
    pub fn fill_polygon(&self) -> Vec<Vec2> {
        let [bottom_left, _, _, bottom_right] = self.area.boundary();
        let mut polygon = self.points();

        if self.nodes.last().map(|node| node.position) != Some(bottom_right) {
            polygon.push(bottom_right);
        }
        if self.nodes.first().map(|node| node.position) != Some(bottom_left) {
            polygon.push(bottom_left);
        }
        polygon
    }

    /// Slopes of the segments left and right of interior node `i`, in
    /// degrees within the unrotated target area
    fn slopes_around(&self, i: usize) -> Option<(f32, f32)> {
        if i == 0 || i + 1 >= self.nodes.len() {
            return None;
        }
        let dx = self.area.size.x / (self.nodes.len() - 1) as f32;
        let slope = |from: &CurveNode, to: &CurveNode| {
            ((to.height - from.height) * self.area.size.y).atan2(dx).to_degrees()
        };
        Some((
            slope(&self.nodes[i - 1], &self.nodes[i]),
            slope(&self.nodes[i], &self.nodes[i + 1]),
        ))
    }

    /// Recompute node positions from their heights
    fn layout(&mut self) {
        let [bottom_left, top_left, _, bottom_right] = self.area.boundary();
        let up = top_left - bottom_left;
        let along = bottom_right - bottom_left;
        let last = (self.nodes.len() - 1).max(1) as f32;

        for (i, node) in self.nodes.iter_mut().enumerate() {
            let r = i as f32 / last;
            node.position = bottom_left + along * r + up * node.height;
        }
    }
}

/// Both segments around a node climb at least `angle`, or both descend at
/// least `angle`
fn is_steep((left, right): (f32, f32), angle: f32) -> bool {
    (left >= angle && right >= angle) || (left <= -angle && right <= -angle)
}
