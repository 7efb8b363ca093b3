//! Surface texturing and grass placement by height and slope

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{is_steep, TerrainCurve};
use crate::error::{Result, TerrainError};

/// Height and slope rules choosing a texture for every node
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRules {
    /// Highest node height using each texture, indexed by texture
    ///
    /// Thresholds are relative to the largest one. Textures with a threshold
    /// of 0 or below are never picked by height.
    pub heights: Vec<f32>,
    /// Texture placed on steep slopes regardless of height
    pub cliff_texture: usize,
    /// Slope in degrees from which both segments around a node count as cliff
    pub cliff_start_angle: f32,
}

impl TextureRules {
    /// Equal height bands for `texture_count` textures, lowest band first
    pub fn evenly_spaced(texture_count: usize, cliff_texture: usize, cliff_start_angle: f32) -> Self {
        Self {
            heights: (0..texture_count)
                .map(|i| (i + 1) as f32 / texture_count as f32)
                .collect(),
            cliff_texture,
            cliff_start_angle,
        }
    }
}

/// Height and slope rules for grass coverage
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrassRules {
    /// Lowest normalized height with grass
    pub min_height: f32,
    /// Highest normalized height with grass
    pub max_height: f32,
    /// Slope in degrees from which grass no longer grows
    pub stop_angle: f32,
    /// Grass ratio given to every node that has grass
    pub density: f32,
}

impl Default for GrassRules {
    fn default() -> Self {
        Self {
            min_height: 0.0,
            max_height: 1.0,
            stop_angle: 80.0,
            density: 1.0,
        }
    }
}

impl TerrainCurve {
    /// Pick a texture for every node
    ///
    /// A node takes the texture with the lowest threshold at or above its
    /// height, then the cliff texture if it sits on a steep slope.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if no threshold is above 0
    pub fn apply_textures(&mut self, rules: &TextureRules) -> Result<()> {
        let max = rules.heights.iter().cloned().fold(f32::MIN, f32::max);
        if !(max > 0.0) {
            return Err(TerrainError::InvalidArgument(
                "No texture heights defined above ground".to_string(),
            ));
        }

        let mut thresholds: Vec<(f32, usize)> = rules
            .heights
            .iter()
            .enumerate()
            .filter(|&(_, &h)| h > 0.0)
            .map(|(texture, &h)| (h / max, texture))
            .collect();
        thresholds.sort_by(|a, b| a.0.total_cmp(&b.0));

        for i in 0..self.nodes.len() {
            let height = self.nodes[i].height;
            if let Some(&(_, texture)) = thresholds.iter().find(|(threshold, _)| height <= *threshold) {
                self.nodes[i].texture = texture;
            }

            if let Some(slopes) = self.slopes_around(i) {
                if is_steep(slopes, rules.cliff_start_angle) {
                    self.nodes[i].texture = rules.cliff_texture;
                }
            }
        }
        Ok(())
    }

    /// Set the grass ratio of every node
    ///
    /// Nodes within the height range get the rule's density, all others
    /// and nodes on steep slopes get none.
    pub fn apply_grass(&mut self, rules: &GrassRules) {
        for i in 0..self.nodes.len() {
            let height = self.nodes[i].height;
            let mut ratio = if (rules.min_height..=rules.max_height).contains(&height) {
                rules.density
            } else {
                0.0
            };

            if let Some(slopes) = self.slopes_around(i) {
                if is_steep(slopes, rules.stop_angle) {
                    ratio = 0.0;
                }
            }
            self.nodes[i].grass_ratio = ratio;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TargetArea;
    use glam::Vec2;

    fn curve(heights: &[f32]) -> TerrainCurve {
        let area = TargetArea::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0), 0.0);
        TerrainCurve::from_heights(area, heights).unwrap()
    }

    fn textures(curve: &TerrainCurve) -> Vec<usize> {
        curve.nodes().iter().map(|n| n.texture).collect()
    }

    #[test]
    fn test_textures_by_height() {
        let mut curve = curve(&[0.1, 0.3, 0.45, 0.6, 0.9]);
        let rules = TextureRules {
            heights: vec![0.25, 0.5, 1.0],
            cliff_texture: 7,
            cliff_start_angle: 90.0,
        };
        curve.apply_textures(&rules).unwrap();
        assert_eq!(textures(&curve), vec![0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_texture_thresholds_are_relative() {
        // 0.1 and 0.2 scale to 0.5 and 1.0
        let mut curve = curve(&[0.4, 0.6]);
        let rules = TextureRules {
            heights: vec![0.2, 0.1],
            cliff_texture: 0,
            cliff_start_angle: 90.0,
        };
        curve.apply_textures(&rules).unwrap();
        assert_eq!(textures(&curve), vec![1, 0]);
    }

    #[test]
    fn test_underground_textures_are_skipped() {
        let mut curve = curve(&[0.0, 0.5]);
        let rules = TextureRules {
            heights: vec![-0.1, 1.0],
            cliff_texture: 0,
            cliff_start_angle: 90.0,
        };
        curve.apply_textures(&rules).unwrap();
        assert_eq!(textures(&curve), vec![1, 1]);
    }

    #[test]
    fn test_no_texture_above_ground() {
        let mut curve = curve(&[0.0, 0.5]);
        let rules = TextureRules {
            heights: vec![0.0, -0.1],
            cliff_texture: 0,
            cliff_start_angle: 45.0,
        };
        assert!(matches!(
            curve.apply_textures(&rules),
            Err(TerrainError::InvalidArgument(_))
        ));

        let empty = TextureRules::evenly_spaced(0, 0, 45.0);
        assert!(curve.apply_textures(&empty).is_err());
    }

    #[test]
    fn test_cliff_texture_on_steep_slopes() {
        // 5 nodes over 10 units: a 0.5 step is 5 high over 2.5 wide (~63 degrees)
        let mut curve = curve(&[0.0, 0.5, 1.0, 1.0, 0.5]);
        let rules = TextureRules::evenly_spaced(2, 5, 60.0);
        curve.apply_textures(&rules).unwrap();

        // bands are [0, 0.5] and (0.5, 1]; only node 1 has two steep rising
        // segments and the ends are never cliffs
        assert_eq!(textures(&curve), vec![0, 5, 1, 1, 0]);
    }

    #[test]
    fn test_evenly_spaced_thresholds() {
        let rules = TextureRules::evenly_spaced(3, 0, 45.0);
        assert_eq!(rules.heights, vec![1.0 / 3.0, 2.0 / 3.0, 1.0]);
        assert_eq!(TextureRules::evenly_spaced(1, 0, 45.0).heights, vec![1.0]);
        assert!(TextureRules::evenly_spaced(0, 0, 45.0).heights.is_empty());
    }

    #[test]
    fn test_evenly_spaced_uses_every_texture() {
        let mut curve = curve(&[0.1, 0.5, 0.9]);
        curve.apply_textures(&TextureRules::evenly_spaced(3, 7, 90.0)).unwrap();
        assert_eq!(textures(&curve), vec![0, 1, 2]);
    }

    #[test]
    fn test_grass_in_height_range() {
        let mut curve = curve(&[0.1, 0.3, 0.5, 0.7, 0.9]);
        let rules = GrassRules {
            min_height: 0.3,
            max_height: 0.7,
            stop_angle: 90.0,
            density: 0.6,
        };
        curve.apply_grass(&rules);

        let ratios: Vec<f32> = curve.nodes().iter().map(|n| n.grass_ratio).collect();
        assert_eq!(ratios, vec![0.0, 0.6, 0.6, 0.6, 0.0]);
    }

    #[test]
    fn test_grass_stops_on_steep_slopes() {
        let mut curve = curve(&[1.0, 0.5, 0.0, 0.0, 0.0]);
        let rules = GrassRules {
            stop_angle: 45.0,
            ..GrassRules::default()
        };
        curve.apply_grass(&rules);

        let ratios: Vec<f32> = curve.nodes().iter().map(|n| n.grass_ratio).collect();
        assert_eq!(ratios, vec![1.0, 0.0, 1.0, 1.0, 1.0]);
    }
}
