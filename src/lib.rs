//! Procedural 2D terrain curve generation
//!
//! A standalone library for generating side-view terrain surfaces over a
//! rotated rectangular target area, suitable for use with any game engine
//! (Bevy, Godot, etc.)
//!
//! Heights come from four blendable methods: Perlin value noise, Voronoi
//! peak slopes, midpoint displacement and a slope-limited random walk.
//!
//! # Quick Start
//!
//! ```rust
//! use terrain_curve::*;
//!
//! // Configure a curve blending two methods
//! let config = CurveConfigBuilder::new()
//!     .seed(42)
//!     .weight(CurveMethod::Perlin, 0.7).unwrap()
//!     .weight(CurveMethod::Midpoint, 0.3).unwrap()
//!     .build().unwrap();
//!
//! let mut curve = CurveGenerator::new(config).generate_seeded().unwrap();
//! curve.smooth(2);
//! curve.apply_textures(&TextureRules::evenly_spaced(3, 0, 60.0)).unwrap();
//!
//! // Generate the ground mesh for rendering
//! let mesh = generate_fill_mesh(&curve).unwrap();
//! println!("Generated {} triangles", mesh.triangle_count());
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration and curves

// Modules
pub mod error;
pub mod config;
pub mod terrain;
pub mod generation;
pub mod curve;
pub mod mesh;

// Re-export core types for convenience
pub use error::{TerrainError, Result};
pub use config::{
    BlendWeights, CurveConfig, CurveConfigBuilder, MidpointSettings, PerlinSettings, Preset,
    TargetArea, VoronoiSettings, WalkSettings,
};
pub use terrain::{
    normalize, HeightMap, Midpoint, Peak, PeakType, PerlinConfig, PerlinNoise, PerlinOctave,
    RandomWalk, Voronoi,
};
pub use generation::{blend_heights, prepare_peaks, CurveGenerator, CurveMethod};
pub use curve::{CurveNode, GrassRules, TerrainCurve, TextureRules};
pub use mesh::{generate_fill_mesh, polygon_area, triangulate, FillMesh};

// Re-export glam::Vec2 for convenience
pub use glam::Vec2;
