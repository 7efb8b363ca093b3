//! Demonstration of terrain curve generation
//!
//! Generates one curve per method plus a blended one, prints a small ASCII
//! profile of each and the size of its fill mesh.

use terrain_curve::{
    generate_fill_mesh, BlendWeights, CurveConfigBuilder, CurveGenerator, CurveMethod, GrassRules,
    TerrainCurve, TextureRules, VoronoiSettings,
};

const COLUMNS: usize = 60;
const ROWS: usize = 12;

fn print_profile(curve: &TerrainCurve) {
    let heights = curve.heights();
    let columns: Vec<usize> = (0..COLUMNS)
        .map(|c| {
            let i = c * (heights.len() - 1) / (COLUMNS - 1);
            (heights[i].clamp(0.0, 1.0) * (ROWS - 1) as f32).round() as usize
        })
        .collect();

    for row in (0..ROWS).rev() {
        let line: String = columns
            .iter()
            .map(|&top| if top >= row { '#' } else { ' ' })
            .collect();
        println!("|{}|", line);
    }
    println!("+{:-<width$}+", "", width = COLUMNS);
}

fn report(label: &str, weights: BlendWeights) -> Result<(), Box<dyn std::error::Error>> {
    let config = CurveConfigBuilder::new()
        .seed(42)
        .voronoi(VoronoiSettings {
            use_peaks: true,
            ..VoronoiSettings::PRESETS[0].settings
        })?
        .weights(weights)?
        .peak(0.3, 1.0)
        .peak(0.75, 0.6)
        .build()?;

    let mut curve = CurveGenerator::new(config).generate_seeded()?;
    curve.smooth(1);
    curve.apply_textures(&TextureRules::evenly_spaced(4, 0, 60.0))?;
    curve.apply_grass(&GrassRules {
        max_height: 0.7,
        ..GrassRules::default()
    });

    let mesh = generate_fill_mesh(&curve)?;
    let grassy = curve.nodes().iter().filter(|n| n.grass_ratio > 0.0).count();

    println!("\n{}", label);
    print_profile(&curve);
    println!(
        "{} nodes, {} with grass, {} fill triangles covering {:.1} square units",
        curve.len(),
        grassy,
        mesh.triangle_count(),
        mesh.area()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Terrain Curve Demo");

    for method in CurveMethod::ALL {
        report(method.name(), BlendWeights::only(method))?;
    }

    let blend = BlendWeights {
        perlin: 0.5,
        voronoi: 0.3,
        midpoint: 0.2,
        walk: 0.0,
    };
    report("Blend", blend)
}
