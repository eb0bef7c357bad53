//! SVG serialization of a tile ensemble.
//!
//! The document is centred on the origin: the viewBox spans
//! `[-m, -m, 2m, 2m]` with `m = scale · margin`. A single group carries the
//! shared stroke style; every tile becomes one filled `<path>` and, with
//! arcs enabled, two more unfilled stroked `<path>`s.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::config::Config;
use crate::error::TilingError;
use crate::geometry::PSI;
use crate::tile::{Tile, TileKind};

/// Render `tiles` as a complete SVG document.
///
/// `ngen` only affects the stroke width, which shrinks with the tiles:
/// `ψ^ngen · scale · base-stroke-width`.
pub fn render_svg(
    tiles: &[Tile],
    config: &Config,
    scale: f64,
    ngen: u32,
) -> Result<String, TilingError> {
    let half = scale * config.margin;
    let stroke_width = PSI.powi(ngen.min(i32::MAX as u32) as i32) * scale * config.base_stroke_width;

    let mut svg = String::with_capacity(128 + tiles.len() * 160);
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<svg width="{}" height="{}" viewBox="{} {} {} {}" preserveAspectRatio="xMidYMid meet" version="1.1" baseProfile="full" xmlns="http://www.w3.org/2000/svg">
<g style="stroke:{}; stroke-width: {}; stroke-linejoin: round;">
"#,
        config.width,
        config.height,
        -half,
        -half,
        2.0 * half,
        2.0 * half,
        config.stroke_colour,
        stroke_width,
    ));

    // Only built when needed, so default renders stay deterministic.
    let mut rng: Option<Box<dyn RngCore>> = config.random_tile_colours.then(|| match config.colour_seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)) as Box<dyn RngCore>,
        None => Box::new(rand::rng()),
    });

    let half_arc = !config.draw_rhombuses;
    for tile in tiles {
        if config.draw_tiles {
            let fill = match rng.as_mut() {
                Some(rng) => random_colour(rng),
                None => tile_colour(tile, config)?,
            };
            svg.push_str(&format!(
                "<path fill=\"{}\" fill-opacity=\"{}\" d=\"{}\"/>\n",
                fill,
                config.tile_opacity,
                tile.path(config.draw_rhombuses)
            ));
        }

        if config.draw_arcs {
            let [arc_a, arc_c] = tile.arcs(half_arc);
            svg.push_str(&format!(
                "<path fill=\"none\" stroke=\"{}\" d=\"{}\"/>\n",
                config.a_arc_colour,
                arc_a.path_data()
            ));
            svg.push_str(&format!(
                "<path fill=\"none\" stroke=\"{}\" d=\"{}\"/>\n",
                config.c_arc_colour,
                arc_c.path_data()
            ));
        }
    }

    svg.push_str("</g>\n</svg>\n");
    Ok(svg)
}

fn tile_colour(tile: &Tile, config: &Config) -> Result<String, TilingError> {
    match tile.kind() {
        TileKind::Small => config.small_tile_colour.resolve("Stile-colour", tile),
        TileKind::Large => config.large_tile_colour.resolve("Ltile-colour", tile),
    }
}

fn random_colour<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.random_range(0..=0xff_ffff_u32))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TileColour;
    use crate::geometry::Point;
    use crate::testutil::{parse_paths, root_attribute};
    use approx::assert_relative_eq;

    fn tiles() -> Vec<Tile> {
        vec![
            Tile::large(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)),
            Tile::small(Point::new(0.0, 0.0), Point::new(0.5, -2.0), Point::new(1.0, 0.0)),
        ]
    }

    #[test]
    fn document_structure() {
        let svg = render_svg(&tiles(), &Config::default(), 10.0, 0).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("<g style=\"stroke:#fff; stroke-width: 0.5; stroke-linejoin: round;\">"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(root_attribute(&svg, "width").as_deref(), Some("100%"));
    }

    #[test]
    fn viewbox_is_centred_on_origin() {
        let svg = render_svg(&tiles(), &Config::default(), 10.0, 0).unwrap();
        let viewbox: Vec<f64> = root_attribute(&svg, "viewBox")
            .unwrap()
            .split_whitespace()
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(viewbox.len(), 4);
        assert_relative_eq!(viewbox[0], -10.5, epsilon = 1e-9);
        assert_relative_eq!(viewbox[1], -10.5, epsilon = 1e-9);
        assert_relative_eq!(viewbox[2], 21.0, epsilon = 1e-9);
        assert_relative_eq!(viewbox[3], 21.0, epsilon = 1e-9);
    }

    #[test]
    fn stroke_width_shrinks_with_generations() {
        let svg = render_svg(&[], &Config::default(), 100.0, 2).unwrap();
        let expected = PSI.powi(2) * 100.0 * 0.05;
        assert!(svg.contains(&format!("stroke-width: {};", expected)));
    }

    #[test]
    fn tiles_use_their_kind_colour() {
        let paths = parse_paths(&render_svg(&tiles(), &Config::default(), 10.0, 0).unwrap());
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].fill.as_deref(), Some("#0035f3"));
        assert_eq!(paths[1].fill.as_deref(), Some("#08f"));
        assert_eq!(paths[0].d, "m0,0 l1,1 l1,-1 l-1,-1z");
    }

    #[test]
    fn triangles_when_rhombuses_disabled() {
        let mut config = Config::default();
        config.draw_rhombuses = false;
        let paths = parse_paths(&render_svg(&tiles(), &config, 10.0, 0).unwrap());
        assert_eq!(paths[0].d, "m0,0 l1,1 l1,-1z");
    }

    #[test]
    fn arcs_follow_each_tile() {
        let mut config = Config::default();
        config.draw_arcs = true;
        let paths = parse_paths(&render_svg(&tiles(), &config, 10.0, 0).unwrap());
        assert_eq!(paths.len(), 6);
        assert_eq!(paths[1].fill.as_deref(), Some("none"));
        assert_eq!(paths[1].stroke.as_deref(), Some("#f00"));
        assert_eq!(paths[2].stroke.as_deref(), Some("#00f"));
        assert!(paths[1].d.starts_with("M ") && paths[1].d.contains(" A "));
    }

    #[test]
    fn random_colours_are_reproducible_with_seed() {
        let mut config = Config::default();
        config.random_tile_colours = true;
        config.colour_seed = Some(7);
        let first = render_svg(&tiles(), &config, 10.0, 0).unwrap();
        let second = render_svg(&tiles(), &config, 10.0, 0).unwrap();
        assert_eq!(first, second);

        for path in parse_paths(&first) {
            let fill = path.fill.unwrap();
            assert_eq!(fill.len(), 7);
            assert!(fill.starts_with('#'));
            assert!(u32::from_str_radix(&fill[1..], 16).is_ok());
        }
    }

    #[test]
    fn colour_provider_errors_propagate() {
        let mut config = Config::default();
        config.large_tile_colour =
            TileColour::computed(|_| Err(TilingError::ColourProvider("boom".to_string())));
        let err = render_svg(&tiles(), &config, 10.0, 0).unwrap_err();
        assert!(matches!(err, TilingError::ColourProvider(_)));
    }

    #[test]
    fn output_is_valid_svg() {
        let mut config = Config::default();
        config.draw_arcs = true;
        config.width = "400".to_string();
        config.height = "400".to_string();
        let svg = render_svg(&tiles(), &config, 10.0, 1).unwrap();
        assert!(usvg::Tree::from_str(&svg, &usvg::Options::default()).is_ok());
    }
}
