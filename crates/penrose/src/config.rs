//! Rendering options for a tiling.
//!
//! Options use the same hyphenated keys everywhere: in YAML/JSON config
//! files (through serde) and in textual `key=value` overrides (through
//! [`Config::set`]). Unknown keys are ignored in both cases.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::error::TilingError;
use crate::tile::Tile;

/// Signature of a colour callback: a colour string for the given tile.
pub type ColourFn = Arc<dyn Fn(&Tile) -> Result<String, TilingError> + Send + Sync>;

/// Where a tile's fill colour comes from.
#[derive(Clone)]
pub enum TileColour {
    /// The same colour for every tile of this kind.
    Fixed(String),
    /// A colour computed from each tile.
    Computed(ColourFn),
}

impl TileColour {
    /// Wrap a closure as a colour provider.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Tile) -> Result<String, TilingError> + Send + Sync + 'static,
    {
        TileColour::Computed(Arc::new(f))
    }

    /// Colour for `tile`. Computed colours are validated before use;
    /// provider errors are passed through untouched.
    pub fn resolve(&self, key: &str, tile: &Tile) -> Result<String, TilingError> {
        match self {
            TileColour::Fixed(colour) => Ok(colour.clone()),
            TileColour::Computed(f) => {
                let colour = f(tile)?;
                check_colour(key, &colour)?;
                Ok(colour)
            }
        }
    }
}

impl fmt::Debug for TileColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileColour::Fixed(colour) => f.debug_tuple("Fixed").field(colour).finish(),
            TileColour::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for TileColour {
    fn from(colour: &str) -> Self {
        TileColour::Fixed(colour.to_string())
    }
}

impl From<String> for TileColour {
    fn from(colour: String) -> Self {
        TileColour::Fixed(colour)
    }
}

// Only fixed colours can come from a file.
impl<'de> Deserialize<'de> for TileColour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(TileColour::Fixed)
    }
}

/// Rendering and build options.
///
/// Field names map to the hyphenated keys documented on each field.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// `width`: SVG width attribute.
    pub width: String,
    /// `height`: SVG height attribute.
    pub height: String,
    /// `stroke-colour`: outline colour for every tile.
    pub stroke_colour: String,
    /// `base-stroke-width`: multiplied by `ψ^ngen · scale`.
    pub base_stroke_width: f64,
    /// `margin`: viewBox half-size as a fraction of the scale.
    pub margin: f64,
    /// `tile-opacity`: fill opacity in `[0, 1]`.
    pub tile_opacity: f64,
    /// `random-tile-colours`: ignore the tile colours and pick random ones.
    pub random_tile_colours: bool,
    /// `colour-seed`: makes random tile colours reproducible.
    pub colour_seed: Option<u64>,
    /// `Stile-colour`
    #[serde(rename = "Stile-colour")]
    pub small_tile_colour: TileColour,
    /// `Ltile-colour`
    #[serde(rename = "Ltile-colour")]
    pub large_tile_colour: TileColour,
    /// `Aarc-colour`: arc anchored at each tile's `A` vertex.
    #[serde(rename = "Aarc-colour")]
    pub a_arc_colour: String,
    /// `Carc-colour`: arc anchored at each tile's `C` vertex.
    #[serde(rename = "Carc-colour")]
    pub c_arc_colour: String,
    pub draw_tiles: bool,
    pub draw_arcs: bool,
    /// `reflect-x`: complete the figure with its mirror image about the x-axis.
    pub reflect_x: bool,
    /// `draw-rhombuses`: draw whole rhombuses (and deduplicate) rather than triangles.
    pub draw_rhombuses: bool,
    /// `rotate`: whole-figure rotation in radians, counter-clockwise.
    pub rotate: f64,
    pub flip_y: bool,
    pub flip_x: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "100%".to_string(),
            stroke_colour: "#fff".to_string(),
            base_stroke_width: 0.05,
            margin: 1.05,
            tile_opacity: 0.6,
            random_tile_colours: false,
            colour_seed: None,
            small_tile_colour: TileColour::from("#08f"),
            large_tile_colour: TileColour::from("#0035f3"),
            a_arc_colour: "#f00".to_string(),
            c_arc_colour: "#00f".to_string(),
            draw_tiles: true,
            draw_arcs: false,
            reflect_x: true,
            draw_rhombuses: true,
            rotate: 0.0,
            flip_y: false,
            flip_x: false,
        }
    }
}

/// All keys understood by [`Config::set`].
pub const KEYS: &[&str] = &[
    "width",
    "height",
    "stroke-colour",
    "base-stroke-width",
    "margin",
    "tile-opacity",
    "random-tile-colours",
    "colour-seed",
    "Stile-colour",
    "Ltile-colour",
    "Aarc-colour",
    "Carc-colour",
    "draw-tiles",
    "draw-arcs",
    "reflect-x",
    "draw-rhombuses",
    "rotate",
    "flip-y",
    "flip-x",
];

impl Config {
    /// Set one option from its textual value.
    ///
    /// Returns `Ok(false)` (and logs a warning) for an unknown key, which
    /// leaves the config untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool, TilingError> {
        let value = value.trim();
        match key {
            "width" => self.width = value.to_string(),
            "height" => self.height = value.to_string(),
            "stroke-colour" => self.stroke_colour = value.to_string(),
            "base-stroke-width" => self.base_stroke_width = parse_f64(key, value)?,
            "margin" => self.margin = parse_f64(key, value)?,
            "tile-opacity" => self.tile_opacity = parse_f64(key, value)?,
            "random-tile-colours" => self.random_tile_colours = parse_bool(key, value)?,
            "colour-seed" => {
                self.colour_seed = match value {
                    "" | "none" => None,
                    v => Some(v.parse().map_err(|e| TilingError::config(key, format!("{e}")))?),
                }
            }
            "Stile-colour" => self.small_tile_colour = TileColour::from(value),
            "Ltile-colour" => self.large_tile_colour = TileColour::from(value),
            "Aarc-colour" => self.a_arc_colour = value.to_string(),
            "Carc-colour" => self.c_arc_colour = value.to_string(),
            "draw-tiles" => self.draw_tiles = parse_bool(key, value)?,
            "draw-arcs" => self.draw_arcs = parse_bool(key, value)?,
            "reflect-x" => self.reflect_x = parse_bool(key, value)?,
            "draw-rhombuses" => self.draw_rhombuses = parse_bool(key, value)?,
            "rotate" => self.rotate = parse_f64(key, value)?,
            "flip-y" => self.flip_y = parse_bool(key, value)?,
            "flip-x" => self.flip_x = parse_bool(key, value)?,
            _ => {
                tracing::warn!(key, "ignoring unknown configuration key");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Apply a sequence of `(key, value)` overrides on top of `self`.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Result<Self, TilingError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in overrides {
            self.set(key.as_ref(), value.as_ref())?;
        }
        Ok(self)
    }

    /// Check every option that ends up in the SVG document.
    pub fn validate(&self) -> Result<(), TilingError> {
        check_length("width", &self.width)?;
        check_length("height", &self.height)?;
        check_colour("stroke-colour", &self.stroke_colour)?;
        check_colour("Aarc-colour", &self.a_arc_colour)?;
        check_colour("Carc-colour", &self.c_arc_colour)?;
        if let TileColour::Fixed(colour) = &self.small_tile_colour {
            check_colour("Stile-colour", colour)?;
        }
        if let TileColour::Fixed(colour) = &self.large_tile_colour {
            check_colour("Ltile-colour", colour)?;
        }

        if !(self.base_stroke_width.is_finite() && self.base_stroke_width >= 0.0) {
            return Err(TilingError::config("base-stroke-width", "must be a finite number >= 0"));
        }
        if !(self.margin.is_finite() && self.margin > 0.0) {
            return Err(TilingError::config("margin", "must be a finite number > 0"));
        }
        if !(0.0..=1.0).contains(&self.tile_opacity) {
            return Err(TilingError::config("tile-opacity", "must lie in [0, 1]"));
        }
        if !self.rotate.is_finite() {
            return Err(TilingError::config("rotate", "must be finite"));
        }
        Ok(())
    }
}

/// Reject anything that is not a valid SVG colour.
pub(crate) fn check_colour(key: &str, value: &str) -> Result<(), TilingError> {
    svgtypes::Color::from_str(value)
        .map(|_| ())
        .map_err(|_| TilingError::InvalidColour {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn check_length(key: &str, value: &str) -> Result<(), TilingError> {
    svgtypes::Length::from_str(value)
        .map(|_| ())
        .map_err(|_| TilingError::InvalidLength {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn parse_f64(key: &str, value: &str) -> Result<f64, TilingError> {
    value
        .parse()
        .map_err(|e| TilingError::config(key, format!("{e}")))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, TilingError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(TilingError::config(key, format!("expected a boolean, got `{other}`"))),
    }
}

// ============================================================================
// TESTS
// ============================================================================
