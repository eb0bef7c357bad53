//! Config files for the `generate` command.
//!
//! Files are YAML unless the extension is `.json`. Keys are the same
//! hyphenated names accepted by `--set`; unknown keys are ignored with a warning.

use std::fs;
use std::path::Path;

use penrose::Config;
use penrose::config::KEYS;

/// Example config with every key at its default value.
pub const EXAMPLE_CONFIG: &str = r##"# penrose configuration
# Any key may be omitted; these are the defaults.

width: "100%"
height: "100%"
stroke-colour: "#fff"
base-stroke-width: 0.05
margin: 1.05
tile-opacity: 0.6

# Random fills replace the tile colours; set colour-seed to make them repeatable.
random-tile-colours: false
# colour-seed: 42

Stile-colour: "#08f"
Ltile-colour: "#0035f3"
Aarc-colour: "#f00"
Carc-colour: "#00f"

draw-tiles: true
draw-arcs: false
reflect-x: true
draw-rhombuses: true

# Radians, counter-clockwise.
rotate: 0
flip-y: false
flip-x: false
"##;

/// Load a config file, picking the format from its extension.
///
/// Unknown keys are skipped with a warning, like `--set` does.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    let parse_error = |e: &dyn std::fmt::Display| format!("Failed to parse config {}: {}", path.display(), e);

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config: Config = if is_json {
        let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| parse_error(&e))?;
        if let Some(map) = value.as_object() {
            warn_unknown_keys(map.keys().map(String::as_str));
        }
        serde_json::from_value(value).map_err(|e| parse_error(&e))?
    } else {
        let value: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|e| parse_error(&e))?;
        match &value {
            // An empty file is an empty config.
            serde_yaml::Value::Null => return Ok(Config::default()),
            serde_yaml::Value::Mapping(map) => {
                warn_unknown_keys(map.keys().filter_map(serde_yaml::Value::as_str));
            }
            _ => {}
        }
        serde_yaml::from_value(value).map_err(|e| parse_error(&e))?
    };

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Warn about every key `Config` does not know. Returns the ignored keys.
pub fn warn_unknown_keys<'a, I>(keys: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let unknown: Vec<&str> = keys.into_iter().filter(|key| !KEYS.contains(key)).collect();
    for key in &unknown {
        tracing::warn!(key, "ignoring unknown configuration key");
    }
    unknown
}

/// Print the example config to stdout.
pub fn cmd_config() {
    print!("{}", EXAMPLE_CONFIG);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("penrose-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn example_config_matches_defaults() {
        let parsed: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        let defaults = Config::default();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.width, defaults.width);
        assert_eq!(parsed.stroke_colour, defaults.stroke_colour);
        assert_eq!(parsed.margin, defaults.margin);
        assert_eq!(parsed.a_arc_colour, defaults.a_arc_colour);
        assert_eq!(parsed.draw_rhombuses, defaults.draw_rhombuses);
        assert_eq!(parsed.colour_seed, None);
    }

    #[test]
    fn loads_partial_yaml() {
        let path = temp_file("partial.yaml", "draw-arcs: true\nmargin: 1.5\nunknown-key: 3\n");
        let config = load_config(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(config.draw_arcs);
        assert_eq!(config.margin, 1.5);
        assert!(config.draw_tiles);
    }

    #[test]
    fn flags_unknown_keys() {
        let ignored = warn_unknown_keys(["draw-arc", "margin", "Stile-colour", "stile-colour"]);
        assert_eq!(ignored, ["draw-arc", "stile-colour"]);
        assert!(warn_unknown_keys(KEYS.iter().copied()).is_empty());
    }

    #[test]
    fn misspelt_key_leaves_default() {
        let path = temp_file("typo.yaml", "draw-arc: true\n");
        let config = load_config(&path).unwrap();
        fs::remove_file(&path).ok();
        assert!(!config.draw_arcs);
    }

    #[test]
    fn empty_file_is_default_config() {
        let path = temp_file("empty.yaml", "");
        let config = load_config(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.margin, Config::default().margin);
    }

    #[test]
    fn loads_json_by_extension() {
        let path = temp_file("config.json", r##"{"Ltile-colour": "#123456", "colour-seed": 9}"##);
        let config = load_config(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(format!("{:?}", config.large_tile_colour), "Fixed(\"#123456\")");
        assert_eq!(config.colour_seed, Some(9));
    }

    #[test]
    fn reports_missing_and_malformed_files() {
        assert!(load_config("/definitely/not/here.yaml").is_err());

        let path = temp_file("bad.yaml", "margin: [1, 2\n");
        let result = load_config(&path);
        fs::remove_file(&path).ok();
        assert!(result.unwrap_err().contains("Failed to parse"));
    }
}
