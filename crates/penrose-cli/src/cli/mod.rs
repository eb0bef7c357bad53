//! CLI command implementations.
//!
//! - `generate` - Build a tiling and write SVG (plus optional PNG / JSON)
//! - `config` - Config file loading and the example config
//! - `export` - PNG rasterization and JSON tile export

pub mod config;
pub mod export;
pub mod generate;

pub use config::cmd_config;
pub use generate::cmd_generate;
