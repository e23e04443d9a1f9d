//! Memory-schematic layout engine.
//!
//! Given the four parameters of a memory built from identical chips —
//! memory capacity, memory word size, chip capacity, chip word size — this
//! crate derives the chip grid, lays out a complete schematic (chips, MAR
//! cells, R/W bus, row decoder, address lines, data bus) as an ordered
//! sequence of renderer-agnostic draw commands, and exports it to SVG.

pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod geometry;
pub mod layout;
pub mod memory;
pub mod theme;

use clap::Parser;
use export::Exporter;
use log::{debug, info};

pub use error::MemgridError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Total memory capacity, in words
    pub memory_capacity: u64,

    /// Size of a memory word, in bits
    pub memory_word_size: u64,

    /// Capacity of a single chip, in words
    pub chip_capacity: u64,

    /// Size of a chip word, in bits
    pub chip_word_size: u64,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "schematic.svg")]
    pub output: String,

    /// Path to a TOML configuration file overriding the default theme
    #[arg(short, long)]
    pub config: Option<String>,
}

pub fn run(cfg: &Config) -> Result<(), MemgridError> {
    let app_config = match &cfg.config {
        Some(path) => config::AppConfig::load(path)?,
        None => config::AppConfig::default(),
    };

    // Deriving the chip grid
    let spec = memory::MemorySpec::new(
        cfg.memory_capacity,
        cfg.memory_word_size,
        cfg.chip_capacity,
        cfg.chip_word_size,
    )?;
    let dims = spec.grid_dimensions()?;
    info!(
        rows = dims.rows(),
        columns = dims.columns(),
        chips = dims.chip_count();
        "Chip grid derived",
    );

    // Laying out the schematic
    info!("Calculating schematic layout");
    let engine = layout::Engine::new(&app_config.theme);
    let commands = engine.schematic(&dims);
    debug!(commands_len = commands.len(); "Layout calculated");

    // Export the schematic
    info!("Exporting schematic to SVG");
    let svg_exporter = export::svg::Svg::new(&cfg.output);
    svg_exporter.export_schematic(&commands)?;

    info!(output_file = cfg.output; "SVG exported successfully to");

    Ok(())
}
