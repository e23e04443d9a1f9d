//! Layout generators for the memory schematic.
//!
//! Each submodule is a pure function from [`GridDimensions`] and [`Theme`]
//! to draw commands. The engine runs them in a fixed order — chips,
//! addressing units, R/W bus, decoder, address lines, data bus — which is
//! also the z-order of the rendered output.

mod address_lines;
mod addressing;
mod chips;
mod data_bus;
mod decoder;
mod rw_bus;

use log::debug;

use crate::{draw::DrawCommand, memory::GridDimensions, theme::Theme};

/// Computes the full schematic for a chip grid.
///
/// Holds only a borrowed theme; every call to [`Engine::schematic`] starts
/// from scratch, so one engine can serve any number of layout requests.
pub struct Engine<'a> {
    theme: &'a Theme,
}

impl<'a> Engine<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Produces the ordered command sequence for the given grid.
    pub fn schematic(&self, dims: &GridDimensions) -> Vec<DrawCommand> {
        let mut commands = Vec::new();

        chips::generate(dims, self.theme, &mut commands);
        addressing::generate(dims, self.theme, &mut commands);
        rw_bus::generate(dims, self.theme, &mut commands);
        decoder::generate(dims, self.theme, &mut commands);
        address_lines::generate(dims, self.theme, &mut commands);
        data_bus::generate(dims, self.theme, &mut commands);

        debug!(
            rows = dims.rows(),
            columns = dims.columns(),
            commands_len = commands.len();
            "Schematic generated",
        );

        commands
    }
}
