//! Match-arm generator for SM83 (Game Boy) opcode tables.
//!
//! Reads an opcode JSON document (gbdev `Opcodes.json` layout) and renders a
//! `match opcode { ... }` block with one arm per opcode, naming the mnemonic
//! and its operands.

pub mod error;
pub mod render;
pub mod table;

use std::path::PathBuf;

use log::debug;

pub use error::GenError;
pub use render::{ArmStyle, MATCH_FOOTER, MATCH_HEADER, render_arm, render_match};
pub use table::{OpcodeRecord, OpcodeTable, Operand, Section};

/// Default input file name, as published by gbdev.
pub const DEFAULT_INPUT: &str = "Opcodes.json";

/// One generator run.
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub input: PathBuf,
    pub section: Section,
    pub style: ArmStyle,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            section: Section::default(),
            style: ArmStyle::default(),
        }
    }
}

/// Load the configured table and render it.
///
/// Nothing is returned unless the whole table loaded, so callers never see
/// partial output.
pub fn run(config: &GenConfig) -> Result<String, GenError> {
    let table = OpcodeTable::load(&config.input, config.section)?;
    debug!(
        "Rendering {} {} opcodes as {:?} arms",
        table.len(),
        table.section(),
        config.style
    );
    Ok(render_match(&table, config.style))
}
