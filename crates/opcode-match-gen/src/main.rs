//! `opcode-match-gen` binary.
//!
//! Prints a `match opcode { ... }` block generated from an opcode JSON file.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use opcode_match_gen::{ArmStyle, DEFAULT_INPUT, GenConfig, Section, run};

#[derive(Parser, Debug)]
#[command(
    name = "opcode-match-gen",
    version,
    about = "Generate Rust match arms from an SM83 opcode JSON table"
)]
struct Cli {
    /// Opcode JSON file.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Section of the opcode table to render.
    #[arg(short, long, value_enum, value_name = "SECTION", default_value_t)]
    section: Section,
    /// Shape of each generated match arm.
    #[arg(long, value_enum, value_name = "STYLE", default_value_t)]
    style: ArmStyle,
}

impl From<Cli> for GenConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            section: cli.section,
            style: cli.style,
        }
    }
}

fn main() {
    let config = GenConfig::from(Cli::parse());

    let text = match run(&config) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        eprintln!("error: cannot write output: {e}");
        process::exit(1);
    }
}
