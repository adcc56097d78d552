//! Opcode table loading.
//!
//! The input follows the gbdev `Opcodes.json` layout: a top-level object with
//! an `"unprefixed"` and a `"cbprefixed"` section, each mapping an opcode key
//! such as `"0x3E"` to a record with a mnemonic and an operand list. Only the
//! mnemonic and the operand names are read; every other field is ignored.

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::GenError;

/// Top-level partition of the opcode space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Section {
    #[default]
    Unprefixed,
    /// Opcodes following a `0xCB` prefix byte.
    #[value(name = "cbprefixed")]
    CbPrefixed,
}

impl Section {
    /// JSON key of the section.
    pub fn key(self) -> &'static str {
        match self {
            Self::Unprefixed => "unprefixed",
            Self::CbPrefixed => "cbprefixed",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Operand {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpcodeRecord {
    pub mnemonic: String,
    pub operands: Vec<Operand>,
}

impl OpcodeRecord {
    pub fn operand_names(&self) -> impl Iterator<Item = &str> {
        self.operands.iter().map(|op| op.name.as_str())
    }
}

/// One section of the opcode JSON, in document order.
#[derive(Debug, Clone)]
pub struct OpcodeTable {
    section: Section,
    entries: Vec<(String, OpcodeRecord)>,
}

impl OpcodeTable {
    /// Read and parse an opcode JSON file.
    ///
    /// The whole file is read before parsing starts.
    pub fn load(path: &Path, section: Section) -> Result<Self, GenError> {
        debug!("Loading opcode table from '{}'", path.display());
        let json = fs::read_to_string(path).map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json, section)
    }

    pub fn from_json_str(json: &str, section: Section) -> Result<Self, GenError> {
        let mut root: Map<String, Value> = serde_json::from_str(json)?;
        let Some(Value::Object(records)) = root.remove(section.key()) else {
            return Err(GenError::MissingSection(section.key()));
        };

        let mut entries = Vec::with_capacity(records.len());
        for (key, value) in records {
            match OpcodeRecord::deserialize(value) {
                Ok(record) => entries.push((key, record)),
                Err(source) => return Err(GenError::InvalidRecord { key, source }),
            }
        }
        debug!("Loaded {} {section} opcodes", entries.len());

        Ok(Self { section, entries })
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a record by its key exactly as written in the JSON.
    #[cfg(test)]
    fn get(&self, key: &str) -> Option<&OpcodeRecord> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OpcodeRecord)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }
}
