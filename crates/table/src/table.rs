//! Decode-table input model and YAML loading.
//!
//! `instructions.yaml` is owned by the instruction-set definition, not by
//! this tool; it is loaded read-only once per run. Document order is
//! significant twice over: instructions are emitted in the order they appear,
//! and fields beyond the canonical base set gain columns in first-seen order.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde_yaml::Value;
use tracing::debug;

use crate::error::TableError;

/// One instruction's decode entry: a partial assignment of decode fields.
///
/// Fields an instruction leaves out are rendered as don't-care; nothing here
/// is mutated after loading.
#[derive(Debug, Clone)]
pub struct InsnEntry {
    name: String,
    fields: Vec<(String, String)>,
}

impl InsnEntry {
    /// Instruction name as written in the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This instruction's fields, in document order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Looks up a field value; `None` when the instruction leaves the field
    /// as don't-care.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v.as_str())
    }
}

/// The full decode table, instructions in document order.
#[derive(Debug, Clone)]
pub struct DecodeTable {
    entries: Vec<InsnEntry>,
}

impl DecodeTable {
    /// Reads and parses a decode table from `path`.
    ///
    /// # Errors
    ///
    /// [`TableError::Read`] when the file cannot be read, otherwise any
    /// error from parsing (see [`FromStr`](#impl-FromStr-for-DecodeTable)).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table: Self = text.parse()?;
        debug!(
            path = %path.display(),
            instructions = table.entries.len(),
            "loaded decode table"
        );
        Ok(table)
    }

    /// Instructions in document order.
    pub fn entries(&self) -> &[InsnEntry] {
        &self.entries
    }

    /// Number of instructions in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the table defines no instructions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates the parsed document shape: a mapping of string instruction
    /// names to mappings of string field names to string values.
    fn from_value(doc: Value) -> Result<Self, TableError> {
        let Value::Mapping(map) = doc else {
            return Err(TableError::RootNotMapping);
        };

        let mut entries = Vec::with_capacity(map.len());
        for (index, (key, value)) in map.into_iter().enumerate() {
            let Value::String(name) = key else {
                return Err(TableError::NameNotString { index });
            };
            // A bare `insn:` line parses as null, not as an empty mapping;
            // both that and a scalar entry are malformed.
            let Value::Mapping(field_map) = value else {
                return Err(TableError::EntryNotMapping { insn: name });
            };

            let mut fields = Vec::with_capacity(field_map.len());
            for (field_key, field_value) in field_map {
                let Value::String(field) = field_key else {
                    return Err(TableError::FieldNotString { insn: name });
                };
                let Value::String(val) = field_value else {
                    return Err(TableError::ValueNotString { insn: name, field });
                };
                fields.push((field, val));
            }
            entries.push(InsnEntry { name, fields });
        }
        Ok(Self { entries })
    }
}

impl FromStr for DecodeTable {
    type Err = TableError;

    /// Parses a decode table from YAML text.
    ///
    /// # Errors
    ///
    /// [`TableError::Parse`] for malformed YAML; [`TableError::RootNotMapping`],
    /// [`TableError::NameNotString`], [`TableError::EntryNotMapping`],
    /// [`TableError::FieldNotString`], or [`TableError::ValueNotString`] when
    /// the document is not the expected nested string mapping.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let doc: Value = serde_yaml::from_str(s)?;
        Self::from_value(doc)
    }
}
