//! Error types for decode-table generation.
//!
//! The taxonomy is deliberately small and every error is fatal: generation
//! is a single pass over fully-materialized input, so there is no partial
//! state to recover. The expected remedy is always the same: fix
//! `instructions.yaml` and rerun.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while loading, validating, or emitting a decode table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The input file could not be read.
    #[error("failed to read decode table '{}': {source}", .path.display())]
    Read {
        /// Path the loader attempted to open.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The input is not well-formed YAML.
    #[error("failed to parse decode table: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document root is not a mapping of instruction name to fields.
    #[error("decode table root must be a mapping of instruction to fields")]
    RootNotMapping,

    /// An instruction key is not a plain string scalar.
    #[error("instruction name must be a string (entry {index})")]
    NameNotString {
        /// Zero-based position of the entry in the document.
        index: usize,
    },

    /// An instruction entry is not a mapping of field to value.
    #[error("instruction '{insn}' must map decode fields to values")]
    EntryNotMapping {
        /// Name of the offending instruction.
        insn: String,
    },

    /// A field key inside an instruction entry is not a plain string scalar.
    #[error("instruction '{insn}' has a non-string field name")]
    FieldNotString {
        /// Name of the offending instruction.
        insn: String,
    },

    /// A field value is not a plain string scalar.
    ///
    /// Numeric-looking values must be quoted in the table; the generator
    /// needs their exact source spelling to size columns.
    #[error("instruction '{insn}' field '{field}' must be a string value")]
    ValueNotString {
        /// Name of the offending instruction.
        insn: String,
        /// Name of the offending field.
        field: String,
    },

    /// Writing the generated listing failed.
    #[error("failed to write generated table: {0}")]
    Write(#[from] io::Error),
}
