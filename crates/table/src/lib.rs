//! Decode-table code generator for an OpenPOWER CPU core.
//!
//! This crate turns the core's instruction-decode table (`instructions.yaml`)
//! into the fixed-width textual listing embedded in the Chisel decode source.
//! It provides:
//! 1. **Model:** An order-preserving view of the YAML decode table.
//! 2. **Catalog:** Canonical decode-field ordering and per-field column widths.
//! 3. **Rendering:** Header comment and per-instruction row emission.
//! 4. **Errors:** A minimal, fatal-only error taxonomy.
//!
//! Generation is one deterministic pass: load the table, scan it once to fix
//! field order and column widths, then emit the header and one row per
//! instruction. Nothing is persisted between runs.
//!
//! ```
//! use powgen_core::{DecodeTable, generate};
//!
//! let table: DecodeTable = "addi:\n  unit: ALU\n  rOut: RT\n".parse()?;
//! let mut out = Vec::new();
//! generate(&table, &mut out)?;
//! # Ok::<(), powgen_core::TableError>(())
//! ```

/// Field discovery and column-width accumulation.
pub mod catalog;
/// Error types for loading, validation, and output.
pub mod error;
/// Canonical base-field ordering and output framing constants.
pub mod fields;
/// Header and row rendering.
pub mod render;
/// Input data model and YAML loading.
pub mod table;

/// Ordered field catalog with final column widths; build with [`FieldCatalog::scan`].
pub use crate::catalog::FieldCatalog;
/// Fatal error type for every fallible operation in this crate.
pub use crate::error::TableError;
/// One-shot generation: scan a table, then render it.
pub use crate::render::generate;
/// The loaded decode table; construct with [`DecodeTable::load`] or `str::parse`.
pub use crate::table::DecodeTable;
