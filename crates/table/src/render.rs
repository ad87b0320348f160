//! Header and row rendering.
//!
//! The stateless second pass: consumes a finished [`FieldCatalog`] and
//! writes the header comment plus one Chisel `List` row per instruction.
//! Output goes to any [`io::Write`]; the caller owns buffering and flushing.

use std::io;

use crate::catalog::FieldCatalog;
use crate::error::TableError;
use crate::fields::{DONT_CARE, HEADER_LEAD, LIST_OPEN, MNEMONIC_WIDTH, ROW_INDENT};
use crate::table::{DecodeTable, InsnEntry};

/// Writes the header comment line: the lead-in, then each field name
/// left-justified to its column width.
///
/// # Errors
///
/// [`TableError::Write`] when the underlying writer fails.
pub fn write_header(catalog: &FieldCatalog, out: &mut impl io::Write) -> Result<(), TableError> {
    write!(out, "{HEADER_LEAD}")?;
    for (field, width) in catalog.columns() {
        write!(out, "{field:<width$}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Writes one instruction row.
///
/// The mnemonic is the instruction name uppercased, left-justified to the
/// minimum mnemonic width. Each catalog column then carries the
/// instruction's value, or the don't-care token when the instruction leaves
/// the field undefined, with a `,` separator (`),` on the last column).
///
/// # Errors
///
/// [`TableError::Write`] when the underlying writer fails.
pub fn write_row(
    insn: &InsnEntry,
    catalog: &FieldCatalog,
    out: &mut impl io::Write,
) -> Result<(), TableError> {
    let mnemonic = insn.name().to_uppercase();
    write!(out, "{ROW_INDENT}{mnemonic:<width$}{LIST_OPEN}", width = MNEMONIC_WIDTH)?;

    let last = catalog.len().saturating_sub(1);
    for (i, (field, width)) in catalog.columns().enumerate() {
        let close = if i == last { ")," } else { "," };
        let token = match insn.get(field) {
            Some(value) => format!("{value}{close}"),
            None => format!("{DONT_CARE}{close}"),
        };
        write!(out, "{token:<width$}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Renders the complete listing: header first, then rows in table order.
///
/// The catalog is expected to come from scanning this same table. Widths are
/// floors derived from every value in the scanned table, so a catalog built
/// from a different table can misalign columns (tokens are still emitted
/// untruncated).
///
/// # Errors
///
/// [`TableError::Write`] when the underlying writer fails.
pub fn render(
    table: &DecodeTable,
    catalog: &FieldCatalog,
    out: &mut impl io::Write,
) -> Result<(), TableError> {
    write_header(catalog, out)?;
    for insn in table.entries() {
        write_row(insn, catalog, out)?;
    }
    Ok(())
}

/// One-shot generation: scans `table`, then renders it to `out`.
///
/// # Errors
///
/// [`TableError::Write`] when the underlying writer fails.
pub fn generate(table: &DecodeTable, out: &mut impl io::Write) -> Result<(), TableError> {
    let catalog = FieldCatalog::scan(table);
    render(table, &catalog, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> DecodeTable {
        text.parse().expect("test table parses")
    }

    fn render_str(base: &[&str], text: &str) -> String {
        let table = table(text);
        let catalog = FieldCatalog::scan_with_base(base, &table);
        let mut out = Vec::new();
        render(&table, &catalog, &mut out).expect("render to memory");
        String::from_utf8(out).expect("output is ASCII")
    }

    #[test]
    fn mnemonic_is_uppercased_and_padded() {
        let text = render_str(&["unit"], "addi: {unit: ALU}\n");
        let row = text.lines().nth(1).expect("one row");
        assert!(row.starts_with("    ADDI          -> List("));
    }

    #[test]
    fn long_mnemonic_extends_past_minimum_width() {
        let text = render_str(&["unit"], "addmeback_dot: {unit: ALU}\n");
        let row = text.lines().nth(1).expect("one row");
        assert!(row.starts_with("    ADDMEBACK_DOT -> List("));
    }

    #[test]
    fn last_column_closes_the_list() {
        let text = render_str(&["unit", "rA"], "add: {unit: ALU, rA: RA}\n");
        let row = text.lines().nth(1).expect("one row");
        assert!(row.trim_end().ends_with("RA),"));
    }

    #[test]
    fn absent_field_renders_dont_care() {
        let text = render_str(&["unit", "rA"], "or: {unit: ALU}\n");
        let row = text.lines().nth(1).expect("one row");
        assert!(row.trim_end().ends_with("DC),"));
    }

    #[test]
    fn header_alone_for_empty_table() {
        let text = render_str(&["unit", "rA"], "{}\n");
        assert_eq!(text, "                       // unit rA \n");
    }
}
