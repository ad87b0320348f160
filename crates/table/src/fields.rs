//! Canonical base-field ordering and output framing.
//!
//! The generated listing is Chisel source: one `MNEMONIC -> List(...)` row
//! per instruction, preceded by a comment line naming each column. The
//! constants here pin the framing down so a regenerated table diffs cleanly
//! against the checked-in decode source.

/// Decode fields every emitted table carries, in canonical column order.
///
/// These are printed first, in this fixed order, regardless of which
/// instructions use them; fields found only in the table itself gain columns
/// after them, in first-seen order. Keeping the common fields in one order
/// makes diffing between table versions easier.
pub const BASE_FIELDS: [&str; 25] = [
    "unit",
    "internalOp",
    "rA",
    "rB",
    "rS",
    "rOut",
    "carryIn",
    "carryOut",
    "crIn",
    "crOut",
    "compare",
    "is32bit",
    "signed",
    "invertIn",
    "invertOut",
    "rightShift",
    "clearLeft",
    "clearRight",
    "length",
    "byteReverse",
    "update",
    "reservation",
    "high",
    "extended",
    "countRight",
];

/// Token emitted for a field an instruction does not define (don't care).
///
/// A field whose value is literally `DC` renders identically to an absent
/// field; the textual format does not distinguish the two.
pub const DONT_CARE: &str = "DC";

/// Minimum width of the mnemonic column in emitted rows.
pub const MNEMONIC_WIDTH: usize = 13;

/// Indent preceding each emitted row.
pub const ROW_INDENT: &str = "    ";

/// Opens the Chisel `List(...)` literal after the mnemonic.
pub const LIST_OPEN: &str = " -> List(";

/// Lead-in for the header comment line.
///
/// 23 spaces then `// `: 26 characters, the same as the row prefix
/// (4-space indent + 13-column mnemonic + 9-character list opener), so the
/// first field name sits directly above the first value column.
pub const HEADER_LEAD: &str = "                       // ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lead_aligns_with_row_prefix() {
        let row_prefix = ROW_INDENT.len() + MNEMONIC_WIDTH + LIST_OPEN.len();
        assert_eq!(HEADER_LEAD.len(), row_prefix);
    }

    #[test]
    fn base_fields_are_unique() {
        for (i, field) in BASE_FIELDS.iter().enumerate() {
            assert!(!BASE_FIELDS[..i].contains(field), "duplicate {field}");
        }
    }
}
