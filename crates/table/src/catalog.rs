//! Field discovery and column-width accumulation.
//!
//! One forward scan over the table fixes both the column ordering and the
//! final widths. Widths are running maxima over every value in the table, so
//! rendering must not begin until the scan completes.

use tracing::debug;

use crate::fields::BASE_FIELDS;
use crate::table::DecodeTable;

/// Width reserved for a field name in the header: the name plus one space.
fn name_width(field: &str) -> usize {
    field.len() + 1
}

/// Width reserved for a rendered value: the value, its separator, and one
/// space.
fn value_width(value: &str) -> usize {
    value.len() + 2
}

/// Ordered decode-field catalog with per-field column widths.
///
/// Base fields come first, in their canonical order, whether or not any
/// instruction uses them; fields discovered in the table follow in
/// first-seen order. Each field appears exactly once.
///
/// A width is a floor, not a cap: a token longer than its column (the
/// don't-care token in a one-character column, say) is emitted untruncated
/// and simply pushes the rest of its row right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCatalog {
    fields: Vec<String>,
    widths: Vec<usize>,
}

impl FieldCatalog {
    /// Builds the catalog for `table` with the canonical base fields.
    pub fn scan(table: &DecodeTable) -> Self {
        Self::scan_with_base(&BASE_FIELDS, table)
    }

    /// Builds the catalog for `table` with an explicit base-field list.
    ///
    /// Base fields are seeded at their header width; the scan then folds in
    /// every `(field, value)` pair in document order.
    pub fn scan_with_base(base: &[&str], table: &DecodeTable) -> Self {
        let mut catalog = Self {
            fields: base.iter().map(|f| (*f).to_string()).collect(),
            widths: base.iter().map(|f| name_width(f)).collect(),
        };
        for insn in table.entries() {
            for (field, value) in insn.fields() {
                catalog.record(field, value);
            }
        }
        catalog
    }

    /// Folds one `(field, value)` occurrence into the catalog: appends the
    /// field if unseen and raises its width to cover `value`.
    fn record(&mut self, field: &str, value: &str) {
        match self.fields.iter().position(|f| f == field) {
            Some(i) => self.widths[i] = self.widths[i].max(value_width(value)),
            None => {
                debug!(field, "extra decode field");
                self.fields.push(field.to_string());
                self.widths.push(name_width(field).max(value_width(value)));
            }
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` when the catalog has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Columns in emission order, paired with their final widths.
    pub fn columns(&self) -> impl Iterator<Item = (&str, usize)> {
        self.fields
            .iter()
            .map(String::as_str)
            .zip(self.widths.iter().copied())
    }

    /// Final width of `field`, if it has a column.
    pub fn width_of(&self, field: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f == field)
            .map(|i| self.widths[i])
    }
}
