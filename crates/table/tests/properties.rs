//! Property tests for the listing's structural invariants.
//!
//! Instruction and field names are drawn from an alphabet that YAML always
//! resolves to plain strings, and values never contain commas, so each
//! rendered column contributes exactly one comma to its row.

use std::collections::BTreeMap;

use proptest::prelude::*;

use powgen_core::fields::{BASE_FIELDS, HEADER_LEAD};
use powgen_core::{DecodeTable, FieldCatalog, generate};

type RawTable = BTreeMap<String, BTreeMap<String, String>>;

fn to_yaml(raw: &RawTable) -> String {
    let mut text = String::new();
    for (insn, fields) in raw {
        if fields.is_empty() {
            text.push_str(&format!("{insn}: {{}}\n"));
            continue;
        }
        text.push_str(&format!("{insn}:\n"));
        for (field, value) in fields {
            text.push_str(&format!("  {field}: {value}\n"));
        }
    }
    if text.is_empty() {
        text.push_str("{}\n");
    }
    text
}

fn raw_tables() -> impl Strategy<Value = RawTable> {
    // Names start with a letter YAML never treats as a keyword prefix.
    let field = "q[a-zA-Z0-9]{0,8}";
    let value = "v[a-zA-Z0-9]{0,10}";
    let fields = prop::collection::btree_map(field, value, 0..6);
    prop::collection::btree_map("i[a-zA-Z0-9]{0,8}", fields, 0..8)
}

proptest! {
    #[test]
    fn header_counts_base_plus_distinct_extras(raw in raw_tables()) {
        let table: DecodeTable = to_yaml(&raw).parse().expect("generated YAML parses");
        let catalog = FieldCatalog::scan(&table);

        let mut extras: Vec<&String> = raw.values().flat_map(BTreeMap::keys).collect();
        extras.sort();
        extras.dedup();
        prop_assert_eq!(catalog.len(), BASE_FIELDS.len() + extras.len());

        let mut out = Vec::new();
        generate(&table, &mut out).expect("render to memory");
        let text = String::from_utf8(out).expect("output is ASCII");

        let header = text.lines().next().expect("header line");
        let header_tokens = header[HEADER_LEAD.len()..].split_whitespace().count();
        prop_assert_eq!(header_tokens, catalog.len());
    }

    #[test]
    fn every_row_matches_header_column_count(raw in raw_tables()) {
        let table: DecodeTable = to_yaml(&raw).parse().expect("generated YAML parses");
        let catalog = FieldCatalog::scan(&table);

        let mut out = Vec::new();
        generate(&table, &mut out).expect("render to memory");
        let text = String::from_utf8(out).expect("output is ASCII");

        let rows: Vec<&str> = text.lines().skip(1).collect();
        prop_assert_eq!(rows.len(), table.len());
        for row in rows {
            prop_assert_eq!(row.matches(',').count(), catalog.len());
        }
    }

    #[test]
    fn generation_is_deterministic(raw in raw_tables()) {
        let table: DecodeTable = to_yaml(&raw).parse().expect("generated YAML parses");
        let mut first = Vec::new();
        generate(&table, &mut first).expect("render to memory");
        let mut second = Vec::new();
        generate(&table, &mut second).expect("render to memory");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn widths_floor_name_and_longest_value(raw in raw_tables()) {
        let table: DecodeTable = to_yaml(&raw).parse().expect("generated YAML parses");
        let catalog = FieldCatalog::scan(&table);

        for (field, width) in catalog.columns() {
            prop_assert!(width >= field.len() + 1);
            let longest = raw
                .values()
                .filter_map(|fields| fields.get(field))
                .map(String::len)
                .max();
            if let Some(longest) = longest {
                prop_assert!(width >= longest + 2);
            }
        }
    }
}
