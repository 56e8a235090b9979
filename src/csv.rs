// src/csv.rs
use std::io::{self, Write};

use crate::data::Dataset;

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Full export payload, headers optional.
pub fn to_export_string(
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, headers, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Dataset shaping ---------------- */

pub fn dataset_headers() -> Vec<String> {
    vec![
        s!("Country"),
        s!("Debt"),
        s!("Debt (USD)"),
        s!("Debt (% of GDP)"),
        s!("Debt per capita (USD)"),
    ]
}

/// One export row per record. The verbatim label and the parsed value
/// both go out; absent optionals become empty cells.
pub fn dataset_rows(ds: &Dataset) -> Vec<Vec<String>> {
    ds.records
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.debt_label.clone(),
                r.debt_usd.to_string(),
                r.debt_pct_gdp.map(|v| v.to_string()).unwrap_or_default(),
                r.debt_per_capita.map(|v| v.to_string()).unwrap_or_default(),
            ]
        })
        .collect()
}
