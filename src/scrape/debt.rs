// src/scrape/debt.rs
//
// Scraper for the countries-by-national-debt page.
//
// The page carries a single statistics table: one row per country with
// at least five cells in a fixed order (row index, country name, total
// debt, debt as % of GDP, debt per capita). We walk that table with the
// slicers in core::html, clean each cell, and hand the rows to
// Dataset::from_rows for extraction.
//
// Page-level problems (fetch failure, no table) abort the run here.
// Row-level problems are the dataset's business and are skipped there.

use std::error::Error;

use crate::config::consts::SOURCE_URL;
use crate::core::html::{first_block_ci, inner_of, next_block_ci, next_cell_ci, strip_tags};
use crate::core::sanitize::{decode_entities, normalize_ws};
use crate::core::net;
use crate::data::Dataset;

/// Fetch the live page and build the dataset.
pub fn fetch() -> Result<Dataset, Box<dyn Error>> {
    logf!("fetching {}", SOURCE_URL);
    let doc = net::http_get(SOURCE_URL)?;
    logf!("fetched {} bytes", doc.len());
    dataset_from_document(&doc)
}

/// Build the dataset from an already-loaded page (tests, `--from-file`).
pub fn dataset_from_document(doc: &str) -> Result<Dataset, Box<dyn Error>> {
    let rows = table_rows(doc)?;
    logd!("table yielded {} raw rows", rows.len());
    Ok(Dataset::from_rows(rows))
}

/// Cleaned cell text for every `<tr>` of the page's table.
pub fn table_rows(doc: &str) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let table = first_block_ci(doc, "table").ok_or("debt table not found")?;
    let table = inner_of(table);

    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_block_ci(table, "tr", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        let mut cells = Vec::new();
        let mut at = 0usize;
        while let Some((c_s, c_e)) = next_cell_ci(tr, at) {
            cells.push(clean_cell(inner_of(&tr[c_s..c_e])));
            at = c_e;
        }
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    Ok(rows)
}

fn clean_cell(inner: &str) -> String {
    normalize_ws(&strip_tags(&decode_entities(inner)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <h1>Countries by National Debt</h1>
        <table class="stats">
          <thead>
            <tr><th>#</th><th>Country</th><th>Debt</th><th>% of GDP</th><th>Per Capita</th></tr>
          </thead>
          <tbody>
            <tr><td>1</td><td><a href="/us">United&nbsp;States</a></td><td>$33.2T</td><td>123%</td><td>$98,521</td></tr>
            <tr><td>2</td><td>Smallstan</td><td>$1.2 Mn</td><td>N/A</td><td>N/A</td></tr>
            <tr><td></td><td>TOTAL</td><td>$91.4T</td><td></td><td></td></tr>
          </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn rows_come_back_cleaned() {
        let rows = table_rows(PAGE).unwrap();
        assert_eq!(rows.len(), 4); // header + 2 countries + total
        assert_eq!(rows[1], vec!["1", "United States", "$33.2T", "123%", "$98,521"]);
    }

    #[test]
    fn dataset_drops_header_and_total() {
        let ds = dataset_from_document(PAGE).unwrap();
        assert_eq!(ds.len(), 1);
        let us = &ds.records[0];
        assert_eq!(us.name, "United States");
        assert_eq!(us.debt_usd, 33_200_000_000_000);
        assert_eq!(us.debt_pct_gdp, Some(123.0));
        assert_eq!(us.debt_per_capita, Some(98_521));
        // Smallstan's "$1.2 Mn" is per-capita syntax, not debt syntax
    }

    #[test]
    fn page_without_a_table_is_fatal() {
        let err = dataset_from_document("<html><p>moved</p></html>").unwrap_err();
        assert!(err.to_string().contains("table not found"));
    }

    #[test]
    fn nested_markup_inside_cells_is_flattened() {
        let doc = r#"<table><tr>
            <td>9</td>
            <td><div class="flag"><img src="x.png"></div><span>Testland</span></td>
            <td><b>$5B</b></td><td><i>51%</i></td><td>700</td>
        </tr></table>"#;
        let ds = dataset_from_document(doc).unwrap();
        assert_eq!(ds.records[0].name, "Testland");
        assert_eq!(ds.records[0].debt_usd, 5_000_000_000);
        assert_eq!(ds.records[0].debt_per_capita, Some(700));
    }
}
