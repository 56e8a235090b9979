// src/data.rs
//
// Canonical dataset types. One CountryRecord per usable table row,
// assembled by src/extract.rs; everything downstream (ranking,
// comparison, report, export) reads from here and never mutates.

use crate::extract::{self, RowSkip};

/// One country's normalized figures. `debt_label` keeps the source
/// page's own spelling for the bar labels; `debt_usd` is the parsed
/// whole-dollar value the rankings run on.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryRecord {
    pub name: String,
    pub debt_label: String,
    pub debt_usd: u64,
    pub debt_pct_gdp: Option<f64>,
    pub debt_per_capita: Option<u64>,
}

/// The three ranked dimensions. Debt is mandatory per record; the other
/// two are optional and simply missing from their rankings when absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    DebtUsd,
    DebtPctGdp,
    DebtPerCapita,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::DebtUsd, Metric::DebtPctGdp, Metric::DebtPerCapita];

    pub fn title(&self) -> &'static str {
        match self {
            Metric::DebtUsd => "National debt",
            Metric::DebtPctGdp => "Debt as % of GDP",
            Metric::DebtPerCapita => "Debt per capita",
        }
    }

    /// The record's value on this metric, if it has one.
    pub fn value_of(&self, r: &CountryRecord) -> Option<f64> {
        match self {
            Metric::DebtUsd => Some(r.debt_usd as f64),
            Metric::DebtPctGdp => r.debt_pct_gdp,
            Metric::DebtPerCapita => r.debt_per_capita.map(|v| v as f64),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub records: Vec<CountryRecord>,
}

impl Dataset {
    /// Assemble from cleaned table rows. Rows that fail extraction are
    /// logged and skipped; duplicate country names keep the first row.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Dataset {
        let mut records: Vec<CountryRecord> = Vec::with_capacity(rows.len());
        let mut skipped = 0usize;

        for (i, cells) in rows.iter().enumerate() {
            match extract::record_from_cells(cells) {
                Ok(rec) => {
                    if records.iter().any(|r| r.name == rec.name) {
                        logd!("row {}: duplicate country {:?}, keeping first", i, rec.name);
                        continue;
                    }
                    records.push(rec);
                }
                Err(skip) => {
                    skipped += 1;
                    log_skip(i, &skip, cells);
                }
            }
        }
        if skipped > 0 {
            logf!("skipped {} of {} rows", skipped, rows.len());
        }
        Dataset { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

fn log_skip(row: usize, skip: &RowSkip, cells: &[String]) {
    match skip {
        // Header and aggregate rows are expected; keep them at debug
        RowSkip::TooFewCells | RowSkip::AggregateRow => {
            logd!("row {}: {}", row, skip);
        }
        RowSkip::BadDebtCell => {
            logd!("row {}: {} ({:?})", row, skip, cells.get(2).map(String::as_str).unwrap_or(""));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bad_rows_are_dropped_good_rows_kept() {
        let ds = Dataset::from_rows(vec![
            row(&["#", "Country", "Debt", "% GDP", "Per capita"]),
            row(&["1", "Testland", "$2.5T", "80%", "$7,000"]),
            row(&["2", "TOTAL", "$9.9T", "", ""]),
            row(&["3", "Shortrow"]),
        ]);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].name, "Testland");
        assert_eq!(ds.records[0].debt_usd, 2_500_000_000_000);
    }

    #[test]
    fn duplicate_names_keep_the_first_row() {
        let ds = Dataset::from_rows(vec![
            row(&["1", "Testland", "$2T", "", ""]),
            row(&["2", "Testland", "$9T", "", ""]),
        ]);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].debt_usd, 2_000_000_000_000);
    }

    #[test]
    fn metric_values_respect_absence() {
        let ds = Dataset::from_rows(vec![row(&["1", "Testland", "$2T", "N/A", "N/A"])]);
        let r = &ds.records[0];
        assert_eq!(Metric::DebtUsd.value_of(r), Some(2e12));
        assert_eq!(Metric::DebtPctGdp.value_of(r), None);
        assert_eq!(Metric::DebtPerCapita.value_of(r), None);
    }

    #[test]
    fn lookup_is_exact() {
        let ds = Dataset::from_rows(vec![row(&["1", "Testland", "$2T", "", ""])]);
        assert!(ds.get("Testland").is_some());
        assert!(ds.get("testland").is_none());
    }
}
