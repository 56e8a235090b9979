// src/extract.rs
//
// Row-level extraction: cleaned cell strings in, one CountryRecord out,
// or a RowSkip saying why the row doesn't count. Skips are soft; the
// caller logs them and moves on. Only the page-level failures (no
// table at all, zero usable rows) are hard errors, and those live
// upstream of here.

use crate::data::CountryRecord;
use crate::numbers;
use std::fmt;

/// Index, country, debt, % of GDP, per capita. Extra cells are ignored.
pub const MIN_CELLS: usize = 5;

const NAME_CELL: usize = 1;
const DEBT_CELL: usize = 2;
const PCT_CELL: usize = 3;
const PER_CAPITA_CELL: usize = 4;

/// Why a row was dropped. Aggregate and header rows are expected on
/// every scrape; a bad debt cell usually means the page moved a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowSkip {
    TooFewCells,
    AggregateRow,
    BadDebtCell,
}

impl fmt::Display for RowSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RowSkip::TooFewCells => "too few cells",
            RowSkip::AggregateRow => "aggregate row",
            RowSkip::BadDebtCell => "debt cell did not parse",
        };
        f.write_str(msg)
    }
}

/// Build a record from one row's cells.
///
/// The debt cell gates the row: no parsable debt, no record. The percent
/// and per-capita cells degrade to absent instead, so a country with
/// patchy columns still ranks on what it does have.
pub fn record_from_cells(cells: &[String]) -> Result<CountryRecord, RowSkip> {
    if cells.len() < MIN_CELLS {
        return Err(RowSkip::TooFewCells);
    }

    let name = cells[NAME_CELL].trim();
    if name.eq_ignore_ascii_case("total") {
        return Err(RowSkip::AggregateRow);
    }

    let debt_label = cells[DEBT_CELL].trim();
    let debt_usd = numbers::parse_debt_amount(debt_label).ok_or(RowSkip::BadDebtCell)?;

    Ok(CountryRecord {
        name: s!(name),
        debt_label: s!(debt_label),
        debt_usd,
        debt_pct_gdp: numbers::parse_pct_gdp(&cells[PCT_CELL]),
        debt_per_capita: numbers::parse_per_capita(&cells[PER_CAPITA_CELL]),
    })
}
