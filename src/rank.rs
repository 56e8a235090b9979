// src/rank.rs
//
// Ranked views: filter out countries missing the metric, rank the rest
// descending, attach display labels, then hand back rows sorted
// ascending so horizontal bar charts grow bottom-to-top.

use crate::data::{CountryRecord, Dataset, Metric};
use crate::numbers;

/// How a metric's value is rendered on the bars. The debt ranking quotes
/// the source page verbatim; the other two format the parsed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKind {
    Debt,
    Pct,
    PerCapita,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedRecord {
    pub name: String,
    pub value: f64,
    /// 1-based position in the descending order. Ties keep input order,
    /// so equal values get distinct, adjacent ranks.
    pub rank: usize,
    pub value_label: String,
    pub plot_label: String,
}

/// Rank every country that has the metric. Returned rows are sorted
/// ascending by value; `rank` still counts from the top.
pub fn rank_and_label(records: &[CountryRecord], metric: Metric, kind: LabelKind) -> Vec<RankedRecord> {
    let mut present: Vec<(f64, &CountryRecord)> = records
        .iter()
        .filter_map(|r| metric.value_of(r).map(|v| (v, r)))
        .collect();

    // Stable sort: ties stay in table order
    present.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut ranked: Vec<RankedRecord> = present
        .into_iter()
        .enumerate()
        .map(|(i, (value, r))| {
            let value_label = value_label(r, value, kind);
            RankedRecord {
                name: r.name.clone(),
                value,
                rank: i + 1,
                plot_label: format!("rank {}, {}", i + 1, value_label),
                value_label,
            }
        })
        .collect();

    ranked.sort_by(|a, b| a.value.total_cmp(&b.value));
    ranked
}

/// The canonical view for a metric, with its standard label kind.
pub fn view_for(records: &[CountryRecord], metric: Metric) -> Vec<RankedRecord> {
    let kind = match metric {
        Metric::DebtUsd => LabelKind::Debt,
        Metric::DebtPctGdp => LabelKind::Pct,
        Metric::DebtPerCapita => LabelKind::PerCapita,
    };
    rank_and_label(records, metric, kind)
}

fn value_label(r: &CountryRecord, value: f64, kind: LabelKind) -> String {
    match kind {
        LabelKind::Debt => r.debt_label.clone(),
        LabelKind::Pct => numbers::fmt_pct(value),
        LabelKind::PerCapita => numbers::fmt_per_capita(value as u64),
    }
}

/// All three rankings for one dataset, built once and shared by the
/// comparison, the narrative and the report.
#[derive(Clone, Debug)]
pub struct RankedViews {
    pub debt: Vec<RankedRecord>,
    pub pct: Vec<RankedRecord>,
    pub per_capita: Vec<RankedRecord>,
}

impl RankedViews {
    pub fn build(ds: &Dataset) -> Self {
        Self {
            debt: view_for(&ds.records, Metric::DebtUsd),
            pct: view_for(&ds.records, Metric::DebtPctGdp),
            per_capita: view_for(&ds.records, Metric::DebtPerCapita),
        }
    }

    pub fn view(&self, metric: Metric) -> &[RankedRecord] {
        match metric {
            Metric::DebtUsd => &self.debt,
            Metric::DebtPctGdp => &self.pct,
            Metric::DebtPerCapita => &self.per_capita,
        }
    }
}

/// Exact-name lookup in one ranking.
pub fn find<'a>(ranked: &'a [RankedRecord], name: &str) -> Option<&'a RankedRecord> {
    ranked.iter().find(|r| r.name == name)
}
