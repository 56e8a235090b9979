// src/compare.rs
//
// Head-to-head comparison of the two configured countries across all
// three metrics. Values and ranks are pulled from the ranked views, so
// a country missing from a ranking is a hard error: a comparison with
// holes in it is worse than no report.

use std::error::Error;

use crate::data::Metric;
use crate::numbers;
use crate::rank::{self, RankedViews};

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub metric: Metric,
    pub main_value: f64,
    pub other_value: f64,
    pub main_rank: usize,
    pub other_rank: usize,
    pub main_label: String,
    pub other_label: String,
    /// Absolute gap, so the row reads the same whichever side is larger.
    pub difference: f64,
    pub ratio_main_over_other: f64,
    pub ratio_other_over_main: f64,
}

impl ComparisonRow {
    pub fn difference_label(&self) -> String {
        fmt_value(self.metric, self.difference)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub main_name: String,
    pub other_name: String,
    /// One row per metric, in `Metric::ALL` order.
    pub rows: Vec<ComparisonRow>,
}

pub fn build_comparison(
    views: &RankedViews,
    main: &str,
    other: &str,
) -> Result<Comparison, Box<dyn Error>> {
    let mut rows = Vec::with_capacity(Metric::ALL.len());

    for metric in Metric::ALL {
        let view = views.view(metric);
        let m = rank::find(view, main)
            .ok_or_else(|| not_ranked(main, metric))?;
        let o = rank::find(view, other)
            .ok_or_else(|| not_ranked(other, metric))?;

        if o.value == 0.0 {
            return Err(zero_value(other, metric).into());
        }
        if m.value == 0.0 {
            return Err(zero_value(main, metric).into());
        }

        rows.push(ComparisonRow {
            metric,
            main_value: m.value,
            other_value: o.value,
            main_rank: m.rank,
            other_rank: o.rank,
            main_label: fmt_value(metric, m.value),
            other_label: fmt_value(metric, o.value),
            difference: (m.value - o.value).abs(),
            ratio_main_over_other: m.value / o.value,
            ratio_other_over_main: o.value / m.value,
        });
    }

    Ok(Comparison {
        main_name: s!(main),
        other_name: s!(other),
        rows,
    })
}

/// Table/narrative formatting: unit-scaled dollars for the money
/// metrics, the plain percent label otherwise.
pub fn fmt_value(metric: Metric, v: f64) -> String {
    match metric {
        Metric::DebtUsd | Metric::DebtPerCapita => numbers::fmt_usd(v),
        Metric::DebtPctGdp => numbers::fmt_pct(v),
    }
}

fn not_ranked(name: &str, metric: Metric) -> String {
    format!("{:?} has no entry in the {} ranking", name, metric.title())
}

fn zero_value(name: &str, metric: Metric) -> String {
    format!("{:?} has a zero {} value; ratios are undefined", name, metric.title())
}
