// src/narrative.rs
//
// Plain-text summary of a comparison. Pure templating: every number and
// rank is read off the ComparisonRows, nothing is recomputed here, so
// the paragraph can never disagree with the table.

use crate::compare::{Comparison, ComparisonRow};
use crate::data::Metric;

pub fn render(cmp: &Comparison) -> String {
    let main = &cmp.main_name;
    let other = &cmp.other_name;

    let mut out = format!("National debt comparison: {main} vs {other}.\n\n");

    out.push_str(&country_line(main, &cmp.rows, Side::Main));
    out.push_str(&country_line(other, &cmp.rows, Side::Other));
    out.push('\n');

    for row in &cmp.rows {
        out.push_str(&metric_line(main, other, row));
    }
    out
}

enum Side {
    Main,
    Other,
}

fn country_line(name: &str, rows: &[ComparisonRow], side: Side) -> String {
    let phrases: Vec<String> = rows
        .iter()
        .map(|row| {
            let (label, rank) = match side {
                Side::Main => (&row.main_label, row.main_rank),
                Side::Other => (&row.other_label, row.other_rank),
            };
            metric_phrase(row.metric, label, rank)
        })
        .collect();
    format!("{}: {}.\n", name, phrases.join(", "))
}

fn metric_phrase(metric: Metric, label: &str, rank: usize) -> String {
    match metric {
        Metric::DebtUsd => format!("debt {label} (rank {rank})"),
        Metric::DebtPctGdp => format!("{label} of GDP (rank {rank})"),
        Metric::DebtPerCapita => format!("{label} per capita (rank {rank})"),
    }
}

fn metric_line(main: &str, other: &str, row: &ComparisonRow) -> String {
    format!(
        "{title}: {main} holds {mv} against {ov} for {other}, a gap of {diff}. \
         {main} is {r1}x {other}; {other} is {r2}x {main}.\n",
        title = row.metric.title(),
        mv = row.main_label,
        ov = row.other_label,
        diff = row.difference_label(),
        r1 = ratio(row.ratio_main_over_other),
        r2 = ratio(row.ratio_other_over_main),
    )
}

fn ratio(v: f64) -> String {
    format!("{v:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::build_comparison;
    use crate::data::CountryRecord;
    use crate::data::Dataset;
    use crate::rank::RankedViews;

    fn comparison() -> Comparison {
        let rec = |name: &str, label: &str, debt: u64, pct: f64, percap: u64| CountryRecord {
            name: name.to_string(),
            debt_label: label.to_string(),
            debt_usd: debt,
            debt_pct_gdp: Some(pct),
            debt_per_capita: Some(percap),
        };
        let ds = Dataset {
            records: vec![
                rec("Aland", "$2T", 2_000_000_000_000, 100.0, 40_000),
                rec("Bland", "$500B", 500_000_000_000, 40.0, 10_000),
            ],
        };
        let views = RankedViews::build(&ds);
        build_comparison(&views, "Aland", "Bland").unwrap()
    }

    #[test]
    fn mentions_both_countries_and_all_metrics() {
        let text = render(&comparison());
        assert!(text.contains("Aland"));
        assert!(text.contains("Bland"));
        for metric in Metric::ALL {
            assert!(text.contains(metric.title()), "missing {}", metric.title());
        }
    }

    #[test]
    fn quotes_values_ranks_and_both_ratios() {
        let text = render(&comparison());
        assert!(text.contains("debt $2.00 T (rank 1)"));
        assert!(text.contains("100% of GDP (rank 1)"));
        assert!(text.contains("a gap of $1.50 T"));
        assert!(text.contains("Aland is 4.00x Bland"));
        assert!(text.contains("Bland is 0.25x Aland"));
    }

    #[test]
    fn same_rows_always_render_the_same_text() {
        let cmp = comparison();
        assert_eq!(render(&cmp), render(&cmp));
    }
}
