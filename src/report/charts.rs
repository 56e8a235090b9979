// src/report/charts.rs
//
// One horizontal bar chart per metric, full ranking, leader at the top.
// Rows arrive pre-sorted ascending (see src/rank.rs), which is exactly
// the bottom-to-top order plotly wants for horizontal bars.

use plotly::common::color::Rgb;
use plotly::common::{Marker, Orientation, Title};
use plotly::layout::{Axis, Margin};
use plotly::{Bar, Layout, Plot};

use crate::config::ReportOptions;
use crate::data::Metric;
use crate::rank::RankedRecord;

// Fallback when a configured color fails to parse; same gray as the
// non-highlighted bars.
const NEUTRAL: (u8, u8, u8) = (154, 165, 177);

pub fn bar_chart(metric: Metric, ranked: &[RankedRecord], opts: &ReportOptions) -> Plot {
    let values: Vec<f64> = ranked.iter().map(|r| r.value).collect();
    let names: Vec<String> = ranked.iter().map(|r| r.name.clone()).collect();
    let labels: Vec<String> = ranked.iter().map(|r| r.plot_label.clone()).collect();
    let colors: Vec<Rgb> = ranked.iter().map(|r| bar_color(&r.name, opts)).collect();

    let trace = Bar::new(values, names)
        .orientation(Orientation::Horizontal)
        .text_array(labels)
        .marker(Marker::new().color_array(colors));

    let layout = Layout::new()
        .title(Title::new(metric.title()))
        .height(chart_height(ranked.len()))
        .margin(Margin::new().left(180))
        .x_axis(Axis::new().title(Title::new(axis_title(metric))));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// The two compared countries get their configured colors; everyone
/// else shares the neutral gray.
fn bar_color(name: &str, opts: &ReportOptions) -> Rgb {
    let (r, g, b) = if name == opts.main_country {
        parse_hex_color(&opts.main_color).unwrap_or(NEUTRAL)
    } else if name == opts.other_country {
        parse_hex_color(&opts.other_color).unwrap_or(NEUTRAL)
    } else {
        NEUTRAL
    };
    Rgb::new(r, g, b)
}

/// `#rrggbb`, leading `#` optional.
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let byte = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).ok();
    Some((byte(0)?, byte(2)?, byte(4)?))
}

fn axis_title(metric: Metric) -> &'static str {
    match metric {
        Metric::DebtUsd => "USD",
        Metric::DebtPctGdp => "% of GDP",
        Metric::DebtPerCapita => "USD per person",
    }
}

// ~22px per bar; floor for the near-empty case so the axis stays legible.
fn chart_height(bars: usize) -> usize {
    (150 + 22 * bars).max(300)
}
