// src/report/mod.rs
//
// Assembles the single-page HTML report: narrative, comparison table,
// then a bar chart and a world map per metric. Plots are inlined as
// self-contained divs; plotly.js itself comes from the CDN so the page
// stays small enough to mail around.

pub mod charts;
pub mod map;

use std::error::Error;
use std::path::PathBuf;

use chrono::Local;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::compare::Comparison;
use crate::config::ReportOptions;
use crate::data::Metric;
use crate::file;
use crate::rank::RankedViews;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-latest.min.js";

const PAGE_CSS: &str = "
    body { font-family: Arial, sans-serif; margin: 24px; background: #fafafa; color: #222; }
    h1 { margin: 0 0 4px 0; }
    .timestamp { color: #666; margin: 0 0 24px 0; }
    .section { background: #fff; border: 1px solid #e0e0e0; border-radius: 8px;
               padding: 16px 20px; margin-bottom: 24px; }
    pre.narrative { white-space: pre-wrap; font: 14px/1.6 Menlo, Consolas, monospace; }
    table.compare { border-collapse: collapse; }
    table.compare th, table.compare td { border: 1px solid #ccc; padding: 6px 12px;
               text-align: right; }
    table.compare th:first-child { text-align: left; }
";

/// Render and write the page; returns where it landed.
pub fn write_report(
    opts: &ReportOptions,
    views: &RankedViews,
    cmp: &Comparison,
    narrative: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = opts.report_path();
    let page = render_page(opts, views, cmp, narrative);
    file::write_text(&path, &page)?;
    logf!("report: {} ({} bytes)", path.display(), page.len());
    Ok(path)
}

pub fn render_page(
    opts: &ReportOptions,
    views: &RankedViews,
    cmp: &Comparison,
    narrative: &str,
) -> String {
    let generated = Local::now().format("%Y-%m-%d %H:%M").to_string();
    let title = format!("National debt: {} vs {}", cmp.main_name, cmp.other_name);

    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
                script src=(PLOTLY_CDN) {}
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                h1 { (title) }
                p class="timestamp" { "Generated " (generated) }

                div class="section" {
                    h2 { "Summary" }
                    pre class="narrative" { (narrative) }
                }

                div class="section" {
                    h2 { "Side by side" }
                    (comparison_table(cmp, opts))
                }

                @for metric in Metric::ALL {
                    div class="section" {
                        h2 { (metric.title()) }
                        (plot_div(&format!("bars-{}", slug(metric)),
                            charts::bar_chart(metric, views.view(metric), opts)))
                        (plot_div(&format!("map-{}", slug(metric)),
                            map::choropleth(metric, views.view(metric))))
                    }
                }
            }
        }
    };
    markup.into_string()
}

fn plot_div(id: &str, plot: plotly::Plot) -> Markup {
    html! {
        (PreEscaped(plot.to_inline_html(Some(id))))
    }
}

fn comparison_table(cmp: &Comparison, opts: &ReportOptions) -> Markup {
    let main_style = row_style(&opts.main_color);
    let other_style = row_style(&opts.other_color);

    html! {
        table class="compare" {
            tr {
                th {}
                @for row in &cmp.rows { th { (row.metric.title()) } }
            }
            tr style=(main_style) {
                th { (cmp.main_name) }
                @for row in &cmp.rows {
                    td { (row.main_label) " (rank " (row.main_rank) ")" }
                }
            }
            tr style=(other_style) {
                th { (cmp.other_name) }
                @for row in &cmp.rows {
                    td { (row.other_label) " (rank " (row.other_rank) ")" }
                }
            }
            tr {
                th { "Difference" }
                @for row in &cmp.rows { td { (row.difference_label()) } }
            }
            tr {
                th { (cmp.main_name) " / " (cmp.other_name) }
                @for row in &cmp.rows { td { (format!("{:.2}", row.ratio_main_over_other)) } }
            }
            tr {
                th { (cmp.other_name) " / " (cmp.main_name) }
                @for row in &cmp.rows { td { (format!("{:.2}", row.ratio_other_over_main)) } }
            }
        }
    }
}

fn row_style(color: &str) -> String {
    format!("background: {color}; color: #fff;")
}

fn slug(metric: Metric) -> &'static str {
    match metric {
        Metric::DebtUsd => "debt",
        Metric::DebtPctGdp => "pct-gdp",
        Metric::DebtPerCapita => "per-capita",
    }
}
