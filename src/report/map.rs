// src/report/map.rs
//
// Choropleth world maps, one per metric. There is no typed choropleth
// trace to build on, so the trace is a plain serde struct shaped the
// way plotly.js expects, registered through the Trace trait like any
// built-in one. Country names from the source page double as plotly's
// `country names` location keys; names plotly does not recognize are
// simply not shaded, which is the best a name-keyed map can do.

use plotly::common::Title;
use plotly::{Layout, Plot, Trace};
use serde::Serialize;

use crate::data::Metric;
use crate::rank::RankedRecord;

#[derive(Serialize, Clone, Debug)]
pub struct CountryShading {
    #[serde(rename = "type")]
    kind: &'static str,
    locationmode: &'static str,
    locations: Vec<String>,
    z: Vec<f64>,
    text: Vec<String>,
    hoverinfo: &'static str,
    colorscale: &'static str,
}

impl CountryShading {
    pub fn new(locations: Vec<String>, z: Vec<f64>, text: Vec<String>) -> Box<Self> {
        Box::new(Self {
            kind: "choropleth",
            locationmode: "country names",
            locations,
            z,
            text,
            hoverinfo: "text",
            colorscale: "Blues",
        })
    }
}

impl Trace for CountryShading {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

pub fn choropleth(metric: Metric, ranked: &[RankedRecord]) -> Plot {
    let locations: Vec<String> = ranked.iter().map(|r| r.name.clone()).collect();
    let z: Vec<f64> = ranked.iter().map(|r| r.value).collect();
    let text: Vec<String> = ranked
        .iter()
        .map(|r| format!("{}: {}", r.name, r.value_label))
        .collect();

    let mut plot = Plot::new();
    plot.add_trace(CountryShading::new(locations, z, text));
    plot.set_layout(
        Layout::new()
            .title(Title::new(metric.title()))
            .height(520),
    );
    plot
}
