//! Chart views: the category bar chart and the origin point map.
//!
//! Both are emitted as Vega-Lite documents so any Vega-Lite capable surface can
//! draw them; the HTML page additionally renders the bars natively.

use serde::Serialize;
use serde_json::{json, Value};

use crate::types::{CategoryCount, PastaRecord};

const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// One bar, with its length relative to the longest bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarView {
    pub label: String,
    pub count: usize,
    pub percent: u32,
}

pub fn bar_views(distribution: &[CategoryCount]) -> Vec<BarView> {
    let max = distribution.iter().map(|c| c.count).max().unwrap_or(0);
    distribution
        .iter()
        .map(|c| BarView {
            label: c.category.clone(),
            count: c.count,
            percent: if max == 0 {
                0
            } else {
                ((c.count * 100) as f64 / max as f64).round() as u32
            },
        })
        .collect()
}

/// Labelled point for the origin map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Records carrying a full coordinate pair, in input order
pub fn map_points(records: &[PastaRecord]) -> Vec<MapPoint> {
    records
        .iter()
        .filter_map(|r| {
            r.location.map(|loc| MapPoint {
                name: r.name.clone(),
                latitude: loc.latitude,
                longitude: loc.longitude,
            })
        })
        .collect()
}

pub fn bar_chart_spec(distribution: &[CategoryCount]) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "title": "Pasta Type Distribution",
        "data": { "values": distribution },
        "mark": { "type": "bar", "tooltip": true },
        "encoding": {
            "x": { "field": "type", "type": "nominal", "sort": null, "title": "Pasta Type" },
            "y": { "field": "count", "type": "quantitative", "title": "Number of Varieties" }
        }
    })
}

pub fn map_spec(points: &[MapPoint]) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "title": "Pasta Origins",
        "projection": { "type": "mercator" },
        "data": { "values": points },
        "mark": { "type": "circle", "size": 80 },
        "encoding": {
            "latitude": { "field": "latitude", "type": "quantitative" },
            "longitude": { "field": "longitude", "type": "quantitative" },
            "tooltip": { "field": "name", "type": "nominal" }
        }
    })
}

/// Serialize for inlining inside a `<script>` element
pub fn embed_json(value: &Value) -> String {
    value
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
