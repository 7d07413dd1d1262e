//! Chart Spec Builder Binary
//!
//! Generates the Vega-Lite documents for the two chart views (category
//! distribution and origin map) from the configured catalog, so a static site
//! or notebook can draw them without running the server.
//!
//! Usage:
//!   cargo run --bin build-dashboard                 # uses ./pasta.toml or defaults
//!   cargo run --bin build-dashboard path/to.toml    # explicit configuration

use anyhow::Context;
use chrono::Utc;
use serde_json::{json, Value};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use pasta_paradise::catalog::{CatalogContext, FileDataSource};
use pasta_paradise::config::Config;
use pasta_paradise::render::{bar_chart_spec, map_points, map_spec};

const OUTPUT_FILE: &str = "pasta-dashboard.json";

/// Both chart documents plus a little provenance
fn dashboard_document(catalog: &CatalogContext, title: &str) -> Value {
    let points = map_points(catalog.records());
    json!({
        "title": title,
        "generated_at": Utc::now().to_rfc3339(),
        "records": catalog.records().len(),
        "charts": {
            "distribution": bar_chart_spec(&catalog.distribution()),
            "map": map_spec(&points),
        }
    })
}

/// Pretty-print `dashboard` into `path`, returning the written text
fn write_dashboard(dashboard: &Value, path: &Path) -> anyhow::Result<String> {
    let json_string = serde_json::to_string_pretty(dashboard)?;
    fs::write(path, &json_string).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(json_string)
}

fn main() -> anyhow::Result<()> {
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref()).context("Failed to load configuration")?;

    let source = FileDataSource::from_config(&config.data);
    let catalog = CatalogContext::load(&source).context("Failed to load the pasta catalog")?;

    let output_path = PathBuf::from(OUTPUT_FILE);
    let json_string = write_dashboard(&dashboard_document(&catalog, &config.page.title), &output_path)?;

    // Print to stdout as well
    println!("{}", json_string);

    eprintln!("Chart specs generated for {} records", catalog.records().len());
    eprintln!("Saved to: {}", output_path.display());
    Ok(())
}
