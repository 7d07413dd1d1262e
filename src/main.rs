use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use askama::Template;
use pasta_paradise::catalog::{CatalogContext, FileDataSource};
use pasta_paradise::config::Config;
use pasta_paradise::render::{render_text, DashboardView, ImageResolver};
use pasta_paradise::types::{CategoryCount, FilterCriteria, SortOrder, TypeSelection};
use pasta_paradise::web::{self, templates::IndexTemplate, AppState};
use pasta_paradise::logging;

#[derive(Parser)]
#[command(name = "pasta_paradise")]
#[command(about = "Pasta reference catalog: showcase, search and distribution views")]
#[command(version)]
struct Cli {
    /// Path to the TOML configuration (defaults to ./pasta.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the filtered showcase, distribution and notes as text
    Show {
        #[command(flatten)]
        criteria: CriteriaArgs,
        /// Print the matching records as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Print the category distribution of the whole catalog
    Distribution {
        #[arg(long)]
        json: bool,
    },
    /// Write the dashboard page as a static HTML file
    Export {
        #[command(flatten)]
        criteria: CriteriaArgs,
        #[arg(long, default_value = "pasta-dashboard.html")]
        out: PathBuf,
    },
}

#[derive(Args)]
struct CriteriaArgs {
    /// Category label, or "All"
    #[arg(long = "type", default_value = "All")]
    pasta_type: String,
    /// Case-insensitive substring of name or description
    #[arg(long, default_value = "")]
    search: String,
    /// none, name_asc or name_desc
    #[arg(long, default_value = "none")]
    sort: SortOrder,
}

impl CriteriaArgs {
    fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria::new(TypeSelection::from_label(&self.pasta_type), self.search.clone(), self.sort)
    }
}

fn format_distribution(distribution: &[CategoryCount], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(distribution)?));
    }
    Ok(distribution
        .iter()
        .map(|entry| format!("{:<12} {}\n", entry.category, entry.count))
        .collect())
}

/// Render the full dashboard page for `criteria` into `out`
fn export_dashboard(
    catalog: &CatalogContext,
    config: &Config,
    criteria: &FilterCriteria,
    out: &Path,
) -> anyhow::Result<()> {
    let images = ImageResolver::from_config(&config.images);
    let view = DashboardView::build(catalog, criteria, &images);
    let html = IndexTemplate::from_view(&view, &config.page).render()?;
    fs::write(out, html).with_context(|| format!("Failed to write {}", out.display()))?;
    info!("Dashboard exported to {}", out.display());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let _guard = logging::init_logging(&config.logging);
    pasta_paradise::metrics::init_metrics(&config.metrics);

    // The record collection is mandatory: stop before rendering anything
    let source = FileDataSource::from_config(&config.data);
    let catalog = match CatalogContext::load(&source) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Catalog could not be loaded: {}", e);
            return Err(e).context("Failed to load the pasta catalog");
        }
    };

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let addr = config.server.bind_addr()?;
            let state = AppState::new(catalog, &config);
            web::serve(state, addr).await?;
        }
        Commands::Show { criteria, json } => {
            let criteria = criteria.to_criteria();
            if json {
                let records = catalog.showcase(&criteria);
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                let images = ImageResolver::from_config(&config.images);
                let view = DashboardView::build(&catalog, &criteria, &images);
                print!("{}", render_text(&view, &config.page));
            }
        }
        Commands::Distribution { json } => {
            print!("{}", format_distribution(&catalog.distribution(), json)?);
        }
        Commands::Export { criteria, out } => {
            export_dashboard(&catalog, &config, &criteria.to_criteria(), &out)?;
        }
    }
    Ok(())
}
