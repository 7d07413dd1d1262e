/// Display sentinels and defaults shared across the pipeline and the rendering surface

// Shown in place of any absent text field
pub const NOT_AVAILABLE: &str = "N/A";

// Category selector value meaning "no type filter"
pub const ALL_TYPES: &str = "All";

pub const NO_MATCHES_MESSAGE: &str = "No pasta found for the selected type. Try another filter!";
pub const NO_DISTRIBUTION_MESSAGE: &str = "No categorized pasta available for the distribution chart.";

// Data source defaults
pub const DEFAULT_CONFIG_PATH: &str = "pasta.toml";
pub const DEFAULT_CATALOG_PATH: &str = "data/pasta.json";
pub const DEFAULT_NOTES_PATH: &str = "data/nutrition_notes.json";

pub const DEFAULT_PLACEHOLDER_URL: &str = "https://via.placeholder.com/400x300.png?text=Pasta";
pub const DEFAULT_BANNER_URL: &str =
    "https://via.placeholder.com/800x200.png?text=Pasta+Showcase+Banner";

pub const DEFAULT_PAGE_TITLE: &str = "Pasta Paradise: An Informative Dashboard";
pub const DEFAULT_TAGLINE: &str = "A quick look at pasta varieties, their origins, and common uses.";

// Environment overrides (applied after the TOML file)
pub const ENV_CATALOG_PATH: &str = "PASTA_CATALOG_PATH";
pub const ENV_NOTES_PATH: &str = "PASTA_NOTES_PATH";
pub const ENV_HOST: &str = "PASTA_HOST";
pub const ENV_PORT: &str = "PASTA_PORT";
