pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod web;

pub use catalog::CatalogContext;
pub use error::{CatalogError, Result};
pub use types::{CategoryCount, FilterCriteria, NutritionNote, PastaRecord, SortOrder, TypeSelection};
