// Catalog processing: validation, filter/search/sort, aggregation.
// Every function here is pure; callers re-run them on each interaction.

pub mod aggregate;
pub mod filter;
pub mod normalize;

// Re-export the entry points of each stage
pub use aggregate::{category_distribution, category_options};
pub use filter::apply;
pub use normalize::{normalize, normalize_notes};
