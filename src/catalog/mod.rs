//! Immutable catalog data loaded once at startup.
//!
//! The [`CatalogContext`] owns the validated records and nutrition notes. It is
//! built by [`CatalogContext::load`] and then shared read-only (usually behind an
//! `Arc`) with every consumer; nothing looks the data up from global state.

pub mod source;

pub use source::{DataSource, FileDataSource, StaticDataSource};

use tracing::{info, warn};

use crate::error::Result;
use crate::metrics::CatalogMetrics;
use crate::pipeline::{self, category_distribution, category_options};
use crate::types::{CategoryCount, FilterCriteria, NutritionNote, PastaRecord};

#[derive(Debug, Clone, Default)]
pub struct CatalogContext {
    records: Vec<PastaRecord>,
    notes: Vec<NutritionNote>,
}

impl CatalogContext {
    /// One-shot startup load.
    ///
    /// Failing to obtain the record collection is fatal and returned as an error.
    /// Failing to obtain the nutrition notes only logs a warning and leaves the
    /// notes empty.
    pub fn load(source: &dyn DataSource) -> Result<Self> {
        let raw_records = source.load_records()?;
        let records = pipeline::normalize(&raw_records);

        let notes = match source.load_notes() {
            Ok(raw_notes) => pipeline::normalize_notes(&raw_notes),
            Err(e) => {
                warn!("Continuing without nutrition notes: {}", e);
                CatalogMetrics::record_notes_unavailable();
                Vec::new()
            }
        };

        let context = Self::from_parts(records, notes);
        info!(
            source = %source.describe(),
            records = context.records.len(),
            located = context.located_count(),
            notes = context.notes.len(),
            "Catalog loaded"
        );
        CatalogMetrics::record_catalog_loaded(context.records.len(), context.located_count());
        Ok(context)
    }

    pub fn from_parts(records: Vec<PastaRecord>, notes: Vec<NutritionNote>) -> Self {
        Self { records, notes }
    }

    pub fn records(&self) -> &[PastaRecord] {
        &self.records
    }

    pub fn notes(&self) -> &[NutritionNote] {
        &self.notes
    }

    /// Records matching the criteria, for the showcase view
    pub fn showcase(&self, criteria: &FilterCriteria) -> Vec<PastaRecord> {
        pipeline::apply(&self.records, criteria)
    }

    /// Distribution over the full catalog, independent of any active filter
    pub fn distribution(&self) -> Vec<CategoryCount> {
        category_distribution(&self.records)
    }

    pub fn category_options(&self) -> Vec<String> {
        category_options(&self.records)
    }

    fn located_count(&self) -> usize {
        self.records.iter().filter(|r| r.location.is_some()).count()
    }
}
