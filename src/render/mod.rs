//! Presentation model consumed by the rendering surfaces (HTML and terminal).
//!
//! A [`DashboardView`] is built fresh for every render pass from the immutable
//! catalog and one [`FilterCriteria`]; nothing is cached between passes.

pub mod cards;
pub mod chart;
pub mod text;

pub use cards::{showcase_rows, CardView, ImageResolver, ShowcaseRow};
pub use chart::{bar_chart_spec, bar_views, embed_json, map_points, map_spec, BarView, MapPoint};
pub use text::render_text;

use crate::catalog::CatalogContext;
use crate::metrics::ShowcaseMetrics;
use crate::types::{CategoryCount, FilterCriteria, NutritionNote, PastaRecord};

/// Everything one render pass shows
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub criteria: FilterCriteria,
    pub category_options: Vec<String>,
    pub records: Vec<PastaRecord>,
    pub rows: Vec<ShowcaseRow>,
    /// Always computed over the full catalog
    pub distribution: Vec<CategoryCount>,
    pub bars: Vec<BarView>,
    /// Located records of the filtered view
    pub map_points: Vec<MapPoint>,
    pub notes: Vec<NutritionNote>,
}

impl DashboardView {
    pub fn build(catalog: &CatalogContext, criteria: &FilterCriteria, images: &ImageResolver) -> Self {
        let records = catalog.showcase(criteria);
        ShowcaseMetrics::record_render(records.len());

        let cards = records
            .iter()
            .map(|r| CardView::from_record(r, images))
            .collect();
        let distribution = catalog.distribution();

        Self {
            criteria: criteria.clone(),
            category_options: catalog.category_options(),
            rows: showcase_rows(cards),
            bars: bar_views(&distribution),
            map_points: map_points(&records),
            distribution,
            records,
            notes: catalog.notes().to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
