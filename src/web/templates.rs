use askama::Template;

use crate::config::PageConfig;
use crate::constants::{NO_DISTRIBUTION_MESSAGE, NO_MATCHES_MESSAGE};
use crate::render::{embed_json, map_spec, BarView, DashboardView, ShowcaseRow};
use crate::types::{NutritionNote, SortOrder};
use crate::web::models::SelectOption;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub tagline: String,
    pub banner_url: String,
    pub type_options: Vec<SelectOption>,
    pub sort_options: Vec<SelectOption>,
    pub search_term: String,
    pub rows: Vec<ShowcaseRow>,
    pub result_count: usize,
    pub no_matches_message: &'static str,
    pub bars: Vec<BarView>,
    pub no_distribution_message: &'static str,
    pub has_map_points: bool,
    pub map_spec_json: String,
    pub notes: Vec<NutritionNote>,
}

impl IndexTemplate {
    pub fn from_view(view: &DashboardView, page: &PageConfig) -> Self {
        let selected_type = view.criteria.selected_type.label();
        let type_options = view
            .category_options
            .iter()
            .map(|label| SelectOption {
                value: label.clone(),
                label: label.clone(),
                selected: label == selected_type,
            })
            .collect();
        let sort_options = SortOrder::all()
            .iter()
            .map(|order| SelectOption {
                value: order.as_str().to_string(),
                label: order.label().to_string(),
                selected: *order == view.criteria.sort_order,
            })
            .collect();

        Self {
            title: page.title.clone(),
            tagline: page.tagline.clone(),
            banner_url: page.banner_url.clone(),
            type_options,
            sort_options,
            search_term: view.criteria.search_term.clone(),
            rows: view.rows.clone(),
            result_count: view.records.len(),
            no_matches_message: NO_MATCHES_MESSAGE,
            bars: view.bars.clone(),
            no_distribution_message: NO_DISTRIBUTION_MESSAGE,
            has_map_points: !view.map_points.is_empty(),
            map_spec_json: embed_json(&map_spec(&view.map_points)),
            notes: view.notes.clone(),
        }
    }
}

/// Showcase fragment, swapped in place by HTMX requests
#[derive(Template)]
#[template(path = "showcase.html")]
pub struct ShowcaseTemplate {
    pub rows: Vec<ShowcaseRow>,
    pub result_count: usize,
    pub no_matches_message: &'static str,
    pub has_map_points: bool,
    pub map_spec_json: String,
}

impl ShowcaseTemplate {
    pub fn from_view(view: &DashboardView) -> Self {
        Self {
            rows: view.rows.clone(),
            result_count: view.records.len(),
            no_matches_message: NO_MATCHES_MESSAGE,
            has_map_points: !view.map_points.is_empty(),
            map_spec_json: embed_json(&map_spec(&view.map_points)),
        }
    }
}

/// Error page for rejected requests; askama escapes the message
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: &'static str,
    pub message: String,
}
