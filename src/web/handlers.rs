use askama::Template;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::{error, warn};

use crate::metrics::ShowcaseMetrics;
use crate::render::{bar_chart_spec, map_spec, DashboardView};
use crate::types::FilterCriteria;
use crate::web::models::FilterQuery;
use crate::web::state::AppState;
use crate::web::templates::{ErrorTemplate, IndexTemplate, ShowcaseTemplate};

fn render_html<T: Template>(template: &T) -> Response {
    render_html_with_status(template, StatusCode::OK)
}

fn render_html_with_status<T: Template>(template: &T, status: StatusCode) -> Response {
    match template.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            error!("Template rendering failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Html("<h1>Rendering failed</h1>".to_string())).into_response()
        }
    }
}

/// Criteria for this request, or a 400 response
fn criteria_from(query: &FilterQuery) -> Result<FilterCriteria, Response> {
    query.to_criteria().map_err(|e| {
        warn!("Rejected filter query {:?}: {}", query, e);
        ShowcaseMetrics::record_rejected_criteria();
        let page = ErrorTemplate {
            title: "Invalid filter criteria",
            message: e.to_string(),
        };
        render_html_with_status(&page, StatusCode::BAD_REQUEST)
    })
}

fn build_view(state: &AppState, criteria: &FilterCriteria) -> DashboardView {
    DashboardView::build(&state.catalog, criteria, &state.images)
}

pub async fn index(State(state): State<AppState>, Query(query): Query<FilterQuery>) -> Response {
    let criteria = match criteria_from(&query) {
        Ok(c) => c,
        Err(response) => return response,
    };
    let view = build_view(&state, &criteria);
    render_html(&IndexTemplate::from_view(&view, &state.page))
}

pub async fn showcase(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
    headers: HeaderMap,
) -> Response {
    let criteria = match criteria_from(&query) {
        Ok(c) => c,
        Err(response) => return response,
    };
    let view = build_view(&state, &criteria);

    // If it's an HTMX request, return just the partial. Otherwise, return the full page.
    if headers.get("HX-Request").is_some() {
        render_html(&ShowcaseTemplate::from_view(&view))
    } else {
        render_html(&IndexTemplate::from_view(&view, &state.page))
    }
}

pub async fn api_records(State(state): State<AppState>, Query(query): Query<FilterQuery>) -> Response {
    match criteria_from(&query) {
        Ok(criteria) => {
            let records = state.catalog.showcase(&criteria);
            ShowcaseMetrics::record_render(records.len());
            Json(records).into_response()
        }
        Err(response) => response,
    }
}

pub async fn api_distribution(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.distribution())
}

pub async fn api_categories(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.category_options())
}

pub async fn api_map(State(state): State<AppState>, Query(query): Query<FilterQuery>) -> Response {
    match criteria_from(&query) {
        Ok(criteria) => Json(build_view(&state, &criteria).map_points).into_response(),
        Err(response) => response,
    }
}

/// Vega-Lite specs for both chart views of the current criteria
pub async fn api_charts(State(state): State<AppState>, Query(query): Query<FilterQuery>) -> Response {
    match criteria_from(&query) {
        Ok(criteria) => {
            let view = build_view(&state, &criteria);
            Json(json!({
                "distribution": bar_chart_spec(&view.distribution),
                "map": map_spec(&view.map_points),
            }))
            .into_response()
        }
        Err(response) => response,
    }
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "pasta-paradise",
        "version": env!("CARGO_PKG_VERSION"),
        "records": state.catalog.records().len(),
    }))
}
