use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use pasta_paradise::catalog::{CatalogContext, StaticDataSource};
use pasta_paradise::config::Config;
use pasta_paradise::constants::NO_MATCHES_MESSAGE;
use pasta_paradise::web::{app_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn state() -> AppState {
    let records: Vec<Value> = serde_json::from_str(include_str!("../data/pasta.json")).unwrap();
    let notes: Vec<Value> = serde_json::from_str(include_str!("../data/nutrition_notes.json")).unwrap();
    let catalog = CatalogContext::load(&StaticDataSource::new(records, notes)).unwrap();

    let config = Config::from_toml(
        r#"
        [images]
        default_placeholder = "https://img.example/default.png"

        [images.placeholders]
        Filled = "https://img.example/filled.png"
        "#,
    )
    .unwrap();
    AppState::new(catalog, &config)
}

async fn get(uri: &str, htmx: bool) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri);
    if htmx {
        request = request.header("HX-Request", "true");
    }
    let response = app_router(state())
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_index_renders_full_catalog() {
    let (status, body) = get("/", false).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html"));
    for name in ["Spaghetti", "Penne", "Cannelloni"] {
        assert!(body.contains(name), "missing {}", name);
    }
    // ten cards -> five rows, one divider each
    assert_eq!(body.matches("class=\"divider\"").count(), 5);
    assert!(body.contains("Enriched pasta often contains added folic acid and iron."));
    assert!(body.contains("https://img.example/filled.png"));
    assert!(body.contains("https://img.example/default.png"));
}

#[tokio::test]
async fn test_index_applies_filter_and_sort() {
    let (status, body) = get("/?type=Long&sort=name_asc", false).await;
    assert_eq!(status, StatusCode::OK);

    let bucatini = body.find("<h3>Bucatini</h3>").unwrap();
    let fettuccine = body.find("<h3>Fettuccine</h3>").unwrap();
    let spaghetti = body.find("<h3>Spaghetti</h3>").unwrap();
    assert!(bucatini < fettuccine && fettuccine < spaghetti);
    assert!(!body.contains("<h3>Penne</h3>"));
    assert!(body.contains("<option value=\"Long\" selected>"));
    // the distribution still reflects the whole catalog
    assert!(body.contains("Short-cut"));
}

#[tokio::test]
async fn test_no_matches_is_not_an_error() {
    let (status, body) = get("/?q=zzz", false).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(NO_MATCHES_MESSAGE));
}

#[tokio::test]
async fn test_unknown_sort_is_bad_request() {
    let (status, _) = get("/?sort=sideways", false).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rejected_sort_value_is_escaped() {
    let (status, body) = get("/?sort=%3Cscript%3Ealert(1)%3C/script%3E", false).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
    assert!(body.contains("Invalid filter criteria"));
}

#[tokio::test]
async fn test_showcase_fragment_carries_filtered_map() {
    let (status, body) = get("/showcase?type=Long", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<html"));
    assert!(body.contains("Pasta Origins"));
    for name in ["Spaghetti", "Fettuccine", "Bucatini"] {
        assert!(body.contains(&format!("\"name\":\"{}\"", name)), "missing point {}", name);
    }
    assert!(!body.contains("Lasagne"));

    // no located records in the filtered view -> no map in the fragment
    let (_, body) = get("/showcase?type=Filled", true).await;
    assert!(body.contains("<h3>Ravioli</h3>"));
    assert!(!body.contains("Pasta Origins"));
}

#[tokio::test]
async fn test_filter_form_pushes_url() {
    let (_, body) = get("/", false).await;
    assert!(body.contains("hx-push-url=\"true\""));
}

#[tokio::test]
async fn test_showcase_fragment_for_htmx() {
    let (status, body) = get("/showcase?q=pen", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<html"));
    assert!(body.contains("<h3>Penne</h3>"));

    let (_, full) = get("/showcase?q=pen", false).await;
    assert!(full.contains("<html"));
}

#[tokio::test]
async fn test_api_records_and_distribution() {
    let (status, body) = get("/api/records?type=Long&sort=name_desc", false).await;
    assert_eq!(status, StatusCode::OK);
    let records: Value = serde_json::from_str(&body).unwrap();
    let names: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Spaghetti", "Fettuccine", "Bucatini"]);

    let (_, body) = get("/api/distribution", false).await;
    let distribution: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(distribution[0]["type"], "Long");
    assert_eq!(distribution[0]["count"], 3);
    assert_eq!(distribution.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_api_categories_and_map() {
    let (_, body) = get("/api/categories", false).await;
    let categories: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(categories, vec!["All", "Filled", "Long", "Sheet", "Short-cut", "Stretched"]);

    let (_, body) = get("/api/map?type=Filled", false).await;
    let points: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert!(points.is_empty());

    let (_, body) = get("/api/map?type=Long", false).await;
    let points: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(points.len(), 3);
    assert!(points.iter().all(|p| p["latitude"].is_number()));
}

#[tokio::test]
async fn test_api_charts() {
    let (status, body) = get("/api/charts?type=Sheet", false).await;
    assert_eq!(status, StatusCode::OK);
    let charts: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(charts["distribution"]["mark"]["type"], "bar");
    assert_eq!(charts["map"]["data"]["values"][0]["name"], "Lasagne");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health", false).await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["records"], 10);
}
