use std::sync::Arc;

use crate::catalog::CatalogContext;
use crate::config::{Config, PageConfig};
use crate::render::ImageResolver;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogContext>,
    pub images: Arc<ImageResolver>,
    pub page: Arc<PageConfig>,
}

impl AppState {
    pub fn new(catalog: CatalogContext, config: &Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            images: Arc::new(ImageResolver::from_config(&config.images)),
            page: Arc::new(config.page.clone()),
        }
    }
}
