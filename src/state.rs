use std::sync::Arc;

use crate::{catalog::Catalog, config::AppConfig, store::Store};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<Catalog>,
    pub store: Arc<Store>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            store: Arc::new(Store::new()),
            http: reqwest::Client::new(),
        }
    }
}
