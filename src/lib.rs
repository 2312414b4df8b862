pub mod cache;
pub mod config;
pub mod controllers;
pub mod geometry;
pub mod models;
pub mod presets;

use std::sync::Arc;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub layouts: cache::LayoutCache,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let layouts = cache::LayoutCache::new(config.cache.max_entries);
        Arc::new(Self { config, layouts })
    }
}
