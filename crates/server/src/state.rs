use catalog::CatalogStore;
use engine::RecommendationEngine;

/// Shared handles cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: CatalogStore,
    pub engine: RecommendationEngine<CatalogStore>,
}

impl AppState {
    pub fn new(store: CatalogStore) -> Self {
        let engine = RecommendationEngine::new(store.clone());
        Self { store, engine }
    }
}
