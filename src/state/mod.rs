use std::sync::Arc;

use crate::{catalog::GameCatalog, dao::game_store::GameStore};

pub type SharedState = Arc<AppState>;

/// Central application state: the storage handle and the immutable variant catalog.
///
/// Nothing in here is mutated after start-up; each request reads what it needs.
pub struct AppState {
    game_store: Arc<dyn GameStore>,
    catalog: GameCatalog,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(game_store: Arc<dyn GameStore>, catalog: GameCatalog) -> SharedState {
        Arc::new(Self {
            game_store,
            catalog,
        })
    }

    /// Handle to the configured game store.
    pub fn game_store(&self) -> Arc<dyn GameStore> {
        Arc::clone(&self.game_store)
    }

    /// Variant and configuration lookup shared by every handler.
    pub fn catalog(&self) -> &GameCatalog {
        &self.catalog
    }
}
