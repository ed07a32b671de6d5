use axum::Router;

use crate::state::SharedState;

pub mod api;
pub mod assets;
pub mod docs;
pub mod health;
pub mod pages;

/// Compose all route trees and attach the shared state.
pub fn router(state: SharedState) -> Router<()> {
    let app_router = health::router()
        .merge(api::router())
        .merge(pages::router())
        .merge(assets::router())
        .merge(docs::router());

    app_router.with_state(state)
}
