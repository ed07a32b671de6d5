use axum::{
    Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};

use crate::{
    dto::play::PlayParams,
    error::AppError,
    services::game_service,
    state::SharedState,
    views::{self, PlayPage},
};

/// Server-rendered pages.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route("/game/{game_type}", get(select_variant))
        .route("/setup/{game_type}/{variant}", get(setup_game))
        .route("/play/{game_type}/{variant}", get(play_game))
        .route("/history", get(game_history))
}

/// Landing page listing game types and recent sessions.
pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let recent = game_service::list_recent_games(&state).await?;
    Ok(views::index(state.catalog(), &recent))
}

/// Offer the variants of a game type, or go straight to setup when there is only one.
pub async fn select_variant(
    State(state): State<SharedState>,
    Path(game_type): Path<String>,
) -> Response {
    let catalog = state.catalog();
    match catalog.sole_variant(&game_type) {
        Some(only) => Redirect::to(&views::setup_path(&game_type, only.id)).into_response(),
        None => views::variants(&game_type, catalog.variants(&game_type)).into_response(),
    }
}

/// Collect player names for a new game.
pub async fn setup_game(Path((game_type, variant)): Path<(String, String)>) -> Html<String> {
    views::setup(&game_type, &variant)
}

/// Start a new game, or resume the one named by `game_id`.
pub async fn play_game(
    State(state): State<SharedState>,
    Path((game_type, variant)): Path<(String, String)>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let params = PlayParams::from(query);
    let game_id = match params.game_id {
        Some(id) => id,
        None => game_service::create_game(&state, &game_type, &variant, params.players).await?,
    };

    let config = state.catalog().config(&game_type, &variant);
    Ok(views::play(&PlayPage {
        game_type: &game_type,
        variant: &variant,
        game_id: &game_id,
        config: &config,
    }))
}

/// Every recorded game, newest first.
pub async fn game_history(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let games = game_service::list_all_games(&state).await?;
    Ok(views::history(&games))
}
