use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::{
        game::{GameDetailResponse, GameSummary},
        score::{ScoreView, SubmitScoreRequest, SuccessResponse},
    },
    error::AppError,
    services::{game_service, score_service},
    state::SharedState,
};

/// JSON endpoints used by the live score sheet and the landing page.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/score", post(submit_score))
        .route("/api/scores/{game_id}", get(get_scores))
        .route("/api/recent-games", get(get_recent_games))
        .route("/api/game/{game_id}", get(get_game))
}

/// Append a score row to a game.
#[utoipa::path(
    post,
    path = "/api/score",
    tag = "scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Score recorded", body = SuccessResponse),
        (status = 422, description = "Missing or ill-typed field")
    )
)]
pub async fn submit_score(
    State(state): State<SharedState>,
    Json(payload): Json<SubmitScoreRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    Ok(Json(score_service::add_score(&state, payload).await?))
}

/// List the scores of a game ordered by round, then submission.
#[utoipa::path(
    get,
    path = "/api/scores/{game_id}",
    tag = "scores",
    params(("game_id" = String, Path, description = "Identifier of the game")),
    responses((status = 200, description = "Ordered score rows", body = [ScoreView]))
)]
pub async fn get_scores(
    State(state): State<SharedState>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<ScoreView>>, AppError> {
    Ok(Json(score_service::list_scores(&state, &game_id).await?))
}

/// Return the five most recently created games.
#[utoipa::path(
    get,
    path = "/api/recent-games",
    tag = "games",
    responses((status = 200, description = "Newest games first", body = [GameSummary]))
)]
pub async fn get_recent_games(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameSummary>>, AppError> {
    Ok(Json(game_service::list_recent_games(&state).await?))
}

/// Return a game with its scores and per-player totals.
#[utoipa::path(
    get,
    path = "/api/game/{game_id}",
    tag = "games",
    params(("game_id" = String, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Game detail", body = GameDetailResponse),
        (status = 404, description = "Game not found")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameDetailResponse>, AppError> {
    Ok(Json(game_service::get_game_detail(&state, &game_id).await?))
}
