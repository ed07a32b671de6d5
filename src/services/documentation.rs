use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the scorepad JSON API.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::api::submit_score,
        crate::routes::api::get_scores,
        crate::routes::api::get_recent_games,
        crate::routes::api::get_game,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::score::SubmitScoreRequest,
            crate::dto::score::SuccessResponse,
            crate::dto::score::ScoreView,
            crate::dto::game::GameSummary,
            crate::dto::game::GameView,
            crate::dto::game::PlayerTotal,
            crate::dto::game::GameDetailResponse,
            crate::dao::models::GameStatus,
            crate::dao::models::GameData,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "scores", description = "Score submission and retrieval"),
        (name = "games", description = "Game listings and details"),
    )
)]
pub struct ApiDoc;
