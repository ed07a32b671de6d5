use tracing::debug;

use crate::{
    dao::models::NewScoreEntity,
    dto::score::{ScoreView, SubmitScoreRequest, SuccessResponse},
    error::ServiceError,
    state::SharedState,
};

/// Append one score row. The game id and player are stored as given.
pub async fn add_score(
    state: &SharedState,
    request: SubmitScoreRequest,
) -> Result<SuccessResponse, ServiceError> {
    let score: NewScoreEntity = request.into();
    let stored = state.game_store().insert_score(score).await?;
    debug!(
        game_id = %stored.game_id,
        player = %stored.player_name,
        round = stored.round_number,
        score = stored.score,
        "score recorded"
    );
    Ok(SuccessResponse::ok())
}

/// Scores of a game ordered by round then submission. Unknown games yield an empty list.
pub async fn list_scores(state: &SharedState, game_id: &str) -> Result<Vec<ScoreView>, ServiceError> {
    let scores = state.game_store().list_scores(game_id.to_string()).await?;
    Ok(scores.into_iter().map(ScoreView::from).collect())
}
