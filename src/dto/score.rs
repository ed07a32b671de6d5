use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dao::models::{NewScoreEntity, ScoreEntity},
    dto::format_system_time,
};

const DEFAULT_ROUND: i64 = 1;

fn default_round() -> i64 {
    DEFAULT_ROUND
}

/// Score row submitted by the live game view.
///
/// Stored as given: the game does not have to exist and the player does not
/// have to be seated.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitScoreRequest {
    pub game_id: String,
    pub player: String,
    pub score: i64,
    /// Defaults to the first round.
    #[serde(default = "default_round")]
    #[schema(default = 1)]
    pub round_number: i64,
    #[serde(default)]
    pub bid: Option<String>,
    #[serde(default)]
    pub made_bid: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<SubmitScoreRequest> for NewScoreEntity {
    fn from(request: SubmitScoreRequest) -> Self {
        Self {
            game_id: request.game_id,
            round_number: request.round_number,
            player_name: request.player,
            score: request.score,
            bid: request.bid,
            made_bid: request.made_bid,
            notes: request.notes,
        }
    }
}

/// Acknowledgement returned once a score row has been stored.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Public projection of a score row.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ScoreView {
    pub round: i64,
    pub player: String,
    pub score: i64,
    pub bid: Option<String>,
    pub made_bid: Option<bool>,
    pub notes: Option<String>,
    /// RFC 3339 insertion time.
    pub timestamp: String,
}

impl From<ScoreEntity> for ScoreView {
    fn from(entity: ScoreEntity) -> Self {
        Self {
            round: entity.round_number,
            player: entity.player_name,
            score: entity.score,
            bid: entity.bid,
            made_bid: entity.made_bid,
            notes: entity.notes,
            timestamp: format_system_time(entity.timestamp),
        }
    }
}
