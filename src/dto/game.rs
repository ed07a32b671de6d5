use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dao::models::{GameData, GameEntity, GameStatus},
    dto::{format_system_time, score::ScoreView},
};

/// Game projection used by the recent games listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameSummary {
    pub id: String,
    pub game_type: String,
    pub variant: String,
    pub players: Vec<String>,
    pub created_at: String,
    pub status: GameStatus,
}

impl From<GameEntity> for GameSummary {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            game_type: entity.game_type,
            variant: entity.variant,
            players: entity.players,
            created_at: format_system_time(entity.created_at),
            status: entity.status,
        }
    }
}

/// Full game record, including lifecycle and payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameView {
    pub id: String,
    pub game_type: String,
    pub variant: String,
    pub players: Vec<String>,
    pub created_at: String,
    pub completed_at: Option<String>,
    pub status: GameStatus,
    pub data: GameData,
}

impl From<GameEntity> for GameView {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            game_type: entity.game_type,
            variant: entity.variant,
            players: entity.players,
            created_at: format_system_time(entity.created_at),
            completed_at: entity.completed_at.map(format_system_time),
            status: entity.status,
            data: entity.data,
        }
    }
}

/// Sum of every score recorded for one player.
#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct PlayerTotal {
    pub player: String,
    pub total: i64,
}

/// Game detail returned by `/api/game/{game_id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameDetailResponse {
    pub game: GameView,
    pub scores: Vec<ScoreView>,
    pub totals: Vec<PlayerTotal>,
}
