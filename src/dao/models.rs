use std::{fmt, str::FromStr, time::SystemTime};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Lifecycle status of a game session.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Game is being played (or was never closed).
    #[default]
    Active,
    /// Game was marked as finished.
    Completed,
}

impl GameStatus {
    /// Textual form stored in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Active => "active",
            GameStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(GameStatus::Active),
            "completed" => Ok(GameStatus::Completed),
            other => Err(format!("unknown game status `{other}`")),
        }
    }
}

/// Free-form JSON object attached to a game.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct GameData(pub Map<String, Value>);

impl GameData {
    /// True when no key has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Game row persisted by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntity {
    /// Opaque primary key.
    pub id: String,
    /// Card game family (`bridge`, `rummy`, ...).
    pub game_type: String,
    /// Variant identifier within the family.
    pub variant: String,
    /// Player names in seating order.
    pub players: Vec<String>,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Completion timestamp, never set by the HTTP surface.
    pub completed_at: Option<SystemTime>,
    /// Lifecycle status.
    pub status: GameStatus,
    /// Free-form payload, empty for new games.
    pub data: GameData,
}

impl GameEntity {
    /// Build a brand-new active game with an empty payload.
    pub fn new(
        id: impl Into<String>,
        game_type: impl Into<String>,
        variant: impl Into<String>,
        players: Vec<String>,
        created_at: SystemTime,
    ) -> Self {
        Self {
            id: id.into(),
            game_type: game_type.into(),
            variant: variant.into(),
            players,
            created_at,
            completed_at: None,
            status: GameStatus::Active,
            data: GameData::default(),
        }
    }
}

/// Score row as submitted, before the store assigns its id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScoreEntity {
    pub game_id: String,
    pub round_number: i64,
    pub player_name: String,
    pub score: i64,
    pub bid: Option<String>,
    pub made_bid: Option<bool>,
    pub notes: Option<String>,
}

/// Score row persisted by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntity {
    /// Auto-incremented row id.
    pub id: i64,
    pub game_id: String,
    pub round_number: i64,
    pub player_name: String,
    pub score: i64,
    pub bid: Option<String>,
    pub made_bid: Option<bool>,
    pub notes: Option<String>,
    /// Server-assigned insertion time.
    pub timestamp: SystemTime,
}

impl ScoreEntity {
    /// Attach the store-assigned fields to a submitted score.
    pub fn from_new(id: i64, timestamp: SystemTime, score: NewScoreEntity) -> Self {
        Self {
            id,
            game_id: score.game_id,
            round_number: score.round_number,
            player_name: score.player_name,
            score: score.score,
            bid: score.bid,
            made_bid: score.made_bid,
            notes: score.notes,
            timestamp,
        }
    }
}
