pub mod sqlite;

use crate::dao::models::{GameEntity, NewScoreEntity, ScoreEntity};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer for games and their score rows.
pub trait GameStore: Send + Sync {
    fn insert_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>>;
    fn insert_score(&self, score: NewScoreEntity) -> BoxFuture<'static, StorageResult<ScoreEntity>>;
    fn find_game(&self, id: String) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Scores of a game ordered by round, then submission order.
    fn list_scores(&self, game_id: String) -> BoxFuture<'static, StorageResult<Vec<ScoreEntity>>>;
    /// Games newest first, optionally capped to `limit` entries.
    fn list_games(&self, limit: Option<usize>)
    -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
