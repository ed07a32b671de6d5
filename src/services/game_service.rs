use std::time::SystemTime;

use tracing::info;
use uuid::Uuid;

use crate::{
    dao::models::{GameEntity, ScoreEntity},
    dto::{
        game::{GameDetailResponse, GameSummary, GameView, PlayerTotal},
        score::ScoreView,
    },
    error::ServiceError,
    state::SharedState,
};

/// Number of games returned by the recent games listing.
pub const RECENT_GAMES_LIMIT: usize = 5;

/// Record a brand-new active game and return its identifier.
///
/// A fresh id is generated every time, even when an identical game already exists.
pub async fn create_game(
    state: &SharedState,
    game_type: &str,
    variant: &str,
    players: Vec<String>,
) -> Result<String, ServiceError> {
    let id = Uuid::new_v4().to_string();
    let game = GameEntity::new(id.clone(), game_type, variant, players, SystemTime::now());

    state.game_store().insert_game(game).await?;
    info!(game_id = %id, game_type, variant, "game created");

    Ok(id)
}

/// Fetch a game with its ordered scores and per-player totals.
pub async fn get_game_detail(
    state: &SharedState,
    id: &str,
) -> Result<GameDetailResponse, ServiceError> {
    let store = state.game_store();
    let Some(game) = store.find_game(id.to_string()).await? else {
        return Err(ServiceError::NotFound("Game not found".into()));
    };
    let scores = store.list_scores(id.to_string()).await?;

    let totals = running_totals(&game.players, &scores);
    Ok(GameDetailResponse {
        game: game.into(),
        scores: scores.into_iter().map(ScoreView::from).collect(),
        totals,
    })
}

/// Most recently created games, newest first.
pub async fn list_recent_games(state: &SharedState) -> Result<Vec<GameSummary>, ServiceError> {
    let games = state
        .game_store()
        .list_games(Some(RECENT_GAMES_LIMIT))
        .await?;
    Ok(games.into_iter().map(GameSummary::from).collect())
}

/// Every recorded game, newest first.
pub async fn list_all_games(state: &SharedState) -> Result<Vec<GameView>, ServiceError> {
    let games = state.game_store().list_games(None).await?;
    Ok(games.into_iter().map(GameView::from).collect())
}

/// Sum scores per player: seated players first in seating order, then any other
/// scorer in the order they first appear.
pub fn running_totals(players: &[String], scores: &[ScoreEntity]) -> Vec<PlayerTotal> {
    let mut totals: Vec<PlayerTotal> = players
        .iter()
        .map(|player| PlayerTotal {
            player: player.clone(),
            total: 0,
        })
        .collect();

    for score in scores {
        match totals.iter_mut().find(|t| t.player == score.player_name) {
            Some(entry) => entry.total += score.score,
            None => totals.push(PlayerTotal {
                player: score.player_name.clone(),
                total: score.score,
            }),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc};

    use tempfile::TempDir;

    use super::*;
    use crate::{
        catalog::GameCatalog,
        dao::game_store::sqlite::{SqliteConfig, SqliteGameStore},
        state::AppState,
    };

    async fn state() -> (TempDir, SharedState) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteGameStore::open(SqliteConfig::new(dir.path().join("games.db")))
            .await
            .unwrap();
        (dir, AppState::new(Arc::new(store), GameCatalog::builtin()))
    }

    fn score(player: &str, points: i64) -> ScoreEntity {
        ScoreEntity {
            id: 0,
            game_id: "g".into(),
            round_number: 1,
            player_name: player.into(),
            score: points,
            bid: None,
            made_bid: None,
            notes: None,
            timestamp: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn totals_follow_seating_then_first_appearance() {
        let players = vec!["Al".to_string(), "Bo".to_string()];
        let scores = vec![score("Bo", 5), score("Cy", 2), score("Al", 10), score("Bo", -3)];
        let totals = running_totals(&players, &scores);
        assert_eq!(
            totals,
            vec![
                PlayerTotal { player: "Al".into(), total: 10 },
                PlayerTotal { player: "Bo".into(), total: 2 },
                PlayerTotal { player: "Cy".into(), total: 2 },
            ]
        );
    }

    #[test]
    fn seated_players_without_scores_total_zero() {
        let totals = running_totals(&["Al".to_string()], &[]);
        assert_eq!(totals, vec![PlayerTotal { player: "Al".into(), total: 0 }]);
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let (_dir, state) = state().await;
        let mut ids = HashSet::new();
        for _ in 0..1001 {
            let id = create_game(&state, "rummy", "gin", vec!["Al".into()])
                .await
                .unwrap();
            assert!(ids.insert(id));
        }
        assert_eq!(state.game_store().list_games(None).await.unwrap().len(), 1001);
    }

    #[tokio::test]
    async fn new_games_are_active_with_empty_data() {
        let (_dir, state) = state().await;
        let id = create_game(&state, "bridge", "draw", vec!["N".into(), "S".into()])
            .await
            .unwrap();

        let detail = get_game_detail(&state, &id).await.unwrap();
        assert_eq!(detail.game.players, vec!["N", "S"]);
        assert_eq!(detail.game.completed_at, None);
        assert!(detail.game.data.is_empty());
        assert!(detail.scores.is_empty());
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let (_dir, state) = state().await;
        let err = get_game_detail(&state, "missing").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(message) if message == "Game not found"));
    }

    #[tokio::test]
    async fn recent_games_are_capped() {
        let (_dir, state) = state().await;
        let mut created = Vec::new();
        for _ in 0..7 {
            created.push(create_game(&state, "canasta", "classic", vec![]).await.unwrap());
        }

        let recent = list_recent_games(&state).await.unwrap();
        assert_eq!(recent.len(), RECENT_GAMES_LIMIT);
        let newest_first: Vec<_> = created.iter().rev().take(RECENT_GAMES_LIMIT).collect();
        let listed: Vec<_> = recent.iter().map(|g| &g.id).collect();
        assert_eq!(listed, newest_first);

        assert_eq!(list_all_games(&state).await.unwrap().len(), 7);
    }
}
