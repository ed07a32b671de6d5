use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::SystemTime,
};

use futures::future::BoxFuture;
use rusqlite::{Connection, params};
use tracing::debug;

use crate::dao::{
    game_store::GameStore,
    models::{GameEntity, NewScoreEntity, ScoreEntity},
    storage::StorageResult,
};

use super::{
    config::SqliteConfig,
    error::{SqliteDaoError, SqliteResult},
    models::{
        GAME_COLUMNS, GameRow, SCHEMA, SCORE_COLUMNS, ScoreRow, encode_json, encode_timestamp,
    },
};

/// SQLite-backed store. Every operation opens its own connection on the blocking pool
/// and drops it once the statement has run.
#[derive(Clone)]
pub struct SqliteGameStore {
    path: Arc<PathBuf>,
}

impl SqliteGameStore {
    /// Open (or create) the database file and ensure the schema exists.
    pub async fn open(config: SqliteConfig) -> SqliteResult<Self> {
        let store = Self {
            path: Arc::new(config.path),
        };

        store
            .run(|conn| {
                let tx = conn
                    .transaction()
                    .map_err(|source| SqliteDaoError::Schema { source })?;
                tx.execute_batch(SCHEMA)
                    .map_err(|source| SqliteDaoError::Schema { source })?;
                tx.commit()
                    .map_err(|source| SqliteDaoError::Schema { source })
            })
            .await?;

        debug!(path = %store.path.display(), "SQLite schema ready");
        Ok(store)
    }

    /// Location of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn run<T, F>(&self, op: F) -> SqliteResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> SqliteResult<T> + Send + 'static,
    {
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || {
            let mut conn = connect(&path)?;
            op(&mut conn)
        })
        .await
        .map_err(|source| SqliteDaoError::Worker { source })?
    }
}

fn connect(path: &Path) -> SqliteResult<Connection> {
    let open_failed = |source: rusqlite::Error| SqliteDaoError::Open {
        path: path.display().to_string(),
        source,
    };
    let conn = Connection::open(path).map_err(open_failed)?;
    // The bundled build enforces foreign keys by default. `scores.game_id` is
    // declarative only, so scores for unknown games must still be stored.
    conn.pragma_update(None, "foreign_keys", false)
        .map_err(open_failed)?;
    Ok(conn)
}

fn insert_game(conn: &Connection, game: &GameEntity) -> SqliteResult<()> {
    let created_at = encode_timestamp("created_at", game.created_at)?;
    let completed_at = game
        .completed_at
        .map(|value| encode_timestamp("completed_at", value))
        .transpose()?;
    let players = encode_json("players", &game.players)?;
    let data = encode_json("data", &game.data)?;

    conn.execute(
        "INSERT INTO games (id, game_type, variant, players, created_at, completed_at, status, data)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            game.id,
            game.game_type,
            game.variant,
            players,
            created_at,
            completed_at,
            game.status.as_str(),
            data,
        ],
    )
    .map_err(|source| SqliteDaoError::Insert {
        table: "games",
        source,
    })?;

    Ok(())
}

fn insert_score(conn: &Connection, score: NewScoreEntity) -> SqliteResult<ScoreEntity> {
    let timestamp = SystemTime::now();
    let encoded = encode_timestamp("timestamp", timestamp)?;

    conn.execute(
        "INSERT INTO scores (game_id, round_number, player_name, score, bid, made_bid, notes, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            score.game_id,
            score.round_number,
            score.player_name,
            score.score,
            score.bid,
            score.made_bid,
            score.notes,
            encoded,
        ],
    )
    .map_err(|source| SqliteDaoError::Insert {
        table: "scores",
        source,
    })?;

    Ok(ScoreEntity::from_new(
        conn.last_insert_rowid(),
        timestamp,
        score,
    ))
}

fn find_game(conn: &Connection, id: &str) -> SqliteResult<Option<GameEntity>> {
    let query = |source: rusqlite::Error| SqliteDaoError::Query {
        table: "games",
        source,
    };
    let mut statement = conn
        .prepare(&format!("SELECT {GAME_COLUMNS} FROM games WHERE id = ?1"))
        .map_err(query)?;
    let mut rows = statement
        .query_map(params![id], GameRow::from_row)
        .map_err(query)?;

    match rows.next() {
        Some(row) => row.map_err(query)?.into_entity().map(Some),
        None => Ok(None),
    }
}

fn list_scores(conn: &Connection, game_id: &str) -> SqliteResult<Vec<ScoreEntity>> {
    let query = |source: rusqlite::Error| SqliteDaoError::Query {
        table: "scores",
        source,
    };
    let mut statement = conn
        .prepare(&format!(
            "SELECT {SCORE_COLUMNS} FROM scores WHERE game_id = ?1
             ORDER BY round_number, timestamp, id"
        ))
        .map_err(query)?;
    let rows = statement
        .query_map(params![game_id], ScoreRow::from_row)
        .map_err(query)?;

    let mut scores = Vec::new();
    for row in rows {
        scores.push(row.map_err(query)?.into_entity()?);
    }
    Ok(scores)
}

fn list_games(conn: &Connection, limit: Option<usize>) -> SqliteResult<Vec<GameEntity>> {
    let query = |source: rusqlite::Error| SqliteDaoError::Query {
        table: "games",
        source,
    };
    // SQLite treats a negative LIMIT as "no limit".
    let limit = limit
        .map(|value| i64::try_from(value).unwrap_or(i64::MAX))
        .unwrap_or(-1);

    let mut statement = conn
        .prepare(&format!(
            "SELECT {GAME_COLUMNS} FROM games ORDER BY created_at DESC, rowid DESC LIMIT ?1"
        ))
        .map_err(query)?;
    let rows = statement
        .query_map(params![limit], GameRow::from_row)
        .map_err(query)?;

    let mut games = Vec::new();
    for row in rows {
        games.push(row.map_err(query)?.into_entity()?);
    }
    Ok(games)
}

impl GameStore for SqliteGameStore {
    fn insert_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .run(move |conn| insert_game(conn, &game))
                .await
                .map_err(Into::into)
        })
    }

    fn insert_score(&self, score: NewScoreEntity) -> BoxFuture<'static, StorageResult<ScoreEntity>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .run(move |conn| insert_score(conn, score))
                .await
                .map_err(Into::into)
        })
    }

    fn find_game(&self, id: String) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .run(move |conn| find_game(conn, &id))
                .await
                .map_err(Into::into)
        })
    }

    fn list_scores(&self, game_id: String) -> BoxFuture<'static, StorageResult<Vec<ScoreEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .run(move |conn| list_scores(conn, &game_id))
                .await
                .map_err(Into::into)
        })
    }

    fn list_games(
        &self,
        limit: Option<usize>,
    ) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .run(move |conn| list_games(conn, limit))
                .await
                .map_err(Into::into)
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .run(|conn| {
                    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                        .map(|_| ())
                        .map_err(|source| SqliteDaoError::Query {
                            table: "sqlite_master",
                            source,
                        })
                })
                .await
                .map_err(Into::into)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;
    use crate::dao::models::{GameData, GameStatus};

    async fn open_store() -> (TempDir, SqliteGameStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteGameStore::open(SqliteConfig::new(dir.path().join("scores.db")))
            .await
            .unwrap();
        (dir, store)
    }

    fn game(id: &str, created_secs: u64) -> GameEntity {
        GameEntity::new(
            id,
            "rummy",
            "gin",
            vec!["Al".into(), "Bo".into()],
            SystemTime::UNIX_EPOCH + Duration::from_secs(created_secs),
        )
    }

    fn score(game_id: &str, round_number: i64, player: &str, points: i64) -> NewScoreEntity {
        NewScoreEntity {
            game_id: game_id.into(),
            round_number,
            player_name: player.into(),
            score: points,
            bid: None,
            made_bid: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn inserted_game_is_read_back_unchanged() {
        let (_dir, store) = open_store().await;
        let entity = game("g-1", 1_700_000_000);
        store.insert_game(entity.clone()).await.unwrap();

        let found = store.find_game("g-1".into()).await.unwrap().unwrap();
        assert_eq!(found, entity);
        assert_eq!(found.status, GameStatus::Active);
        assert_eq!(found.completed_at, None);
        assert_eq!(found.data, GameData::default());
    }

    #[tokio::test]
    async fn missing_game_yields_none() {
        let (_dir, store) = open_store().await;
        assert!(store.find_game("nope".into()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn score_fields_survive_round_trip_with_server_timestamp() {
        let (_dir, store) = open_store().await;
        store.insert_game(game("g-1", 1)).await.unwrap();

        let before = SystemTime::now();
        let submitted = NewScoreEntity {
            bid: Some("4 spades".into()),
            made_bid: Some(true),
            notes: Some("doubled".into()),
            ..score("g-1", 3, "Al", -20)
        };
        let stored = store.insert_score(submitted).await.unwrap();

        let scores = store.list_scores("g-1".into()).await.unwrap();
        assert_eq!(scores, vec![stored.clone()]);
        assert_eq!(stored.round_number, 3);
        assert_eq!(stored.player_name, "Al");
        assert_eq!(stored.score, -20);
        assert_eq!(stored.bid.as_deref(), Some("4 spades"));
        assert_eq!(stored.made_bid, Some(true));
        assert_eq!(stored.notes.as_deref(), Some("doubled"));
        assert!(stored.timestamp >= before);
    }

    #[tokio::test]
    async fn scores_are_ordered_by_round_then_submission() {
        let (_dir, store) = open_store().await;
        store.insert_game(game("g-1", 1)).await.unwrap();

        store.insert_score(score("g-1", 2, "first", 1)).await.unwrap();
        store.insert_score(score("g-1", 1, "Bo", 2)).await.unwrap();
        store.insert_score(score("g-1", 2, "second", 3)).await.unwrap();

        let rounds: Vec<_> = store
            .list_scores("g-1".into())
            .await
            .unwrap()
            .into_iter()
            .map(|s| (s.round_number, s.player_name))
            .collect();
        assert_eq!(
            rounds,
            vec![
                (1, "Bo".to_string()),
                (2, "first".to_string()),
                (2, "second".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn scores_are_scoped_to_their_game() {
        let (_dir, store) = open_store().await;
        store.insert_score(score("g-1", 1, "Al", 5)).await.unwrap();
        store.insert_score(score("g-2", 1, "Al", 7)).await.unwrap();

        let scores = store.list_scores("g-2".into()).await.unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].score, 7);
    }

    #[tokio::test]
    async fn dangling_scores_are_accepted() {
        let (_dir, store) = open_store().await;
        let stored = store.insert_score(score("ghost", 1, "Al", 1)).await.unwrap();
        assert!(stored.id > 0);
        assert!(store.find_game("ghost".into()).await.unwrap().is_none());
        assert_eq!(store.list_scores("ghost".into()).await.unwrap(), vec![stored]);
    }

    #[test]
    fn connections_do_not_enforce_foreign_keys() {
        let dir = tempfile::tempdir().unwrap();
        let conn = connect(&dir.path().join("fk.db")).unwrap();
        let enforced: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enforced, 0);
    }

    #[tokio::test]
    async fn second_precision_timestamps_from_older_rows_are_listed() {
        let (_dir, store) = open_store().await;
        store.insert_game(game("g-new", 1_800_000_000)).await.unwrap();

        let conn = Connection::open(store.path()).unwrap();
        conn.execute(
            "INSERT INTO games (id, game_type, variant, players, created_at, status, data)
             VALUES ('g-old', 'rummy', 'gin', '[\"Al\"]', '2024-05-01 12:00:00', 'active', '{}')",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO scores (game_id, round_number, player_name, score, timestamp)
             VALUES ('g-old', 1, 'Al', 4, '2024-05-01 12:01:00')",
            [],
        )
        .unwrap();
        drop(conn);

        let ids: Vec<_> = store
            .list_games(None)
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids, vec!["g-new", "g-old"]);

        let scores = store.list_scores("g-old".into()).await.unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].score, 4);
    }

    #[tokio::test]
    async fn listed_games_are_newest_first_and_capped() {
        let (_dir, store) = open_store().await;
        for i in 0..7 {
            store.insert_game(game(&format!("g-{i}"), 100 + i)).await.unwrap();
        }

        let recent: Vec<_> = store
            .list_games(Some(5))
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(recent, vec!["g-6", "g-5", "g-4", "g-3", "g-2"]);

        let all = store.list_games(None).await.unwrap();
        assert_eq!(all.len(), 7);
        assert_eq!(all.last().unwrap().id, "g-0");
    }

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let (dir, store) = open_store().await;
        store.insert_game(game("g-1", 1)).await.unwrap();

        let reopened = SqliteGameStore::open(SqliteConfig::new(dir.path().join("scores.db")))
            .await
            .unwrap();
        assert!(reopened.find_game("g-1".into()).await.unwrap().is_some());
        reopened.health_check().await.unwrap();
    }
}
