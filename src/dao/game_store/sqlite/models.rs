use std::time::SystemTime;

use rusqlite::Row;
use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

use crate::dao::models::{GameData, GameEntity, GameStatus, ScoreEntity};

use super::error::{SqliteDaoError, SqliteResult};

/// Fixed-width UTC layout so that TEXT ordering matches chronological ordering.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:9]");

/// Accepts rows written with SQLite's `CURRENT_TIMESTAMP` (whole seconds) as well.
const STORED_TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"
);

pub const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS games (
        id           TEXT PRIMARY KEY,
        game_type    TEXT NOT NULL,
        variant      TEXT,
        players      TEXT NOT NULL,
        created_at   TEXT NOT NULL,
        completed_at TEXT,
        status       TEXT NOT NULL DEFAULT 'active',
        data         TEXT
    );

    CREATE TABLE IF NOT EXISTS scores (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        game_id      TEXT NOT NULL REFERENCES games (id),
        round_number INTEGER NOT NULL DEFAULT 1,
        player_name  TEXT NOT NULL,
        score        INTEGER NOT NULL DEFAULT 0,
        bid          TEXT,
        made_bid     BOOLEAN,
        notes        TEXT,
        timestamp    TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS scores_game_id_idx ON scores (game_id);
";

pub const GAME_COLUMNS: &str =
    "id, game_type, variant, players, created_at, completed_at, status, data";

pub const SCORE_COLUMNS: &str =
    "id, game_id, round_number, player_name, score, bid, made_bid, notes, timestamp";

pub fn encode_timestamp(column: &'static str, value: SystemTime) -> SqliteResult<String> {
    OffsetDateTime::from(value)
        .format(TIMESTAMP_FORMAT)
        .map_err(|source| SqliteDaoError::EncodeTimestamp { column, source })
}

pub fn decode_timestamp(column: &'static str, value: String) -> SqliteResult<SystemTime> {
    match PrimitiveDateTime::parse(&value, STORED_TIMESTAMP_FORMAT) {
        Ok(parsed) => Ok(parsed.assume_utc().into()),
        Err(source) => Err(SqliteDaoError::DecodeTimestamp {
            column,
            value,
            source,
        }),
    }
}

pub fn encode_json<T: serde::Serialize>(column: &'static str, value: &T) -> SqliteResult<String> {
    serde_json::to_string(value).map_err(|source| SqliteDaoError::Json { column, source })
}

/// Raw `games` row, still carrying the textual column encodings.
#[derive(Debug)]
pub struct GameRow {
    id: String,
    game_type: String,
    variant: Option<String>,
    players: String,
    created_at: String,
    completed_at: Option<String>,
    status: Option<String>,
    data: Option<String>,
}

impl GameRow {
    /// Read a row selected with [`GAME_COLUMNS`].
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            game_type: row.get(1)?,
            variant: row.get(2)?,
            players: row.get(3)?,
            created_at: row.get(4)?,
            completed_at: row.get(5)?,
            status: row.get(6)?,
            data: row.get(7)?,
        })
    }

    pub fn into_entity(self) -> SqliteResult<GameEntity> {
        let players = if self.players.is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&self.players).map_err(|source| SqliteDaoError::Json {
                column: "players",
                source,
            })?
        };

        let data = match self.data.as_deref() {
            None | Some("") => GameData::default(),
            Some(raw) => serde_json::from_str(raw).map_err(|source| SqliteDaoError::Json {
                column: "data",
                source,
            })?,
        };

        let status = match self.status.as_deref() {
            None => GameStatus::Active,
            Some(raw) => raw
                .parse::<GameStatus>()
                .map_err(|message| SqliteDaoError::InvalidColumn {
                    column: "status",
                    message,
                })?,
        };

        Ok(GameEntity {
            id: self.id,
            game_type: self.game_type,
            variant: self.variant.unwrap_or_default(),
            players,
            created_at: decode_timestamp("created_at", self.created_at)?,
            completed_at: self
                .completed_at
                .map(|value| decode_timestamp("completed_at", value))
                .transpose()?,
            status,
            data,
        })
    }
}

/// Raw `scores` row.
#[derive(Debug)]
pub struct ScoreRow {
    id: i64,
    game_id: String,
    round_number: i64,
    player_name: String,
    score: i64,
    bid: Option<String>,
    made_bid: Option<bool>,
    notes: Option<String>,
    timestamp: String,
}

impl ScoreRow {
    /// Read a row selected with [`SCORE_COLUMNS`].
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            game_id: row.get(1)?,
            round_number: row.get(2)?,
            player_name: row.get(3)?,
            score: row.get(4)?,
            bid: row.get(5)?,
            made_bid: row.get(6)?,
            notes: row.get(7)?,
            timestamp: row.get(8)?,
        })
    }

    pub fn into_entity(self) -> SqliteResult<ScoreEntity> {
        Ok(ScoreEntity {
            id: self.id,
            game_id: self.game_id,
            round_number: self.round_number,
            player_name: self.player_name,
            score: self.score,
            bid: self.bid,
            made_bid: self.made_bid,
            notes: self.notes,
            timestamp: decode_timestamp("timestamp", self.timestamp)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn timestamps_keep_nanoseconds() {
        let instant = SystemTime::UNIX_EPOCH + Duration::new(1_700_000_000, 123_456_789);
        let encoded = encode_timestamp("created_at", instant).unwrap();
        assert_eq!(encoded, "2023-11-14 22:13:20.123456789");
        assert_eq!(decode_timestamp("created_at", encoded).unwrap(), instant);
    }

    #[test]
    fn encoded_timestamps_sort_chronologically() {
        let earlier = SystemTime::UNIX_EPOCH + Duration::new(1_700_000_000, 900_000_000);
        let later = SystemTime::UNIX_EPOCH + Duration::new(1_700_000_001, 5);
        assert!(
            encode_timestamp("t", earlier).unwrap() < encode_timestamp("t", later).unwrap()
        );
    }

    #[test]
    fn second_precision_timestamps_decode() {
        let decoded = decode_timestamp("created_at", "2024-05-01 12:00:00".into()).unwrap();
        assert_eq!(
            decoded,
            SystemTime::UNIX_EPOCH + Duration::from_secs(1_714_564_800)
        );

        let short = decode_timestamp("created_at", "2024-05-01 12:00:00.5".into()).unwrap();
        assert_eq!(short, decoded + Duration::from_millis(500));
    }

    #[test]
    fn malformed_timestamp_is_reported_with_its_column() {
        let err = decode_timestamp("timestamp", "yesterday".into()).unwrap_err();
        assert!(matches!(
            err,
            SqliteDaoError::DecodeTimestamp {
                column: "timestamp",
                ..
            }
        ));
    }
}
