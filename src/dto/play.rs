//! Query parameters accepted by the play route.

/// Parsed `?game_id=&players=` query of `/play/{game_type}/{variant}`.
///
/// `players` may be repeated; blank entries are dropped and names are trimmed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PlayParams {
    pub game_id: Option<String>,
    pub players: Vec<String>,
}

impl From<Vec<(String, String)>> for PlayParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut params = PlayParams::default();
        for (key, value) in pairs {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "game_id" => params.game_id = Some(value.to_string()),
                "players" => params.players.push(value.to_string()),
                _ => {}
            }
        }
        params
    }
}
