use std::fmt::Write;

use axum::response::Html;

use crate::{
    catalog::{GameCatalog, GameConfig, VariantDescriptor, game_icon},
    dto::game::{GameSummary, GameView},
};

use super::{encode, escape, layout, resume_path, setup_path, title_case};

/// Number of name inputs offered by the setup form.
const SETUP_SEATS: usize = 4;
/// Seats that must be filled before the form can be submitted.
const REQUIRED_SEATS: usize = 2;

/// Landing page: game families and the most recent sessions.
pub fn index(catalog: &GameCatalog, recent: &[GameSummary]) -> Html<String> {
    let mut body = String::from("<h1>Card game scorepad</h1>\n<section class=\"game-types\">\n");
    for game_type in catalog.game_types() {
        let _ = writeln!(
            body,
            r#"<a class="card card-clickable" href="/game/{path}"><i class="{icon}"></i> {label}</a>"#,
            path = encode(game_type),
            icon = game_icon(game_type),
            label = escape(&title_case(game_type)),
        );
    }
    body.push_str("</section>\n<section class=\"recent-games\">\n<h2>Recent games</h2>\n");

    if recent.is_empty() {
        body.push_str("<p>No games played yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for game in recent {
            let _ = writeln!(
                body,
                r#"<li><a href="{href}"><i class="{icon}"></i> {game_type} / {variant}</a> {players} <span class="status">{status}</span> <time>{created}</time></li>"#,
                href = escape(&resume_path(&game.game_type, &game.variant, &game.id)),
                icon = game_icon(&game.game_type),
                game_type = escape(&title_case(&game.game_type)),
                variant = escape(&title_case(&game.variant)),
                players = escape(&game.players.join(", ")),
                status = game.status,
                created = escape(&game.created_at),
            );
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</section>");

    layout("Home", &body)
}

/// Variant chooser for game types offering more than one variant.
pub fn variants(game_type: &str, variants: &[VariantDescriptor]) -> Html<String> {
    let mut body = format!(
        "<h1><i class=\"{icon}\"></i> {title}</h1>\n<ul class=\"variants\">\n",
        icon = game_icon(game_type),
        title = escape(&title_case(game_type)),
    );
    for variant in variants {
        let _ = writeln!(
            body,
            r#"<li><a class="card card-clickable" href="{href}"><strong>{name}</strong> <span>{description}</span></a></li>"#,
            href = escape(&setup_path(game_type, variant.id)),
            name = escape(variant.name),
            description = escape(variant.description),
        );
    }
    body.push_str("</ul>");

    layout(&title_case(game_type), &body)
}

/// Player setup form handing off to the play route.
pub fn setup(game_type: &str, variant: &str) -> Html<String> {
    let mut body = format!(
        "<h1>{game} / {variant}</h1>\n<form method=\"get\" action=\"/play/{game_path}/{variant_path}\">\n",
        game = escape(&title_case(game_type)),
        variant = escape(&title_case(variant)),
        game_path = encode(game_type),
        variant_path = encode(variant),
    );
    for seat in 1..=SETUP_SEATS {
        let required = if seat <= REQUIRED_SEATS { " required" } else { "" };
        let _ = writeln!(
            body,
            r#"<label>Player {seat} <input type="text" name="players" autocomplete="off"{required}></label>"#,
        );
    }
    body.push_str("<button class=\"btn\" type=\"submit\">Start game</button>\n</form>");

    layout("Setup", &body)
}

/// Everything the live game view needs.
#[derive(Debug)]
pub struct PlayPage<'a> {
    pub game_type: &'a str,
    pub variant: &'a str,
    pub game_id: &'a str,
    pub config: &'a GameConfig,
}

/// Live score sheet. Players and scores are loaded by the client script.
pub fn play(page: &PlayPage<'_>) -> Html<String> {
    let heading = page
        .config
        .name
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} / {}", title_case(page.game_type), title_case(page.variant)));

    let mut body = format!(
        r#"<section id="game" data-game-id="{id}" data-game-type="{game_type}" data-variant="{variant}">
<h1><i class="{icon}"></i> {heading}</h1>
"#,
        id = escape(page.game_id),
        game_type = escape(page.game_type),
        variant = escape(page.variant),
        icon = game_icon(page.game_type),
        heading = escape(&heading),
    );

    if let Some(url) = page.config.rules_url {
        let _ = writeln!(
            body,
            r#"<p><a href="{url}" target="_blank" rel="noopener">Rules</a></p>"#,
            url = escape(url),
        );
    }
    push_list(&mut body, "Quick tips", &page.config.quick_tips);
    push_list(&mut body, "Scoring", &page.config.scoring_info);

    body.push_str(
        r#"<table id="scoreboard"><thead></thead><tbody></tbody><tfoot></tfoot></table>
<form id="score-form">
<label>Round <input type="number" name="round_number" min="1" value="1" required></label>
<label>Player <select name="player" required></select></label>
<label>Score <input type="number" name="score" value="0" required></label>
<label>Bid <input type="text" name="bid"></label>
<label>Made bid <select name="made_bid"><option value="">-</option><option value="true">Yes</option><option value="false">No</option></select></label>
<label>Notes <input type="text" name="notes"></label>
<button class="btn" type="submit">Add score</button>
</form>
</section>"#,
    );

    layout(&heading, &body)
}

fn push_list(body: &mut String, title: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(body, "<h2>{}</h2>\n<ul>", escape(title));
    for item in items {
        let _ = writeln!(body, "<li>{}</li>", escape(item));
    }
    body.push_str("</ul>\n");
}

/// Full game history, newest first.
pub fn history(games: &[GameView]) -> Html<String> {
    let mut body = String::from("<h1>Game history</h1>\n");
    if games.is_empty() {
        body.push_str("<p>No games recorded.</p>");
        return layout("History", &body);
    }

    body.push_str(
        "<table class=\"history\">\n<thead><tr><th>Game</th><th>Players</th><th>Started</th><th>Completed</th><th>Status</th><th></th></tr></thead>\n<tbody>\n",
    );
    for game in games {
        let _ = writeln!(
            body,
            r#"<tr><td><i class="{icon}"></i> {game_type} / {variant}</td><td>{players}</td><td>{created}</td><td>{completed}</td><td>{status}</td><td><a href="{href}">Open</a></td></tr>"#,
            icon = game_icon(&game.game_type),
            game_type = escape(&title_case(&game.game_type)),
            variant = escape(&title_case(&game.variant)),
            players = escape(&game.players.join(", ")),
            created = escape(&game.created_at),
            completed = escape(game.completed_at.as_deref().unwrap_or("-")),
            status = game.status,
            href = escape(&resume_path(&game.game_type, &game.variant, &game.id)),
        );
    }
    body.push_str("</tbody>\n</table>");

    layout("History", &body)
}
