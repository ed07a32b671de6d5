//! Server-rendered HTML pages.

mod pages;

pub use pages::{PlayPage, history, index, play, setup, variants};

use axum::response::Html;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is in URL components (RFC 3986 unreserved set).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Percent-encode a path segment or query value.
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Link to the player setup form of a variant.
pub fn setup_path(game_type: &str, variant: &str) -> String {
    format!("/setup/{}/{}", encode(game_type), encode(variant))
}

/// Link resuming an existing game session.
pub fn resume_path(game_type: &str, variant: &str, game_id: &str) -> String {
    format!(
        "/play/{}/{}?game_id={}",
        encode(game_type),
        encode(variant),
        encode(game_id)
    )
}

/// Human readable label for identifiers such as `double_dummy`.
fn title_case(value: &str) -> String {
    value
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - Scorepad</title>
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
<style>
.notification {{ position: fixed; right: 1rem; bottom: 1rem; padding: .75rem 1rem; border-radius: 4px; background: #eef; }}
.notification-error {{ background: #fdd; }}
.notification-warning {{ background: #ffd; }}
.notification-close {{ margin-left: .5rem; border: 0; background: none; cursor: pointer; }}
</style>
</head>
<body>
<header><a href="/"><i class="fa-solid fa-clipboard-list"></i> Scorepad</a> <a href="/history">History</a></header>
<main>
{body}
</main>
<script src="/static/app.js"></script>
</body>
</html>"#,
        title = escape(title),
        body = body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<b class="x">Al & Bo's</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Al &amp; Bo&#39;s&lt;/b&gt;"
        );
    }

    #[test]
    fn paths_encode_their_segments() {
        assert_eq!(setup_path("rummy", "gin"), "/setup/rummy/gin");
        assert_eq!(setup_path("go fish", "basic"), "/setup/go%20fish/basic");
        assert_eq!(
            resume_path("bridge", "double_dummy", "a-b/c"),
            "/play/bridge/double_dummy?game_id=a-b%2Fc"
        );
    }

    #[test]
    fn identifiers_become_titles() {
        assert_eq!(title_case("double_dummy"), "Double Dummy");
        assert_eq!(title_case("canasta"), "Canasta");
    }
}
