use axum::{Router, http::header, response::IntoResponse, routing::get};

use crate::state::SharedState;

const APP_JS: &str = include_str!("../../static/app.js");

/// Static client assets compiled into the binary.
pub fn router() -> Router<SharedState> {
    Router::new().route("/static/app.js", get(app_js))
}

async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
}
