mod assets;
pub mod booking;
pub mod health;
pub mod index;

pub use assets::serve_asset;

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

/// Render a template to a response, logging failures.
pub(crate) fn render_template<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("Failed to render template: {:?}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
