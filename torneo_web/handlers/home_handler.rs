use axum::response::{IntoResponse, Redirect};

/// GET / – the match list is the landing page.
pub async fn home() -> impl IntoResponse {
    Redirect::to("/partidas")
}
