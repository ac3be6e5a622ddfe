use axum::{
    Form,
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use dioxus::prelude::*;
use rust_i18n::t;
use std::sync::Arc;

use torneo_app::{forms::JugadorForm, service::EntityService};
use torneo_types::jugador::Jugador;

use crate::{
    components::{FormContext, JugadorListPage, JugadorUpdatePage},
    handlers::helpers::{
        FormView, Submission, edit_page, failure_response, new_page, render_page,
        save_submission,
    },
    http::AppState,
};

impl FormView for JugadorForm {
    const NAV: &'static str = "jugadores";
    const LIST_PATH: &'static str = "/jugadores";

    fn service(state: &AppState) -> Arc<dyn EntityService<Jugador>> {
        state.jugadores.clone()
    }

    fn title(&self) -> String {
        match self.id {
            Some(_) => t!("jugador.update.edit_title").to_string(),
            None => t!("jugador.update.create_title").to_string(),
        }
    }

    fn render(self, title: String, context: FormContext) -> Element {
        rsx! {
            JugadorUpdatePage { title: title, form: self, context: context }
        }
    }
}

/// GET /jugadores
pub async fn jugadores(State(state): State<AppState>) -> Response {
    match state.jugadores.query().await {
        Ok(response) => {
            let title = t!("jugador.list.title");
            let content = rsx! {
                JugadorListPage { jugadores: response.body }
            };
            render_page(&title, JugadorForm::NAV, content).into_response()
        }
        Err(e) => {
            tracing::error!("Could not list jugadores: {e}");
            failure_response(&e, JugadorForm::NAV)
        }
    }
}

/// GET /jugadores/new
pub async fn new_jugador(State(state): State<AppState>, headers: HeaderMap) -> Response {
    new_page::<JugadorForm>(&state, &headers)
}

/// GET /jugadores/{id}/edit
pub async fn edit_jugador(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    edit_page::<JugadorForm>(&state, id, &headers).await
}

/// POST /jugadores
pub async fn save_jugador(
    State(state): State<AppState>,
    Form(submission): Form<Submission<JugadorForm>>,
) -> Response {
    save_submission(&state, submission).await
}
