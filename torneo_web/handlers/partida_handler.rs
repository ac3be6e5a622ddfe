use axum::{
    Form,
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use dioxus::prelude::*;
use rust_i18n::t;
use std::sync::Arc;

use torneo_app::{forms::PartidaForm, service::EntityService};
use torneo_types::partida::Partida;

use crate::{
    components::{FormContext, PartidaListPage, PartidaUpdatePage},
    handlers::helpers::{
        FormView, Submission, edit_page, failure_response, new_page, render_page,
        save_submission,
    },
    http::AppState,
};

impl FormView for PartidaForm {
    const NAV: &'static str = "partidas";
    const LIST_PATH: &'static str = "/partidas";

    fn service(state: &AppState) -> Arc<dyn EntityService<Partida>> {
        state.partidas.clone()
    }

    fn title(&self) -> String {
        match self.id {
            Some(_) => t!("partida.update.edit_title").to_string(),
            None => t!("partida.update.create_title").to_string(),
        }
    }

    fn render(self, title: String, context: FormContext) -> Element {
        rsx! {
            PartidaUpdatePage { title: title, form: self, context: context }
        }
    }
}

/// GET /partidas
pub async fn partidas(State(state): State<AppState>) -> Response {
    match state.partidas.query().await {
        Ok(response) => {
            let title = t!("partida.list.title");
            let content = rsx! {
                PartidaListPage { partidas: response.body }
            };
            render_page(&title, PartidaForm::NAV, content).into_response()
        }
        Err(e) => {
            tracing::error!("Could not list partidas: {e}");
            failure_response(&e, PartidaForm::NAV)
        }
    }
}

/// GET /partidas/new
pub async fn new_partida(State(state): State<AppState>, headers: HeaderMap) -> Response {
    new_page::<PartidaForm>(&state, &headers)
}

/// GET /partidas/{id}/edit
pub async fn edit_partida(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    edit_page::<PartidaForm>(&state, id, &headers).await
}

/// POST /partidas – create or update, depending on the submitted id.
pub async fn save_partida(
    State(state): State<AppState>,
    Form(submission): Form<Submission<PartidaForm>>,
) -> Response {
    save_submission(&state, submission).await
}
