use axum::{Router, routing::get};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use torneo_app::{config::Config, service::EntityService};
use torneo_types::{errors::ApplicationError, jugador::Jugador, partida::Partida};

use crate::handlers::{
    edit_jugador, edit_partida, home, jugadores, new_jugador, new_partida, partidas,
    save_jugador, save_partida,
};

#[derive(Clone)]
pub struct AppState {
    pub partidas: Arc<dyn EntityService<Partida>>,
    pub jugadores: Arc<dyn EntityService<Jugador>>,
}

impl AppState {
    pub fn new(
        partidas: Arc<dyn EntityService<Partida>>,
        jugadores: Arc<dyn EntityService<Jugador>>,
        config: &Config,
    ) -> AppState {
        rust_i18n::set_locale(&config.locale);

        AppState {
            partidas,
            jugadores,
        }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(home))
            .route("/partidas", get(partidas).post(save_partida))
            .route("/partidas/new", get(new_partida))
            .route("/partidas/{id}/edit", get(edit_partida))
            .route("/jugadores", get(jugadores).post(save_jugador))
            .route("/jugadores/new", get(new_jugador))
            .route("/jugadores/{id}/edit", get(edit_jugador))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(infra_error)?;

        tracing::info!(
            "HTTP Server started, listening on http://{}",
            addr.to_string()
        );
        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
