use std::sync::Arc;

use torneo_app::config::Config;
use torneo_client::{ApiClient, RestEntityService};
use torneo_types::{errors::ApplicationError, jugador::Jugador, partida::Partida};
use torneo_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();
    let config = Config::from_env();
    let state = setup_state(&config)?;

    tracing::info!(api_url = %config.api_url, locale = %config.locale, "Starting torneo");
    WebRouter::serve(state, config.web_port).await
}

fn setup_state(config: &Config) -> Result<AppState, ApplicationError> {
    let client = ApiClient::new(config)?;
    let partidas = Arc::new(RestEntityService::<Partida>::new(client.clone()));
    let jugadores = Arc::new(RestEntityService::<Jugador>::new(client));

    Ok(AppState::new(partidas, jugadores, config))
}
