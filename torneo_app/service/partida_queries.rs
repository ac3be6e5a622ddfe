use torneo_types::{errors::ApplicationError, partida::Partida};

/// Extra read endpoints the backend exposes for matches.
#[async_trait::async_trait]
pub trait PartidaQueries: Send + Sync {
    /// Matches of the game named `nombre`, ordered by winner.
    async fn winners_of_game(&self, nombre: &str) -> Result<Vec<Partida>, ApplicationError>;

    /// Matches won by the player with nickname `apodo`, ordered by winner.
    async fn matches_won_by(&self, apodo: &str) -> Result<Vec<Partida>, ApplicationError>;
}
