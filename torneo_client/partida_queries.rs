use torneo_app::service::PartidaQueries;
use torneo_types::{errors::ApplicationError, partida::Partida};

use crate::RestEntityService;

#[async_trait::async_trait]
impl PartidaQueries for RestEntityService<Partida> {
    async fn winners_of_game(&self, nombre: &str) -> Result<Vec<Partida>, ApplicationError> {
        let client = self.client();
        let request = client
            .http()
            .get(client.api_url("ganadoresDeJuego"))
            .query(&[("nombre", nombre)]);
        let response = client.send(request, None).await?;
        Ok(client.decode(response).await?.body)
    }

    async fn matches_won_by(&self, apodo: &str) -> Result<Vec<Partida>, ApplicationError> {
        let client = self.client();
        let request = client
            .http()
            .get(client.api_url("partidasGanadas"))
            .query(&[("apodo", apodo)]);
        let response = client.send(request, None).await?;
        Ok(client.decode(response).await?.body)
    }
}

#[cfg(test)]
mod tests {
    use torneo_app::service::EntityService;

    use super::*;
    use crate::test_utils::tests::FakeBackend;

    #[tokio::test]
    async fn test_matches_won_by() -> Result<(), ApplicationError> {
        let backend = FakeBackend::spawn().await;
        let service = RestEntityService::<Partida>::new(backend.client());
        for (ganador, perdedor) in [("Ana", "Beto"), ("Beto", "Ana"), ("Ana", "Carla")] {
            let partida = Partida::new(None, Some(ganador.into()), Some(perdedor.into()), Some(3));
            service.create(&partida).await?;
        }

        let won = service.matches_won_by("Ana").await?;

        assert_eq!(won.len(), 2);
        assert!(won.iter().all(|p| p.ganador.as_deref() == Some("Ana")));
        Ok(())
    }

    #[tokio::test]
    async fn test_winners_of_game_are_ordered_by_winner() -> Result<(), ApplicationError> {
        let backend = FakeBackend::spawn().await;
        let service = RestEntityService::<Partida>::new(backend.client());
        for ganador in ["Carla", "Ana", "Beto"] {
            let partida = Partida::new(None, Some(ganador.into()), Some("X".into()), Some(1));
            service.create(&partida).await?;
        }

        let winners: Vec<String> = service
            .winners_of_game("ajedrez")
            .await?
            .into_iter()
            .filter_map(|p| p.ganador)
            .collect();

        assert_eq!(winners, vec!["Ana", "Beto", "Carla"]);
        Ok(())
    }
}
