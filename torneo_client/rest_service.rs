use reqwest::header::CONTENT_TYPE;
use std::marker::PhantomData;

use torneo_app::service::EntityService;
use torneo_types::{
    common::{Entity, EntityResponse},
    errors::{AppError, ApplicationError},
};

use crate::ApiClient;

/// `EntityService` over the backend's `/api/{resource}` endpoints.
#[derive(Clone)]
pub struct RestEntityService<E: Entity> {
    client: ApiClient,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> RestEntityService<E> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    pub fn resource_url(&self) -> String {
        self.client.api_url(E::RESOURCE)
    }

    fn entity_url(&self, id: i64) -> String {
        format!("{}/{}", self.resource_url(), id)
    }

    pub(crate) fn client(&self) -> &ApiClient {
        &self.client
    }

    fn require_id(entity: &E) -> Result<i64, ApplicationError> {
        Ok(entity
            .identifier()
            .ok_or(AppError::MissingIdentifier(E::NAME))?)
    }
}

#[async_trait::async_trait]
impl<E: Entity> EntityService<E> for RestEntityService<E> {
    async fn create(&self, entity: &E) -> Result<EntityResponse<E>, ApplicationError> {
        let request = self.client.http().post(self.resource_url()).json(entity);
        let response = self.client.send(request, None).await?;
        self.client.decode(response).await
    }

    async fn update(&self, entity: &E) -> Result<EntityResponse<E>, ApplicationError> {
        let id = Self::require_id(entity)?;
        let request = self.client.http().put(self.entity_url(id)).json(entity);
        let response = self.client.send(request, Some((E::RESOURCE, id))).await?;
        self.client.decode(response).await
    }

    async fn partial_update(&self, entity: &E) -> Result<EntityResponse<E>, ApplicationError> {
        let id = Self::require_id(entity)?;
        let request = self
            .client
            .http()
            .patch(self.entity_url(id))
            .header(CONTENT_TYPE, "application/merge-patch+json")
            .body(serde_json::to_vec(entity)?);
        let response = self.client.send(request, Some((E::RESOURCE, id))).await?;
        self.client.decode(response).await
    }

    async fn find(&self, id: i64) -> Result<EntityResponse<E>, ApplicationError> {
        let request = self.client.http().get(self.entity_url(id));
        let response = self.client.send(request, Some((E::RESOURCE, id))).await?;
        self.client.decode(response).await
    }

    async fn query(&self) -> Result<EntityResponse<Vec<E>>, ApplicationError> {
        let request = self.client.http().get(self.resource_url());
        let response = self.client.send(request, None).await?;
        self.client.decode(response).await
    }

    async fn count(&self) -> Result<u64, ApplicationError> {
        let request = self
            .client
            .http()
            .get(format!("{}/count", self.resource_url()));
        let response = self.client.send(request, None).await?;
        Ok(self.client.decode::<u64>(response).await?.body)
    }

    async fn delete(&self, id: i64) -> Result<EntityResponse<()>, ApplicationError> {
        let request = self.client.http().delete(self.entity_url(id));
        let response = self.client.send(request, Some((E::RESOURCE, id))).await?;
        Ok(self.client.empty(response))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use torneo_types::{
        common::Alert,
        errors::{ApiError, AppError, ApplicationError},
        jugador::Jugador,
        partida::Partida,
    };

    use super::*;
    use crate::test_utils::tests::FakeBackend;

    fn ana_vs_beto(id: Option<i64>) -> Partida {
        Partida::new(id, Some("Ana".into()), Some("Beto".into()), Some(10))
    }

    #[tokio::test]
    async fn test_create_partida() -> Result<(), ApplicationError> {
        let backend = FakeBackend::spawn().await;
        let service = RestEntityService::<Partida>::new(backend.client());

        let response = service.create(&ana_vs_beto(None)).await?;

        assert_eq!(response.status, 201);
        assert_eq!(response.body, ana_vs_beto(Some(1)));
        assert_eq!(
            response.alert,
            Some(Alert {
                message: "A new partida is created with identifier 1".to_string(),
                param: Some("1".to_string()),
            })
        );
        assert_eq!(service.count().await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_with_id_is_rejected() {
        let backend = FakeBackend::spawn().await;
        let service = RestEntityService::<Partida>::new(backend.client());

        let result = service.create(&ana_vs_beto(Some(3))).await;

        match result {
            Err(ApplicationError::Api(ApiError::BadRequest { entity, error_key })) => {
                assert_eq!(entity, "partida");
                assert_eq!(error_key, "error.idexists");
            }
            other => panic!("Expected BadRequest error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_partida() -> Result<(), ApplicationError> {
        let backend = FakeBackend::spawn().await;
        let service = RestEntityService::<Partida>::new(backend.client());
        let created = service.create(&ana_vs_beto(None)).await?.body;

        let mut edited = created.clone();
        edited.puntos_del_ganador = Some(15);
        let response = service.update(&edited).await?;

        assert_eq!(response.status, 200);
        assert_eq!(response.body, edited);
        assert_eq!(
            response.alert.map(|a| a.message),
            Some("A partida is updated with identifier 1".to_string())
        );
        assert_eq!(service.find(1).await?.body, edited);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_without_id_fails_before_request() {
        let backend = FakeBackend::spawn().await;
        let service = RestEntityService::<Partida>::new(backend.client());

        let result = service.update(&ana_vs_beto(None)).await;

        assert!(matches!(
            result,
            Err(ApplicationError::App(AppError::MissingIdentifier("partida")))
        ));
        assert_eq!(backend.requests(), 0);
    }

    #[tokio::test]
    async fn test_update_unknown_partida() {
        let backend = FakeBackend::spawn().await;
        let service = RestEntityService::<Partida>::new(backend.client());

        let result = service.update(&ana_vs_beto(Some(42))).await;

        match result {
            Err(ApplicationError::Api(ApiError::BadRequest { error_key, .. })) => {
                assert_eq!(error_key, "error.idnotfound");
            }
            other => panic!("Expected BadRequest error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_partial_update_keeps_missing_fields() -> Result<(), ApplicationError> {
        let backend = FakeBackend::spawn().await;
        let service = RestEntityService::<Partida>::new(backend.client());
        service.create(&ana_vs_beto(None)).await?;

        let patch = Partida {
            id: Some(1),
            perdedor: Some("Carla".into()),
            ..Default::default()
        };
        let response = service.partial_update(&patch).await?;

        assert_eq!(
            response.body,
            Partida::new(Some(1), Some("Ana".into()), Some("Carla".into()), Some(10))
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_find_missing_partida() {
        let backend = FakeBackend::spawn().await;
        let service = RestEntityService::<Partida>::new(backend.client());

        let result = service.find(9).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Api(ApiError::NotFound {
                resource: "partidas",
                id: 9
            }))
        ));
    }

    #[tokio::test]
    async fn test_query_and_delete() -> Result<(), ApplicationError> {
        let backend = FakeBackend::spawn().await;
        let service = RestEntityService::<Partida>::new(backend.client());
        service.create(&ana_vs_beto(None)).await?;
        service.create(&ana_vs_beto(None)).await?;

        let all = service.query().await?.body;
        assert_eq!(all.len(), 2);

        let response = service.delete(1).await?;
        assert_eq!(response.status, 204);
        assert_eq!(
            response.alert.map(|a| a.message),
            Some("A partida is deleted with identifier 1".to_string())
        );

        let remaining = service.query().await?.body;
        assert_eq!(remaining, vec![ana_vs_beto(Some(2))]);
        Ok(())
    }

    #[tokio::test]
    async fn test_server_error_is_unexpected_status() {
        let backend = FakeBackend::spawn().await;
        backend.fail_mutations(true);
        let service = RestEntityService::<Partida>::new(backend.client());

        let result = service.create(&ana_vs_beto(None)).await;

        match result {
            Err(ApplicationError::Api(e)) => assert_eq!(e.status(), Some(500)),
            other => panic!("Expected Api error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let client = ApiClient::with_client(reqwest::Client::new(), "http://127.0.0.1:1", "torneoApp");
        let service = RestEntityService::<Partida>::new(client);

        let result = service.query().await;

        assert!(matches!(
            result,
            Err(ApplicationError::Api(ApiError::Transport(_)))
        ));
    }

    #[tokio::test]
    async fn test_jugador_resource() -> Result<(), ApplicationError> {
        let backend = FakeBackend::spawn().await;
        let service = RestEntityService::<Jugador>::new(backend.client());
        assert!(service.resource_url().ends_with("/api/jugadors"));

        let jugador = Jugador::new(
            None,
            Some("ana99".into()),
            Some("Ana".into()),
            Some("García".into()),
            NaiveDate::from_ymd_opt(1999, 4, 30),
        );
        let created = service.create(&jugador).await?.body;

        assert_eq!(created.id, Some(1));
        assert_eq!(created.fecha_de_nacimiento, jugador.fecha_de_nacimiento);
        assert_eq!(service.find(1).await?.body, created);
        Ok(())
    }
}
