use torneo_types::{
    common::{Entity, EntityResponse},
    errors::ApplicationError,
};

/// CRUD operations the backend offers for a single entity resource.
#[async_trait::async_trait]
pub trait EntityService<E: Entity>: Send + Sync {
    /// Persists a new entity. The entity must not carry an identifier.
    async fn create(&self, entity: &E) -> Result<EntityResponse<E>, ApplicationError>;

    /// Replaces an existing entity, addressed by its identifier.
    async fn update(&self, entity: &E) -> Result<EntityResponse<E>, ApplicationError>;

    /// Updates only the fields present on `entity`.
    async fn partial_update(&self, entity: &E) -> Result<EntityResponse<E>, ApplicationError>;

    async fn find(&self, id: i64) -> Result<EntityResponse<E>, ApplicationError>;

    async fn query(&self) -> Result<EntityResponse<Vec<E>>, ApplicationError>;

    async fn count(&self) -> Result<u64, ApplicationError>;

    async fn delete(&self, id: i64) -> Result<EntityResponse<()>, ApplicationError>;
}
