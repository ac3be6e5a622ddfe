#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::BTreeMap,
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };
    use tokio::sync::Notify;

    use torneo_types::{
        common::{Entity, EntityResponse},
        errors::{ApiError, AppError, ApplicationError},
    };

    use crate::{navigation::Navigator, service::EntityService, update_component::SaveErrorHandler};

    /// In-memory stand-in for a REST resource.
    ///
    /// Records every create/update payload. A mock can be made to fail every
    /// mutation, and can be gated so mutations only answer once the gate is
    /// notified.
    pub struct MockEntityService<E: Entity> {
        store: Arc<Mutex<BTreeMap<i64, E>>>,
        created: Arc<Mutex<Vec<E>>>,
        updated: Arc<Mutex<Vec<E>>>,
        calls: Arc<AtomicUsize>,
        failure: Option<String>,
        gate: Option<Arc<Notify>>,
        assign_id: fn(&mut E, i64),
    }

    impl<E: Entity> MockEntityService<E> {
        pub fn new() -> Self
        where
            E: AssignId,
        {
            Self {
                store: Arc::new(Mutex::new(BTreeMap::new())),
                created: Arc::new(Mutex::new(Vec::new())),
                updated: Arc::new(Mutex::new(Vec::new())),
                calls: Arc::new(AtomicUsize::new(0)),
                failure: None,
                gate: None,
                assign_id: E::assign_id,
            }
        }

        /// Every mutation fails with a transport error carrying `message`.
        pub fn failing(mut self, message: &str) -> Self {
            self.failure = Some(message.to_string());
            self
        }

        /// Mutations wait for `gate` to be notified before answering.
        pub fn gated(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }

        pub fn insert(&self, entity: E) {
            if let Some(id) = entity.identifier() {
                self.store.lock().unwrap().insert(id, entity);
            }
        }

        pub fn created(&self) -> Vec<E> {
            self.created.lock().unwrap().clone()
        }

        pub fn updated(&self) -> Vec<E> {
            self.updated.lock().unwrap().clone()
        }

        /// Number of create/update requests received so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        async fn settle(&self) -> Result<(), ApplicationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match &self.failure {
                Some(message) => Err(ApiError::Transport(message.clone()).into()),
                None => Ok(()),
            }
        }
    }

    /// Lets the mock hand out identifiers on create.
    pub trait AssignId {
        fn assign_id(&mut self, id: i64);
    }

    impl AssignId for torneo_types::partida::Partida {
        fn assign_id(&mut self, id: i64) {
            self.id = Some(id);
        }
    }

    impl AssignId for torneo_types::jugador::Jugador {
        fn assign_id(&mut self, id: i64) {
            self.id = Some(id);
        }
    }

    #[async_trait]
    impl<E: Entity> EntityService<E> for MockEntityService<E> {
        async fn create(&self, entity: &E) -> Result<EntityResponse<E>, ApplicationError> {
            self.created.lock().unwrap().push(entity.clone());
            self.settle().await?;

            let mut store = self.store.lock().unwrap();
            let id = store.keys().next_back().copied().unwrap_or(0) + 1;
            let mut saved = entity.clone();
            (self.assign_id)(&mut saved, id);
            store.insert(id, saved.clone());

            Ok(EntityResponse::new(201, saved))
        }

        async fn update(&self, entity: &E) -> Result<EntityResponse<E>, ApplicationError> {
            self.updated.lock().unwrap().push(entity.clone());
            self.settle().await?;

            let id = entity
                .identifier()
                .ok_or(AppError::MissingIdentifier(E::NAME))?;
            self.store.lock().unwrap().insert(id, entity.clone());

            Ok(EntityResponse::new(200, entity.clone()))
        }

        async fn partial_update(&self, entity: &E) -> Result<EntityResponse<E>, ApplicationError> {
            self.update(entity).await
        }

        async fn find(&self, id: i64) -> Result<EntityResponse<E>, ApplicationError> {
            let store = self.store.lock().unwrap();
            let entity = store.get(&id).cloned().ok_or(ApiError::NotFound {
                resource: E::RESOURCE,
                id,
            })?;
            Ok(EntityResponse::new(200, entity))
        }

        async fn query(&self) -> Result<EntityResponse<Vec<E>>, ApplicationError> {
            let entities = self.store.lock().unwrap().values().cloned().collect();
            Ok(EntityResponse::new(200, entities))
        }

        async fn count(&self) -> Result<u64, ApplicationError> {
            Ok(self.store.lock().unwrap().len() as u64)
        }

        async fn delete(&self, id: i64) -> Result<EntityResponse<()>, ApplicationError> {
            self.store.lock().unwrap().remove(&id);
            Ok(EntityResponse::new(204, ()))
        }
    }

    /// Counts how many times the component navigated back.
    #[derive(Default)]
    pub struct RecordingNavigator {
        count: AtomicUsize,
    }

    impl RecordingNavigator {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn count(&self) -> usize {
            self.count.load(Ordering::SeqCst)
        }
    }

    impl Navigator for RecordingNavigator {
        fn previous_state(&self) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    pub struct RecordingErrorHandler {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingErrorHandler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl SaveErrorHandler for RecordingErrorHandler {
        fn on_save_error(&self, error: &ApplicationError) {
            self.messages.lock().unwrap().push(error.to_string());
        }
    }
}
