use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use torneo_types::{
    common::{Entity, EntityResponse, Identifiable},
    errors::ApplicationError,
};

use crate::{forms::EntityForm, navigation::Navigator, service::EntityService};

/// Strategy invoked when a create/update request fails.
pub trait SaveErrorHandler: Send + Sync {
    fn on_save_error(&self, error: &ApplicationError);
}

/// Leaves the user on the form and does nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSaveErrorHandler;

impl SaveErrorHandler for NoopSaveErrorHandler {
    fn on_save_error(&self, _error: &ApplicationError) {}
}

#[derive(Debug)]
pub enum SaveOutcome<E> {
    Saved(EntityResponse<E>),
    Failed,
    /// Another save of the same component was still in flight.
    AlreadySaving,
}

impl<E> SaveOutcome<E> {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }
}

/// Update component: owns the edit form of one entity and saves it.
///
/// Saving extracts the entity from the form, then:
/// - calls `update` when the entity has an identifier, `create` otherwise;
/// - on success asks the navigator to go back to the previous state;
/// - on failure hands the error to the injected `SaveErrorHandler`;
/// - always clears the saving flag once the request has settled.
pub struct UpdateComponent<F: EntityForm> {
    edit_form: Mutex<F>,
    is_saving: AtomicBool,
    service: Arc<dyn EntityService<F::Entity>>,
    navigator: Arc<dyn Navigator>,
    error_handler: Arc<dyn SaveErrorHandler>,
}

impl<F: EntityForm> UpdateComponent<F> {
    pub fn new(service: Arc<dyn EntityService<F::Entity>>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            edit_form: Mutex::new(F::default()),
            is_saving: AtomicBool::new(false),
            service,
            navigator,
            error_handler: Arc::new(NoopSaveErrorHandler),
        }
    }

    pub fn with_error_handler(mut self, error_handler: Arc<dyn SaveErrorHandler>) -> Self {
        self.error_handler = error_handler;
        self
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving.load(Ordering::Acquire)
    }

    /// Loads `entity` into the edit form.
    pub fn update_form(&self, entity: &F::Entity) {
        self.lock_form().update_form(entity);
    }

    /// Snapshot of the current field values.
    pub fn edit_form(&self) -> F {
        self.lock_form().clone()
    }

    /// Replaces every field, e.g. with a decoded form submission.
    pub fn set_form(&self, form: F) {
        *self.lock_form() = form;
    }

    pub fn patch_form(&self, patch: impl FnOnce(&mut F)) {
        patch(&mut self.lock_form());
    }

    pub fn create_from_form(&self) -> F::Entity {
        self.lock_form().create_from_form()
    }

    pub fn previous_state(&self) {
        self.navigator.previous_state();
    }

    pub async fn save(&self) -> SaveOutcome<F::Entity> {
        let Some(_saving) = SavingGuard::acquire(&self.is_saving) else {
            tracing::warn!(entity = entity_name::<F>(), "Save already in progress, ignoring");
            return SaveOutcome::AlreadySaving;
        };

        let entity = self.create_from_form();
        let result = match entity.identifier() {
            Some(id) => {
                tracing::debug!(entity = entity_name::<F>(), id, "Updating");
                self.service.update(&entity).await
            }
            None => {
                tracing::debug!(entity = entity_name::<F>(), "Creating");
                self.service.create(&entity).await
            }
        };

        match result {
            Ok(response) => {
                tracing::info!(
                    entity = entity_name::<F>(),
                    id = ?response.body.identifier(),
                    "Saved"
                );
                self.on_save_success();
                SaveOutcome::Saved(response)
            }
            Err(e) => {
                tracing::error!(entity = entity_name::<F>(), "Save failed: {e}");
                self.error_handler.on_save_error(&e);
                SaveOutcome::Failed
            }
        }
    }

    fn on_save_success(&self) {
        self.previous_state();
    }

    fn lock_form(&self) -> std::sync::MutexGuard<'_, F> {
        self.edit_form
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn entity_name<F: EntityForm>() -> &'static str {
    <F::Entity as Entity>::NAME
}

/// Holds the saving flag for the lifetime of one save.
/// Dropping it is the finalize step, so it runs exactly once per save,
/// including when the save future itself is dropped mid-flight.
struct SavingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SavingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
