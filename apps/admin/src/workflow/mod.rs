//! Update workflows: bind a resolved entity to an edit form and save it.
//!
//! `UpdateWorkflow<E>` carries the part every entity shares: the form, the
//! `is_saving` flag and the create-or-update dispatch. Entity-specific
//! workflows wrap it and add their relation option lists.
//!
//! Per save: `Idle -> Saving -> { success: navigate back, Idle | error: Idle }`.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::errors::WorkflowError;
use crate::forms::{EditForm, FieldSchema};
use crate::models::Entity;
use crate::navigation::Navigator;
use crate::services::EntityApi;

pub mod candidate;
pub mod employee_details;

pub use candidate::CandidateUpdate;
pub use employee_details::EmployeeDetailsUpdate;

/// Called with the failure of a save, after `is_saving` has been reset.
pub type SaveErrorHandler = Box<dyn Fn(&WorkflowError) + Send + Sync>;

pub struct UpdateWorkflow<E: Entity> {
    service: Arc<dyn EntityApi<E>>,
    navigator: Arc<dyn Navigator>,
    on_save_error: SaveErrorHandler,
    edit_form: EditForm,
    is_saving: watch::Sender<bool>,
}

impl<E: Entity> UpdateWorkflow<E> {
    pub fn new(
        service: Arc<dyn EntityApi<E>>,
        navigator: Arc<dyn Navigator>,
        schema: Vec<FieldSchema>,
    ) -> Self {
        Self {
            service,
            navigator,
            on_save_error: Box::new(|_: &WorkflowError| {}),
            edit_form: EditForm::new(schema),
            is_saving: watch::Sender::new(false),
        }
    }

    /// Replaces the default (silent) save-error handling.
    pub fn with_save_error_handler(
        mut self,
        handler: impl Fn(&WorkflowError) + Send + Sync + 'static,
    ) -> Self {
        self.on_save_error = Box::new(handler);
        self
    }

    pub fn is_saving(&self) -> bool {
        *self.is_saving.borrow()
    }

    /// Follows `is_saving` from outside the task that drives `save`.
    pub fn subscribe_saving(&self) -> watch::Receiver<bool> {
        self.is_saving.subscribe()
    }

    pub fn form(&self) -> &EditForm {
        &self.edit_form
    }

    pub fn form_mut(&mut self) -> &mut EditForm {
        &mut self.edit_form
    }

    pub fn update_form(&mut self, entity: &E) -> Result<(), WorkflowError> {
        self.edit_form.patch_value(entity)?;
        Ok(())
    }

    pub fn create_from_form(&self) -> Result<E, WorkflowError> {
        Ok(self.edit_form.value_as()?)
    }

    pub fn previous_state(&self) {
        self.navigator.back();
    }

    /// Saves the form: `update` when it carries an id, `create` otherwise.
    ///
    /// Returns the persisted entity on success. Failures go to the
    /// save-error handler and yield `None`; nothing is retried.
    ///
    /// A save already in flight does not block another one.
    pub async fn save(&self) -> Option<E> {
        self.is_saving.send_replace(true);
        let result = self.dispatch_save().await;
        self.is_saving.send_replace(false);

        match result {
            Ok(saved) => {
                debug!("{} {:?} saved", E::NAME, saved.id());
                self.previous_state();
                Some(saved)
            }
            Err(err) => {
                warn!("Saving {} failed: {err}", E::NAME);
                (self.on_save_error)(&err);
                None
            }
        }
    }

    async fn dispatch_save(&self) -> Result<E, WorkflowError> {
        let entity = self.create_from_form()?;
        let saved = if entity.id().is_some() {
            self.service.update(&entity).await?
        } else {
            self.service.create(&entity).await?
        };
        Ok(saved)
    }
}
