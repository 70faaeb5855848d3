use std::sync::Arc;

use tracing::info;

use crate::errors::TransportError;
use crate::models::Entity;
use crate::services::EntityApi;

/// How a delete confirmation dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogClose {
    Deleted,
    Dismissed,
}

pub struct DeleteDialog<E: Entity> {
    service: Arc<dyn EntityApi<E>>,
    entity: E,
}

impl<E: Entity> DeleteDialog<E> {
    pub fn new(service: Arc<dyn EntityApi<E>>, entity: E) -> Self {
        Self { service, entity }
    }

    pub fn entity(&self) -> &E {
        &self.entity
    }

    pub fn cancel(&self) -> DialogClose {
        DialogClose::Dismissed
    }

    /// Deletes `id` and closes as `Deleted`. A failed delete leaves the
    /// dialog open and hands the error back.
    pub async fn confirm_delete(&self, id: &str) -> Result<DialogClose, TransportError> {
        self.service.delete(id).await?;
        info!("{} {id} deleted", E::NAME);
        Ok(DialogClose::Deleted)
    }
}
