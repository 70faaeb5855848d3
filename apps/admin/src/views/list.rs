use std::sync::Arc;

use tracing::warn;

use super::{DeleteDialog, DialogClose};
use crate::errors::TransportError;
use crate::models::Entity;
use crate::services::{track_by_id, EntityApi, RequestOptions};

/// List view state for one entity type.
pub struct EntityList<E: Entity> {
    service: Arc<dyn EntityApi<E>>,
    items: Option<Vec<E>>,
    is_loading: bool,
}

impl<E: Entity> EntityList<E> {
    pub fn new(service: Arc<dyn EntityApi<E>>) -> Self {
        Self {
            service,
            items: None,
            is_loading: false,
        }
    }

    /// `None` until the first successful load.
    pub fn items(&self) -> Option<&[E]> {
        self.items.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Reloads every entity. On failure the previous items are kept.
    pub async fn load_all(&mut self) -> Result<(), TransportError> {
        self.is_loading = true;
        let result = self.service.query(&RequestOptions::default()).await;
        self.is_loading = false;

        match result {
            Ok(items) => {
                self.items = Some(items);
                Ok(())
            }
            Err(err) => {
                warn!("Loading {} list failed: {err}", E::NAME);
                Err(err)
            }
        }
    }

    pub fn track_id(index: usize, item: &E) -> &str {
        track_by_id(index, item)
    }

    /// Opens the delete confirmation for `item`.
    pub fn delete(&self, item: &E) -> DeleteDialog<E> {
        DeleteDialog::new(self.service.clone(), item.clone())
    }

    /// Reloads the list once a dialog reports a deletion.
    pub async fn on_delete_dialog_closed(
        &mut self,
        reason: DialogClose,
    ) -> Result<(), TransportError> {
        match reason {
            DialogClose::Deleted => self.load_all().await,
            DialogClose::Dismissed => Ok(()),
        }
    }
}
