use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::Entity;

/// In-memory collection of one entity type, in insertion order.
pub struct Store<E> {
    records: Arc<RwLock<Vec<E>>>,
}

impl<E> Clone for Store<E> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
        }
    }
}

impl<E> Default for Store<E> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<E: Entity> Store<E> {
    /// Assigns a fresh identifier and stores the entity.
    pub async fn insert(&self, mut entity: E) -> E {
        entity.set_id(Some(Uuid::new_v4().to_string()));
        self.records.write().await.push(entity.clone());
        entity
    }

    pub async fn get(&self, id: &str) -> Option<E> {
        self.records
            .read()
            .await
            .iter()
            .find(|e| e.id() == Some(id))
            .cloned()
    }

    pub async fn all(&self) -> Vec<E> {
        self.records.read().await.clone()
    }

    /// Applies `change` to the stored entity `id`; `None` when absent.
    pub async fn update_with(&self, id: &str, change: impl FnOnce(&mut E)) -> Option<E> {
        let mut records = self.records.write().await;
        let existing = records.iter_mut().find(|e| e.id() == Some(id))?;
        change(existing);
        Some(existing.clone())
    }

    pub async fn remove(&self, id: &str) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|e| e.id() != Some(id));
        records.len() != before
    }
}
