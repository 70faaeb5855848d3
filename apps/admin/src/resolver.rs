//! Route resolution: loads the entity an edit view needs before it renders.

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::TransportError;
use crate::models::Entity;
use crate::navigation::Navigator;
use crate::services::EntityApi;

/// Route the resolver redirects to when the requested entity does not exist.
pub const NOT_FOUND_ROUTE: &str = "404";

pub struct EntityResolver<E: Entity> {
    service: Arc<dyn EntityApi<E>>,
    navigator: Arc<dyn Navigator>,
}

impl<E: Entity> EntityResolver<E> {
    pub fn new(service: Arc<dyn EntityApi<E>>, navigator: Arc<dyn Navigator>) -> Self {
        Self { service, navigator }
    }

    /// Resolves the entity for an edit route.
    ///
    /// - no (or empty) id: a blank entity, without touching the backend
    /// - id found: that entity
    /// - id not found: redirects to the not-found route and resolves `None`
    ///
    /// Transport failures are not handled here; they fail the navigation.
    pub async fn resolve(&self, id: Option<&str>) -> Result<Option<E>, TransportError> {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            debug!("resolving blank {} for create", E::NAME);
            return Ok(Some(E::default()));
        };

        match self.service.find(id).await? {
            Some(entity) => Ok(Some(entity)),
            None => {
                info!("{} {id} not found, redirecting", E::NAME);
                self.navigator.navigate(&[NOT_FOUND_ROUTE]);
                Ok(None)
            }
        }
    }
}
