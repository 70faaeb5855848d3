//! Entity services: CRUD transport for one entity type each.
//!
//! Workflows hold an `Arc<dyn EntityApi<E>>` so the HTTP-backed
//! `EntityService` can be swapped for any other implementation.

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::TransportError;
use crate::models::Entity;

pub mod collection;

pub use collection::{merge_into_collection_if_missing, track_by_id};

/// Query filter that keeps only records not yet linked to a child.
pub const CHILD_IS_NULL: &str = "child-is-null";

/// Paging, sorting and filtering options of a `query` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub query: Option<String>,
    pub filter: Option<String>,
    /// Each entry is sent as its own `sort` parameter, e.g. `id,asc`.
    pub sort: Vec<String>,
}

impl RequestOptions {
    pub fn filter(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Flattens the options into query parameters, `sort` last and repeated.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }
        if let Some(query) = &self.query {
            params.push(("query", query.clone()));
        }
        if let Some(filter) = &self.filter {
            params.push(("filter", filter.clone()));
        }
        for sort in &self.sort {
            params.push(("sort", sort.clone()));
        }
        params
    }
}

/// CRUD operations on one REST resource.
#[async_trait]
pub trait EntityApi<E: Entity>: Send + Sync {
    /// Persists a new entity and returns it with its identifier populated.
    async fn create(&self, entity: &E) -> Result<E, TransportError>;

    /// Replaces a persisted entity. The identifier must be present.
    async fn update(&self, entity: &E) -> Result<E, TransportError>;

    /// Sends only the defined fields of `entity`.
    async fn partial_update(&self, entity: &E) -> Result<E, TransportError>;

    /// `Ok(None)` when the backend has no such entity.
    async fn find(&self, id: &str) -> Result<Option<E>, TransportError>;

    async fn query(&self, options: &RequestOptions) -> Result<Vec<E>, TransportError>;

    async fn delete(&self, id: &str) -> Result<(), TransportError>;
}

/// Builds the shared HTTP client for all entity services.
pub fn build_http_client(config: &Config) -> Result<Client, TransportError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?)
}

/// `EntityApi` over HTTP, rooted at `<base url>/<E::RESOURCE>`.
pub struct EntityService<E> {
    client: Client,
    resource_url: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            resource_url: self.resource_url.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> EntityService<E> {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            resource_url: format!("{}/{}", base_url.trim_end_matches('/'), E::RESOURCE),
            _entity: PhantomData,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        Ok(Self::new(build_http_client(config)?, &config.api_base_url))
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.resource_url, id)
    }

    /// Identifier path segment of `entity`. A missing id is the caller's
    /// mistake; it is sent as `undefined` and left for the backend to reject.
    fn entity_url(&self, entity: &E) -> String {
        self.item_url(entity.id().unwrap_or("undefined"))
    }
}

#[async_trait]
impl<E: Entity> EntityApi<E> for EntityService<E> {
    async fn create(&self, entity: &E) -> Result<E, TransportError> {
        debug!("POST {}", self.resource_url);
        let response = self.client.post(&self.resource_url).json(entity).send().await?;
        read_body(check_status(response).await?)
            .await?
            .ok_or(TransportError::EmptyBody)
    }

    async fn update(&self, entity: &E) -> Result<E, TransportError> {
        let url = self.entity_url(entity);
        debug!("PUT {url}");
        let response = self.client.put(&url).json(entity).send().await?;
        read_body(check_status(response).await?)
            .await?
            .ok_or(TransportError::EmptyBody)
    }

    async fn partial_update(&self, entity: &E) -> Result<E, TransportError> {
        let url = self.entity_url(entity);
        debug!("PATCH {url}");
        let response = self
            .client
            .patch(&url)
            .header("content-type", "application/merge-patch+json")
            .body(serde_json::to_vec(entity)?)
            .send()
            .await?;
        read_body(check_status(response).await?)
            .await?
            .ok_or(TransportError::EmptyBody)
    }

    async fn find(&self, id: &str) -> Result<Option<E>, TransportError> {
        let url = self.item_url(id);
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!("{} {id} not found", E::NAME);
            return Ok(None);
        }
        read_body(check_status(response).await?).await
    }

    async fn query(&self, options: &RequestOptions) -> Result<Vec<E>, TransportError> {
        debug!("GET {} {:?}", self.resource_url, options);
        let response = self
            .client
            .get(&self.resource_url)
            .query(&options.to_params())
            .send()
            .await?;
        Ok(read_body(check_status(response).await?)
            .await?
            .unwrap_or_default())
    }

    async fn delete(&self, id: &str) -> Result<(), TransportError> {
        let url = self.item_url(id);
        debug!("DELETE {url}");
        let response = self.client.delete(&url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!("API returned {}: {}", status, body);
    Err(TransportError::Api {
        status: status.as_u16(),
        message: body,
    })
}

/// Decodes a JSON body; an empty body or a literal `null` reads as `None`.
async fn read_body<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, TransportError> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<T>>(&text)?)
}
