use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use super::{Resource, Store};
use crate::errors::{AppError, PARAMS_HEADER};

pub const ALERT_HEADER: &str = "x-employeeapp-alert";

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub filter: Option<String>,
}

/// Success alert headers: `employeeApp.<entity>.<action>` plus the affected id.
fn entity_alert<E: Resource>(action: &str, id: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&format!("employeeApp.{}.{action}", E::NAME)) {
        headers.insert(HeaderName::from_static(ALERT_HEADER), value);
    }
    if let Ok(value) = HeaderValue::from_str(id) {
        headers.insert(HeaderName::from_static(PARAMS_HEADER), value);
    }
    headers
}

/// Shared id checks of PUT and PATCH.
fn check_path_id<E: Resource>(path_id: &str, entity: &E) -> Result<(), AppError> {
    match entity.id() {
        None => Err(AppError::alert(E::NAME, "idnull", "Invalid id")),
        Some(id) if id != path_id => Err(AppError::alert(E::NAME, "idinvalid", "Invalid ID")),
        Some(_) => Ok(()),
    }
}

/// POST /api/<resource>
pub async fn create<E: Resource>(
    State(store): State<Store<E>>,
    Json(entity): Json<E>,
) -> Result<(StatusCode, HeaderMap, Json<E>), AppError> {
    debug!("REST request to save {} : {:?}", E::NAME, entity);
    entity.validate()?;
    if entity.id().is_some() {
        return Err(AppError::alert(
            E::NAME,
            "idexists",
            "A new entity cannot already have an ID",
        ));
    }

    let saved = store.insert(entity).await;
    let id = saved.id().unwrap_or_default();
    let mut headers = entity_alert::<E>("created", id);
    if let Ok(location) = HeaderValue::from_str(&format!("/{}/{id}", E::RESOURCE)) {
        headers.insert(header::LOCATION, location);
    }
    Ok((StatusCode::CREATED, headers, Json(saved)))
}

/// PUT /api/<resource>/:id
pub async fn update<E: Resource>(
    State(store): State<Store<E>>,
    Path(id): Path<String>,
    Json(entity): Json<E>,
) -> Result<(HeaderMap, Json<E>), AppError> {
    debug!("REST request to update {} : {id}, {:?}", E::NAME, entity);
    entity.validate()?;
    check_path_id(&id, &entity)?;

    let saved = store
        .update_with(&id, |existing| *existing = entity)
        .await
        .ok_or_else(|| AppError::alert(E::NAME, "idnotfound", "Entity not found"))?;
    Ok((entity_alert::<E>("updated", &id), Json(saved)))
}

/// PATCH /api/<resource>/:id
pub async fn partial_update<E: Resource>(
    State(store): State<Store<E>>,
    Path(id): Path<String>,
    Json(patch): Json<E>,
) -> Result<(HeaderMap, Json<E>), AppError> {
    debug!("REST request to partial update {} : {id}, {:?}", E::NAME, patch);
    check_path_id(&id, &patch)?;

    let saved = store
        .update_with(&id, |existing| existing.merge_patch(patch))
        .await
        .ok_or_else(|| AppError::alert(E::NAME, "idnotfound", "Entity not found"))?;
    Ok((entity_alert::<E>("updated", &id), Json(saved)))
}

/// GET /api/<resource>
pub async fn list<E: Resource>(
    State(store): State<Store<E>>,
    Query(params): Query<ListParams>,
) -> Json<Vec<E>> {
    debug!("REST request to get all {} (filter: {:?})", E::NAME, params.filter);
    let mut entities = store.all().await;
    if let Some(filter) = params.filter.as_deref() {
        entities.retain(|e| e.matches_filter(filter));
    }
    Json(entities)
}

/// GET /api/<resource>/:id
pub async fn find<E: Resource>(
    State(store): State<Store<E>>,
    Path(id): Path<String>,
) -> Result<Json<E>, AppError> {
    debug!("REST request to get {} : {id}", E::NAME);
    store
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("{} {id} not found", E::NAME)))
}

/// DELETE /api/<resource>/:id
pub async fn delete<E: Resource>(
    State(store): State<Store<E>>,
    Path(id): Path<String>,
) -> (StatusCode, HeaderMap) {
    debug!("REST request to delete {} : {id}", E::NAME);
    store.remove(&id).await;
    (StatusCode::NO_CONTENT, entity_alert::<E>("deleted", &id))
}
