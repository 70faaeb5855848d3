//! Test doubles shared by the workflow, resolver and view tests.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::errors::TransportError;
use crate::models::Entity;
use crate::services::{EntityApi, RequestOptions};

struct FakeState<E> {
    find: Option<E>,
    query: Vec<E>,
    fail_status: Option<u16>,
    calls: Vec<String>,
    received: Vec<E>,
    save_gate: Option<oneshot::Receiver<()>>,
}

/// In-memory `EntityApi` with canned responses and a call log.
pub(crate) struct FakeApi<E> {
    state: Mutex<FakeState<E>>,
}

impl<E: Entity> FakeApi<E> {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                find: None,
                query: Vec::new(),
                fail_status: None,
                calls: Vec::new(),
                received: Vec::new(),
                save_gate: None,
            }),
        }
    }

    pub(crate) fn set_find(&self, entity: Option<E>) {
        self.state.lock().unwrap().find = entity;
    }

    pub(crate) fn set_query(&self, entities: Vec<E>) {
        self.state.lock().unwrap().query = entities;
    }

    /// Every subsequent call fails with an API error of this status.
    pub(crate) fn fail_with_status(&self, status: u16) {
        self.state.lock().unwrap().fail_status = Some(status);
    }

    /// The next `create` or `update` stays pending until `gate` fires.
    pub(crate) fn hold_next_save(&self, gate: oneshot::Receiver<()>) {
        self.state.lock().unwrap().save_gate = Some(gate);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Entities handed to `create`, `update` and `partial_update`.
    pub(crate) fn received(&self) -> Vec<E> {
        self.state.lock().unwrap().received.clone()
    }

    fn record(&self, call: String, entity: Option<&E>) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if let Some(entity) = entity {
            state.received.push(entity.clone());
        }
        match state.fail_status {
            Some(status) => Err(TransportError::Api {
                status,
                message: "fake failure".to_string(),
            }),
            None => Ok(()),
        }
    }

    async fn pass_save_gate(&self) {
        let gate = self.state.lock().unwrap().save_gate.take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

#[async_trait]
impl<E: Entity> EntityApi<E> for FakeApi<E> {
    async fn create(&self, entity: &E) -> Result<E, TransportError> {
        self.record("create".to_string(), Some(entity))?;
        self.pass_save_gate().await;
        let mut saved = entity.clone();
        saved.set_id(Some("NEW".to_string()));
        Ok(saved)
    }

    async fn update(&self, entity: &E) -> Result<E, TransportError> {
        self.record(format!("update {}", entity.id().unwrap_or_default()), Some(entity))?;
        self.pass_save_gate().await;
        Ok(entity.clone())
    }

    async fn partial_update(&self, entity: &E) -> Result<E, TransportError> {
        self.record(
            format!("partial_update {}", entity.id().unwrap_or_default()),
            Some(entity),
        )?;
        Ok(entity.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<E>, TransportError> {
        self.record(format!("find {id}"), None)?;
        Ok(self.state.lock().unwrap().find.clone())
    }

    async fn query(&self, options: &RequestOptions) -> Result<Vec<E>, TransportError> {
        let call = match &options.filter {
            Some(filter) => format!("query {filter}"),
            None => "query".to_string(),
        };
        self.record(call, None)?;
        Ok(self.state.lock().unwrap().query.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), TransportError> {
        self.record(format!("delete {id}"), None)
    }
}
