pub mod health;

use axum::{extract::FromRef, routing::get, Router};

use crate::backend::{handlers, Resource, Store};
use crate::models::{Candidate, EmployeeDetails};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .merge(resource_routes::<Candidate>())
        .merge(resource_routes::<EmployeeDetails>())
        .with_state(state)
}

/// Collection and item routes of one entity resource.
fn resource_routes<E: Resource>() -> Router<AppState>
where
    Store<E>: FromRef<AppState>,
{
    let collection = format!("/{}", E::RESOURCE);
    let item = format!("/{}/:id", E::RESOURCE);

    Router::new()
        .route(
            &collection,
            get(handlers::list::<E>).post(handlers::create::<E>),
        )
        .route(
            &item,
            get(handlers::find::<E>)
                .put(handlers::update::<E>)
                .patch(handlers::partial_update::<E>)
                .delete(handlers::delete::<E>),
        )
}
