use axum::extract::FromRef;

use crate::backend::Store;
use crate::models::{Candidate, EmployeeDetails};

/// Shared backend state injected into all route handlers via Axum extractors.
/// Each handler extracts only the store of its own entity.
#[derive(Clone, Default)]
pub struct AppState {
    pub candidates: Store<Candidate>,
    pub employee_details: Store<EmployeeDetails>,
}

impl FromRef<AppState> for Store<Candidate> {
    fn from_ref(state: &AppState) -> Self {
        state.candidates.clone()
    }
}

impl FromRef<AppState> for Store<EmployeeDetails> {
    fn from_ref(state: &AppState) -> Self {
        state.employee_details.clone()
    }
}
