use std::sync::Arc;

use tracing::debug;

use super::UpdateWorkflow;
use crate::errors::WorkflowError;
use crate::forms::{FieldSchema, Validator};
use crate::models::candidate::{
    FIRST_NAME_MAX_LENGTH, LAST_NAME_MAX_LENGTH, LOGIN_MAX_LENGTH, LOGIN_MIN_LENGTH,
};
use crate::models::{Candidate, EmployeeDetails};
use crate::navigation::Navigator;
use crate::services::{
    merge_into_collection_if_missing, track_by_id, EntityApi, RequestOptions, CHILD_IS_NULL,
};

pub fn form_schema() -> Vec<FieldSchema> {
    vec![
        FieldSchema::new("id"),
        FieldSchema::new("firstName")
            .validator(Validator::Required)
            .validator(Validator::MaxLength(FIRST_NAME_MAX_LENGTH)),
        FieldSchema::new("lastName").validator(Validator::MaxLength(LAST_NAME_MAX_LENGTH)),
        FieldSchema::new("login")
            .validator(Validator::MinLength(LOGIN_MIN_LENGTH))
            .validator(Validator::MaxLength(LOGIN_MAX_LENGTH)),
        FieldSchema::new("parent"),
    ]
}

/// Candidate create/edit view state.
///
/// The `parent` options list holds the employee details not yet linked to a
/// child, plus whatever parent the form currently holds.
pub struct CandidateUpdate {
    workflow: UpdateWorkflow<Candidate>,
    employee_details_service: Arc<dyn EntityApi<EmployeeDetails>>,
    parents_collection: Vec<EmployeeDetails>,
}

impl CandidateUpdate {
    pub fn new(
        candidate_service: Arc<dyn EntityApi<Candidate>>,
        employee_details_service: Arc<dyn EntityApi<EmployeeDetails>>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            workflow: UpdateWorkflow::new(candidate_service, navigator, form_schema()),
            employee_details_service,
            parents_collection: Vec::new(),
        }
    }

    pub fn with_save_error_handler(
        mut self,
        handler: impl Fn(&WorkflowError) + Send + Sync + 'static,
    ) -> Self {
        self.workflow = self.workflow.with_save_error_handler(handler);
        self
    }

    /// Binds the resolved candidate, then loads the parent options.
    pub async fn init(&mut self, candidate: &Candidate) -> Result<(), WorkflowError> {
        self.update_form(candidate)?;
        self.load_relationships_options().await
    }

    pub fn update_form(&mut self, candidate: &Candidate) -> Result<(), WorkflowError> {
        self.workflow.update_form(candidate)?;
        let parents = std::mem::take(&mut self.parents_collection);
        self.parents_collection =
            merge_into_collection_if_missing(parents, [candidate.parent.as_deref()]);
        Ok(())
    }

    /// Replaces the parent options with the unlinked employee details,
    /// keeping the form's current parent selectable.
    ///
    /// Responses are applied in completion order; a slow response can
    /// overwrite a newer one.
    pub async fn load_relationships_options(&mut self) -> Result<(), WorkflowError> {
        let options = self
            .employee_details_service
            .query(&RequestOptions::filter(CHILD_IS_NULL))
            .await?;
        let current: Option<EmployeeDetails> = self.workflow.form().field_as("parent")?;
        self.parents_collection = merge_into_collection_if_missing(options, [current.as_ref()]);
        debug!("{} parent options loaded", self.parents_collection.len());
        Ok(())
    }

    pub fn parents_collection(&self) -> &[EmployeeDetails] {
        &self.parents_collection
    }

    pub fn track_employee_details_by_id(index: usize, item: &EmployeeDetails) -> &str {
        track_by_id(index, item)
    }

    pub fn workflow(&self) -> &UpdateWorkflow<Candidate> {
        &self.workflow
    }

    pub fn workflow_mut(&mut self) -> &mut UpdateWorkflow<Candidate> {
        &mut self.workflow
    }

    pub fn is_saving(&self) -> bool {
        self.workflow.is_saving()
    }

    pub async fn save(&self) -> Option<Candidate> {
        self.workflow.save().await
    }
}
