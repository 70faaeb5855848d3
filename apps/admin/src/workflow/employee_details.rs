use std::sync::Arc;

use super::UpdateWorkflow;
use crate::errors::WorkflowError;
use crate::forms::{FieldSchema, Validator};
use crate::models::employee_details::AADHAR_NUMBER_MIN_LENGTH;
use crate::models::EmployeeDetails;
use crate::navigation::Navigator;
use crate::services::EntityApi;

/// The `child` relation is not edited here; it is owned by the backend.
pub fn form_schema() -> Vec<FieldSchema> {
    vec![
        FieldSchema::new("id"),
        FieldSchema::new("aadharNumber")
            .validator(Validator::Required)
            .validator(Validator::MinLength(AADHAR_NUMBER_MIN_LENGTH)),
    ]
}

pub struct EmployeeDetailsUpdate {
    workflow: UpdateWorkflow<EmployeeDetails>,
}

impl EmployeeDetailsUpdate {
    pub fn new(
        service: Arc<dyn EntityApi<EmployeeDetails>>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            workflow: UpdateWorkflow::new(service, navigator, form_schema()),
        }
    }

    pub fn with_save_error_handler(
        mut self,
        handler: impl Fn(&WorkflowError) + Send + Sync + 'static,
    ) -> Self {
        self.workflow = self.workflow.with_save_error_handler(handler);
        self
    }

    pub fn init(&mut self, employee_details: &EmployeeDetails) -> Result<(), WorkflowError> {
        self.workflow.update_form(employee_details)
    }

    pub fn workflow(&self) -> &UpdateWorkflow<EmployeeDetails> {
        &self.workflow
    }

    pub fn workflow_mut(&mut self) -> &mut UpdateWorkflow<EmployeeDetails> {
        &mut self.workflow
    }

    pub fn is_saving(&self) -> bool {
        self.workflow.is_saving()
    }

    pub async fn save(&self) -> Option<EmployeeDetails> {
        self.workflow.save().await
    }
}
