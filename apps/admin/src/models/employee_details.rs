use serde::{Deserialize, Serialize};

use super::{Candidate, Entity};

pub const AADHAR_NUMBER_MIN_LENGTH: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhar_number: Option<String>,
    /// Maintained by the backend independently of `Candidate::parent`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child: Option<Box<Candidate>>,
}

impl EmployeeDetails {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

impl Entity for EmployeeDetails {
    const RESOURCE: &'static str = "api/employee-details";
    const NAME: &'static str = "employeeDetails";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }
}
