use serde::{Deserialize, Serialize};

use super::{EmployeeDetails, Entity};

pub const FIRST_NAME_MAX_LENGTH: usize = 40;
pub const LAST_NAME_MAX_LENGTH: usize = 60;
pub const LOGIN_MIN_LENGTH: usize = 1;
pub const LOGIN_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Whole referenced record, not just its identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<EmployeeDetails>>,
}

impl Candidate {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

impl Entity for Candidate {
    const RESOURCE: &'static str = "api/candidates";
    const NAME: &'static str = "candidate";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }
}
