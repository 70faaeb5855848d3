//! Development backend: an in-memory implementation of the REST resources
//! the entity services consume, following the same status and alert
//! conventions as the production API.

pub mod handlers;
pub mod store;

use crate::errors::AppError;
use crate::models::candidate::{
    FIRST_NAME_MAX_LENGTH, LAST_NAME_MAX_LENGTH, LOGIN_MAX_LENGTH, LOGIN_MIN_LENGTH,
};
use crate::models::employee_details::AADHAR_NUMBER_MIN_LENGTH;
use crate::models::{Candidate, EmployeeDetails, Entity};
use crate::services::CHILD_IS_NULL;

pub use store::Store;

/// Server-side behaviour of an entity exposed by the backend.
pub trait Resource: Entity {
    /// Field constraints checked on create and full update.
    fn validate(&self) -> Result<(), AppError>;

    /// Copies every field `patch` defines onto `self`.
    fn merge_patch(&mut self, patch: Self);

    /// Whether the entity passes a list `filter`. Unknown filters keep everything.
    fn matches_filter(&self, _filter: &str) -> bool {
        true
    }
}

impl Resource for Candidate {
    fn validate(&self) -> Result<(), AppError> {
        let first_name = required("firstName", self.first_name.as_deref())?;
        check_length("firstName", first_name, None, Some(FIRST_NAME_MAX_LENGTH))?;
        if let Some(last_name) = &self.last_name {
            check_length("lastName", last_name, None, Some(LAST_NAME_MAX_LENGTH))?;
        }
        if let Some(login) = &self.login {
            check_length("login", login, Some(LOGIN_MIN_LENGTH), Some(LOGIN_MAX_LENGTH))?;
        }
        Ok(())
    }

    fn merge_patch(&mut self, patch: Self) {
        if patch.first_name.is_some() {
            self.first_name = patch.first_name;
        }
        if patch.last_name.is_some() {
            self.last_name = patch.last_name;
        }
        if patch.login.is_some() {
            self.login = patch.login;
        }
    }
}

impl Resource for EmployeeDetails {
    fn validate(&self) -> Result<(), AppError> {
        let aadhar_number = required("aadharNumber", self.aadhar_number.as_deref())?;
        check_length("aadharNumber", aadhar_number, Some(AADHAR_NUMBER_MIN_LENGTH), None)
    }

    fn merge_patch(&mut self, patch: Self) {
        if patch.aadhar_number.is_some() {
            self.aadhar_number = patch.aadhar_number;
        }
    }

    fn matches_filter(&self, filter: &str) -> bool {
        match filter {
            CHILD_IS_NULL => self.child.is_none(),
            _ => true,
        }
    }
}

fn required<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{field}: must not be null")))
}

fn check_length(
    field: &str,
    value: &str,
    min: Option<usize>,
    max: Option<usize>,
) -> Result<(), AppError> {
    let len = value.chars().count();
    if min.is_some_and(|min| len < min) || max.is_some_and(|max| len > max) {
        return Err(AppError::Validation(format!(
            "{field}: size must be between {} and {}",
            min.unwrap_or(0),
            max.map_or_else(|| "unbounded".to_string(), |m| m.to_string())
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(first_name: &str) -> Candidate {
        Candidate {
            first_name: Some(first_name.to_string()),
            ..Candidate::default()
        }
    }

    #[test]
    fn test_candidate_constraints() {
        assert!(candidate("Asha").validate().is_ok());
        assert!(Candidate::default().validate().is_err());
        assert!(candidate(&"x".repeat(41)).validate().is_err());
        assert!(Candidate {
            login: Some(String::new()),
            ..candidate("Asha")
        }
        .validate()
        .is_err());
        assert!(Candidate {
            last_name: Some("y".repeat(61)),
            ..candidate("Asha")
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_employee_details_constraints() {
        let details = |n: &str| EmployeeDetails {
            aadhar_number: Some(n.to_string()),
            ..EmployeeDetails::default()
        };
        assert!(details("123412341234").validate().is_ok());
        assert!(details("12341234123").validate().is_err());
        assert!(EmployeeDetails::default().validate().is_err());
    }

    #[test]
    fn test_patch_keeps_undefined_fields() {
        let mut existing = Candidate {
            last_name: Some("Rao".into()),
            ..candidate("Asha")
        };
        existing.merge_patch(Candidate {
            login: Some("asha".into()),
            ..Candidate::default()
        });
        assert_eq!(existing.first_name.as_deref(), Some("Asha"));
        assert_eq!(existing.last_name.as_deref(), Some("Rao"));
        assert_eq!(existing.login.as_deref(), Some("asha"));
    }

    #[test]
    fn test_child_is_null_filter() {
        let free = EmployeeDetails::with_id("E1");
        let linked = EmployeeDetails {
            child: Some(Box::new(Candidate::with_id("C1"))),
            ..EmployeeDetails::with_id("E2")
        };
        assert!(free.matches_filter(CHILD_IS_NULL));
        assert!(!linked.matches_filter(CHILD_IS_NULL));
        assert!(linked.matches_filter("something-else"));
        assert!(Candidate::with_id("C1").matches_filter(CHILD_IS_NULL));
    }
}
