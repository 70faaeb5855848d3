//! Declarative edit forms.
//!
//! A form is built from a schema of fields (`name`, validators, initial
//! value). Values are held as JSON so the same `EditForm` binds any entity
//! through serde: `patch_value` copies an entity in, `value_as` builds one
//! back out. Relation fields therefore hold whole referenced objects.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::errors::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Value must be present and, for strings and arrays, non-empty.
    Required,
    /// Minimum length; empty values pass.
    MinLength(usize),
    /// Maximum length; empty values pass.
    MaxLength(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    MinLength { required: usize, actual: usize },
    MaxLength { required: usize, actual: usize },
}

impl Validator {
    pub fn check(&self, value: &Value) -> Option<ValidationError> {
        match *self {
            Validator::Required => is_empty(value).then_some(ValidationError::Required),
            Validator::MinLength(required) => {
                let actual = length_of(value)?;
                (!is_empty(value) && actual < required)
                    .then_some(ValidationError::MinLength { required, actual })
            }
            Validator::MaxLength(required) => {
                let actual = length_of(value)?;
                (actual > required).then_some(ValidationError::MaxLength { required, actual })
            }
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(a) => Some(a.len()),
        _ => None,
    }
}

/// One field of a form schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub validators: Vec<Validator>,
    pub initial: Value,
}

impl FieldSchema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            validators: Vec::new(),
            initial: Value::Null,
        }
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub error: ValidationError,
}

#[derive(Debug, Clone)]
struct FormControl {
    schema: FieldSchema,
    value: Value,
}

#[derive(Debug, Clone)]
pub struct EditForm {
    controls: Vec<FormControl>,
}

impl EditForm {
    pub fn new(schema: Vec<FieldSchema>) -> Self {
        Self {
            controls: schema
                .into_iter()
                .map(|schema| FormControl {
                    value: schema.initial.clone(),
                    schema,
                })
                .collect(),
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.controls.iter().map(|c| c.schema.name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.control(name).map(|c| &c.value)
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), FormError> {
        let control = self
            .controls
            .iter_mut()
            .find(|c| c.schema.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        control.value = value.into();
        Ok(())
    }

    /// Copies every bound field from `source`. Fields the source leaves
    /// undefined are cleared; fields outside the schema are ignored.
    pub fn patch_value<T: Serialize>(&mut self, source: &T) -> Result<(), FormError> {
        let source = serde_json::to_value(source)?;
        for control in &mut self.controls {
            control.value = source
                .get(control.schema.name)
                .cloned()
                .unwrap_or(Value::Null);
        }
        Ok(())
    }

    /// Reads a single field as `T`.
    pub fn field_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, FormError> {
        let value = self
            .get(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Builds a `T` from the current values of all fields.
    pub fn value_as<T: DeserializeOwned>(&self) -> Result<T, FormError> {
        let object: Map<String, Value> = self
            .controls
            .iter()
            .filter(|c| !c.value.is_null())
            .map(|c| (c.schema.name.to_string(), c.value.clone()))
            .collect();
        Ok(serde_json::from_value(Value::Object(object))?)
    }

    pub fn errors(&self) -> Vec<FieldError> {
        self.controls
            .iter()
            .flat_map(|c| {
                c.schema
                    .validators
                    .iter()
                    .filter_map(|v| v.check(&c.value))
                    .map(|error| FieldError {
                        field: c.schema.name,
                        error,
                    })
            })
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    fn control(&self, name: &str) -> Option<&FormControl> {
        self.controls.iter().find(|c| c.schema.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn login_form() -> EditForm {
        EditForm::new(vec![
            FieldSchema::new("id"),
            FieldSchema::new("login")
                .validator(Validator::Required)
                .validator(Validator::MinLength(2))
                .validator(Validator::MaxLength(4)),
        ])
    }

    #[test]
    fn test_required_rejects_null_and_empty() {
        assert_eq!(Validator::Required.check(&Value::Null), Some(ValidationError::Required));
        assert_eq!(Validator::Required.check(&json!("")), Some(ValidationError::Required));
        assert_eq!(Validator::Required.check(&json!("x")), None);
    }

    #[test]
    fn test_length_validators_ignore_empty_values() {
        assert_eq!(Validator::MinLength(12).check(&Value::Null), None);
        assert_eq!(Validator::MinLength(12).check(&json!("")), None);
        assert_eq!(
            Validator::MinLength(12).check(&json!("1234")),
            Some(ValidationError::MinLength { required: 12, actual: 4 })
        );
        assert_eq!(Validator::MaxLength(3).check(&Value::Null), None);
        assert_eq!(
            Validator::MaxLength(3).check(&json!("abcd")),
            Some(ValidationError::MaxLength { required: 3, actual: 4 })
        );
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        assert_eq!(Validator::MaxLength(4).check(&json!("éééé")), None);
    }

    #[test]
    fn test_patch_value_clears_undefined_fields() {
        let mut form = login_form();
        form.set("login", "abc").unwrap();
        form.patch_value(&json!({ "id": "X1", "extra": true })).unwrap();
        assert_eq!(form.get("id"), Some(&json!("X1")));
        assert_eq!(form.get("login"), Some(&Value::Null));
        assert_eq!(form.get("extra"), None);
    }

    #[test]
    fn test_errors_are_reported_per_field() {
        let mut form = login_form();
        assert_eq!(
            form.errors(),
            vec![FieldError { field: "login", error: ValidationError::Required }]
        );
        form.set("login", "abcdef").unwrap();
        assert!(!form.is_valid());
        form.set("login", "abc").unwrap();
        assert!(form.is_valid());
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let mut form = login_form();
        assert!(matches!(
            form.set("nope", 1),
            Err(FormError::UnknownField(name)) if name == "nope"
        ));
        assert!(form.field_as::<String>("nope").is_err());
    }

    #[test]
    fn test_value_as_omits_null_fields() {
        let mut form = login_form();
        form.set("login", "abc").unwrap();
        let value: Value = form.value_as().unwrap();
        assert_eq!(value, json!({ "login": "abc" }));
        assert_eq!(form.field_names().collect::<Vec<_>>(), vec!["id", "login"]);
    }
}
