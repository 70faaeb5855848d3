pub mod candidate;
pub mod employee_details;

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

pub use candidate::Candidate;
pub use employee_details::EmployeeDetails;

/// Common interface of every entity managed through the admin workflows.
///
/// An entity carries a backend-assigned string identifier, which is absent
/// until the entity has been persisted. `Default` yields the blank
/// placeholder used by create flows.
pub trait Entity: Serialize + DeserializeOwned + Default + Clone + Debug + Send + Sync + 'static {
    /// REST resource path, relative to the API base URL.
    const RESOURCE: &'static str;

    /// Entity name used in alerts and log lines.
    const NAME: &'static str;

    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: Option<String>);
}
