//! List and delete views shared by every entity.

pub mod delete;
pub mod list;

pub use delete::{DeleteDialog, DialogClose};
pub use list::EntityList;
