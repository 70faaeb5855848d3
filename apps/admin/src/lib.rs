//! Employee admin: edit workflows for candidates and employee details over
//! their REST resources, plus an in-memory development backend serving them.

pub mod backend;
pub mod config;
pub mod errors;
pub mod forms;
pub mod models;
pub mod navigation;
pub mod resolver;
pub mod routes;
pub mod services;
pub mod state;
pub mod views;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;
