//! Taskboard: client-side state for a task-management UI.
//!
//! This crate keeps a local task collection synchronized with a remote REST
//! task service. It provides the repository client, the list controller
//! with its filtered and sorted view, and the task form's validation rules.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Task records and payloads with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the task service and notifications
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory, logging)
//!
//! # Modules
//!
//! - [`config`]: Client configuration from the environment
//! - [`task`]: Task domain, repository client, list controller and form

pub mod config;
pub mod task;
