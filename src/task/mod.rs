//! Task list synchronization for the task board.
//!
//! The module keeps a local task collection in step with a remote REST task
//! service: it loads the collection, derives a filtered and sorted view,
//! and patches the collection after each create, update, status change or
//! delete. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The list controller and derived view in [`services`]
//! - Form validation and dialog state in [`form`]

pub mod adapters;
pub mod domain;
pub mod form;
pub mod ports;
pub mod services;
