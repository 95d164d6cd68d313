//! Adapter implementations for task board ports.

pub mod http;
pub mod logging;
pub mod memory;
