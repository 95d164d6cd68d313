//! HTTP adapter for the remote task service.
//!
//! Endpoints, relative to the configured base URL:
//!
//! | Method | Path          | Body        | Success        |
//! |--------|---------------|-------------|----------------|
//! | GET    | `/tasks`      |             | 200, task list |
//! | GET    | `/tasks/{id}` |             | 200, task      |
//! | POST   | `/tasks`      | `TaskDraft` | 200/201, task  |
//! | PUT    | `/tasks/{id}` | `TaskPatch` | 200, task      |
//! | DELETE | `/tasks/{id}` |             | 2xx, empty     |

mod repository;
mod response;

pub use repository::HttpTaskRepository;
