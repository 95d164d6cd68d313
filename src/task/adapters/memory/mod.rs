//! In-memory adapters for tests and offline demos.

mod notifier;
mod task;

pub use notifier::RecordingNotifier;
pub use task::InMemoryTaskRepository;
