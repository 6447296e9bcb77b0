//! Idempotent session completion tracking

pub mod handler;
pub mod tracker;
pub mod types;

pub use handler::{progress_router, ProgressState};
pub use tracker::record_completion;
pub use types::SessionProgress;
