//! Feed queue construction and its HTTP surface

pub mod builder;
pub mod handler;

pub use builder::{append_queue, build_queue, DEFAULT_BATCH_SIZE, STARTER_TYPES};
pub use handler::{feed_router, FeedState};
