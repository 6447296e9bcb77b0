//! Challenge catalog: definitions and the read-only store

pub mod builtin;
pub mod store;
pub mod types;

pub use store::ChallengeCatalog;
pub use types::{Challenge, ChallengeType, ConceptArea};
