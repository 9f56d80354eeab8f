//! Repository implementations module.
//!
//! - `local`: In-memory implementation for local serving and tests

pub mod local;

pub use local::LocalRepository;
