//! Deployment-time resource declaration

pub mod stack;

pub use stack::{StackConfig, synthesize};
