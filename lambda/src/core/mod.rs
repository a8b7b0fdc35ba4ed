//! Configuration, corrector profiles and request/response models

pub mod config;
pub mod models;
pub mod profile;
