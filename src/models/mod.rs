//! Domain models
//!
//! Items, their configuration records and quality rules, and the errors
//! raised while building or updating them. Models hold the per-item update
//! logic; collections of items live in [`crate::services`].

pub mod config;
pub mod constants;
pub mod errors;
pub mod item;
pub mod rules;
