//! Inventory services
//!
//! The item collection and its bulk operations, the canonical presets, and
//! the interactive console that drives a simulation.

pub mod console;
pub mod inventory;
pub mod presets;
