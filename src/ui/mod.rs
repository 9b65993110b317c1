//! User interface and presentation
//!
//! Presenters format inventory state for the terminal, keeping rendering out
//! of the models and services.

pub mod presenters;
