// src/core/mod.rs

//! The decision logic: where files live, what gets written, and the flow
//! that ties the configurators together.

pub mod commons;
pub mod configurators;
pub mod orchestrator;
pub mod paths;
pub mod properties;
pub mod settings_loader;
