//! # easy-proxy
//!
//! Configures or removes HTTP proxy settings for Gradle, Git and npm from a
//! single interactive session. The [`core::orchestrator`] drives the menus and
//! hands a [`models::ProxySpec`] to one of the [`core::configurators`]; the
//! [`system`] layer holds the thin I/O capabilities they all call through.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
