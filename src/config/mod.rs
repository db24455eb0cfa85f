// src/config/mod.rs

//! Configuration loading and validation for dirwatch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and the validated `Settings` (`model.rs`).
//! - Load a config file and merge it with CLI values (`loader.rs`).
//! - Validate user input (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_from_path, resolve_settings};
pub use model::{RawConfigFile, Settings, WatchSection};
