//! Configuration module for arealens.
//!
//! Handles the settings file, environment variable expansion, and defaults.

mod settings;

pub use settings::{
    expand_env_vars, DatasetSettings, ServerSettings, Settings, SettingsError,
};
