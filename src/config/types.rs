//! Configuration type definitions.

use std::collections::HashMap;

use serde::Deserialize;

use crate::drivers::Driver;

/// Fully resolved configuration, handed to the migration runner.
///
/// Construction goes through [`Config::load`](crate::Config::load) or
/// [`Config::from_yaml`](crate::Config::from_yaml), which guarantee that
/// `driver` satisfies [`Driver::is_valid`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Folder containing the migration files. Passed through unmodified.
    pub migrations_dir: String,

    /// Name of the environment section that was resolved.
    pub env: String,

    /// The resolved database driver.
    pub driver: Driver,
}

/// The raw YAML document: one section per environment name.
pub(crate) type ConfFile = HashMap<String, EnvSection>;

/// One environment section of the config file.
///
/// Every field is optional at the parsing level so that "absent" and
/// "present" stay distinguishable; required-field checks happen in the
/// resolver, where they can name the environment and field.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EnvSection {
    /// Driver name (required for resolution).
    pub driver: Option<String>,

    /// Raw connection string, subject to environment variable expansion
    /// (required for resolution).
    pub open: Option<String>,

    /// Overrides the registry-derived import identifier.
    pub import: Option<String>,

    /// Overrides the registry-derived dialect, by name.
    pub dialect: Option<String>,
}
