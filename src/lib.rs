//! # dbconf
//!
//! Per-environment database configuration resolution for a SQL migration
//! runner.
//!
//! Given a YAML file keyed by environment name, this crate resolves:
//!
//! - **Driver binding**: driver name → import identifier + SQL dialect,
//!   with explicit `import`/`dialect` overrides for drivers outside the
//!   built-in set
//! - **Connection string**: environment variable expansion, plus
//!   best-effort postgres URL → DSN normalization
//! - **Validation**: a returned [`Config`] always carries a complete
//!   driver; partially resolved configurations are hard failures
//!
//! The crate opens no connections and runs no migrations; it hands the
//! resolved [`Config`] to an external runner.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dbconf::Config;
//!
//! fn main() -> dbconf::Result<()> {
//!     let conf = Config::load("db/dbconf.yml", "db/migrations", "development")?;
//!     println!("driver {} -> {}", conf.driver.name, conf.driver.open);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dialect;
pub mod drivers;
pub mod error;

// Re-exports for convenient access
pub use config::Config;
pub use dialect::SqlDialect;
pub use drivers::Driver;
pub use error::{ConfError, Result};
