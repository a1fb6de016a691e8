//! Database driver bindings.
//!
//! A [`Driver`] couples a driver name and connection string with the import
//! identifier of the crate implementing it and the [`SqlDialect`] it speaks.
//! The built-in registry knows a small closed set of drivers; anything else
//! is left invalid so that explicit configuration overrides can repair it
//! before validation.

pub mod postgres;

use crate::dialect::SqlDialect;

/// Info needed to work with a specific database driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    /// Driver name (e.g. "postgres", "mymysql").
    pub name: String,
    /// Fully resolved connection string.
    pub open: String,
    /// Identifier of the crate implementing this driver. Consumed by
    /// generated code, never executed here.
    pub import: String,
    /// SQL dialect for the engine; `None` fails validation.
    pub dialect: Option<SqlDialect>,
}

impl Driver {
    /// Create a driver and populate driver-specific fields for drivers we
    /// know about. Unknown names produce an invalid record on purpose:
    /// the config file may still supply `import`/`dialect` overrides, and
    /// validation runs only after those are applied.
    pub fn new(name: impl Into<String>, open: impl Into<String>) -> Self {
        let name = name.into();

        let (import, dialect) = match name.as_str() {
            "postgres" => ("tokio-postgres", Some(SqlDialect::Postgres)),
            "mymysql" => ("mysql_async", Some(SqlDialect::Mysql)),
            _ => ("", None),
        };

        Driver {
            name,
            open: open.into(),
            import: import.to_string(),
            dialect,
        }
    }

    /// Whether we have enough info about this driver to hand it to a
    /// migration runner.
    pub fn is_valid(&self) -> bool {
        !self.import.is_empty() && self.dialect.is_some()
    }
}
