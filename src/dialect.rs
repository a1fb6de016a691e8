//! SQL dialect selection.
//!
//! Dialects differ in identifier quoting and parameter placeholder syntax.
//! The set of engines is small and known, so this is a closed enum with
//! static dispatch rather than a trait object registry.

/// SQL dialect for a database engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    /// PostgreSQL dialect.
    Postgres,
    /// MySQL dialect.
    Mysql,
}

impl SqlDialect {
    /// Look up a dialect by name.
    ///
    /// Returns `None` for unrecognized names; callers treat that as a
    /// validation failure, not an immediate fault.
    pub fn by_name(name: &str) -> Option<SqlDialect> {
        match name {
            "postgres" => Some(SqlDialect::Postgres),
            "mysql" => Some(SqlDialect::Mysql),
            _ => None,
        }
    }

    /// The canonical dialect name.
    pub fn name(&self) -> &'static str {
        match self {
            SqlDialect::Postgres => "postgres",
            SqlDialect::Mysql => "mysql",
        }
    }

    /// Quote an identifier for this engine.
    pub fn quote_ident(&self, name: &str) -> String {
        match self {
            // PostgreSQL doubles embedded double quotes
            SqlDialect::Postgres => format!("\"{}\"", name.replace('"', "\"\"")),
            // MySQL doubles embedded backticks
            SqlDialect::Mysql => format!("`{}`", name.replace('`', "``")),
        }
    }

    /// Parameter placeholder for a 1-based parameter index.
    pub fn param_placeholder(&self, index: usize) -> String {
        match self {
            SqlDialect::Postgres => format!("${}", index),
            SqlDialect::Mysql => "?".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(SqlDialect::by_name("postgres"), Some(SqlDialect::Postgres));
        assert_eq!(SqlDialect::by_name("mysql"), Some(SqlDialect::Mysql));
        assert_eq!(SqlDialect::by_name("oracle"), None);
        assert_eq!(SqlDialect::by_name(""), None);
    }

    #[test]
    fn test_name_round_trip() {
        for dialect in [SqlDialect::Postgres, SqlDialect::Mysql] {
            assert_eq!(SqlDialect::by_name(dialect.name()), Some(dialect));
        }
    }

    #[test]
    fn test_quote_ident() {
        assert_eq!(SqlDialect::Postgres.quote_ident("name"), "\"name\"");
        assert_eq!(
            SqlDialect::Postgres.quote_ident("table\"name"),
            "\"table\"\"name\""
        );
        assert_eq!(SqlDialect::Mysql.quote_ident("name"), "`name`");
        assert_eq!(SqlDialect::Mysql.quote_ident("ta`ble"), "`ta``ble`");
    }

    #[test]
    fn test_param_placeholder() {
        assert_eq!(SqlDialect::Postgres.param_placeholder(1), "$1");
        assert_eq!(SqlDialect::Postgres.param_placeholder(10), "$10");
        assert_eq!(SqlDialect::Mysql.param_placeholder(1), "?");
        assert_eq!(SqlDialect::Mysql.param_placeholder(10), "?");
    }
}
