//! Table Mapping Module
//! Logical table name to file path mapping for multi-table queries.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::QueryError;

/// Logical tables a caller can register CSV paths for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Agents,
    Customers,
    Claims,
    Vendors,
}

/// Maps logical tables to the CSV files backing them.
///
/// Multi-table queries take a `TableSet` instead of bare paths so a
/// forgotten table is a [`QueryError::MissingTable`] rather than a mixed-up
/// argument list.
#[derive(Debug, Clone, Default)]
pub struct TableSet {
    paths: HashMap<Table, PathBuf>,
}

impl TableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the file backing `table`, replacing any previous path.
    #[must_use]
    pub fn with(mut self, table: Table, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(table, path.into());
        self
    }

    /// Resolve the path for `table`, failing if none was registered.
    pub fn path(&self, table: Table) -> Result<&Path, QueryError> {
        self.paths
            .get(&table)
            .map(PathBuf::as_path)
            .ok_or(QueryError::MissingTable(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_registered_paths() {
        let tables = TableSet::new()
            .with(Table::Agents, "data/agents.csv")
            .with(Table::Customers, "data/customers.csv");

        assert_eq!(
            tables.path(Table::Agents).unwrap(),
            Path::new("data/agents.csv")
        );
    }

    #[test]
    fn unregistered_table_is_an_explicit_error() {
        let tables = TableSet::new().with(Table::Agents, "data/agents.csv");

        let result = tables.path(Table::Claims);

        assert!(matches!(result, Err(QueryError::MissingTable(Table::Claims))));
    }

    #[test]
    fn registering_twice_keeps_the_latest_path() {
        let tables = TableSet::new()
            .with(Table::Agents, "old.csv")
            .with(Table::Agents, "new.csv");

        assert_eq!(tables.path(Table::Agents).unwrap(), Path::new("new.csv"));
    }
}
