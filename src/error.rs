//! Error Module
//! Crate-wide error type for loading and query failures.

use thiserror::Error;

use crate::data::Table;

/// Unified failure type for all loader and query operations.
///
/// An unreadable or malformed file is always an `Err`, never a silently
/// truncated list, so callers can tell an empty table from a failed read.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("no path registered for table {0:?}")]
    MissingTable(Table),
    #[error("customer references unknown agent id {0}")]
    UnknownAgent(u32),
    #[error("claim references unknown customer id {0}")]
    UnknownCustomer(u32),
    #[error("rank {rank} is out of range for {rated} rated agents")]
    RankOutOfRange { rank: usize, rated: usize },
}
