//! InsurIQ - CSV Query Utilities for Insurance Datasets
//!
//! A Rust library for answering business questions over flat CSV exports
//! of insurance agents, customers, claims, and vendors. Each query loads
//! one or two tables into typed records and applies a pure filter or
//! aggregation; there is no persistent state between calls.

pub mod data;
pub mod error;
pub mod queries;

pub use data::{Agent, Claim, CsvLoader, Customer, Table, TableSet, Vendor};
pub use error::QueryError;
pub use queries::{AgentQueries, CustomerQueries, VendorQueries};
