//! Data module - CSV loading, typed records, and table path mapping

mod loader;
mod records;
mod tables;

pub use loader::CsvLoader;
pub use records::{Agent, Claim, Customer, Vendor};
pub use tables::{Table, TableSet};
