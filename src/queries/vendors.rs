//! Vendor Queries Module
//! Business questions answered from the vendor table.

use std::path::Path;

use crate::data::{CsvLoader, Vendor};
use crate::error::QueryError;

/// Queries over the vendor table.
pub struct VendorQueries;

impl VendorQueries {
    /// Vendors from `area` with exactly `rating`.
    ///
    /// With `in_scope` true only in-scope vendors are returned; with
    /// `in_scope` false scope is ignored.
    pub fn with_rating_in_scope(
        path: impl AsRef<Path>,
        area: &str,
        in_scope: bool,
        rating: u8,
    ) -> Result<Vec<Vendor>, QueryError> {
        let vendors: Vec<Vendor> = CsvLoader::load_records(path)?;
        Ok(vendors
            .into_iter()
            .filter(|v| v.area == area && v.vendor_rating == rating && (!in_scope || v.in_scope))
            .collect())
    }
}
