//! Record Types Module
//! Typed rows for the four CSV schemas, deserialized positionally.

use std::collections::HashMap;

use serde::Deserialize;

/// One row of `agents.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Agent {
    pub agent_id: u32,
    pub area: String,
    pub language: String,
    pub first_name: String,
    pub last_name: String,
    pub rating: u8,
}

impl Agent {
    /// Index a loaded agent table by id for foreign-key resolution.
    pub fn index_by_id(agents: &[Agent]) -> HashMap<u32, &Agent> {
        agents.iter().map(|a| (a.agent_id, a)).collect()
    }
}

/// One row of `customers.csv`.
///
/// `agent_id` is a foreign key into the agents table, resolved through
/// [`Agent::index_by_id`] rather than by row position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    pub customer_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub area: String,
    pub agent_id: u32,
    pub agent_rating: u8,
    pub primary_language: String,
    pub dependents: u8,
    pub married: bool,
    pub zip_code: String,
    pub phone_number: String,
    pub vehicles_insured: u8,
    pub years_of_service: u16,
    pub auto_policy: bool,
    pub home_policy: bool,
    pub renters_policy: bool,
}

impl Customer {
    /// Whether the customer holds any tracked policy.
    pub fn has_any_policy(&self) -> bool {
        self.auto_policy || self.home_policy || self.renters_policy
    }

    /// Index a loaded customer table by id for foreign-key resolution.
    pub fn index_by_id(customers: &[Customer]) -> HashMap<u32, &Customer> {
        customers.iter().map(|c| (c.customer_id, c)).collect()
    }
}

/// One row of `claims.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claim {
    pub claim_id: u32,
    pub customer_id: u32,
    pub months_open: u16,
    pub status: String,
}

/// One row of `vendors.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Vendor {
    pub vendor_id: u32,
    pub area: String,
    pub vendor_rating: u8,
    pub in_scope: bool,
}
