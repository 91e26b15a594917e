//! Customer Queries Module
//! Business questions answered from the customer, agent, and claim tables.

use std::collections::HashSet;
use std::path::Path;

use crate::data::{Agent, Claim, CsvLoader, Customer, Table, TableSet};
use crate::error::QueryError;

/// Queries over the customer table.
pub struct CustomerQueries;

impl CustomerQueries {
    /// Count customers from `area` served by the agent named
    /// `first_name last_name`.
    ///
    /// Each customer's agent reference is resolved through an id map built
    /// from the agents table; an unknown agent id is an error.
    pub fn count_from_area_using_agent(
        tables: &TableSet,
        area: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<usize, QueryError> {
        let agents: Vec<Agent> = CsvLoader::load_records(tables.path(Table::Agents)?)?;
        let customers: Vec<Customer> = CsvLoader::load_records(tables.path(Table::Customers)?)?;
        let by_id = Agent::index_by_id(&agents);

        let mut count = 0;
        for customer in &customers {
            let agent = by_id
                .get(&customer.agent_id)
                .ok_or(QueryError::UnknownAgent(customer.agent_id))?;
            if customer.area == area
                && agent.first_name == first_name
                && agent.last_name == last_name
            {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Customers retained for exactly `years` years of service, in
    /// ascending years-of-service order.
    ///
    /// The sort key is years-of-service; with an exact-equality filter the
    /// stable sort leaves the records in file order.
    pub fn retained_for_years(
        path: impl AsRef<Path>,
        years: u16,
    ) -> Result<Vec<Customer>, QueryError> {
        let customers: Vec<Customer> = CsvLoader::load_records(path)?;
        let mut retained: Vec<Customer> = customers
            .into_iter()
            .filter(|c| c.years_of_service == years)
            .collect();
        retained.sort_by_key(|c| c.years_of_service);
        Ok(retained)
    }

    /// Customers holding no auto, home, or renters policy.
    pub fn leads(path: impl AsRef<Path>) -> Result<Vec<Customer>, QueryError> {
        let customers: Vec<Customer> = CsvLoader::load_records(path)?;
        Ok(customers
            .into_iter()
            .filter(|c| !c.has_any_policy())
            .collect())
    }

    /// Customers aged 40-50 inclusive with more than `vehicles_insured`
    /// vehicles and at most `dependents` dependents.
    pub fn undisclosed_drivers(
        path: impl AsRef<Path>,
        vehicles_insured: u8,
        dependents: u8,
    ) -> Result<Vec<Customer>, QueryError> {
        let customers: Vec<Customer> = CsvLoader::load_records(path)?;
        Ok(customers
            .into_iter()
            .filter(|c| {
                (40..=50).contains(&c.age)
                    && c.vehicles_insured > vehicles_insured
                    && c.dependents <= dependents
            })
            .collect())
    }

    /// Customers with at least one claim open for at most `months_open`
    /// months, in customer-file order.
    ///
    /// Every claim's customer reference is validated against the customer
    /// table; a customer with several qualifying claims appears once.
    pub fn with_claims(
        tables: &TableSet,
        months_open: u16,
    ) -> Result<Vec<Customer>, QueryError> {
        let customers: Vec<Customer> = CsvLoader::load_records(tables.path(Table::Customers)?)?;
        let claims: Vec<Claim> = CsvLoader::load_records(tables.path(Table::Claims)?)?;
        let by_id = Customer::index_by_id(&customers);

        let mut claimant_ids = HashSet::new();
        for claim in &claims {
            if !by_id.contains_key(&claim.customer_id) {
                return Err(QueryError::UnknownCustomer(claim.customer_id));
            }
            if claim.months_open <= months_open {
                claimant_ids.insert(claim.customer_id);
            }
        }

        Ok(customers
            .iter()
            .filter(|c| claimant_ids.contains(&c.customer_id))
            .cloned()
            .collect())
    }
}
