//! Agent Queries Module
//! Business questions answered from the agents and customers tables.

use std::collections::HashMap;
use std::path::Path;

use crate::data::{Agent, CsvLoader, Customer};
use crate::error::QueryError;

/// Queries over the agent table.
pub struct AgentQueries;

impl AgentQueries {
    /// Count the agents whose area matches `area` exactly.
    pub fn count_in_area(path: impl AsRef<Path>, area: &str) -> Result<usize, QueryError> {
        let agents: Vec<Agent> = CsvLoader::load_records(path)?;
        Ok(agents.iter().filter(|a| a.area == area).count())
    }

    /// Agents from `area` that speak `language`; both matches are exact.
    pub fn in_area_speaking_language(
        path: impl AsRef<Path>,
        area: &str,
        language: &str,
    ) -> Result<Vec<Agent>, QueryError> {
        let agents: Vec<Agent> = CsvLoader::load_records(path)?;
        Ok(agents
            .into_iter()
            .filter(|a| a.area == area && a.language == language)
            .collect())
    }

    /// Id of the agent at 1-based `rank` by average customer rating.
    ///
    /// Averages come from the per-customer `agent_rating` column of the
    /// customers file (sum of ratings / review count), so only reviewed
    /// agents are ranked. Equal averages rank by ascending agent id.
    pub fn id_at_rank(path: impl AsRef<Path>, rank: usize) -> Result<u32, QueryError> {
        let customers: Vec<Customer> = CsvLoader::load_records(path)?;

        let mut totals: HashMap<u32, (u32, u32)> = HashMap::new();
        for customer in &customers {
            let (sum, reviews) = totals.entry(customer.agent_id).or_insert((0, 0));
            *sum += u32::from(customer.agent_rating);
            *reviews += 1;
        }

        let mut averages: Vec<(u32, f64)> = totals
            .into_iter()
            .map(|(agent_id, (sum, reviews))| (agent_id, f64::from(sum) / f64::from(reviews)))
            .collect();
        averages.sort_by(|(id_a, avg_a), (id_b, avg_b)| {
            avg_b
                .partial_cmp(avg_a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| id_a.cmp(id_b))
        });

        if rank == 0 || rank > averages.len() {
            return Err(QueryError::RankOutOfRange {
                rank,
                rated: averages.len(),
            });
        }
        Ok(averages[rank - 1].0)
    }
}
