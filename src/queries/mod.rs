//! Query module - one operation per business question

mod agents;
mod customers;
mod vendors;

pub use agents::AgentQueries;
pub use customers::CustomerQueries;
pub use vendors::VendorQueries;
