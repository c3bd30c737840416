//! HTTP adapters

mod summary_gateway;

pub use summary_gateway::HttpSummaryGateway;
