//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod session_controller;
pub mod statement_ledger;
pub mod summarization_gate;
pub mod summarize;

#[cfg(test)]
pub(crate) mod test_support;
