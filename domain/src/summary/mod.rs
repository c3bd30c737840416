//! Summary domain.
//!
//! - [`exchange::SummaryRequest`]: what is sent to the summarization service
//! - [`exchange::SummaryReply`] / [`exchange::ServiceErrorBody`]: what comes back
//! - [`state::SummarizationState`]: where the current exchange stands

pub mod exchange;
pub mod state;
