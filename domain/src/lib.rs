//! Domain layer for relationship-resolver
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on storage, transport, or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! Two participants share a short [`SessionCode`] out of band. Each of them
//! submits [`Statement`]s under that code; only the latest statement per
//! [`Participant`] matters downstream.
//!
//! ## Summary
//!
//! Once both participants have spoken, their latest statements are sent to a
//! remote service as a [`SummaryRequest`]. The outcome of that exchange is
//! tracked as a [`SummarizationState`].

pub mod core;
pub mod session;
pub mod summary;

// Re-export commonly used types
pub use core::{
    error::{ErrorKind, ValidationError},
    string::preview,
};
pub use session::{
    code::{CODE_LENGTH, SessionCode},
    participant::Participant,
    statement::{Statement, latest_by, validate_input},
};
pub use summary::{
    exchange::{RequestId, ServiceErrorBody, SummaryReply, SummaryRequest},
    state::SummarizationState,
};
