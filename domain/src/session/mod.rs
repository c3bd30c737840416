//! Session domain.
//!
//! - [`code::SessionCode`]: the short identifier two participants share
//! - [`participant::Participant`]: which side of the conversation spoke
//! - [`statement::Statement`]: one submitted statement, immutable once stored

pub mod code;
pub mod participant;
pub mod statement;
