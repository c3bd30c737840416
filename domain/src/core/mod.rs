//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`]: rejected user input
//! - [`error::ErrorKind`]: the four user-facing failure categories
//! - [`string::preview`]: UTF-8 safe shortening for logs and listings

pub mod error;
pub mod string;
