//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod config;
pub mod password;
pub mod ports;
pub mod sqlite;
pub mod token;
