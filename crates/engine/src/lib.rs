//! Worldbuilder Engine library.
//!
//! This crate contains all server-side code for the world builder.
//!
//! ## Structure
//!
//! - `use_cases/` - Registration, login, and owner-scoped world operations
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end tests driving the HTTP router against a real SQLite file.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
