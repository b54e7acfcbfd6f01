//! Backend E2E integration tests.
//!
//! These tests drive the full HTTP router using:
//! - A real SQLite database file in a temporary directory
//! - Real Argon2 hashing (minimum cost) and real JWT signing
//! - Complete App construction with all use cases
//!
//! # Running E2E Tests
//!
//! ```bash
//! cargo test -p worldbuilder-engine --lib e2e_tests
//! ```

mod e2e_helpers;

pub use e2e_helpers::*;
