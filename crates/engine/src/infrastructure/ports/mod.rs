//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Storage (accounts, worlds, objects)
//! - Password hashing and token signing
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{AccountRepo, WorldObjectRepo, WorldRepo};

// =============================================================================
// Errors
// =============================================================================
pub use error::{Constraint, HashError, RepoError, TokenError};

// =============================================================================
// Credential Ports
// =============================================================================
pub use external::{IssuedToken, PasswordHasherPort, TokenPort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockAccountRepo, MockWorldObjectRepo, MockWorldRepo};

#[cfg(test)]
pub use external::{MockPasswordHasherPort, MockTokenPort};

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;
