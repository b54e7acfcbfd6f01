//! Worldbuilder Shared - wire types for the HTTP API
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain crate
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs on the wire** - use raw integers in DTOs

pub mod requests;
pub mod responses;

pub use requests::{AddObjectRequest, CreateWorldRequest, LoginRequest, RegisterRequest};
pub use responses::{
    ErrorCode, ErrorResponse, LoginResponse, ObjectCreatedResponse, RegisterResponse, WorldData,
    WorldDetailsResponse, WorldObjectData,
};
