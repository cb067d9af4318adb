//! Data Models Module
//!
//! Repository metadata, query parameters, and response DTOs.

pub mod repository;
pub mod requests;
pub mod responses;

pub use repository::RepositoryMetadata;
pub use requests::{BadgeQuery, GenerateQuery};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
