//! Domain layer - Core business logic and entities

pub mod error;
pub mod metrics;
pub mod processing;
pub mod user;

pub use error::DomainError;
pub use metrics::MetricsSnapshot;
pub use processing::{canonical_json, ProcessedRecord};
pub use user::{
    validate_new_user, validate_user_id, UpdateUser, User, UserId, UserStatus,
    UserValidationError,
};
