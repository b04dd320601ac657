//! User domain
//!
//! Domain types for the user registry: the user entity, identifier, and
//! field validation.

mod entity;
mod validation;

pub use entity::{UpdateUser, User, UserId, UserStatus};
pub use validation::{validate_new_user, validate_user_id, UserValidationError, USER_ID_LENGTH};
