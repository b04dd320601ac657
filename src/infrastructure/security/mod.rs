//! Security utilities - passwords and opaque tokens
//!
//! All operations here are stateless.

mod password;
mod token;

pub use password::{generate_password, hash_password, verify_password};
pub use token::generate_token;
