//! User infrastructure module
//!
//! In-memory registry backing the user CRUD endpoints.

mod registry;

pub use registry::UserRegistry;
