//! The `User` resource of the web-api starter.

pub mod schemas;

pub use schemas::{UserBase, UserCreate, UserRecord, UserResponse, UserUpdate};
