//! # Scaffolds
//!
//! Reusable building blocks shipped with the project starters.
//!
//! Two starter families live here side by side and do not depend on each other:
//!
//! - **notebook**: [`data`] wraps polars for loading and saving CSV/Parquet,
//!   summarising a frame and generating a deterministic sample dataset.
//! - **web-api**: [`exception`] defines the HTTP error signals a handler can
//!   return, and [`users::schemas`] declares the request/response shapes of the
//!   `User` resource.
//!
//! ## Quick Start
//!
//! ```rust
//! use scaffolds::prelude::*;
//! use axum::routing::{get, post};
//! use chrono::Utc;
//!
//! fn find_user(id: i64) -> Option<UserRecord> {
//!     (id == 1).then(|| UserRecord {
//!         id,
//!         email: "ada@example.com".to_string(),
//!         name: "Ada".to_string(),
//!         created_at: Utc::now(),
//!         updated_at: Utc::now(),
//!     })
//! }
//!
//! async fn get_user(
//!     Path(id): Path<i64>,
//! ) -> std::result::Result<Json<UserResponse>, HttpException> {
//!     let record = find_user(id)
//!         .ok_or_else(|| HttpException::not_found().with_message(format!("User {id} not found")))?;
//!     Ok(Json(UserResponse::from(record)))
//! }
//!
//! async fn create_user(
//!     ValidatedJson(payload): ValidatedJson<UserCreate>,
//! ) -> std::result::Result<Json<UserResponse>, HttpException> {
//!     if find_user(1).is_some_and(|user| user.email == payload.base.email) {
//!         return Err(HttpException::conflict());
//!     }
//!     let now = Utc::now();
//!     Ok(Json(UserResponse {
//!         id: 2,
//!         base: payload.base,
//!         created_at: now,
//!         updated_at: now,
//!     }))
//! }
//!
//! let app: Router = Router::new()
//!     .route("/users", post(create_user))
//!     .route("/users/{id}", get(get_user));
//! ```
//!
//! ```rust,no_run
//! use scaffolds::data;
//!
//! # fn main() -> scaffolds::polars::prelude::PolarsResult<()> {
//! let mut df = data::sample_data()?;
//! data::save_parquet(&mut df, "items.parquet")?;
//! let stats = data::describe(&data::load_parquet("items.parquet")?)?;
//! println!("{stats}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod exception;
pub mod extract;
pub mod pipe;
pub mod telemetry;
pub mod users;

// Re-export core types
pub use config::{ConfigService, Settings};
pub use error::{Result, ScaffoldError};
pub use exception::{ExceptionKind, HttpException};

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;
pub use axum;
pub use polars;

/// Prelude module for convenient imports
///
/// ```
/// use scaffolds::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigService, Settings};
    pub use crate::error::{Result, ScaffoldError};
    pub use crate::exception::http::HttpExceptionFilter;
    pub use crate::exception::{ExceptionFilter, ExceptionKind, HttpException};
    pub use crate::extract::ValidatedJson;
    pub use crate::pipe::builtins::*;
    pub use crate::pipe::{Pipe, PipeError, PipeResult};
    pub use crate::users::schemas::{UserBase, UserCreate, UserRecord, UserResponse, UserUpdate};
    pub use async_trait::async_trait;
    pub use axum::{
        Json, Router,
        extract::{Path, Query, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
    pub use validator::Validate;
}
