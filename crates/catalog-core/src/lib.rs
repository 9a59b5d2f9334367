#![allow(clippy::must_use_candidate)]

//! Shared types for the catalog service
//!
//! Error response bodies, the handler-layer failure taxonomy, and the
//! category domain model. Kept free of axum so the wire shapes can be
//! asserted on without pulling in the server.

mod error;
mod failure;
mod model;

pub use error::{ApiError, INTERNAL_ERROR, INVALID_REQUEST, ValidationError};
pub use failure::{Failure, ValidationFailure, Violation};
pub use model::{Category, CategoryRequest};
