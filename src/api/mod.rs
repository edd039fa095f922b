//! HTTP API module for the planning engine.
//!
//! This module provides the REST endpoint through which the planning UI
//! submits raw inputs and receives the derived fields.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
