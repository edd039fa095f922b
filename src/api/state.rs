//! Application state for the planning engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::CalculationConstants;

/// Shared application state.
///
/// Holds the server's configured constants. They are immutable; per-request
/// overrides are merged into a private copy.
#[derive(Clone)]
pub struct AppState {
    constants: Arc<CalculationConstants>,
}

impl AppState {
    /// Creates a new application state with the given constants.
    pub fn new(constants: CalculationConstants) -> Self {
        Self {
            constants: Arc::new(constants),
        }
    }

    /// Returns the configured constants.
    pub fn constants(&self) -> &CalculationConstants {
        &self.constants
    }
}
