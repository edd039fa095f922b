//! Business Planning Calculation Engine
//!
//! This crate derives the financial and workforce metrics of an office
//! business plan (social charges, revenue, operating costs, EBITDA, margin and
//! EBIT) from raw monthly inputs for every role, level and month.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod validation;
