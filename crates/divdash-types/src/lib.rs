//! Shared types for the dividend dashboard
//!
//! This crate provides the data model, status/label helpers and display
//! formatters used across the workspace. It performs no I/O.
//!
//! # Key Types
//!
//! - [`PortfolioSnapshot`] - Normalized result of one analysis run
//! - [`DividendSchedule`], [`YearEntry`], [`PaymentRecord`] - Dividend history
//! - [`DividendFrequency`], [`PaymentStatus`] - Total display mappings
//! - [`AnalysisForm`], [`AnalysisRequest`] - Form input and validated request
//! - [`ValidationError`] - Rejected form input
//! - [`format`] - Currency, percent, number and date formatters

pub mod enums;
pub mod error;
pub mod format;
pub mod raw;
pub mod request;
pub mod schedule;
pub mod snapshot;

// Re-export commonly used types
pub use enums::*;
pub use error::*;
pub use request::*;
pub use schedule::*;
pub use snapshot::*;
pub use raw::RawSnapshot;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
