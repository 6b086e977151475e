//! # Tidy Common
//!
//! Shared building blocks for the `tidy` lessons.
//!
//! * **[`models`]**: The entities the lessons operate on (accounts, orders, quiz questions).
//! * **[`ports`]**: Traits that keep side effects (storage, payments, files) out of lesson code.
//! * **[`error`]**: The error type returned by lesson functions.
//! * **[`config`]**: Runtime options shared by the binary and its output helpers.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
