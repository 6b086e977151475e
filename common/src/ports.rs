//! # Ports (Boundaries)
//!
//! Traits that isolate lesson code from the infrastructure it would normally touch.
//!
//! ## Rules
//! 1. All items here are traits or the plain data they exchange.
//! 2. Concrete implementations live in `tidy_core::adapters` or in tests.
//! 3. Lesson functions take ports as `&dyn` / `&mut dyn` so callers choose the adapter.

pub mod account_repository;
pub mod data_source;
pub mod file_source;
pub mod notifier;
pub mod payment_gateway;
pub mod transaction;

pub use account_repository::AccountRepository;
pub use data_source::DataSource;
pub use file_source::FileSource;
pub use notifier::Notifier;
pub use payment_gateway::{PaymentGateway, PaymentReceipt};
pub use transaction::Transaction;
