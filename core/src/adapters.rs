//! # In-Memory Adapters
//!
//! Concrete implementations of the `tidy_common::ports` traits that keep
//! everything in process memory. They back the CLI and the tests.

mod accounts;
mod notifications;
mod payments;
mod reports;
mod transactions;

pub use accounts::InMemoryAccountRepository;
pub use notifications::RecordingNotifier;
pub use payments::RecordingPaymentGateway;
pub use reports::StaticSource;
pub use transactions::{RecordingTransaction, TransactionEvent};
