//! # Account and Payment Operations
//!
//! Operations with side effects do exactly what their name says and reach the
//! outside world only through ports, so each one can be exercised with an
//! in-memory adapter.

use tidy_common::error::{LessonError, Result};
use tidy_common::models::account::Account;
use tidy_common::models::order::Order;
use tidy_common::ports::{AccountRepository, PaymentGateway, PaymentReceipt};
use tracing::{error, info};

/// Deletes the account identified by `user_id` and returns it.
///
/// # Errors
/// [`LessonError::AccountNotFound`] if the repository has no such account.
pub fn delete_user_account(repo: &mut dyn AccountRepository, user_id: u64) -> Result<Account> {
    let account = repo
        .remove(user_id)
        .ok_or(LessonError::AccountNotFound(user_id))?;
    info!(user_id, name = %account.name, "deleted user account");
    Ok(account)
}

/// Charges the order total through `gateway`.
///
/// A non-positive total is rejected before the gateway is contacted.
pub fn process_payment(gateway: &dyn PaymentGateway, order: &Order) -> Result<PaymentReceipt> {
    if order.total <= 0.0 {
        return Err(LessonError::invalid_argument(format!(
            "Order {} has invalid total: {}",
            order.id, order.total
        )));
    }

    gateway.charge(&order.id, order.total).map_err(|e| {
        error!(order_id = %order.id, "payment failed: {e:#}");
        LessonError::PaymentDeclined(format!("{e:#}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryAccountRepository, RecordingPaymentGateway};

    #[test]
    fn test_delete_existing_account() {
        let mut repo = InMemoryAccountRepository::from(vec![Account::new(1, "ada")]);
        let removed = delete_user_account(&mut repo, 1).unwrap();
        assert_eq!(removed.name, "ada");
        assert!(repo.find(1).is_none());
    }

    #[test]
    fn test_delete_missing_account() {
        let mut repo = InMemoryAccountRepository::default();
        let err = delete_user_account(&mut repo, 42).unwrap_err();
        assert!(matches!(err, LessonError::AccountNotFound(42)));
    }

    #[test]
    fn test_process_payment_charges_total() {
        let gateway = RecordingPaymentGateway::default();
        let order = Order::new("A-1").with_total(42.5);

        let receipt = process_payment(&gateway, &order).unwrap();

        assert_eq!(receipt.amount, 42.5);
        assert_eq!(gateway.charges(), vec![("A-1".to_string(), 42.5)]);
    }

    #[test]
    fn test_process_payment_rejects_zero_total() {
        let gateway = RecordingPaymentGateway::default();
        let order = Order::new("A-2");

        let err = process_payment(&gateway, &order).unwrap_err();

        assert_eq!(err.to_string(), "Order A-2 has invalid total: 0");
        assert!(gateway.charges().is_empty());
    }

    #[test]
    fn test_process_payment_declined() {
        let gateway = RecordingPaymentGateway::declining("card expired");
        let order = Order::new("A-3").with_total(10.0);

        let err = process_payment(&gateway, &order).unwrap_err();

        assert!(matches!(err, LessonError::PaymentDeclined(ref msg) if msg == "card expired"));
    }
}
