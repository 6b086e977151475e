#![cfg(test)]
use tidy_common::models::account::Account;
use tidy_common::models::order::{Customer, Item, Order};
use tidy_common::ports::AccountRepository;
use tidy_core::accounts::delete_user_account;
use tidy_core::adapters::{
    InMemoryAccountRepository, RecordingNotifier, RecordingPaymentGateway, RecordingTransaction,
    TransactionEvent,
};
use tidy_core::error_handling::validate_order_details;
use tidy_core::orders::{OrderProcessor, process_order_with_transaction};
use tidy_core::understandability::{ACCESS_RESOURCE, is_user_authorized};

/// Builds an order, totals it, validates it and pays for it inside a transaction.
#[test]
fn order_flows_from_items_to_payment() {
    let mut order = Order::new("INT-1")
        .with_customer(Customer::new("ada", true))
        .with_item(Item::new("keyboard", 80.0, 1))
        .with_item(Item::new("cable", 10.0, 2));

    OrderProcessor::with_tax_rate(0).process(&mut order).unwrap();
    assert_eq!(order.total, 100.0);
    validate_order_details(&order).unwrap();

    let notifier = RecordingNotifier::default();
    let gateway = RecordingPaymentGateway::default();
    let mut tx = RecordingTransaction::default();

    let receipt = process_order_with_transaction(&mut order, &notifier, &gateway, &mut tx).unwrap();

    // 100 * 0.9 = 90, + 15% = 103.5
    assert!((receipt.amount - 103.5).abs() < 1e-9);
    assert_eq!(notifier.sent().len(), 1);
    assert_eq!(tx.events, vec![TransactionEvent::Begin, TransactionEvent::Commit]);
}

#[test]
fn declined_payment_rolls_back() {
    let mut order = Order::new("INT-2")
        .with_customer(Customer::new("bob", false))
        .with_total(20.0);
    let gateway = RecordingPaymentGateway::declining("insufficient funds");
    let mut tx = RecordingTransaction::default();

    let err = process_order_with_transaction(
        &mut order,
        &RecordingNotifier::default(),
        &gateway,
        &mut tx,
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Order processing failed: Payment declined: insufficient funds"
    );
    assert_eq!(tx.events.last(), Some(&TransactionEvent::Rollback));
    assert_eq!(order.total, 20.0);
}

#[test]
fn only_authorized_accounts_survive_cleanup() {
    let mut repo = InMemoryAccountRepository::from(vec![
        Account::new(1, "ada").with_permission(ACCESS_RESOURCE),
        Account::new(2, "bob").deactivated(),
        Account::new(3, "eve"),
    ]);

    let unauthorized: Vec<u64> = [1, 2, 3]
        .into_iter()
        .filter(|id| repo.find(*id).is_some_and(|account| !is_user_authorized(account)))
        .collect();

    for id in unauthorized {
        delete_user_account(&mut repo, id).unwrap();
    }

    assert_eq!(repo.len(), 1);
    assert!(repo.find(1).is_some());
}
