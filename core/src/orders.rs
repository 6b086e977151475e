//! # Small Functions
//!
//! Order processing split into steps that each do one thing. [`process_order`]
//! reads as a summary of the steps; every step can be tested on its own.
//!
//! [`OrderProcessor`] shows the same flow organised top-down inside a type:
//! constants, fields, constructors, public API, then private helpers.

use tidy_common::error::{LessonError, Result};
use tidy_common::models::order::Order;
use tidy_common::ports::{Notifier, PaymentGateway, PaymentReceipt, Transaction};
use tracing::{debug, error};

use crate::accounts::process_payment;

/// Multiplier applied to premium customers' totals (10% off).
pub const PREMIUM_DISCOUNT_RATE: f64 = 0.9;
pub const STANDARD_TAX_RATE: f64 = 0.15;
/// Totals above this trigger a high-value notification.
pub const HIGH_VALUE_THRESHOLD: f64 = 100.0;

const HIGH_VALUE_MESSAGE: &str = "High-value order received";

pub fn validate_order(order: &Order) -> Result<()> {
    if !order.is_valid {
        return Err(LessonError::InvalidOrder(order.id.clone()));
    }
    Ok(())
}

pub fn apply_discount(order: &mut Order, discount_rate: f64) {
    if order.has_premium_customer() {
        order.total *= discount_rate;
    }
}

pub fn apply_tax(order: &mut Order, tax_rate: f64) {
    order.total += order.total * tax_rate;
}

pub fn notify_customer_if_high_value(order: &Order, threshold: f64, notifier: &dyn Notifier) {
    if order.total <= threshold {
        return;
    }
    if let Some(customer) = &order.customer {
        notifier.notify(customer, HIGH_VALUE_MESSAGE);
    }
}

pub fn process_order(
    order: &mut Order,
    notifier: &dyn Notifier,
    gateway: &dyn PaymentGateway,
) -> Result<PaymentReceipt> {
    validate_order(order)?;
    apply_discount(order, PREMIUM_DISCOUNT_RATE);
    apply_tax(order, STANDARD_TAX_RATE);
    notify_customer_if_high_value(order, HIGH_VALUE_THRESHOLD, notifier);
    process_payment(gateway, order)
}

/// Runs [`process_order`] inside `transaction`.
///
/// The steps run on a copy of `order`, which is written back only after the
/// commit. On failure the transaction is rolled back, `order` is left untouched
/// and the cause is wrapped in [`LessonError::OrderProcessingFailed`].
pub fn process_order_with_transaction(
    order: &mut Order,
    notifier: &dyn Notifier,
    gateway: &dyn PaymentGateway,
    transaction: &mut dyn Transaction,
) -> Result<PaymentReceipt> {
    transaction.begin();

    let mut draft = order.clone();
    match process_order(&mut draft, notifier, gateway) {
        Ok(receipt) => {
            transaction.commit();
            *order = draft;
            Ok(receipt)
        }
        Err(e) => {
            error!(order_id = %order.id, "rolling back order: {e}");
            transaction.rollback();
            Err(LessonError::OrderProcessingFailed(Box::new(e)))
        }
    }
}

/// Computes order totals from their items at a fixed tax rate.
#[derive(Debug, Clone, Copy)]
pub struct OrderProcessor {
    tax_rate_percent: u32,
}

impl OrderProcessor {
    pub const DEFAULT_TAX_RATE_PERCENT: u32 = 15;

    pub fn new() -> Self {
        Self {
            tax_rate_percent: Self::DEFAULT_TAX_RATE_PERCENT,
        }
    }

    pub fn with_tax_rate(tax_rate_percent: u32) -> Self {
        Self { tax_rate_percent }
    }

    pub fn tax_rate_percent(&self) -> u32 {
        self.tax_rate_percent
    }

    /// Validates the order and sets its total from the item subtotal plus tax.
    pub fn process(&self, order: &mut Order) -> Result<()> {
        self.validate(order)?;
        self.calculate_total(order);
        Ok(())
    }

    /// [`process`](Self::process), then submits the total to `gateway`.
    pub fn process_and_submit(
        &self,
        order: &mut Order,
        gateway: &dyn PaymentGateway,
    ) -> Result<PaymentReceipt> {
        self.process(order)?;
        self.submit_payment(order, gateway)
    }

    pub fn calculate_total(&self, order: &mut Order) {
        let subtotal = order.subtotal();
        let tax = subtotal * (f64::from(self.tax_rate_percent) / 100.0);
        order.total = subtotal + tax;
        debug!(order_id = %order.id, subtotal, tax, total = order.total, "order total");
    }

    fn submit_payment(&self, order: &Order, gateway: &dyn PaymentGateway) -> Result<PaymentReceipt> {
        process_payment(gateway, order)
    }

    fn validate(&self, order: &Order) -> Result<()> {
        if order.items.is_empty() {
            return Err(LessonError::InvalidOrder(format!("{} has no items", order.id)));
        }
        Ok(())
    }
}

impl Default for OrderProcessor {
    fn default() -> Self {
        Self::new()
    }
}
