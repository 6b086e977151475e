#[derive(Clone, Debug, PartialEq)]
pub struct PaymentReceipt {
    pub order_id: String,
    pub amount: f64,
}

/// An external payment provider.
pub trait PaymentGateway {
    fn charge(&self, order_id: &str, amount: f64) -> anyhow::Result<PaymentReceipt>;
}
