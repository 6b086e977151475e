use std::sync::Mutex;

use tidy_common::ports::{PaymentGateway, PaymentReceipt};

/// Records every charge; optionally declines all of them.
#[derive(Debug, Default)]
pub struct RecordingPaymentGateway {
    charges: Mutex<Vec<(String, f64)>>,
    decline_reason: Option<String>,
}

impl RecordingPaymentGateway {
    pub fn declining(reason: impl Into<String>) -> Self {
        Self {
            charges: Mutex::default(),
            decline_reason: Some(reason.into()),
        }
    }

    pub fn charges(&self) -> Vec<(String, f64)> {
        self.charges
            .lock()
            .map(|charges| charges.clone())
            .unwrap_or_default()
    }
}

impl PaymentGateway for RecordingPaymentGateway {
    fn charge(&self, order_id: &str, amount: f64) -> anyhow::Result<PaymentReceipt> {
        if let Some(reason) = &self.decline_reason {
            anyhow::bail!("{reason}");
        }

        self.charges
            .lock()
            .map_err(|_| anyhow::anyhow!("payment ledger poisoned"))?
            .push((order_id.to_string(), amount));

        Ok(PaymentReceipt {
            order_id: order_id.to_string(),
            amount,
        })
    }
}
