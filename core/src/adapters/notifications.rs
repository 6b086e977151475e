use std::sync::Mutex;

use tidy_common::models::order::Customer;
use tidy_common::ports::Notifier;
use tracing::info;

/// Logs each notification and keeps `(customer, message)` pairs for inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, customer: &Customer, message: &str) {
        info!(customer = customer.name(), "{message}");
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((customer.name().to_string(), message.to_string()));
        }
    }
}
