//! # Error Handling
//!
//! Errors are never swallowed. Failures are logged with context, wrapped in a
//! [`LessonError`] that keeps the original cause, and returned to the caller.
//! Transient failures can be retried with [`process_file_with_retry`].

use std::path::Path;
use std::time::Duration;

use tidy_common::error::{LessonError, Result};
use tidy_common::models::order::Order;
use tidy_common::ports::FileSource;
use tracing::{error, info, warn};

pub const MAX_RETRIES: u32 = 3;
pub const RETRY_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            delay: RETRY_DELAY,
        }
    }
}

/// Processes `path` once, logging and wrapping any failure.
pub async fn process_file(source: &dyn FileSource, path: &Path) -> Result<()> {
    source.process(path).await.map_err(|e| {
        error!(path = %path.display(), "failed to process file: {e}");
        LessonError::FileProcessing {
            path: path.to_path_buf(),
            source: e,
        }
    })
}

/// Processes `path`, retrying up to `policy.max_retries` attempts in total.
///
/// The last I/O error is preserved in [`LessonError::RetriesExhausted`].
pub async fn process_file_with_retry(
    source: &dyn FileSource,
    path: &Path,
    policy: &RetryPolicy,
) -> Result<()> {
    let max_retries = policy.max_retries.max(1);
    let mut attempt: u32 = 0;

    loop {
        info!(path = %path.display(), "processing file (attempt {}/{})", attempt + 1, max_retries);

        let e = match source.process(path).await {
            Ok(()) => {
                info!(path = %path.display(), "successfully processed file");
                return Ok(());
            }
            Err(e) => e,
        };

        attempt += 1;
        if attempt == max_retries {
            error!(path = %path.display(), "failed after {max_retries} attempts: {e}");
            return Err(LessonError::RetriesExhausted {
                path: path.to_path_buf(),
                attempts: max_retries,
                source: e,
            });
        }

        warn!(
            path = %path.display(),
            "attempt {attempt}/{max_retries} failed, retrying in {}ms: {e}",
            policy.delay.as_millis()
        );
        tokio::time::sleep(policy.delay).await;
    }
}

/// Fails fast with a message naming the order and the problem.
pub fn validate_order_details(order: &Order) -> Result<()> {
    if order.items.is_empty() {
        return Err(LessonError::OrderValidation(format!(
            "Order {} has no items",
            order.id
        )));
    }
    if order.customer.is_none() {
        return Err(LessonError::OrderValidation(format!(
            "Order {} has no customer information",
            order.id
        )));
    }
    if order.total <= 0.0 {
        return Err(LessonError::OrderValidation(format!(
            "Order {} has invalid total: {}",
            order.id, order.total
        )));
    }
    Ok(())
}
