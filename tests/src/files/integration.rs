#![cfg(test)]
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use tidy_common::error::LessonError;
use tidy_common::ports::FileSource;
use tidy_core::error_handling::{RetryPolicy, process_file, process_file_with_retry};

/// Fails each path a configured number of times before succeeding.
#[derive(Default)]
struct ScriptedSource {
    remaining_failures: Mutex<HashMap<PathBuf, u32>>,
}

impl ScriptedSource {
    fn failing(path: &str, times: u32) -> Self {
        let source = Self::default();
        source
            .remaining_failures
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), times);
        source
    }
}

#[async_trait::async_trait]
impl FileSource for ScriptedSource {
    async fn process(&self, path: &Path) -> io::Result<()> {
        let mut failures = self.remaining_failures.lock().unwrap();
        match failures.get_mut(path) {
            Some(left) if *left > 0 => {
                *left -= 1;
                Err(io::Error::new(io::ErrorKind::TimedOut, "network share timed out"))
            }
            _ => Ok(()),
        }
    }
}

fn quick_retries(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        delay: Duration::from_millis(1),
    }
}

#[tokio::test]
async fn single_attempt_reports_path() {
    let source = ScriptedSource::failing("ledger.csv", 1);

    let err = process_file(&source, Path::new("ledger.csv")).await.unwrap_err();

    assert!(matches!(err, LessonError::FileProcessing { ref path, .. } if path == Path::new("ledger.csv")));
}

#[tokio::test]
async fn retry_recovers_from_transient_failure() {
    let source = ScriptedSource::failing("ledger.csv", 2);

    let result = process_file_with_retry(&source, Path::new("ledger.csv"), &quick_retries(3)).await;

    assert!(result.is_ok(), "retry failed: {:?}", result.err());
}

#[tokio::test]
async fn retry_exhaustion_keeps_last_cause() {
    let source = ScriptedSource::failing("ledger.csv", 5);

    let err = process_file_with_retry(&source, Path::new("ledger.csv"), &quick_retries(2))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unable to process file 'ledger.csv' after 2 attempts: network share timed out"
    );
}
