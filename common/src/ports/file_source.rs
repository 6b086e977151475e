use std::path::Path;

/// Performs the actual work on a file; failures are plain I/O errors.
#[async_trait::async_trait]
pub trait FileSource: Send + Sync {
    async fn process(&self, path: &Path) -> std::io::Result<()>;
}
