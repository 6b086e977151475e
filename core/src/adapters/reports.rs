use tidy_common::ports::DataSource;

/// A data source backed by a fixed string.
#[derive(Debug, Clone)]
pub struct StaticSource {
    data: String,
}

impl StaticSource {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl DataSource for StaticSource {
    fn fetch_data(&self) -> anyhow::Result<String> {
        Ok(self.data.clone())
    }
}
