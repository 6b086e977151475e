//! # Rigidity
//!
//! One generator works with any [`DataSource`]. Supporting a new source means
//! implementing the trait, not adding a `generate_from_*` method here.

use anyhow::Context;
use tidy_common::ports::DataSource;

#[derive(Debug, Default, Clone, Copy)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn generate(&self, source: &dyn DataSource) -> anyhow::Result<String> {
        let data = source
            .fetch_data()
            .context("failed to fetch report data")?;
        Ok(Self::format_report(&data))
    }

    fn format_report(data: &str) -> String {
        format!("Report: {data}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticSource;

    struct BrokenSource;

    impl DataSource for BrokenSource {
        fn fetch_data(&self) -> anyhow::Result<String> {
            anyhow::bail!("connection refused")
        }
    }

    #[test]
    fn test_generate_from_any_source() {
        let report = ReportGenerator.generate(&StaticSource::new("q3 sales")).unwrap();
        assert_eq!(report, "Report: q3 sales");
    }

    #[test]
    fn test_generate_keeps_source_error() {
        let err = ReportGenerator.generate(&BrokenSource).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "failed to fetch report data: connection refused"
        );
    }
}
