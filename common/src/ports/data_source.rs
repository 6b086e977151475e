/// Any source a report can be generated from (database, CSV, API...).
pub trait DataSource {
    fn fetch_data(&self) -> anyhow::Result<String>;
}
