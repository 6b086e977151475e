use chrono::NaiveDate;
use tidy_common::config::Config;
use tidy_core::value_objects::Age;

use crate::terminal::print;

pub fn age(birth_date: NaiveDate, cfg: &Config) {
    let age = Age::new(birth_date);
    print::aligned_line("Years", age.years().to_string(), cfg.quiet);
}
