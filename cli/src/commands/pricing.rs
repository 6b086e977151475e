use tidy_common::config::Config;
use tidy_core::{comments, shipping};

use crate::terminal::print;

pub fn total(price: f64, tax_rate: f64, cfg: &Config) -> anyhow::Result<()> {
    let total: f64 = comments::calculate_total(price, tax_rate)?;
    print::aligned_line("Total", format!("{total:.2}"), cfg.quiet);
    Ok(())
}

pub fn shipping(weight: f64, distance: f64, express: bool, cfg: &Config) {
    let cost: f64 = shipping::calculate_shipping_cost(weight, distance, express);
    if cfg.quiet < 2 {
        let mode: &str = if express { "express" } else { "standard" };
        print::aligned_line("Mode", mode, cfg.quiet);
    }
    print::aligned_line("Cost", format!("{cost:.2}"), cfg.quiet);
}
