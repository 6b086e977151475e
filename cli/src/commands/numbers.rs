use tidy_common::config::Config;
use tidy_core::{filters, tennis};

use crate::terminal::print;

pub fn positives(numbers: &[f64], cfg: &Config) {
    let positives: Vec<String> = filters::get_positive_numbers(numbers)
        .iter()
        .map(f64::to_string)
        .collect();
    print::aligned_line("Positive", positives.join(" "), cfg.quiet);
}

pub fn tennis(player1: u32, player2: u32, cfg: &Config) {
    print::aligned_line("Score", tennis::tennis_score(player1, player2), cfg.quiet);
}
