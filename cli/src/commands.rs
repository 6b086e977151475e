pub mod checks;
pub mod lessons;
pub mod numbers;
pub mod pricing;
pub mod shapes;
pub mod values;

use chrono::NaiveDate;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tidy_core::catalog::Topic;

#[derive(Parser)]
#[command(name = "tidy")]
#[command(about = "Clean-code lessons you can run.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat for bare results
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every lesson
    #[command(alias = "l")]
    Lessons,
    /// Print the rule and examples of one lesson
    #[command(alias = "s")]
    Show {
        #[arg(value_parser = topic_parser())]
        topic: Topic,
    },
    /// Check whether an account may access a resource
    #[command(alias = "a")]
    Authorize {
        /// Treat the account as deactivated
        #[arg(long)]
        inactive: bool,
        /// Permission held by the account (repeatable)
        #[arg(short, long = "permission")]
        permissions: Vec<String>,
        /// Permission to check for [default: access_resource]
        #[arg(short, long)]
        required: Option<String>,
    },
    /// Check an email address with the simplistic validator
    #[command(alias = "e")]
    Email { address: String },
    /// Price plus tax, rejecting negative prices and rates outside [0, 1]
    #[command(alias = "t")]
    Total {
        #[arg(allow_negative_numbers = true)]
        price: f64,
        #[arg(allow_negative_numbers = true)]
        tax_rate: f64,
    },
    /// Tiered shipping cost
    #[command(alias = "sh")]
    Shipping {
        weight: f64,
        distance: f64,
        #[arg(long)]
        express: bool,
    },
    /// Keep only the numbers greater than zero
    #[command(alias = "p")]
    Positives {
        #[arg(allow_negative_numbers = true, num_args = 0..)]
        numbers: Vec<f64>,
    },
    /// Score call for a tennis game
    #[command(alias = "tn")]
    Tennis { player1: u32, player2: u32 },
    /// Area of a shape
    #[command(alias = "ar")]
    Area {
        shape: ShapeKind,
        #[arg(allow_negative_numbers = true, required = true, num_args = 1..=2)]
        dimensions: Vec<f64>,
    },
    /// Age in whole years from a birth date (YYYY-MM-DD)
    #[command(alias = "ag")]
    Age { birth_date: NaiveDate },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

/// Accepts topic slugs only, so `--help` can list them.
fn topic_parser() -> impl TypedValueParser<Value = Topic> {
    PossibleValuesParser::new(Topic::ALL.map(|topic| topic.slug()))
        .try_map(|slug| slug.parse::<Topic>())
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
