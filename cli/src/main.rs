mod commands;
mod terminal;

use commands::{CommandLine, Commands, checks, lessons, numbers, pricing, shapes, values};
use terminal::{logging, print};
use tidy_common::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };
    print::banner(&cfg);

    match commands.command {
        Commands::Lessons => {
            print::header("clean code lessons", cfg.quiet);
            lessons::list(&cfg);
            Ok(())
        }
        Commands::Show { topic } => {
            lessons::show(topic, &cfg);
            Ok(())
        }
        Commands::Authorize {
            inactive,
            permissions,
            required,
        } => {
            print::header("authorization", cfg.quiet);
            checks::authorize(!inactive, permissions, required.as_deref(), &cfg);
            Ok(())
        }
        Commands::Email { address } => {
            print::header("email validation", cfg.quiet);
            checks::email(&address, &cfg);
            Ok(())
        }
        Commands::Total { price, tax_rate } => {
            print::header("total with tax", cfg.quiet);
            pricing::total(price, tax_rate, &cfg)
        }
        Commands::Shipping {
            weight,
            distance,
            express,
        } => {
            print::header("shipping cost", cfg.quiet);
            pricing::shipping(weight, distance, express, &cfg);
            Ok(())
        }
        Commands::Positives { numbers } => {
            print::header("positive numbers", cfg.quiet);
            numbers::positives(&numbers, &cfg);
            Ok(())
        }
        Commands::Tennis { player1, player2 } => {
            print::header("tennis score", cfg.quiet);
            numbers::tennis(player1, player2, &cfg);
            Ok(())
        }
        Commands::Area { shape, dimensions } => {
            print::header("shape area", cfg.quiet);
            shapes::area(shape, &dimensions, &cfg)
        }
        Commands::Age { birth_date } => {
            print::header("age", cfg.quiet);
            values::age(birth_date, &cfg);
            Ok(())
        }
    }
}
