//! DOK Studio CLI.

use clap::Parser;

use dok_cli::cli::{Cli, Command, OutputFormatArg};
use dok_cli::commands::{run_generate, run_seed, seed_exit_code};
use dok_cli::logging::{init_logging, log_config_from_cli};
use dok_cli::summary::{levels_table, print_bundle, print_seed_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Seed(args) => match run_seed(&args) {
            Ok(report) => {
                if args.json {
                    match serde_json::to_string_pretty(&report) {
                        Ok(json) => println!("{json}"),
                        Err(error) => eprintln!("error: {error}"),
                    }
                } else {
                    print_seed_summary(&report);
                }
                seed_exit_code(&report)
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Generate(args) => match run_generate(&args) {
            Ok(bundle) => match args.format {
                OutputFormatArg::Json => match serde_json::to_string_pretty(&bundle) {
                    Ok(json) => {
                        println!("{json}");
                        0
                    }
                    Err(error) => {
                        eprintln!("error: {error}");
                        1
                    }
                },
                OutputFormatArg::Table => {
                    print_bundle(&bundle);
                    0
                }
            },
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Levels => {
            println!("{}", levels_table());
            0
        }
    };
    std::process::exit(exit_code);
}
