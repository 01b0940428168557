use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fanout_cli::cli::commands::{providers, run};
use fanout_cli::cli::{Args, Command};
use fanout_cli::error::exit_code_for;
use fanout_cli::language::print_languages;
use fanout_cli::output::{self, OutputConfig};
use fanout_cli::ui::Style;

fn main() {
    let args = Args::parse();

    init_tracing(args.verbose);
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    if let Err(err) = run_command(args) {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code_for(&err));
    }
}

fn run_command(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Providers) => {
            providers::print_providers()?;
        }
        None => {
            let options = run::RunOptions {
                lang: args.lang,
                providers: args.providers,
            };
            run::run_fanout(options)?;
        }
    }

    Ok(())
}

/// Defaults to `warn` unless `RUST_LOG` is set; `-v` raises this crate to debug.
fn init_tracing(verbose: u8) {
    let mut env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if verbose > 0
        && let Ok(directive) = "fanout_cli=debug".parse()
    {
        env_filter = env_filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
