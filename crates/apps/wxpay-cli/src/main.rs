//! wxpay CLI binary entry point.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wxpay_cli::{
    cli::{Cli, Commands},
    commands,
    config::{default_config_path, CliConfig},
    context,
    error::{CliError, CliResult},
    output::OutputFormat,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging based on --verbose flag or RUST_LOG env var
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if cli.verbose || has_rust_log {
        let mut filter = EnvFilter::from_default_env();
        if cli.verbose {
            // Prefix match covers every wxpay_* crate.
            if let Ok(directive) = "wxpay=debug".parse() {
                filter = filter.add_directive(directive);
            }
        }
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    match run(cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            print_error(&e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Print a user-friendly error message with recovery hint.
fn print_error(e: &CliError) {
    eprintln!(
        "{} [{}]: {}",
        "Error".red().bold(),
        e.exit_code().to_string().yellow(),
        e
    );

    if let Some(suggestion) = e.suggestion() {
        eprintln!("{}: {}", "Hint".cyan(), suggestion);
    }
}

async fn run(cli: Cli) -> CliResult<String> {
    // Load configuration
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = CliConfig::load(&config_path)?;
    tracing::debug!(path = %config_path.display(), "Loaded configuration");

    let format: OutputFormat = cli.format.into();

    let output = match cli.command {
        Commands::Order(args) => {
            let client = context::connect(&config)?;
            commands::order(&client, format, args).await?
        }

        Commands::Query {
            out_trade_no,
            transaction_id,
            nonce,
        } => {
            let client = context::connect(&config)?;
            let target = match (out_trade_no, transaction_id) {
                (_, Some(id)) => commands::QueryTarget::TransactionId(id),
                (Some(no), None) => commands::QueryTarget::OutTradeNo(no),
                (None, None) => {
                    return Err(CliError::user(
                        "Pass --out-trade-no or --transaction-id",
                    ))
                }
            };
            commands::query(&client, format, target, nonce).await?
        }

        Commands::Sign { pairs, secret } => {
            let secret = secret.unwrap_or_else(|| config.merchant.api_key.clone());
            commands::sign(format, &pairs, &secret)?
        }

        Commands::Notify { file } => {
            let client = context::connect(&config)?;
            let body = std::fs::read(&file)?;
            commands::notify(&client, format, &body)?
        }

        Commands::AppParams {
            prepay_id,
            nonce,
            timestamp,
        } => {
            let client = context::connect(&config)?;
            commands::app_params(&client, format, &prepay_id, nonce, timestamp)?
        }

        Commands::Config => commands::show_config(&config, &config_path, format)?,
    };

    Ok(output)
}
