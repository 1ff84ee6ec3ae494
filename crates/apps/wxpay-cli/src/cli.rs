//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use wxpay_types::constants::trade_type;

use crate::output::OutputFormat;

/// WeChat Pay v2 CLI.
#[derive(Parser, Debug)]
#[command(name = "wxpay")]
#[command(version)]
#[command(about = "Command-line interface for the WeChat Pay v2 API")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "WXPAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json).
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormatArg,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a unified order.
    ///
    /// Prints the prepay id (and code URL for NATIVE orders) on success, or
    /// the gateway's reason on a business failure.
    Order(OrderArgs),

    /// Look up an order's payment status.
    Query {
        /// Merchant order number.
        #[arg(long, conflicts_with = "transaction_id")]
        out_trade_no: Option<String>,

        /// Gateway transaction id.
        #[arg(long)]
        transaction_id: Option<String>,

        /// Nonce to send (random if omitted).
        #[arg(long)]
        nonce: Option<String>,
    },

    /// Sign key=value pairs offline.
    ///
    /// Empty values are kept. A `sign` pair is ignored.
    Sign {
        /// Parameters as key=value.
        #[arg(required = true)]
        pairs: Vec<String>,

        /// Secret to sign with (defaults to the configured API key).
        #[arg(long, env = "WXPAY_API_KEY", hide_env_values = true)]
        secret: Option<String>,
    },

    /// Verify a payment notification body saved to a file.
    ///
    /// Prints the decoded payment and the XML reply to send back.
    Notify {
        /// File containing the raw XML body.
        file: PathBuf,
    },

    /// Build signed parameters for the in-app payment SDK.
    AppParams {
        /// Prepay id returned by `order`.
        #[arg(long)]
        prepay_id: String,

        /// Nonce to sign (random if omitted).
        #[arg(long)]
        nonce: Option<String>,

        /// Unix timestamp in seconds (now if omitted).
        #[arg(long)]
        timestamp: Option<u64>,
    },

    /// Show the effective configuration with secrets hidden.
    Config,
}

/// Arguments for the `order` command.
#[derive(Args, Debug, Clone)]
pub struct OrderArgs {
    /// Product description shown to the payer.
    #[arg(long)]
    pub body: String,

    /// Merchant order number.
    #[arg(long)]
    pub out_trade_no: String,

    /// Amount in fen.
    #[arg(long)]
    pub total_fee: u64,

    /// Payer IP address.
    #[arg(long)]
    pub ip: String,

    /// Callback URL for payment notifications.
    #[arg(long)]
    pub notify_url: String,

    /// Trade type (APP, JSAPI, NATIVE).
    #[arg(long, default_value = trade_type::APP)]
    pub trade_type: String,

    /// Payer openid (required for JSAPI).
    #[arg(long)]
    pub openid: Option<String>,

    /// Product id (required for NATIVE).
    #[arg(long)]
    pub product_id: Option<String>,

    /// Opaque data echoed back in the notification.
    #[arg(long)]
    pub attach: Option<String>,

    /// Nonce to send (random if omitted).
    #[arg(long)]
    pub nonce: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order() {
        let cli = Cli::try_parse_from([
            "wxpay",
            "order",
            "--body",
            "Test",
            "--out-trade-no",
            "T-1",
            "--total-fee",
            "100",
            "--ip",
            "127.0.0.1",
            "--notify-url",
            "https://merchant.test/notify",
        ])
        .unwrap();

        match cli.command {
            Commands::Order(args) => {
                assert_eq!(args.total_fee, 100);
                assert_eq!(args.trade_type, "APP");
                assert!(args.openid.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_query_ids_conflict() {
        let result = Cli::try_parse_from([
            "wxpay",
            "query",
            "--out-trade-no",
            "T-1",
            "--transaction-id",
            "42",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_format() {
        let cli = Cli::try_parse_from(["wxpay", "config", "--format", "json"]).unwrap();
        assert!(matches!(cli.format, OutputFormatArg::Json));
    }
}
