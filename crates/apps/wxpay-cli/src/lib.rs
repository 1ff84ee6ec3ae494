//! Command-line interface for the WeChat Pay v2 API.
//!
//! This crate provides the `wxpay` binary. It includes commands for:
//!
//! - **Orders**: Create a unified order and look up its status
//! - **Notifications**: Verify a saved payment notification and print the reply
//! - **App payments**: Build the signed parameter set for the mobile SDK
//! - **Signing**: Compute a signature over arbitrary parameters offline
//!
//! # Quick Start
//!
//! ```bash
//! # Create an APP order for 1.00 CNY
//! wxpay order --body "Test" --out-trade-no T-1001 --total-fee 100 \
//!     --ip 127.0.0.1 --notify-url https://merchant.example/notify
//!
//! # Check whether it was paid
//! wxpay query --out-trade-no T-1001
//!
//! # Sign parameters without touching the network
//! wxpay sign appid=wx123 mch_id=M1 body=Test --secret secretkey
//! ```
//!
//! # Output Formats
//!
//! All commands support `--format`:
//!
//! - `human` (default): Human-readable with colors
//! - `json`: Machine-readable JSON
//!
//! # Configuration
//!
//! Configuration is loaded from the platform config directory (override the
//! base directory with `WXPAY_DATA_DIR`, or the file with `--config`):
//!
//! ```toml
//! [merchant]
//! app_id = "wx123"
//! mch_id = "M1"
//! api_key = "${WXPAY_API_KEY}"
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod output;

// Re-export main types
pub use cli::{Cli, Commands, OutputFormatArg};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Render};
