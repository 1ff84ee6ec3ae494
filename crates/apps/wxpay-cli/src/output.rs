//! Output formatting for CLI.

use colored::Colorize;
use serde::Serialize;

use wxpay_types::{AppInvocationParameters, NotifyPayload, OrderResponse, QueryResponse};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use 'human' or 'json'.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for renderable output.
pub trait Render {
    /// Render as human-readable string.
    fn render_human(&self) -> String;

    /// Render as JSON string.
    fn render_json(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.render_human(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

/// Format an amount in fen as yuan.
pub fn format_fen(fen: u64) -> String {
    format!("{}.{:02}", fen / 100, fen % 100)
}

fn status_line(success: bool, reason: Option<&str>) -> String {
    match reason {
        None if success => format!("{}", "SUCCESS".green().bold()),
        Some(reason) => format!("{} {}", "FAILED".red().bold(), reason),
        None => format!("{}", "FAILED".red().bold()),
    }
}

fn push_field(lines: &mut Vec<String>, label: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{} {}", format!("{}:", label).bold(), value));
    }
}

// =============================================================================
// Output Types
// =============================================================================

/// Output for the order command.
#[derive(Debug, Serialize)]
pub struct OrderOutput {
    pub out_trade_no: String,
    pub nonce_str: String,
    pub response: OrderResponse,
}

impl Render for OrderOutput {
    fn render_human(&self) -> String {
        let result = &self.response.result;
        let mut lines = vec![format!(
            "{} {}",
            "Order:".bold(),
            status_line(result.is_success(), result.failure_reason())
        )];
        push_field(&mut lines, "Out trade no", &self.out_trade_no);
        push_field(&mut lines, "Trade type", &self.response.trade_type);
        push_field(&mut lines, "Prepay id", &self.response.prepay_id);
        push_field(&mut lines, "Code URL", &self.response.code_url);
        push_field(&mut lines, "Error code", &result.err_code);
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the query command.
#[derive(Debug, Serialize)]
pub struct QueryOutput {
    pub paid: bool,
    pub response: QueryResponse,
}

impl Render for QueryOutput {
    fn render_human(&self) -> String {
        let result = &self.response.result;
        let mut lines = vec![format!(
            "{} {}",
            "Query:".bold(),
            status_line(result.is_success(), result.failure_reason())
        )];
        if result.is_success() {
            let paid = if self.paid {
                "yes".green().to_string()
            } else {
                "no".yellow().to_string()
            };
            lines.push(format!("{} {}", "Paid:".bold(), paid));
        }
        push_field(&mut lines, "Trade state", &self.response.trade_state);
        push_field(&mut lines, "State detail", &self.response.trade_state_desc);
        push_field(&mut lines, "Out trade no", &self.response.out_trade_no);
        push_field(&mut lines, "Transaction id", &self.response.transaction_id);
        if self.response.total_fee > 0 {
            push_field(
                &mut lines,
                "Total",
                &format_fen(self.response.total_fee),
            );
        }
        push_field(&mut lines, "Paid at", &self.response.time_end);
        push_field(&mut lines, "Error code", &result.err_code);
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the sign command.
#[derive(Debug, Serialize)]
pub struct SignOutput {
    /// Canonical string with the secret masked.
    pub canonical: String,
    pub sign: String,
}

impl Render for SignOutput {
    fn render_human(&self) -> String {
        format!(
            "{} {}\n{} {}",
            "Canonical:".bold(),
            self.canonical.dimmed(),
            "Sign:".bold(),
            self.sign.green()
        )
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the notify command.
#[derive(Debug, Serialize)]
pub struct NotifyOutput {
    pub paid: bool,
    pub payload: NotifyPayload,
    /// XML body to return to the gateway.
    pub reply: String,
}

impl Render for NotifyOutput {
    fn render_human(&self) -> String {
        let mut lines = vec![format!("{}", "Signature verified".green().bold())];
        let paid = if self.paid {
            "yes".green().to_string()
        } else {
            "no".yellow().to_string()
        };
        lines.push(format!("{} {}", "Paid:".bold(), paid));
        push_field(&mut lines, "Out trade no", &self.payload.out_trade_no);
        push_field(&mut lines, "Transaction id", &self.payload.transaction_id);
        if self.payload.total_fee > 0 {
            push_field(&mut lines, "Total", &format_fen(self.payload.total_fee));
        }
        push_field(&mut lines, "Attach", &self.payload.attach);
        lines.push(format!("{}", "Reply:".bold()));
        lines.push(self.reply.clone());
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the app-params command.
#[derive(Debug, Serialize)]
pub struct AppParamsOutput {
    pub params: AppInvocationParameters,
}

impl Render for AppParamsOutput {
    fn render_human(&self) -> String {
        let p = &self.params;
        let mut lines = vec![format!("{}", "App payment parameters".bold())];
        for (label, value) in [
            ("appid", &p.app_id),
            ("partnerid", &p.partner_id),
            ("prepayid", &p.prepay_id),
            ("package", &p.package),
            ("noncestr", &p.nonce_str),
            ("timestamp", &p.timestamp),
            ("sign", &p.sign),
        ] {
            lines.push(format!("  {:<10} {}", label.cyan(), value));
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the config command.
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub path: String,
    pub exists: bool,
    pub app_id: String,
    pub mch_id: String,
    pub api_key_set: bool,
    pub app_secret_set: bool,
    pub order_url: String,
    pub query_url: String,
    pub timeout_secs: u64,
    pub verify_response_sign: bool,
}

impl Render for ConfigOutput {
    fn render_human(&self) -> String {
        let set = |flag: bool| {
            if flag {
                "set".green().to_string()
            } else {
                "not set".yellow().to_string()
            }
        };
        let mut lines = vec![format!(
            "{} {}{}",
            "Config file:".bold(),
            self.path,
            if self.exists { "" } else { " (missing, using defaults)" }
        )];
        lines.push(format!("{} {}", "App id:".bold(), self.app_id));
        lines.push(format!("{} {}", "Merchant id:".bold(), self.mch_id));
        lines.push(format!("{} {}", "API key:".bold(), set(self.api_key_set)));
        lines.push(format!("{} {}", "App secret:".bold(), set(self.app_secret_set)));
        lines.push(format!("{} {}", "Order URL:".bold(), self.order_url));
        lines.push(format!("{} {}", "Query URL:".bold(), self.query_url));
        lines.push(format!("{} {}s", "Timeout:".bold(), self.timeout_secs));
        lines.push(format!(
            "{} {}",
            "Verify response sign:".bold(),
            self.verify_response_sign
        ));
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
