//! Gateway client construction for CLI commands.

use tracing::debug;
use wxpay_client::{PayError, WechatPay};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Build a gateway client from the loaded configuration.
///
/// A missing API key is not caught here; signing reports it.
pub fn connect(config: &CliConfig) -> CliResult<WechatPay> {
    let merchant = config.merchant.clone();
    debug!(
        app_id = %merchant.app_id,
        mch_id = %merchant.mch_id,
        timeout_secs = merchant.timeout_secs,
        "Creating gateway client"
    );
    WechatPay::new(merchant).map_err(|e| match e {
        PayError::Config(msg) => CliError::config(msg),
        other => other.into(),
    })
}

/// Current Unix time in seconds.
pub fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxpay_types::WechatPayConfig;

    #[test]
    fn test_connect_requires_identity() {
        let config = CliConfig::default();
        assert!(matches!(connect(&config), Err(CliError::Config(_))));
    }

    #[test]
    fn test_connect_without_api_key() {
        let config = CliConfig {
            merchant: WechatPayConfig::new("wx123", "M1", ""),
        };
        let client = connect(&config).unwrap();
        assert_eq!(client.config().mch_id, "M1");
    }

    #[test]
    fn test_unix_now_is_recent() {
        assert!(unix_now() > 1_600_000_000);
    }
}
