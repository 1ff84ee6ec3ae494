//! Show the effective configuration.

use std::path::Path;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{ConfigOutput, OutputFormat, Render};

/// Execute the config command. Secrets are reported as set or not set only.
pub fn show_config(config: &CliConfig, path: &Path, format: OutputFormat) -> CliResult<String> {
    let merchant = &config.merchant;
    let output = ConfigOutput {
        path: path.display().to_string(),
        exists: path.exists(),
        app_id: merchant.app_id.clone(),
        mch_id: merchant.mch_id.clone(),
        api_key_set: !merchant.api_key.is_empty(),
        app_secret_set: merchant
            .app_secret
            .as_deref()
            .is_some_and(|s| !s.is_empty()),
        order_url: merchant.order_url.clone(),
        query_url: merchant.query_url.clone(),
        timeout_secs: merchant.timeout_secs,
        verify_response_sign: merchant.verify_response_sign,
    };
    Ok(output.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxpay_types::WechatPayConfig;

    #[test]
    fn test_show_config_hides_secrets() {
        let config = CliConfig {
            merchant: WechatPayConfig::new("wx123", "M1", "topsecret"),
        };
        let output = show_config(&config, Path::new("/nonexistent/config.toml"), OutputFormat::Json)
            .unwrap();
        assert!(output.contains("\"api_key_set\": true"));
        assert!(output.contains("\"exists\": false"));
        assert!(!output.contains("topsecret"));
    }
}
