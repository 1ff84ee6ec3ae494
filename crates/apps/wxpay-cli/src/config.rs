//! CLI configuration.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wxpay_types::WechatPayConfig;

use crate::error::CliResult;

/// Expand environment variables in a string.
/// Supports `${VAR_NAME}` syntax; unknown variables are left as-is.
fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static regex is valid");
    re.replace_all(input, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
    })
    .to_string()
}

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Merchant credentials and gateway endpoints.
    pub merchant: WechatPayConfig,
}

impl CliConfig {
    /// Load configuration from a file.
    /// Environment variables in `${VAR}` format are expanded in secrets.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;

        config.merchant.api_key = expand_env_vars(&config.merchant.api_key);
        if let Some(secret) = config.merchant.app_secret.as_mut() {
            *secret = expand_env_vars(secret);
        }

        Ok(config)
    }
}

/// Base directory for wxpay data.
pub fn default_base_dir() -> PathBuf {
    // Check environment variable first
    if let Ok(dir) = std::env::var("WXPAY_DATA_DIR") {
        return PathBuf::from(dir);
    }

    directories::ProjectDirs::from("rs", "wxpay", "wxpay")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".wxpay")
        })
}

/// Default config file location.
pub fn default_config_path() -> PathBuf {
    default_base_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = CliConfig::load(&temp.path().join("absent.toml")).unwrap();
        assert!(config.merchant.app_id.is_empty());
        assert!(config.merchant.verify_response_sign);
    }

    #[test]
    fn test_load_with_env_expansion() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::env::set_var("WXPAY_TEST_API_KEY_LOAD", "from-env");
        std::fs::write(
            &path,
            r#"
[merchant]
app_id = "wx123"
mch_id = "M1"
api_key = "${WXPAY_TEST_API_KEY_LOAD}"
app_secret = "${WXPAY_TEST_UNSET_VAR}"
timeout_secs = 10
"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.merchant.app_id, "wx123");
        assert_eq!(config.merchant.api_key, "from-env");
        assert_eq!(
            config.merchant.app_secret.as_deref(),
            Some("${WXPAY_TEST_UNSET_VAR}")
        );
        assert_eq!(config.merchant.timeout_secs, 10);
        assert_eq!(config.merchant.order_url, wxpay_types::constants::ORDER_URL);
    }

    #[test]
    fn test_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "merchant = [").unwrap();
        assert!(matches!(CliConfig::load(&path), Err(CliError::Toml(_))));
    }
}
