//! Build in-app payment parameters.

use wxpay_client::{HttpExecutor, WechatPay};
use wxpay_crypto::generate_nonce;
use wxpay_types::OrderResponse;

use crate::context::unix_now;
use crate::error::CliResult;
use crate::output::{AppParamsOutput, OutputFormat, Render};

/// Execute the app-params command.
pub fn app_params<E: HttpExecutor>(
    client: &WechatPay<E>,
    format: OutputFormat,
    prepay_id: &str,
    nonce: Option<String>,
    timestamp: Option<u64>,
) -> CliResult<String> {
    let order = OrderResponse {
        prepay_id: prepay_id.to_string(),
        ..Default::default()
    };
    let nonce = nonce.unwrap_or_else(generate_nonce);
    let timestamp = timestamp.unwrap_or_else(unix_now);

    let params = client.app_params(&order, &nonce, timestamp)?;
    Ok(AppParamsOutput { params }.render(format))
}
