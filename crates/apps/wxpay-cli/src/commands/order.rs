//! Create a unified order.

use wxpay_client::{HttpExecutor, WechatPay};
use wxpay_crypto::generate_nonce;
use wxpay_types::{BaseCredentials, OrderRequest};

use crate::cli::OrderArgs;
use crate::error::CliResult;
use crate::output::{OrderOutput, OutputFormat, Render};

/// Execute the order command.
///
/// A business rejection is rendered, not returned as an error.
pub async fn order<E: HttpExecutor>(
    client: &WechatPay<E>,
    format: OutputFormat,
    args: OrderArgs,
) -> CliResult<String> {
    let nonce = args.nonce.unwrap_or_else(generate_nonce);

    let mut req = OrderRequest::new(
        BaseCredentials::new("", "", &nonce),
        &args.body,
        &args.out_trade_no,
        args.total_fee,
        &args.ip,
        &args.notify_url,
        &args.trade_type,
    );
    req.openid = args.openid.unwrap_or_default();
    req.product_id = args.product_id.unwrap_or_default();
    req.attach = args.attach.unwrap_or_default();

    let response = client.order(req).await?;

    let output = OrderOutput {
        out_trade_no: args.out_trade_no,
        nonce_str: nonce,
        response,
    };
    Ok(output.render(format))
}
