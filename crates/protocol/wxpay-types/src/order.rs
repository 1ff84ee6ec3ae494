//! Unified order: create a prepaid transaction.

use serde::{Deserialize, Serialize};
use wxpay_crypto::ParameterMap;

use crate::base::{BaseCredentials, BaseResult};
use crate::error::TypesResult;
use crate::fields::{read_int, read_str, FromParams, Signable, ToParams};

/// Unified order request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(flatten)]
    pub base: BaseCredentials,
    pub device_info: String,
    pub body: String,
    pub detail: String,
    pub attach: String,
    /// Merchant-side order number.
    pub out_trade_no: String,
    pub fee_type: String,
    /// Amount in the smallest currency unit.
    pub total_fee: u64,
    pub spbill_create_ip: String,
    pub time_start: String,
    pub time_expire: String,
    pub goods_tag: String,
    pub notify_url: String,
    pub trade_type: String,
    pub product_id: String,
    pub limit_pay: String,
    pub openid: String,
}

impl OrderRequest {
    /// Request with the fields the gateway always requires.
    pub fn new(
        base: BaseCredentials,
        body: &str,
        out_trade_no: &str,
        total_fee: u64,
        spbill_create_ip: &str,
        notify_url: &str,
        trade_type: &str,
    ) -> Self {
        Self {
            base,
            body: body.to_string(),
            out_trade_no: out_trade_no.to_string(),
            total_fee,
            spbill_create_ip: spbill_create_ip.to_string(),
            notify_url: notify_url.to_string(),
            trade_type: trade_type.to_string(),
            ..Default::default()
        }
    }
}

impl ToParams for OrderRequest {
    fn to_params(&self) -> ParameterMap {
        let mut p = self.base.to_params();
        p.put_str("device_info", &self.device_info);
        p.put_str("body", &self.body);
        p.put_str("detail", &self.detail);
        p.put_str("attach", &self.attach);
        p.put_str("out_trade_no", &self.out_trade_no);
        p.put_str("fee_type", &self.fee_type);
        p.put_int("total_fee", self.total_fee);
        p.put_str("spbill_create_ip", &self.spbill_create_ip);
        p.put_str("time_start", &self.time_start);
        p.put_str("time_expire", &self.time_expire);
        p.put_str("goods_tag", &self.goods_tag);
        p.put_str("notify_url", &self.notify_url);
        p.put_str("trade_type", &self.trade_type);
        p.put_str("product_id", &self.product_id);
        p.put_str("limit_pay", &self.limit_pay);
        p.put_str("openid", &self.openid);
        p
    }
}

impl FromParams for OrderRequest {
    fn from_params(params: &ParameterMap) -> TypesResult<Self> {
        Ok(Self {
            base: BaseCredentials::from_params(params)?,
            device_info: read_str(params, "device_info"),
            body: read_str(params, "body"),
            detail: read_str(params, "detail"),
            attach: read_str(params, "attach"),
            out_trade_no: read_str(params, "out_trade_no"),
            fee_type: read_str(params, "fee_type"),
            total_fee: read_int(params, "total_fee")?,
            spbill_create_ip: read_str(params, "spbill_create_ip"),
            time_start: read_str(params, "time_start"),
            time_expire: read_str(params, "time_expire"),
            goods_tag: read_str(params, "goods_tag"),
            notify_url: read_str(params, "notify_url"),
            trade_type: read_str(params, "trade_type"),
            product_id: read_str(params, "product_id"),
            limit_pay: read_str(params, "limit_pay"),
            openid: read_str(params, "openid"),
        })
    }
}

impl Signable for OrderRequest {
    fn signature(&self) -> &str {
        &self.base.sign
    }

    fn set_signature(&mut self, sign: String) {
        self.base.sign = sign;
    }
}

/// Unified order response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(flatten)]
    pub result: BaseResult,
    #[serde(flatten)]
    pub base: BaseCredentials,
    pub device_info: String,
    pub trade_type: String,
    /// Token handed to the client-side payment widget.
    pub prepay_id: String,
    /// QR code payload for `NATIVE` orders.
    pub code_url: String,
}

impl ToParams for OrderResponse {
    fn to_params(&self) -> ParameterMap {
        let mut p = self.result.to_params();
        p.extend(self.base.to_params());
        p.put_str("device_info", &self.device_info);
        p.put_str("trade_type", &self.trade_type);
        p.put_str("prepay_id", &self.prepay_id);
        p.put_str("code_url", &self.code_url);
        p
    }
}

impl FromParams for OrderResponse {
    fn from_params(params: &ParameterMap) -> TypesResult<Self> {
        Ok(Self {
            result: BaseResult::from_params(params)?,
            base: BaseCredentials::from_params(params)?,
            device_info: read_str(params, "device_info"),
            trade_type: read_str(params, "trade_type"),
            prepay_id: read_str(params, "prepay_id"),
            code_url: read_str(params, "code_url"),
        })
    }
}
