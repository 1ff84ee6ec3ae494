//! Field table tests across every model.
//!
//! Each model must omit zero-valued fields, use the gateway's wire names, and
//! decode its own projection back to an equal value.

use wxpay_types::*;

fn all_fields_order() -> OrderRequest {
    OrderRequest {
        base: BaseCredentials {
            app_id: "wx123".into(),
            mch_id: "M1".into(),
            nonce_str: "abc".into(),
            sign: "SIG".into(),
        },
        device_info: "WEB".into(),
        body: "Test".into(),
        detail: "detail".into(),
        attach: "attach".into(),
        out_trade_no: "T-1".into(),
        fee_type: "CNY".into(),
        total_fee: 1,
        spbill_create_ip: "127.0.0.1".into(),
        time_start: "20261018000000".into(),
        time_expire: "20261018010000".into(),
        goods_tag: "WXG".into(),
        notify_url: "https://n".into(),
        trade_type: "JSAPI".into(),
        product_id: "P1".into(),
        limit_pay: "no_credit".into(),
        openid: "o1".into(),
    }
}

#[test]
fn order_request_wire_names() {
    let p = all_fields_order().to_params();
    let keys: Vec<&str> = p.iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec![
            "appid",
            "attach",
            "body",
            "detail",
            "device_info",
            "fee_type",
            "goods_tag",
            "limit_pay",
            "mch_id",
            "nonce_str",
            "notify_url",
            "openid",
            "out_trade_no",
            "product_id",
            "sign",
            "spbill_create_ip",
            "time_expire",
            "time_start",
            "total_fee",
            "trade_type",
        ]
    );
}

#[test]
fn default_values_project_to_empty_map() {
    assert!(OrderRequest::default().to_params().is_empty());
    assert!(OrderResponse::default().to_params().is_empty());
    assert!(QueryRequest::default().to_params().is_empty());
    assert!(QueryResponse::default().to_params().is_empty());
    assert!(NotifyReply::default().to_params().is_empty());
    assert!(AppInvocationParameters::default().to_params().is_empty());
}

#[test]
fn no_empty_values_ever_emitted() {
    let mut order = all_fields_order();
    order.detail.clear();
    order.total_fee = 0;
    let p = order.to_params();
    assert!(p.iter().all(|(_, v)| !v.is_empty()));
    assert!(!p.contains_key("detail"));
    assert!(!p.contains_key("total_fee"));
}

#[test]
fn request_projection_roundtrip() {
    let order = all_fields_order();
    assert_eq!(OrderRequest::from_params(&order.to_params()).unwrap(), order);

    let query = QueryRequest {
        base: BaseCredentials::new("wx123", "M1", "abc"),
        transaction_id: "4200".into(),
        out_trade_no: "T-1".into(),
    };
    assert_eq!(QueryRequest::from_params(&query.to_params()).unwrap(), query);
}

#[test]
fn order_response_projection_roundtrip() {
    let resp = OrderResponse {
        result: BaseResult {
            return_code: constants::SUCCESS.into(),
            return_msg: "OK".into(),
            result_code: constants::SUCCESS.into(),
            ..Default::default()
        },
        base: BaseCredentials::new("wx123", "M1", "srv"),
        device_info: "WEB".into(),
        trade_type: constants::trade_type::NATIVE.into(),
        prepay_id: "wx201410272009395522657a690389285100".into(),
        code_url: "weixin://wxpay/bizpayurl?pr=abc".into(),
    };
    assert_eq!(OrderResponse::from_params(&resp.to_params()).unwrap(), resp);
}

#[test]
fn signing_ignores_previous_signature() {
    let mut a = all_fields_order();
    let mut b = all_fields_order();
    b.base.sign = "SOMETHING ELSE".into();
    a.sign_with("k").unwrap();
    b.sign_with("k").unwrap();
    assert_eq!(a.signature(), b.signature());
}

#[test]
fn mutation_after_signing_breaks_verification() {
    let mut order = all_fields_order();
    order.sign_with("k").unwrap();
    assert!(wxpay_crypto::verify(&order.to_params(), "k").unwrap());

    order.total_fee = 2;
    assert!(!wxpay_crypto::verify(&order.to_params(), "k").unwrap());
}
