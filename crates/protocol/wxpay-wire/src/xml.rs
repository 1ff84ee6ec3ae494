//! The gateway's XML envelope.
//!
//! Every message is a single root element whose children are the fields, each
//! a text element named after the field's wire name:
//!
//! ```text
//! <xml>
//!   <appid>wx2421b1c4370ec43b</appid>
//!   <mch_id>10000100</mch_id>
//!   ...
//! </xml>
//! ```
//!
//! Outbound, children are written in ascending key order with escaped text.
//! Carriage returns go out as `&#13;` so a receiving parser's line-end
//! normalisation cannot change the signed bytes.
//! Inbound, both plain text and CDATA sections are accepted, the root name is
//! not checked, and nesting below field level is rejected.

use quick_xml::escape::escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use wxpay_crypto::ParameterMap;
use wxpay_types::{FromParams, ToParams};

use crate::error::{DecodeError, EncodeError};

/// Root element name used for outbound messages.
pub const ROOT_ELEMENT: &str = "xml";

/// Encode a parameter map as an XML envelope.
pub fn encode_params(params: &ParameterMap) -> Result<String, EncodeError> {
    let mut writer = Writer::new(Vec::new());

    write(&mut writer, Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
    for (name, value) in params.iter() {
        if !is_valid_name(name) {
            return Err(EncodeError::InvalidName(name.to_string()));
        }
        let text = escape_text(name, value)?;
        write(&mut writer, Event::Start(BytesStart::new(name)))?;
        write(&mut writer, Event::Text(BytesText::from_escaped(text)))?;
        write(&mut writer, Event::End(BytesEnd::new(name)))?;
    }
    write(&mut writer, Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    String::from_utf8(writer.into_inner()).map_err(|e| EncodeError::Xml(e.to_string()))
}

/// Encode a message via its field table.
pub fn encode_message<T: ToParams>(message: &T) -> Result<String, EncodeError> {
    encode_params(&message.to_params())
}

/// Decode an XML envelope into a parameter map.
///
/// Field values are kept verbatim (no trimming), so the map is exactly what
/// the sender signed.
pub fn decode_params(bytes: &[u8]) -> Result<ParameterMap, DecodeError> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut params = ParameterMap::new();

    let mut depth = 0usize;
    let mut seen_root = false;
    let mut field: Option<(String, String)> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                depth += 1;
                let name = element_name(e.name().as_ref())?;
                match depth {
                    1 if seen_root => {
                        return Err(DecodeError::Malformed("multiple root elements".into()))
                    }
                    1 => seen_root = true,
                    2 => field = Some((name, String::new())),
                    _ => return Err(DecodeError::UnexpectedNesting(name)),
                }
            }
            Event::Empty(e) => {
                let name = element_name(e.name().as_ref())?;
                match depth {
                    0 if seen_root => {
                        return Err(DecodeError::Malformed("multiple root elements".into()))
                    }
                    0 => seen_root = true,
                    1 => insert_field(&mut params, name, String::new())?,
                    _ => return Err(DecodeError::UnexpectedNesting(name)),
                }
            }
            Event::Text(t) => {
                let text = t.unescape()?;
                match (&mut field, depth) {
                    (Some((_, value)), 2) => value.push_str(&text),
                    _ if text.trim().is_empty() => {}
                    _ => {
                        return Err(DecodeError::Malformed(format!(
                            "unexpected text outside a field: {:?}",
                            text.trim()
                        )))
                    }
                }
            }
            Event::CData(c) => match (&mut field, depth) {
                (Some((name, value)), 2) => {
                    let text = std::str::from_utf8(&c)
                        .map_err(|_| DecodeError::InvalidUtf8(name.clone()))?;
                    value.push_str(text);
                }
                _ => {
                    return Err(DecodeError::Malformed(
                        "unexpected CDATA outside a field".into(),
                    ))
                }
            },
            Event::End(_) => {
                if depth == 2 {
                    if let Some((name, value)) = field.take() {
                        insert_field(&mut params, name, value)?;
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(DecodeError::MissingRoot);
    }
    if depth != 0 {
        return Err(DecodeError::Malformed("unexpected end of document".into()));
    }
    Ok(params)
}

/// Decode an XML envelope into a typed message.
pub fn decode_message<T: FromParams>(bytes: &[u8]) -> Result<T, DecodeError> {
    let params = decode_params(bytes)?;
    Ok(T::from_params(&params)?)
}

fn insert_field(
    params: &mut ParameterMap,
    name: String,
    value: String,
) -> Result<(), DecodeError> {
    if params.contains_key(&name) {
        return Err(DecodeError::Malformed(format!("duplicate field <{}>", name)));
    }
    params.insert(name, value);
    Ok(())
}

/// Escape element text, rejecting characters outside the XML 1.0 `Char` range.
fn escape_text(name: &str, value: &str) -> Result<String, EncodeError> {
    if let Some(c) = value.chars().find(|c| !is_xml_char(*c)) {
        return Err(EncodeError::InvalidChar {
            field: name.to_string(),
            code: c as u32,
        });
    }
    Ok(escape(value).replace('\r', "&#13;"))
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), EncodeError> {
    writer
        .write_event(event)
        .map_err(|e| EncodeError::Xml(e.to_string()))
}

fn element_name(raw: &[u8]) -> Result<String, DecodeError> {
    String::from_utf8(raw.to_vec())
        .map_err(|e| DecodeError::InvalidUtf8(String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

/// Field names are plain ASCII identifiers on this gateway.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxpay_types::{BaseCredentials, BaseResult, NotifyReply, QueryResponse};

    #[test]
    fn test_encode_layout() {
        let params: ParameterMap = [("mch_id", "M1"), ("appid", "wx123")].into_iter().collect();
        assert_eq!(
            encode_params(&params).unwrap(),
            "<xml><appid>wx123</appid><mch_id>M1</mch_id></xml>"
        );
    }

    #[test]
    fn test_encode_escapes_text() {
        let params: ParameterMap = [("body", "A&B <c>")].into_iter().collect();
        let xml = encode_params(&params).unwrap();
        assert_eq!(xml, "<xml><body>A&amp;B &lt;c&gt;</body></xml>");
        assert_eq!(decode_params(xml.as_bytes()).unwrap().get("body"), Some("A&B <c>"));
    }

    #[test]
    fn test_encode_protects_carriage_return() {
        let params: ParameterMap = [("detail", "a\r\nb")].into_iter().collect();
        let xml = encode_params(&params).unwrap();
        assert_eq!(xml, "<xml><detail>a&#13;\nb</detail></xml>");
        assert_eq!(decode_params(xml.as_bytes()).unwrap().get("detail"), Some("a\r\nb"));
    }

    #[test]
    fn test_encode_rejects_control_characters() {
        let params: ParameterMap = [("attach", "x\u{1}y")].into_iter().collect();
        let err = encode_params(&params).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidChar { ref field, code: 1 } if field == "attach"
        ));

        let params: ParameterMap = [("body", "tab\tok")].into_iter().collect();
        assert!(encode_params(&params).is_ok());
    }

    #[test]
    fn test_encode_rejects_bad_name() {
        let params: ParameterMap = [("bad name", "x")].into_iter().collect();
        assert!(matches!(
            encode_params(&params),
            Err(EncodeError::InvalidName(_))
        ));
    }

    #[test]
    fn test_decode_cdata_and_whitespace() {
        let body = b"<xml>\n  <return_code><![CDATA[SUCCESS]]></return_code>\n  <return_msg><![CDATA[OK]]></return_msg>\n  <total_fee>100</total_fee>\n</xml>";
        let params = decode_params(body).unwrap();
        assert_eq!(params.get("return_code"), Some("SUCCESS"));
        assert_eq!(params.get("return_msg"), Some("OK"));
        assert_eq!(params.get("total_fee"), Some("100"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_decode_keeps_values_verbatim() {
        let params = decode_params(b"<xml><attach> padded </attach><empty/></xml>").unwrap();
        assert_eq!(params.get("attach"), Some(" padded "));
        assert_eq!(params.get("empty"), Some(""));
    }

    #[test]
    fn test_decode_ignores_declaration_and_root_name() {
        let body = br#"<?xml version="1.0" encoding="UTF-8"?><root><a>1</a></root>"#;
        assert_eq!(decode_params(body).unwrap().get("a"), Some("1"));
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(
            decode_params(b"<xml><a>1</b></xml>"),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(
            decode_params(b"<xml><a>1</a>"),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(
            decode_params(b"not xml at all"),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(decode_params(b""), Err(DecodeError::MissingRoot)));
    }

    #[test]
    fn test_decode_rejects_duplicate_fields() {
        let err = decode_params(b"<xml><total_fee>100</total_fee><total_fee>1</total_fee></xml>")
            .unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(msg) if msg.contains("total_fee")));

        assert!(matches!(
            decode_params(b"<xml><attach/><attach>x</attach></xml>"),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_rejects_nesting() {
        let err = decode_params(b"<html><body><h1>502</h1></body></html>").unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedNesting(name) if name == "h1"));
    }

    #[test]
    fn test_decode_message_field_error() {
        let err = decode_message::<QueryResponse>(b"<xml><cash_fee>abc</cash_fee></xml>")
            .unwrap_err();
        assert!(matches!(err, DecodeError::Field(_)));
    }

    #[test]
    fn test_response_roundtrip() {
        let resp = QueryResponse {
            result: BaseResult {
                return_code: "SUCCESS".into(),
                return_msg: "OK".into(),
                result_code: "SUCCESS".into(),
                ..Default::default()
            },
            base: BaseCredentials::new("wx123", "M1", "n1"),
            trade_state: "SUCCESS".into(),
            total_fee: 100,
            cash_fee: 100,
            transaction_id: "4200000001".into(),
            out_trade_no: "T-1001".into(),
            attach: "note & more".into(),
            ..Default::default()
        };
        let xml = encode_message(&resp).unwrap();
        let decoded: QueryResponse = decode_message(xml.as_bytes()).unwrap();
        assert_eq!(decoded, resp);
    }

    #[test]
    fn test_notify_reply_body() {
        assert_eq!(
            encode_message(&NotifyReply::success()).unwrap(),
            "<xml><return_code>SUCCESS</return_code><return_msg>OK</return_msg></xml>"
        );
    }
}
