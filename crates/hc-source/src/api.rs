//! Client of the public special-day API.
//!
//! `getRestDeInfo` returns the public holidays of one month. The service
//! answers in XML by default and in JSON on request, and both shapes carry
//! the same tree:
//!
//! ```text
//! response
//! ├── header { resultCode, resultMsg }
//! └── body
//!     └── items
//!         └── item* { dateKind, dateName, isHoliday, locdate, seq }
//! ```
//!
//! A single holiday may arrive as an object rather than a one-element list,
//! and an empty month as an empty string. Gateway-level failures (bad
//! service key, quota) use a different root, `OpenAPI_ServiceResponse`,
//! which is reported as a rejection.

use std::collections::HashMap;
use std::time::Duration;

use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use hc_core::{DateNumber, MonthNumber, Year};
use hc_engine::{DateKind, HolidayRecord};
use hc_time::Date;

use crate::error::SourceError;
use crate::source::MonthSource;

/// Base URL of the special-day service.
pub const DEFAULT_ENDPOINT: &str = "https://apis.data.go.kr/B090041/openapi/service/SpcdeInfoService";

const OPERATION: &str = "getRestDeInfo";
const SUCCESS_CODE: &str = "00";

/// HTTP client of the special-day service.
#[derive(Debug, Clone)]
pub struct PublicHolidayApi {
    client: Client,
    endpoint: String,
    service_key: String,
    rows_per_page: u32,
}

impl PublicHolidayApi {
    /// Create a client with the given service key, endpoint and timeout.
    pub fn new(
        service_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
        rows_per_page: u32,
    ) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
            rows_per_page,
        })
    }

    /// The request URL for one month. The month is zero-padded.
    pub fn request_url(&self, year: Year, month: MonthNumber) -> Result<Url, SourceError> {
        let base = format!("{}/{OPERATION}", self.endpoint);
        Url::parse_with_params(
            &base,
            &[
                ("serviceKey", self.service_key.clone()),
                ("solYear", year.to_string()),
                ("solMonth", format!("{month:02}")),
                ("numOfRows", self.rows_per_page.to_string()),
                ("pageNo", "1".to_string()),
            ],
        )
        .map_err(|e| SourceError::Unavailable(format!("invalid endpoint {base}: {e}")))
    }

    async fn fetch_body(&self, url: Url) -> Result<String, SourceError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Unavailable(format!("HTTP status {status}")));
        }
        Ok(response.text().await?)
    }
}

impl MonthSource for PublicHolidayApi {
    fn name(&self) -> &str {
        "public-data-api"
    }

    async fn fetch_month(&self, year: Year, month: MonthNumber) -> Result<Vec<HolidayRecord>, SourceError> {
        let url = self.request_url(year, month)?;
        let body = self.fetch_body(url).await?;
        let records = parse_response(&body)?;
        debug!(year, month, count = records.len(), "holidays fetched from API");
        Ok(records)
    }
}

// ── Response model ────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct ApiResponse {
    result_code: String,
    result_msg: String,
    items: Vec<ApiItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiItem {
    #[serde(default)]
    date_kind: String,
    #[serde(default)]
    date_name: String,
    #[serde(default)]
    is_holiday: String,
    #[serde(default)]
    locdate: Scalar,
    #[serde(default)]
    seq: Scalar,
}

/// A numeric field that may be sent as a number or as text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(u64),
    Text(String),
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Text(String::new())
    }
}

impl Scalar {
    fn as_u32(&self) -> Option<u32> {
        match self {
            Scalar::Number(n) => u32::try_from(*n).ok(),
            Scalar::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl ApiItem {
    fn into_record(self) -> Result<HolidayRecord, SourceError> {
        let date: DateNumber = self
            .locdate
            .as_u32()
            .filter(|&n| Date::from_number(n).is_ok())
            .ok_or_else(|| SourceError::Unavailable(format!("invalid locdate {:?}", self.locdate)))?;
        let kind = DateKind::from_code(&self.date_kind);
        Ok(HolidayRecord {
            date,
            name: self.date_name,
            is_holiday: true,
            date_kind_name: Some(kind.source_label().to_string()),
            date_kind: Some(kind),
            seq: self.seq.as_u32(),
        })
    }
}

/// Parse a `getRestDeInfo` response body, JSON or XML.
///
/// Returns the public holidays (`isHoliday == "Y"`) in response order.
/// A result code other than `00` is a [`SourceError::Rejected`]; a body
/// that cannot be read is [`SourceError::Unavailable`].
pub fn parse_response(body: &str) -> Result<Vec<HolidayRecord>, SourceError> {
    let trimmed = body.trim_start();
    let response = if trimmed.starts_with('{') || trimmed.starts_with('[') {
        parse_json(trimmed)?
    } else {
        parse_xml(trimmed)?
    };

    if response.result_code != SUCCESS_CODE {
        warn!(code = %response.result_code, message = %response.result_msg, "holiday API rejected the request");
        return Err(SourceError::Rejected {
            code: response.result_code,
            message: response.result_msg,
        });
    }

    response
        .items
        .into_iter()
        .filter(|item| item.is_holiday.trim() == "Y")
        .map(ApiItem::into_record)
        .collect()
}

// ── JSON ──────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct JsonEnvelope {
    response: JsonResponse,
}

#[derive(Deserialize)]
struct JsonResponse {
    header: JsonHeader,
    #[serde(default)]
    body: Option<JsonBody>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonHeader {
    #[serde(default)]
    result_code: String,
    #[serde(default)]
    result_msg: String,
}

#[derive(Deserialize)]
struct JsonBody {
    #[serde(default)]
    items: Option<JsonItems>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonItems {
    Wrapped { item: OneOrMany },
    List(Vec<ApiItem>),
    Blank(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<ApiItem>),
    One(ApiItem),
}

fn parse_json(body: &str) -> Result<ApiResponse, SourceError> {
    let envelope: JsonEnvelope = serde_json::from_str(body)
        .map_err(|e| SourceError::Unavailable(format!("malformed JSON response: {e}")))?;
    let JsonResponse { header, body } = envelope.response;
    let items = match body.and_then(|b| b.items) {
        Some(JsonItems::Wrapped { item: OneOrMany::Many(items) }) | Some(JsonItems::List(items)) => items,
        Some(JsonItems::Wrapped { item: OneOrMany::One(item) }) => vec![item],
        Some(JsonItems::Blank(_)) | None => Vec::new(),
    };
    Ok(ApiResponse {
        result_code: header.result_code,
        result_msg: header.result_msg,
        items,
    })
}

// ── XML ───────────────────────────────────────────────────────────────────────

fn xml_error(e: impl std::fmt::Display) -> SourceError {
    SourceError::Unavailable(format!("malformed XML response: {e}"))
}

fn item_from_fields(mut fields: HashMap<String, String>) -> ApiItem {
    let mut take = |key: &str| fields.remove(key).unwrap_or_default();
    ApiItem {
        date_kind: take("dateKind"),
        date_name: take("dateName"),
        is_holiday: take("isHoliday"),
        locdate: Scalar::Text(take("locdate")),
        seq: Scalar::Text(take("seq")),
    }
}

fn parse_xml(body: &str) -> Result<ApiResponse, SourceError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut text = String::new();
    let mut response = ApiResponse::default();
    let mut item: Option<HashMap<String, String>> = None;
    let mut seen_root = false;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == "item" {
                    item = Some(HashMap::new());
                }
                seen_root = true;
                path.push(name);
                text.clear();
            }
            Event::Text(e) => {
                text.push_str(&e.xml_content().map_err(xml_error)?);
            }
            Event::GeneralRef(entity) => match entity.resolve_char_ref().map_err(xml_error)? {
                Some(c) => text.push(c),
                None => match entity.as_ref() {
                    b"lt" => text.push('<'),
                    b"gt" => text.push('>'),
                    b"amp" => text.push('&'),
                    b"apos" => text.push('\''),
                    b"quot" => text.push('"'),
                    other => text.push_str(&String::from_utf8_lossy(other)),
                },
            },
            Event::CData(e) => {
                text.push_str(&String::from_utf8_lossy(e.as_ref()));
            }
            Event::End(_) => {
                let value = std::mem::take(&mut text).trim().to_string();
                let leaf = path.pop().unwrap_or_default();
                let parent = path.last().map(String::as_str).unwrap_or_default();
                match (parent, leaf.as_str()) {
                    (_, "item") => {
                        if let Some(fields) = item.take() {
                            response.items.push(item_from_fields(fields));
                        }
                    }
                    ("item", field) => {
                        if let Some(fields) = item.as_mut() {
                            fields.insert(field.to_string(), value);
                        }
                    }
                    ("header", "resultCode") | ("cmmMsgHeader", "returnReasonCode") => {
                        response.result_code = value;
                    }
                    ("header", "resultMsg") | ("cmmMsgHeader", "returnAuthMsg") => {
                        response.result_msg = value;
                    }
                    ("cmmMsgHeader", "errMsg") if response.result_msg.is_empty() => {
                        response.result_msg = value;
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(xml_error("no root element"));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_pads_month_and_encodes_key() {
        let api = PublicHolidayApi::new("a+b/c==", DEFAULT_ENDPOINT, Duration::from_secs(5), 100).unwrap();
        let url = api.request_url(2025, 3).unwrap().to_string();
        assert!(url.starts_with(
            "https://apis.data.go.kr/B090041/openapi/service/SpcdeInfoService/getRestDeInfo?"
        ));
        assert!(url.contains("serviceKey=a%2Bb%2Fc%3D%3D"));
        assert!(url.contains("solYear=2025&solMonth=03&numOfRows=100&pageNo=1"));
    }

    #[test]
    fn blank_body_is_unavailable() {
        assert!(matches!(parse_response("   "), Err(SourceError::Unavailable(_))));
        assert!(matches!(parse_response("{not json"), Err(SourceError::Unavailable(_))));
        assert!(matches!(parse_response("[1, 2]"), Err(SourceError::Unavailable(_))));
    }

    #[test]
    fn invalid_locdate_is_unavailable() {
        let xml = "<response><header><resultCode>00</resultCode><resultMsg>OK</resultMsg></header>\
                   <body><items><item><dateKind>01</dateKind><dateName>x</dateName>\
                   <isHoliday>Y</isHoliday><locdate>soon</locdate><seq>1</seq></item></items></body></response>";
        assert!(matches!(parse_response(xml), Err(SourceError::Unavailable(_))));
    }

    #[test]
    fn impossible_calendar_date_is_recoverable() {
        let json = r#"{"response":{"header":{"resultCode":"00","resultMsg":"OK"},
            "body":{"items":{"item":{"dateKind":"01","dateName":"삼일절","isHoliday":"Y","locdate":20250230,"seq":1}}}}}"#;
        let err = parse_response(json).unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
        assert!(err.is_recoverable());
    }
}
