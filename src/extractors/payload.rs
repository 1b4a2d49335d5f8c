//! Extract a request body as a JSON object, from either a JSON or an XML payload.

use crate::aliases::canonicalize_keys;
use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BodyFormat {
    Json,
    Xml,
    Unsupported,
}

fn body_format(content_type: Option<&str>) -> BodyFormat {
    match content_type.map(|ct| ct.to_ascii_lowercase()) {
        None => BodyFormat::Json,
        Some(ct) if ct.contains("xml") => BodyFormat::Xml,
        Some(ct) if ct.contains("json") => BodyFormat::Json,
        Some(_) => BodyFormat::Unsupported,
    }
}

/// Request body as an object with canonical keys.
///
/// An empty body, or a body of an unsupported media type, is an empty object.
/// XML bodies are a single root element whose children are text fields; every value arrives as a string.
#[derive(Clone, Debug, Default)]
pub struct Payload(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let format = body_format(
            req.headers()
                .get(CONTENT_TYPE)
                .and_then(|v: &axum::http::HeaderValue| v.to_str().ok()),
        );
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        let mut map = parse_body(format, &bytes).map_err(IntoResponse::into_response)?;
        canonicalize_keys(&mut map);
        Ok(Payload(map))
    }
}

fn parse_body(format: BodyFormat, bytes: &[u8]) -> Result<Map<String, Value>, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) || format == BodyFormat::Unsupported {
        return Ok(Map::new());
    }
    match format {
        BodyFormat::Json => match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(m)) => Ok(m),
            Ok(_) => Err(AppError::BadRequest("request body must be a JSON object".into())),
            Err(e) => Err(AppError::BadRequest(format!("malformed JSON body: {}", e))),
        },
        BodyFormat::Xml => {
            let text = std::str::from_utf8(bytes)
                .map_err(|_| AppError::BadRequest("XML body must be UTF-8".into()))?;
            let fields: HashMap<String, String> = quick_xml::de::from_str(text)
                .map_err(|e| AppError::BadRequest(format!("malformed XML body: {}", e)))?;
            Ok(fields.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
        }
        BodyFormat::Unsupported => Ok(Map::new()),
    }
}
