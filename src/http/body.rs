// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request body encoding

use bytes::Bytes;
use serde::Serialize;

use super::CONTENT_TYPE_JSON;
use crate::error::{Error, Result};

/// Encode a request payload according to the declared content type
///
/// Returns `Ok(None)` when there is no payload. Every content type,
/// including unknown or empty ones, is currently encoded as JSON.
pub fn encode_body<T>(content_type: &str, body: Option<&T>) -> Result<Option<Bytes>>
where
    T: Serialize + ?Sized,
{
    let Some(body) = body else {
        return Ok(None);
    };

    let encoded = match media_type(content_type).as_str() {
        CONTENT_TYPE_JSON => serde_json::to_vec(body),
        // TODO: form-urlencoded bodies once a serializer for them is pulled in
        _ => serde_json::to_vec(body),
    }
    .map_err(|source| Error::Encoding {
        content_type: content_type.to_string(),
        source,
    })?;

    Ok(Some(Bytes::from(encoded)))
}

/// Media type without parameters, lowercased ("Application/JSON; charset=utf-8" -> "application/json")
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct Payload {
        #[serde(rename = "A")]
        a: String,
        #[serde(rename = "B")]
        b: String,
    }

    fn payload() -> Payload {
        Payload {
            a: "foo".to_string(),
            b: "bar".to_string(),
        }
    }

    #[test]
    fn test_absent_body() {
        let body = encode_body::<Payload>(CONTENT_TYPE_JSON, None).unwrap();
        assert!(body.is_none());
    }

    #[test]
    fn test_json_body() {
        let body = encode_body(CONTENT_TYPE_JSON, Some(&payload())).unwrap();
        assert_eq!(body.unwrap(), Bytes::from_static(br#"{"A":"foo","B":"bar"}"#));
    }

    #[test]
    fn test_unknown_and_empty_content_type_use_json() {
        for content_type in ["", "text/plain", "Application/JSON; charset=utf-8"] {
            let body = encode_body(content_type, Some(&payload())).unwrap();
            assert_eq!(body.unwrap(), Bytes::from_static(br#"{"A":"foo","B":"bar"}"#));
        }
    }

    #[test]
    fn test_unserializable_body() {
        let mut body = HashMap::new();
        body.insert((1, 2), "tuple keys are not JSON object keys");

        let err = encode_body(CONTENT_TYPE_JSON, Some(&body)).unwrap_err();
        assert!(matches!(err, Error::Encoding { ref content_type, .. } if content_type == CONTENT_TYPE_JSON));
    }
}
