// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Header resolution
//!
//! Precedence per field name: request headers, then build headers, then the
//! computed User-Agent default. `HeaderMap` names are case-insensitive.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use super::DEFAULT_USER_AGENT;

/// Merge build-level and request-level headers into the set to send
///
/// Each field collapses to a single value. Within one map, a field with
/// several values keeps its last value; across maps, the request value
/// replaces the build value. When no non-empty User-Agent survives the
/// merge, `user_agent` is applied, or [`DEFAULT_USER_AGENT`] if that is
/// empty too.
pub fn merge_headers(
    build: &HeaderMap,
    request: Option<&HeaderMap>,
    user_agent: &str,
) -> HeaderMap {
    let mut merged = HeaderMap::with_capacity(build.len() + 1);

    for (name, value) in build {
        merged.insert(name.clone(), value.clone());
    }

    if let Some(request) = request {
        for (name, value) in request {
            merged.insert(name.clone(), value.clone());
        }
    }

    let has_user_agent = merged
        .get(USER_AGENT)
        .map(|v| !v.is_empty())
        .unwrap_or(false);

    if !has_user_agent {
        merged.insert(USER_AGENT, user_agent_value(user_agent));
    }

    merged
}

fn user_agent_value(user_agent: &str) -> HeaderValue {
    if user_agent.is_empty() {
        return HeaderValue::from_static(DEFAULT_USER_AGENT);
    }
    match HeaderValue::from_str(user_agent) {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                user_agent,
                "Configured user agent is not a valid header value, using default"
            );
            HeaderValue::from_static(DEFAULT_USER_AGENT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, AUTHORIZATION, CONTENT_TYPE};

    fn map(pairs: &[(&str, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for &(name, value) in pairs {
            let name = HeaderName::from_bytes(name.as_bytes()).unwrap();
            headers.append(name, HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn test_empty_inputs_yield_default_user_agent() {
        let merged = merge_headers(&HeaderMap::new(), None, "");

        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get(USER_AGENT).unwrap(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_builder_user_agent_applied() {
        let merged = merge_headers(&HeaderMap::new(), None, "my-service/1.0");
        assert_eq!(merged.get(USER_AGENT).unwrap(), "my-service/1.0");
    }

    #[test]
    fn test_request_overrides_build() {
        let build = map(&[("content-type", "application/json"), ("authorization", "Bearer a")]);
        let request = map(&[("Authorization", "Bearer b")]);

        let merged = merge_headers(&build, Some(&request), "");

        assert_eq!(merged.get(AUTHORIZATION).unwrap(), "Bearer b");
        assert_eq!(merged.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(merged.get_all(AUTHORIZATION).iter().count(), 1);
    }

    #[test]
    fn test_request_user_agent_wins_over_builder() {
        let build = map(&[("Content-Type", "application/json")]);
        let request = map(&[("User-Agent", "custom")]);

        let merged = merge_headers(&build, Some(&request), "configured");

        assert_eq!(merged.get(USER_AGENT).unwrap(), "custom");
        assert_eq!(merged.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_build_user_agent_wins_over_builder_setting() {
        let build = map(&[("user-agent", "from-headers")]);
        let merged = merge_headers(&build, None, "configured");
        assert_eq!(merged.get(USER_AGENT).unwrap(), "from-headers");
    }

    #[test]
    fn test_empty_user_agent_header_replaced() {
        let request = map(&[("user-agent", "")]);
        let merged = merge_headers(&HeaderMap::new(), Some(&request), "configured");
        assert_eq!(merged.get(USER_AGENT).unwrap(), "configured");
    }

    #[test]
    fn test_multi_value_collapses_to_last() {
        let build = map(&[("accept", "text/html"), ("accept", "application/json")]);
        let merged = merge_headers(&build, None, "");

        let values: Vec<_> = merged.get_all("accept").iter().collect();
        assert_eq!(values, vec!["application/json"]);
    }
}
