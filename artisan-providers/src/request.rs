use serde::{Deserialize, Serialize};

/// Query parameters that carry credentials and must never be printed.
const SENSITIVE_QUERY_KEYS: &[&str] = &["key", "api_key"];

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl std::fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted_headers: Vec<(String, String)> = self
            .headers
            .iter()
            .map(|(k, v)| {
                let sensitive = k.eq_ignore_ascii_case("authorization")
                    || k.to_ascii_lowercase().contains("api-key");
                let v = if sensitive { "[REDACTED]".into() } else { v.clone() };
                (k.clone(), v)
            })
            .collect();

        let body_summary = match &self.body {
            Body::Empty => "Empty".to_string(),
            Body::Json(s) => format!("Json(len={})", s.len()),
        };

        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &redact_url(&self.url))
            .field("headers", &redacted_headers)
            .field("body", &body_summary)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Body {
    Empty,
    Json(String),
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

fn redact_url(raw: &str) -> String {
    let Ok(mut parsed) = url::Url::parse(raw) else {
        return "[unparseable url]".into();
    };
    if parsed.query().is_none() {
        return parsed.to_string();
    }

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| {
            let v = if SENSITIVE_QUERY_KEYS.contains(&k.as_ref()) {
                "[REDACTED]".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let req = HttpRequest {
            method: "GET".into(),
            url: "https://example.com".into(),
            headers: vec![("Content-Type".into(), "application/json".into())],
            body: Body::Empty,
        };
        assert_eq!(req.header("content-type"), Some("application/json"));
    }

    #[test]
    fn debug_redacts_key_query_param() {
        let req = HttpRequest {
            method: "POST".into(),
            url: "https://example.com/models/m:generateContent?key=AIza-secret-1&alt=json".into(),
            headers: vec![("X-Goog-Api-Key".into(), "AIza-secret-2".into())],
            body: Body::Json("{}".into()),
        };

        let s = format!("{req:?}");
        assert!(!s.contains("AIza-secret-1"));
        assert!(!s.contains("AIza-secret-2"));
        assert!(s.contains("alt=json"));
        assert!(s.contains("REDACTED"));
        assert!(s.contains("Json(len=2)"));
    }

    #[test]
    fn debug_handles_unparseable_url() {
        let req = HttpRequest {
            method: "GET".into(),
            url: "not a url?key=secret".into(),
            headers: vec![],
            body: Body::Empty,
        };
        let s = format!("{req:?}");
        assert!(!s.contains("secret"));
    }
}
