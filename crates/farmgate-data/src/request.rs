//! HTTP request construction.

use crate::FetchError;
use serde::Serialize;
use std::collections::HashMap;

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Convert to the HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully constructed request, ready for a [`Transport`](crate::Transport).
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL, query string included.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body, if any.
    pub body: Option<Vec<u8>>,
}

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Append a query-string parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Finalize into a [`Request`], encoding query parameters into the URL.
    pub fn build(self) -> Request {
        let mut url = self.url;
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&url_encode(key));
            url.push('=');
            url.push_str(&url_encode(value));
        }
        Request {
            method: self.method,
            url,
            headers: self.headers,
            body: self.body,
        }
    }
}

/// Percent-encode a query-string component.
fn url_encode(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{:02X}", byte));
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_plain_url() {
        let request = RequestBuilder::new(Method::Get, "https://api.example.com/products").build();
        assert_eq!(request.url, "https://api.example.com/products");
        assert_eq!(request.method, Method::Get);
    }

    #[test]
    fn test_build_with_query() {
        let request = RequestBuilder::new(Method::Get, "https://api.example.com/products")
            .query("active", "true")
            .query("page", "2")
            .build();
        assert_eq!(
            request.url,
            "https://api.example.com/products?active=true&page=2"
        );
    }

    #[test]
    fn test_query_values_are_encoded() {
        let request = RequestBuilder::new(Method::Get, "https://api.example.com/products")
            .query("q", "fresh mango")
            .build();
        assert_eq!(
            request.url,
            "https://api.example.com/products?q=fresh%20mango"
        );
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let request = RequestBuilder::new(Method::Post, "https://api.example.com/orders")
            .json(&serde_json::json!({"notes": "ring the bell"}))
            .unwrap()
            .build();
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert!(request.body.is_some());
    }

    #[test]
    fn test_bearer_auth_header() {
        let request = RequestBuilder::new(Method::Get, "https://api.example.com/auth/me")
            .bearer_auth("token-123")
            .build();
        assert_eq!(
            request.headers.get("Authorization").map(String::as_str),
            Some("Bearer token-123")
        );
    }
}
