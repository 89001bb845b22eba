//! Minimal HTTP request/response surface consumed by the console.
//!
//! These types model the narrow interface the console needs from a host
//! framework: ordered parameter maps on the request side, a content-type
//! check and body append on the response side. A host integration adapts its
//! own request/response types into these at the hook boundary.

use indexmap::IndexMap;

/// An ordered string-keyed parameter map.
pub type Params = IndexMap<String, String>;

/// The request surface visible to the console.
///
/// Exposes four parameter sources — query, data (body), cookies and server
/// metadata — each preserving insertion order for display.
#[derive(Debug, Clone, Default)]
pub struct Request {
    query: Params,
    data: Params,
    cookies: Params,
    server: Params,
}

impl Request {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a body/data parameter.
    pub fn data_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Add a cookie.
    pub fn cookie(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(key.into(), value.into());
        self
    }

    /// Add a server metadata entry.
    pub fn server_param_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.server.insert(key.into(), value.into());
        self
    }

    /// Query parameters.
    pub fn query_params(&self) -> &Params {
        &self.query
    }

    /// Body/data parameters.
    pub fn data_params(&self) -> &Params {
        &self.data
    }

    /// Cookies.
    pub fn cookies(&self) -> &Params {
        &self.cookies
    }

    /// Server metadata.
    pub fn server_params(&self) -> &Params {
        &self.server
    }

    /// Raw lookup into the server metadata.
    pub fn server_param(&self, key: &str) -> Option<&str> {
        self.server.get(key).map(String::as_str)
    }
}

/// The response surface visible to the console.
#[derive(Debug, Clone)]
pub struct Response {
    content_type: String,
    body: String,
}

impl Response {
    /// Create a response with the given content type and an empty body.
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            body: String::new(),
        }
    }

    /// Create an HTML response.
    pub fn html() -> Self {
        Self::new("text/html; charset=utf-8")
    }

    /// Whether the response will be sent as HTML.
    pub fn is_html(&self) -> bool {
        self.content_type
            .trim_start()
            .to_ascii_lowercase()
            .starts_with("text/html")
    }

    /// The response content type.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// The response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Replace the response body.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Append a fragment to the response body.
    pub fn append_body(&mut self, fragment: &str) {
        self.body.push_str(fragment);
    }

    /// Consume the response, returning its body.
    pub fn into_body(self) -> String {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_params_preserve_order() {
        let request = Request::new()
            .query_param("b", "2")
            .query_param("a", "1")
            .cookie("session", "xyz");

        let keys: Vec<&str> = request.query_params().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(request.cookies().get("session").map(String::as_str), Some("xyz"));
    }

    #[test]
    fn test_server_param_lookup() {
        let request = Request::new().server_param_entry("REQUEST_TIME_FLOAT", "1722772800.5");
        assert_eq!(request.server_param("REQUEST_TIME_FLOAT"), Some("1722772800.5"));
        assert_eq!(request.server_param("MISSING"), None);
    }

    #[test]
    fn test_html_detection() {
        assert!(Response::html().is_html());
        assert!(Response::new("text/html").is_html());
        assert!(Response::new("TEXT/HTML; charset=utf-8").is_html());
        assert!(!Response::new("application/json").is_html());
        assert!(!Response::new("text/plain").is_html());
    }

    #[test]
    fn test_append_body() {
        let mut response = Response::html();
        response.set_body("<h1>Page</h1>");
        response.append_body("<footer>end</footer>");
        assert_eq!(response.body(), "<h1>Page</h1><footer>end</footer>");
    }
}
