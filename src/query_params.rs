//! Request builder for the dashboard REST endpoints.
//!
//! Optional parameters that are unset are left out of the query string
//! entirely instead of being sent as empty values. Builder methods return
//! `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use purchase_dashboard_sdk::QueryParams;
//! let (path, params) = QueryParams::new("/api/customers")
//!     .param_opt("sortBy", Some("desc"))
//!     .param_opt("name", None::<&str>)
//!     .build();
//! assert_eq!(path, "/api/customers");
//! assert_eq!(params, vec![("sortBy".to_string(), "desc".to_string())]);
//! ```

/// Builds an endpoint path plus its query parameters.
#[derive(Debug, Clone)]
pub struct QueryParams {
    path: String,
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Create a builder targeting the given endpoint path.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            params: Vec::new(),
        }
    }

    /// Add a parameter unconditionally.
    pub fn param(&mut self, name: &str, value: &str) -> &mut Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a parameter only when a value is present.
    pub fn param_opt<V: AsRef<str>>(&mut self, name: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.param(name, v.as_ref());
        }
        self
    }

    /// Encoded query string without the leading `?`. Empty when no params are set.
    pub fn query_string(&self) -> String {
        serde_urlencoded::to_string(&self.params).unwrap_or_default()
    }

    /// Path followed by `?query` when at least one parameter is set.
    pub fn to_url_path(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query)
        }
    }

    /// Returns `(path, params)` ready for the transport layer.
    pub fn build(&self) -> (String, Vec<(String, String)>) {
        (self.path.clone(), self.params.clone())
    }
}
