//! Absolute URL composition for versioned API paths.

use crate::error::{Error, ErrorKind, Result};

/// Builds absolute endpoint URLs from the API base and a relative path.
///
/// Every composed URL ends in a slash before the query string, as the AWX
/// server otherwise answers with a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlComposer {
    base: String,
    version: String,
}

impl UrlComposer {
    /// Create a composer for `base`, which must be an absolute URL.
    ///
    /// The base is normalized to end with a slash.
    pub fn new(base: &str, version: impl Into<String>) -> Result<Self> {
        if base.is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "The URL is mandatory".to_string(),
            )));
        }
        url::Url::parse(base).map_err(|e| {
            Error::with_source(
                ErrorKind::Config(format!("The URL '{}' isn't valid: {}", base, e)),
                e,
            )
        })?;

        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(Self {
            base,
            version: version.into(),
        })
    }

    /// The slash-terminated base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The API version segment.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Compose the absolute URL for `path` and the ordered `query` pairs.
    ///
    /// An empty path yields the version root. Leading and trailing slashes
    /// on `path` are dropped, so `"jobs"` and `"/jobs/"` compose the same URL.
    pub fn url(&self, path: &str, query: &[(String, String)]) -> Result<String> {
        let path = path.trim_matches('/');

        let mut url = String::with_capacity(self.base.len() + self.version.len() + path.len() + 2);
        url.push_str(&self.base);
        url.push_str(&self.version);
        if !path.is_empty() {
            url.push('/');
            url.push_str(path);
        }
        url.push('/');

        if !query.is_empty() {
            let encoded = serde_urlencoded::to_string(query).map_err(|e| {
                Error::with_source(ErrorKind::Encode(e.to_string()), e)
            })?;
            url.push('?');
            url.push_str(&encoded);
        }

        Ok(url)
    }
}
