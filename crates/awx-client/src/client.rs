//! HTTP transport with AWX headers, status checking and redacted debug output.

use std::fmt;

use bytes::Bytes;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::endpoint::UrlComposer;
use crate::error::{Error, ErrorKind, Result};
use crate::redact;
use crate::request::{Authorization, RequestBuilder, RequestMethod};
use crate::tls;

const JSON: &str = "application/json";

/// Receiver of the debug-mode request/response dump.
///
/// Every line handed to a sink has already been redacted.
pub trait DebugSink: fmt::Debug + Send + Sync {
    /// Record one line of debug output.
    fn log(&self, line: &str);
}

/// Default sink: emits `tracing` debug events under the `awx_api::wire` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DebugSink for TracingSink {
    fn log(&self, line: &str) {
        debug!(target: "awx_api::wire", "{}", line);
    }
}

/// HTTP client for the AWX API.
///
/// Paths handed to [`get`](Self::get) and [`post`](Self::post) are relative
/// to the versioned API root.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    urls: UrlComposer,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// Fails with a configuration error for a bad URL or proxy, and with a
    /// certificate error when the CA material holds no usable certificate.
    pub fn new(base_url: &str, config: ClientConfig) -> Result<Self> {
        let urls = UrlComposer::new(base_url, crate::DEFAULT_API_VERSION)?;
        let proxy = config.proxy.as_deref().map(parse_proxy).transpose()?;
        let roots = tls::load_roots(&config)?;

        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .gzip(true)
            .deflate(true);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy) = proxy {
            builder = builder.proxy(proxy);
        }

        if config.insecure {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Supplied CAs replace the built-in roots.
        let pinned = !roots.is_empty();
        if pinned {
            builder = builder.tls_certs_only(roots);
        }

        let inner = builder.build().map_err(|e| {
            let kind = if pinned {
                ErrorKind::Certificate(format!("The CA certificates can't be used: {}", e))
            } else {
                ErrorKind::Config(e.to_string())
            };
            Error::with_source(kind, e)
        })?;

        Ok(Self {
            inner,
            urls,
            config,
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The URL composer for this client's API root.
    pub fn urls(&self) -> &UrlComposer {
        &self.urls
    }

    /// Create a GET request builder.
    pub fn get(&self, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, path)
    }

    /// Create a POST request builder.
    pub fn post(&self, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, path)
    }

    /// Write a line to the debug sink when debug mode is on.
    pub fn debug_log(&self, line: impl fmt::Display) {
        if self.config.debug {
            self.config.debug_sink.log(&line.to_string());
        }
    }

    /// Execute a request and return the raw response body.
    ///
    /// Any status above 202 is an error, redirects included.
    #[instrument(skip(self, request), fields(method = request.method.as_str(), path = %request.path))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Bytes> {
        let url = self.urls.url(&request.path, &request.query_params)?;

        let mut req = self
            .inner
            .request(request.method.to_reqwest(), &url)
            .header(USER_AGENT, self.config.user_agent.as_str())
            .header(ACCEPT, JSON);

        if request.method == RequestMethod::Post {
            req = req.header(CONTENT_TYPE, JSON);
        }

        req = match request.authorization {
            Some(Authorization::Token(ref token)) => {
                req.header(AUTHORIZATION, format!("Token {}", token))
            }
            Some(Authorization::Bearer(ref token)) => req.bearer_auth(token),
            Some(Authorization::Basic {
                ref username,
                ref password,
            }) => req.basic_auth(username, Some(password)),
            None => req,
        };

        if let Some(ref body) = request.body {
            req = req.body(body.clone());
        }

        let req = req.build()?;

        debug!(method = request.method.as_str(), url = %url, "Sending request");

        if self.config.debug {
            self.debug_log(format_args!("Sending {} request to '{}'", request.method.as_str(), url));
            if let Some(ref body) = request.body {
                self.debug_log(format_args!(
                    "Request body:\n{}",
                    redact::pretty_json_bytes(body)
                ));
            }
            self.debug_log(format_args!("Request headers:\n{}", format_headers(req.headers())));
        }

        let response = self.inner.execute(req).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        if self.config.debug {
            self.debug_log(format_args!("Response status: '{}'", status));
            self.debug_log(format_args!(
                "Response body:\n{}",
                redact::pretty_json_bytes(&body)
            ));
            self.debug_log(format_args!("Response headers:\n{}", format_headers(&headers)));
        }

        if status.as_u16() > 202 {
            return Err(Error::new(ErrorKind::Server {
                status: status.as_u16(),
                message: status.to_string(),
            }));
        }

        debug!(status = status.as_u16(), length = body.len(), "Response received");

        Ok(body)
    }

    /// Execute a request and deserialize the JSON response.
    pub async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let body = self.execute(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn parse_proxy(proxy: &str) -> Result<reqwest::Proxy> {
    let invalid = |detail: String| {
        ErrorKind::Config(format!("The proxy URL '{}' isn't valid: {}", proxy, detail))
    };

    url::Url::parse(proxy).map_err(|e| Error::with_source(invalid(e.to_string()), e))?;
    reqwest::Proxy::all(proxy).map_err(|e| Error::with_source(invalid(e.to_string()), e))
}

fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            let value = value.to_str().unwrap_or("<binary>");
            format!("  {}: {}", name, redact::header(name.as_str(), value))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Default)]
    struct RecordingSink {
        lines: Mutex<Vec<String>>,
    }

    impl DebugSink for RecordingSink {
        fn log(&self, line: &str) {
            self.lines.lock().unwrap().push(line.to_string());
        }
    }

    impl RecordingSink {
        fn output(&self) -> String {
            self.lines.lock().unwrap().join("\n")
        }
    }

    fn api_base(server: &MockServer) -> String {
        format!("{}/api/", server.uri())
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new("https://awx.example.com/api", ClientConfig::default()).unwrap();
        assert_eq!(client.urls().base(), "https://awx.example.com/api/");
        assert!(!client.config().debug);
    }

    #[tokio::test]
    async fn test_invalid_proxy_is_config_error() {
        let config = ClientConfig::builder().with_proxy("::not a proxy::").build();
        let err = HttpClient::new("https://awx.example.com/api", config).unwrap_err();
        assert!(err.is_config_error());
    }

    #[tokio::test]
    async fn test_invalid_proxy_is_reported_before_certificates() {
        let config = ClientConfig::builder()
            .with_proxy("::not a proxy::")
            .with_ca_certificates("not pem")
            .build();
        let err = HttpClient::new("https://awx.example.com/api", config).unwrap_err();
        assert!(err.is_config_error());
    }

    #[tokio::test]
    async fn test_client_with_self_signed_ca() {
        let config = ClientConfig::builder()
            .with_ca_certificates(tls::SELF_SIGNED_PEM)
            .build();
        assert!(HttpClient::new("https://awx.example.com/api", config).is_ok());
    }

    #[tokio::test]
    async fn test_undecodable_certificate_is_certificate_error() {
        let config = ClientConfig::builder()
            .with_ca_certificates(
                "-----BEGIN CERTIFICATE-----\nAAAAAAAA\n-----END CERTIFICATE-----\n",
            )
            .build();
        let err = HttpClient::new("https://awx.example.com/api", config).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Certificate(_)));
    }

    #[tokio::test]
    async fn test_get_sends_standard_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/ping/"))
            .and(header("Accept", "application/json"))
            .and(header("Authorization", "Token legacy-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "version": "21.0.0"
            })))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&api_base(&mock_server), ClientConfig::default()).unwrap();

        let response: serde_json::Value = client
            .send_json(client.get("ping").auth(Authorization::token("legacy-token")))
            .await
            .unwrap();
        assert_eq!(response["version"], "21.0.0");

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let sent = &requests[0].headers;
        assert!(sent.get("content-type").is_none());
        assert!(sent
            .get("user-agent")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("awx-api/"));
    }

    #[tokio::test]
    async fn test_post_sends_json_content_type() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/job_templates/7/launch/"))
            .and(header("Content-Type", "application/json"))
            .and(header("Accept", "application/json"))
            .and(header("Authorization", "Bearer pat"))
            .and(body_json(serde_json::json!({"limit": "web"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "job": 42
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&api_base(&mock_server), ClientConfig::default()).unwrap();

        let request = client
            .post("job_templates/7/launch")
            .auth(Authorization::bearer("pat"))
            .json(&serde_json::json!({"limit": "web"}))
            .unwrap();
        let response: serde_json::Value = client.send_json(request).await.unwrap();

        assert_eq!(response["job"], 42);
    }

    #[tokio::test]
    async fn test_query_parameters_are_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/projects/"))
            .and(query_param("name", "Demo Project"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 0, "results": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&api_base(&mock_server), ClientConfig::default()).unwrap();
        client
            .execute(client.get("projects").query("name", "Demo Project"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_status_above_202_is_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/jobs/1/"))
            .respond_with(ResponseTemplate::new(203).set_body_string("not json"))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/jobs/2/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "detail": "Not found."
            })))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&api_base(&mock_server), ClientConfig::default()).unwrap();

        let err = client
            .send_json::<serde_json::Value>(client.get("jobs/1"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(203));

        let err = client
            .send_json::<serde_json::Value>(client.get("jobs/2"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("404 Not Found"));
    }

    #[tokio::test]
    async fn test_redirect_is_not_followed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/users/"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("Location", "/api/v2/other/"),
            )
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&api_base(&mock_server), ClientConfig::default()).unwrap();
        let err = client.execute(client.get("users")).await.unwrap_err();

        assert_eq!(err.status(), Some(301));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"count\": "))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&api_base(&mock_server), ClientConfig::default()).unwrap();
        let err = client
            .send_json::<serde_json::Value>(client.get("organizations"))
            .await
            .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::Decode(_)));
    }

    #[tokio::test]
    async fn test_debug_output_is_redacted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/authtoken/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "abc", "password": "echoed-secret"
            })))
            .mount(&mock_server)
            .await;

        let sink = Arc::new(RecordingSink::default());
        let config = ClientConfig::builder()
            .with_debug(true)
            .with_debug_sink(sink.clone())
            .build();
        let client = HttpClient::new(&api_base(&mock_server), config).unwrap();

        let request = client
            .post("authtoken")
            .auth(Authorization::basic("admin", "hunter2"))
            .json(&serde_json::json!({"username": "admin", "password": "hunter2"}))
            .unwrap();
        client.execute(request).await.unwrap();

        let output = sink.output();
        assert!(output.contains("Sending POST request to"));
        assert!(output.contains("\"username\": \"admin\""));
        assert!(output.contains("authorization: REDACTED"));
        assert!(output.contains("Response status: '200 OK'"));
        assert!(!output.contains("hunter2"));
        assert!(!output.contains("echoed-secret"));
    }

    #[tokio::test]
    async fn test_debug_off_writes_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let sink = Arc::new(RecordingSink::default());
        let config = ClientConfig::builder().with_debug_sink(sink.clone()).build();
        let client = HttpClient::new(&api_base(&mock_server), config).unwrap();

        client.execute(client.get("")).await.unwrap();
        client.debug_log("never shown");

        assert!(sink.output().is_empty());
    }
}
