// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The call path shared by every endpoint wrapper.
//!
//! An operation is described by a static [`Endpoint`] and the per-call
//! [`OperationRequest`]. [`ApiClient::execute`] then runs the same sequence
//! for all of them: unstable gate, parameter checks, base URL resolution,
//! header and body preparation, transport, and outcome classification.

use std::sync::Arc;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_ENCODING, CONTENT_ENCODING, CONTENT_TYPE,
    USER_AGENT,
};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::datadog::configuration::Configuration;
use crate::datadog::error::{ConfigurationError, Error, ResponseContent};
use crate::datadog::model::Validate;
use crate::datadog::transport::{
    build_http_client, redact_headers, request_body_preview, ContentEncoding,
};

/// Credentials an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `DD-API-KEY` header.
    ApiKey,
    /// `DD-APPLICATION-KEY` header.
    AppKey,
}

impl AuthScheme {
    fn header_name(&self) -> &'static str {
        match self {
            AuthScheme::ApiKey => "DD-API-KEY",
            AuthScheme::AppKey => "DD-APPLICATION-KEY",
        }
    }
}

pub const API_KEY_AUTH: &[AuthScheme] = &[AuthScheme::ApiKey];
pub const API_AND_APP_KEY_AUTH: &[AuthScheme] = &[AuthScheme::ApiKey, AuthScheme::AppKey];

/// Static description of one API operation.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Identifier used for unstable-operation gating, e.g. `v2.ListIncidentTeams`.
    pub operation_id: &'static str,
    /// Key used for per-operation server overrides, e.g.
    /// `v2.IncidentTeamsApi.ListIncidentTeams`.
    pub server_key: &'static str,
    pub method: Method,
    /// Path template with `{name}` placeholders.
    pub path: &'static str,
    pub accept: &'static str,
    pub auth: &'static [AuthScheme],
    /// Statuses for which the body is decoded into the typed error envelope.
    pub error_statuses: &'static [u16],
    pub unstable: bool,
}

/// Per-call parameters of an operation.
#[derive(Debug, Default)]
pub struct OperationRequest {
    path_params: Vec<(&'static str, String)>,
    query_params: Vec<(&'static str, String)>,
    headers: Vec<(&'static str, String)>,
    body: Option<Vec<u8>>,
}

impl OperationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path_param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    /// Adds a query parameter when `value` is set.
    pub fn query_param<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.query_params.push((name, value.to_string()));
        }
        self
    }

    /// Adds a header when `value` is set.
    pub fn header<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.headers.push((name, value.to_string()));
        }
        self
    }

    pub fn json_body<B: Serialize>(mut self, body: &B) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }
}

/// A decoded response along with its status and headers.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub entity: T,
}

/// A request ready to hand to the transport.
#[derive(Debug)]
struct PreparedRequest {
    url: String,
    query: Vec<(&'static str, String)>,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

/// Raw response of a successful call.
struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

/// Shared client used by every `*Api` struct.
///
/// Cloning is cheap: the configuration and the connection pool are shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Arc<Configuration>,
    client: Client,
}

impl ApiClient {
    /// Builds a client with its own connection pool.
    pub fn new(config: Configuration) -> Result<Self, ConfigurationError> {
        let client = build_http_client(&config)?;
        Ok(Self::with_http_client(config, client))
    }

    /// Builds a client around an existing `reqwest::Client`.
    pub fn with_http_client(config: Configuration, client: Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Runs `endpoint` and decodes the response body into `T`.
    ///
    /// An empty success body decodes to `T::default()`.
    pub async fn execute<T, E>(
        &self,
        endpoint: &Endpoint,
        request: OperationRequest,
    ) -> Result<ApiResponse<T>, Error<E>>
    where
        T: DeserializeOwned + Default,
        E: DeserializeOwned + Validate,
    {
        let raw = self.send(endpoint, request).await?;
        let entity = if raw.body.is_empty() {
            T::default()
        } else {
            serde_json::from_slice(&raw.body).map_err(|err| Error::Decode {
                status: raw.status,
                body: String::from_utf8_lossy(&raw.body).into_owned(),
                message: err.to_string(),
            })?
        };
        Ok(ApiResponse {
            status: raw.status,
            headers: raw.headers,
            entity,
        })
    }

    /// Runs `endpoint`, ignoring the success body.
    pub async fn execute_empty<E>(
        &self,
        endpoint: &Endpoint,
        request: OperationRequest,
    ) -> Result<ApiResponse<()>, Error<E>>
    where
        E: DeserializeOwned + Validate,
    {
        let raw = self.send(endpoint, request).await?;
        Ok(ApiResponse {
            status: raw.status,
            headers: raw.headers,
            entity: (),
        })
    }

    async fn send<E>(
        &self,
        endpoint: &Endpoint,
        request: OperationRequest,
    ) -> Result<RawResponse, Error<E>>
    where
        E: DeserializeOwned + Validate,
    {
        if endpoint.unstable {
            if !self.config.is_unstable_operation_enabled(endpoint.operation_id) {
                return Err(Error::UnstableOperationDisabled(
                    endpoint.operation_id.to_string(),
                ));
            }
            warn!("Using unstable operation '{}'", endpoint.operation_id);
        }

        let prepared = self.prepare(endpoint, request)?;
        let method = &endpoint.method;
        let url = prepared.url.as_str();
        let redacted_headers = redact_headers(&prepared.headers);
        let body_len = prepared.body.as_ref().map_or(0, Vec::len);
        match &prepared.body {
            Some(body) if tracing::enabled!(tracing::Level::TRACE) => {
                let preview = request_body_preview(&prepared.headers, body);
                debug!(
                    operation = endpoint.operation_id,
                    method = %method,
                    url = %url,
                    query = ?prepared.query,
                    headers = ?redacted_headers,
                    body_len = body_len,
                    body = %preview,
                    "Datadog API request"
                );
            }
            _ => {
                debug!(
                    operation = endpoint.operation_id,
                    method = %method,
                    url = %url,
                    query = ?prepared.query,
                    headers = ?redacted_headers,
                    body_len = body_len,
                    "Datadog API request"
                );
            }
        }

        let mut builder = self
            .client
            .request(method.clone(), url)
            .headers(prepared.headers);
        if !prepared.query.is_empty() {
            builder = builder.query(&prepared.query);
        }
        if let Some(body) = prepared.body {
            builder = builder.body(body);
        }
        let response = builder.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        if status.as_u16() >= 300 {
            let content = String::from_utf8_lossy(&body).into_owned();
            debug!(
                operation = endpoint.operation_id,
                status = %status,
                content_length = body.len(),
                body = %content,
                "Datadog API response"
            );
            let entity = if endpoint.error_statuses.contains(&status.as_u16()) {
                serde_json::from_slice::<E>(&body)
                    .ok()
                    .filter(Validate::is_valid)
            } else {
                None
            };
            return Err(Error::Response(ResponseContent {
                status,
                content,
                entity,
            }));
        }

        debug!(
            operation = endpoint.operation_id,
            status = %status,
            content_length = body.len(),
            "Datadog API response"
        );
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Resolves the URL, headers and body of a call without any I/O.
    fn prepare<E>(
        &self,
        endpoint: &Endpoint,
        request: OperationRequest,
    ) -> Result<PreparedRequest, Error<E>> {
        let OperationRequest {
            path_params,
            query_params,
            headers: extra_headers,
            body,
        } = request;

        if let Some((name, _)) = path_params.iter().find(|(_, value)| value.is_empty()) {
            return Err(Error::MissingParameter(*name));
        }

        let base_url = self.config.server_url(endpoint.server_key)?;
        let mut path = endpoint.path.to_string();
        for (name, value) in &path_params {
            path = path.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(endpoint.accept));
        headers.insert(USER_AGENT, header_value(USER_AGENT.as_str(), &self.config.user_agent)?);
        for (name, value) in &self.config.default_headers {
            headers.insert(header_name(name)?, header_value(name, value)?);
        }
        for scheme in endpoint.auth {
            let key = match scheme {
                AuthScheme::ApiKey => &self.config.auth.api_key,
                AuthScheme::AppKey => &self.config.auth.application_key,
            };
            if let Some(key) = key {
                let mut value = header_value(scheme.header_name(), key)?;
                value.set_sensitive(true);
                headers.insert(header_name(scheme.header_name())?, value);
            }
        }
        for (name, value) in &extra_headers {
            headers.insert(header_name(name)?, header_value(name, value)?);
        }

        let body = match body {
            Some(body) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                let encoding = headers
                    .get(CONTENT_ENCODING)
                    .and_then(|value| value.to_str().ok())
                    .and_then(ContentEncoding::from_header);
                match encoding {
                    Some(encoding) => Some(encoding.compress(&body).map_err(|err| {
                        Error::Request(format!("failed to {} encode body: {err}", encoding.as_str()))
                    })?),
                    None => Some(body),
                }
            }
            None => None,
        };

        if !self.config.compress {
            headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));
        }

        Ok(PreparedRequest {
            url: format!("{base_url}{path}"),
            query: query_params,
            headers,
            body,
        })
    }
}

fn header_name(name: &str) -> Result<HeaderName, ConfigurationError> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|err| ConfigurationError::InvalidHeader {
        name: name.to_string(),
        reason: err.to_string(),
    })
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigurationError> {
    HeaderValue::from_str(value).map_err(|err| ConfigurationError::InvalidHeader {
        name: name.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::datadog_v2::model::APIErrorResponse;
    use tracing_test::traced_test;

    const GET_THING: Endpoint = Endpoint {
        operation_id: "v2.GetThing",
        server_key: "v2.ThingsApi.GetThing",
        method: Method::GET,
        path: "/api/v2/things/{thing_id}",
        accept: "application/json",
        auth: API_AND_APP_KEY_AUTH,
        error_statuses: &[403, 404, 429],
        unstable: false,
    };

    const SUBMIT_THING: Endpoint = Endpoint {
        operation_id: "v2.SubmitThing",
        server_key: "v2.ThingsApi.SubmitThing",
        method: Method::POST,
        path: "/api/v2/things",
        accept: "application/json",
        auth: API_KEY_AUTH,
        error_statuses: &[400],
        unstable: false,
    };

    fn client(config: Configuration) -> ApiClient {
        ApiClient::with_http_client(config, Client::new())
    }

    #[test]
    fn test_prepare_substitutes_encoded_path_params() {
        let client = client(Configuration::new());
        let prepared = client
            .prepare::<()>(
                &GET_THING,
                OperationRequest::new().path_param("thing_id", "a b/c"),
            )
            .unwrap();
        assert_eq!(prepared.url, "https://api.datadoghq.com/api/v2/things/a%20b%2Fc");
    }

    #[test]
    fn test_prepare_rejects_empty_path_params() {
        let client = client(Configuration::new());
        let err = client
            .prepare::<()>(&GET_THING, OperationRequest::new().path_param("thing_id", ""))
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameter("thing_id")));
    }

    #[test]
    fn test_prepare_attaches_declared_auth_headers() {
        let config = Configuration::new()
            .with_api_key("api-key")
            .with_application_key("app-key");
        let client = client(config);

        let prepared = client
            .prepare::<()>(&GET_THING, OperationRequest::new().path_param("thing_id", "1"))
            .unwrap();
        assert_eq!(prepared.headers["DD-API-KEY"], "api-key");
        assert_eq!(prepared.headers["DD-APPLICATION-KEY"], "app-key");
        assert!(prepared.headers["DD-API-KEY"].is_sensitive());

        let prepared = client
            .prepare::<()>(&SUBMIT_THING, OperationRequest::new())
            .unwrap();
        assert_eq!(prepared.headers["DD-API-KEY"], "api-key");
        assert!(prepared.headers.get("DD-APPLICATION-KEY").is_none());
    }

    #[test]
    fn test_prepare_sets_standard_headers() {
        let config = Configuration::new()
            .with_compress(false)
            .with_default_header("X-Team", "core");
        let client = client(config);
        let prepared = client
            .prepare::<()>(
                &SUBMIT_THING,
                OperationRequest::new()
                    .json_body(&serde_json::json!({"a": 1}))
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(prepared.headers[ACCEPT], "application/json");
        assert_eq!(prepared.headers[CONTENT_TYPE], "application/json");
        assert_eq!(prepared.headers[ACCEPT_ENCODING], "identity");
        assert_eq!(prepared.headers["x-team"], "core");
        assert!(prepared.headers[USER_AGENT]
            .to_str()
            .unwrap()
            .starts_with("datadog-api-client-rust/"));
        assert_eq!(prepared.body.unwrap(), br#"{"a":1}"#.to_vec());
    }

    #[test]
    fn test_prepare_compresses_body() {
        let client = client(Configuration::new());
        let prepared = client
            .prepare::<()>(
                &SUBMIT_THING,
                OperationRequest::new()
                    .header("Content-Encoding", Some("gzip"))
                    .json_body(&serde_json::json!({"a": 1}))
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(prepared.headers[CONTENT_ENCODING], "gzip");
        let expected = ContentEncoding::Gzip.compress(br#"{"a":1}"#).unwrap();
        assert_eq!(prepared.body.unwrap(), expected);
    }

    #[test]
    fn test_query_params_only_when_set() {
        let request = OperationRequest::new()
            .query_param("page[size]", Some(10))
            .query_param::<String>("filter", None)
            .query_param("include", Some("users"));
        assert_eq!(
            request.query_params,
            vec![
                ("page[size]", "10".to_string()),
                ("include", "users".to_string())
            ]
        );
    }

    #[test]
    fn test_prepare_reports_configuration_errors() {
        let client = client(Configuration::new().with_site("example.com"));
        let err = client
            .prepare::<()>(&SUBMIT_THING, OperationRequest::new())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::InvalidServerVariable { .. })
        ));
    }

    const LIST_TEAMS: Endpoint = Endpoint {
        operation_id: "v2.ListIncidentTeams",
        server_key: "v2.IncidentTeamsApi.ListIncidentTeams",
        method: Method::GET,
        path: "/api/v2/teams",
        accept: "application/json",
        auth: API_AND_APP_KEY_AUTH,
        error_statuses: &[400, 401, 403, 404, 429],
        unstable: true,
    };

    #[tokio::test]
    #[traced_test]
    async fn test_enabled_unstable_operation_warns() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/teams")
            .with_status(200)
            .with_body(r#"{"data": []}"#)
            .create_async()
            .await;

        let mut config = Configuration::new()
            .with_base_url(server.url())
            .with_api_key("super-secret-key");
        config.set_unstable_operation_enabled("v2.ListIncidentTeams", true);
        let response = client(config)
            .execute::<serde_json::Value, APIErrorResponse>(&LIST_TEAMS, OperationRequest::new())
            .await
            .unwrap();

        assert_eq!(response.entity, serde_json::json!({"data": []}));
        assert!(logs_contain("Using unstable operation 'v2.ListIncidentTeams'"));
        assert!(logs_contain("Datadog API request"));
        assert!(!logs_contain("super-secret-key"));
        mock.assert_async().await;
    }
}
