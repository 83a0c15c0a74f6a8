// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Client configuration.
//!
//! A [`Configuration`] is assembled once (from defaults, the process
//! environment, or both) and handed to an
//! [`ApiClient`](crate::datadog::ApiClient), which keeps it behind an `Arc`.
//! Nothing mutates it afterwards, so concurrent calls only ever read it.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::time::Duration;

use tracing::warn;

use crate::datadog::error::ConfigurationError;

/// Datadog API key.
const ENV_API_KEY: &str = "DD_API_KEY";
/// Datadog application key.
const ENV_APP_KEY: &str = "DD_APP_KEY";
/// Alternate name for the application key, used by the agent tooling.
const ENV_APPLICATION_KEY: &str = "DD_APPLICATION_KEY";
/// Datadog site (e.g. `datadoghq.eu`), mapped to the `site` server variable.
const ENV_SITE: &str = "DD_SITE";
/// HTTPS proxy dedicated to Datadog traffic.
const ENV_PROXY_HTTPS: &str = "DD_PROXY_HTTPS";
/// Conventional HTTPS proxy variable, used when `DD_PROXY_HTTPS` is unset.
const ENV_HTTPS_PROXY: &str = "HTTPS_PROXY";

/// Operations that must be enabled explicitly before they can be called.
const UNSTABLE_OPERATIONS: &[&str] = &[
    "v2.CreateIncidentTeam",
    "v2.DeleteIncidentTeam",
    "v2.GetIncidentTeam",
    "v2.ListIncidentTeams",
    "v2.UpdateIncidentTeam",
];

/// A templated server URL variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerVariable {
    pub description: String,
    pub default_value: String,
    /// Allowed values. Empty means any value is accepted.
    pub enum_values: Vec<String>,
}

impl ServerVariable {
    pub fn new(description: &str, default_value: &str, enum_values: &[&str]) -> Self {
        Self {
            description: description.to_string(),
            default_value: default_value.to_string(),
            enum_values: enum_values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// A server URL template such as `https://{subdomain}.{site}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfiguration {
    pub url: String,
    pub description: String,
    pub variables: HashMap<String, ServerVariable>,
}

impl ServerConfiguration {
    pub fn new<'a>(
        url: &str,
        description: &str,
        variables: impl IntoIterator<Item = (&'a str, ServerVariable)>,
    ) -> Self {
        Self {
            url: url.to_string(),
            description: description.to_string(),
            variables: variables
                .into_iter()
                .map(|(name, variable)| (name.to_string(), variable))
                .collect(),
        }
    }

    /// Expands the template, substituting defaults for unset variables.
    pub fn url(&self, variables: &HashMap<String, String>) -> Result<String, ConfigurationError> {
        let mut url = self.url.clone();
        for (name, variable) in &self.variables {
            let value = match variables.get(name) {
                Some(value) => {
                    if !variable.enum_values.is_empty() && !variable.enum_values.contains(value) {
                        return Err(ConfigurationError::InvalidServerVariable {
                            name: name.clone(),
                            value: value.clone(),
                            allowed: variable.enum_values.clone(),
                        });
                    }
                    value
                }
                None => &variable.default_value,
            };
            url = url.replace(&format!("{{{name}}}"), value);
        }
        Ok(url)
    }
}

/// Picks server `index` from `servers` and expands it.
pub fn resolve_server_url(
    servers: &[ServerConfiguration],
    index: usize,
    variables: &HashMap<String, String>,
) -> Result<String, ConfigurationError> {
    let server = servers
        .get(index)
        .ok_or(ConfigurationError::ServerIndexOutOfRange {
            index,
            max: servers.len() as isize - 1,
        })?;
    server.url(variables)
}

/// The servers every operation targets unless overridden.
pub fn default_servers() -> Vec<ServerConfiguration> {
    vec![
        ServerConfiguration::new(
            "https://{subdomain}.{site}",
            "No description provided",
            [
                (
                    "site",
                    ServerVariable::new(
                        "The regional site for Datadog customers.",
                        "datadoghq.com",
                        &[
                            "datadoghq.com",
                            "us3.datadoghq.com",
                            "us5.datadoghq.com",
                            "ap1.datadoghq.com",
                            "datadoghq.eu",
                            "ddog-gov.com",
                        ],
                    ),
                ),
                (
                    "subdomain",
                    ServerVariable::new("The subdomain where the API is deployed.", "api", &[]),
                ),
            ],
        ),
        ServerConfiguration::new(
            "{protocol}://{name}",
            "No description provided",
            [
                (
                    "name",
                    ServerVariable::new("Full site DNS name.", "api.datadoghq.com", &[]),
                ),
                (
                    "protocol",
                    ServerVariable::new("The protocol for accessing the API.", "https", &[]),
                ),
            ],
        ),
        ServerConfiguration::new(
            "https://{subdomain}.{site}",
            "No description provided",
            [
                (
                    "site",
                    ServerVariable::new("Any Datadog deployment.", "datadoghq.com", &[]),
                ),
                (
                    "subdomain",
                    ServerVariable::new("The subdomain where the API is deployed.", "api", &[]),
                ),
            ],
        ),
    ]
}

/// Credentials attached to requests, according to the schemes each
/// operation declares.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Auth {
    /// Sent as `DD-API-KEY`.
    pub api_key: Option<String>,
    /// Sent as `DD-APPLICATION-KEY`.
    pub application_key: Option<String>,
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("Auth")
            .field("api_key", &redact(&self.api_key))
            .field("application_key", &redact(&self.application_key))
            .finish()
    }
}

/// Settings shared by every API call made through one client.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub user_agent: String,
    pub auth: Auth,
    /// When `false`, responses are requested uncompressed (`Accept-Encoding: identity`).
    pub compress: bool,
    /// Headers added to every request.
    pub default_headers: HashMap<String, String>,
    /// Whole-request timeout applied by the HTTP client.
    pub timeout: Option<Duration>,
    pub proxy_url: Option<String>,
    pub servers: Vec<ServerConfiguration>,
    /// Server lists replacing `servers` for specific operations, keyed like
    /// `v2.MetricsApi.SubmitMetrics`.
    pub operation_servers: HashMap<String, Vec<ServerConfiguration>>,
    pub server_index: usize,
    pub server_variables: HashMap<String, String>,
    pub operation_server_indices: HashMap<String, usize>,
    pub operation_server_variables: HashMap<String, HashMap<String, String>>,
    unstable_operations: HashMap<String, bool>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self {
            user_agent: default_user_agent(),
            auth: Auth::default(),
            compress: true,
            default_headers: HashMap::new(),
            timeout: None,
            proxy_url: None,
            servers: default_servers(),
            operation_servers: HashMap::new(),
            server_index: 0,
            server_variables: HashMap::new(),
            operation_server_indices: HashMap::new(),
            operation_server_variables: HashMap::new(),
            unstable_operations: UNSTABLE_OPERATIONS
                .iter()
                .map(|operation| (operation.to_string(), false))
                .collect(),
        }
    }

    /// Builds a configuration from the current process environment.
    pub fn from_env() -> Self {
        Self::from_env_iter(env::vars())
    }

    /// Builds a configuration from key/value pairs (typically for tests).
    pub fn from_env_iter<I, K, V>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: HashMap<String, String> = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let lookup = |name: &str| map.get(name).and_then(|value| sanitize_non_empty(value));

        let mut config = Self::new();
        config.auth.api_key = lookup(ENV_API_KEY);
        config.auth.application_key = lookup(ENV_APP_KEY).or_else(|| lookup(ENV_APPLICATION_KEY));
        if let Some(site) = lookup(ENV_SITE) {
            config.server_variables.insert("site".to_string(), site);
        }
        config.proxy_url = lookup(ENV_PROXY_HTTPS).or_else(|| lookup(ENV_HTTPS_PROXY));
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.auth.api_key = Some(api_key.into());
        self
    }

    pub fn with_application_key(mut self, application_key: impl Into<String>) -> Self {
        self.auth.application_key = Some(application_key.into());
        self
    }

    /// Targets another Datadog site through the `site` server variable.
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.server_variables.insert("site".to_string(), site.into());
        self
    }

    /// Sends every request to `url` (e.g. a local proxy or test server).
    ///
    /// Replaces the server list with a single template and selects it.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.servers = vec![ServerConfiguration::new(
            url.trim_end_matches('/'),
            "Custom base URL",
            [],
        )];
        self.server_index = 0;
        self.operation_servers.clear();
        self.operation_server_indices.clear();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Resolves the base URL for the operation identified by `server_key`.
    ///
    /// Operation-specific servers, index and variables take precedence over
    /// the global ones; operation variables are layered on top of the global
    /// variables.
    pub fn server_url(&self, server_key: &str) -> Result<String, ConfigurationError> {
        let servers = self
            .operation_servers
            .get(server_key)
            .unwrap_or(&self.servers);
        let index = self
            .operation_server_indices
            .get(server_key)
            .copied()
            .unwrap_or(self.server_index);
        let mut variables = self.server_variables.clone();
        if let Some(overrides) = self.operation_server_variables.get(server_key) {
            variables.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        resolve_server_url(servers, index, &variables)
    }

    /// Enables or disables an unstable operation. Returns `false` when
    /// `operation` is not a known unstable operation.
    pub fn set_unstable_operation_enabled(&mut self, operation: &str, enabled: bool) -> bool {
        match self.unstable_operations.get_mut(operation) {
            Some(flag) => {
                *flag = enabled;
                true
            }
            None => {
                warn!("'{operation}' is not an unstable operation, can't enable it");
                false
            }
        }
    }

    pub fn is_unstable_operation(&self, operation: &str) -> bool {
        self.unstable_operations.contains_key(operation)
    }

    /// Whether `operation` may be called. Stable operations are always enabled.
    pub fn is_unstable_operation_enabled(&self, operation: &str) -> bool {
        match self.unstable_operations.get(operation) {
            Some(enabled) => *enabled,
            None => {
                warn!("'{operation}' is not an unstable operation, is always enabled");
                true
            }
        }
    }
}

fn default_user_agent() -> String {
    format!(
        "datadog-api-client-rust/{} (rust; os {}; arch {})",
        env!("CARGO_PKG_VERSION"),
        env::consts::OS,
        env::consts::ARCH,
    )
}

/// Helper trimming whitespace and discarding empty values.
fn sanitize_non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
