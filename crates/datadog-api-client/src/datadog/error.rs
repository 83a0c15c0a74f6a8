// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy shared by every API operation.

use reqwest::StatusCode;

/// Raw outcome of a call that returned a non-success status.
///
/// `entity` is only populated when the status is one the operation declares
/// and the body decodes into the operation's error schema.
#[derive(Debug, Clone)]
pub struct ResponseContent<E> {
    pub status: StatusCode,
    pub content: String,
    pub entity: Option<E>,
}

/// Errors returned by API operations, parameterised by the typed error
/// envelope `E` of the operation.
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    /// The operation is marked unstable and has not been enabled.
    #[error("Unstable operation '{0}' is disabled")]
    UnstableOperationDisabled(String),

    #[error("{0} is required and must be specified")]
    MissingParameter(&'static str),

    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to build request: {0}")]
    Request(String),

    /// Transport-level issue (DNS, TLS, socket, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{}", .0.status)]
    Response(ResponseContent<E>),

    /// A success status whose body did not match the expected schema.
    #[error("failed to decode response body (status {status}): {message}")]
    Decode {
        status: StatusCode,
        body: String,
        message: String,
    },
}

impl<E> Error<E> {
    /// HTTP status attached to the error, when a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Response(content) => Some(content.status),
            Error::Decode { status, .. } => Some(*status),
            Error::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Typed error envelope, when the response matched the error schema.
    pub fn entity(&self) -> Option<&E> {
        match self {
            Error::Response(content) => content.entity.as_ref(),
            _ => None,
        }
    }
}

/// Failures resolving the target server or building the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("index {index} out of range {max}")]
    ServerIndexOutOfRange { index: usize, max: isize },

    #[error("the variable {name} in the server URL has invalid value {value}. Must be {allowed:?}")]
    InvalidServerVariable {
        name: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("invalid proxy url: {0}")]
    InvalidProxy(String),

    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// TLS backend could not be configured (FIPS builds only).
    #[error("TLS configuration error: {0}")]
    Tls(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Strict parsing of an enum value outside its allow-list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{value} is not a valid {type_name}, expected one of [{}]", .allowed.join(", "))]
pub struct InvalidEnumValue {
    pub type_name: &'static str,
    pub value: String,
    pub allowed: Vec<String>,
}

/// Payload shapes rejected before typed decoding starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("expected a JSON object for {0}")]
    NotAnObject(&'static str),

    #[error("required field {0} missing")]
    MissingField(&'static str),
}
