// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Runtime shared by every API version.

pub mod configuration;
pub(crate) mod enums;
pub mod error;
pub mod model;
pub mod request;
pub mod transport;

pub use configuration::{Auth, Configuration, ServerConfiguration, ServerVariable};
pub use error::{ConfigurationError, DecodeError, Error, InvalidEnumValue, ResponseContent};
pub use model::{AdditionalProperties, Model, UnparsedObject, Validate};
pub use request::{ApiClient, ApiResponse, AuthScheme, Endpoint, OperationRequest};
