// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! # Datadog API client
//!
//! Typed, asynchronous bindings for the Datadog HTTP API.
//!
//! The crate is split in two layers:
//! - [`datadog`]: the shared runtime. Configuration, the HTTP call path, error
//!   taxonomy, and the helpers every generated model relies on (enum
//!   allow-lists, unknown-field preservation, unparsed fallbacks, `oneOf`
//!   resolution).
//! - [`datadog_v2`]: the v2 API surface, one `*Api` struct per API group plus
//!   the request and response models they exchange.
//!
//! ```no_run
//! use datadog_api_client::datadog::Configuration;
//! use datadog_api_client::datadog_v2::api::metrics::MetricsApi;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let configuration = Configuration::from_env();
//! let api = MetricsApi::with_config(configuration)?;
//! let tags = api
//!     .list_tag_configuration_by_name("system.load.1".to_string())
//!     .await?;
//! println!("{tags:?}");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod datadog;
pub mod datadog_v2;
