// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Request and response models of the v2 API.

pub mod api_error_response;
pub mod dashboard_lists;
pub mod incident_teams;
pub mod logs_archives;
pub mod metrics;
pub mod users;

pub use api_error_response::*;
pub use dashboard_lists::*;
pub use incident_teams::*;
pub use logs_archives::*;
pub use metrics::*;
pub use users::*;
