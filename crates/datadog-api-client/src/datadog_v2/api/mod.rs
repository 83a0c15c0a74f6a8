// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Endpoint wrappers of the v2 API, one module per API group.

pub mod dashboard_lists;
pub mod incident_teams;
pub mod logs_archives;
pub mod metrics;

pub use dashboard_lists::DashboardListsApi;
pub use incident_teams::{
    GetIncidentTeamOptionalParams, IncidentTeamsApi, ListIncidentTeamsOptionalParams,
};
pub use logs_archives::LogsArchivesApi;
pub use metrics::{ListTagConfigurationsOptionalParams, MetricsApi, SubmitMetricsOptionalParams};
