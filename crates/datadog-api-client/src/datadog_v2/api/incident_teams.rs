// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Incident teams.
//!
//! Every operation of this group is unstable: it fails with
//! [`Error::UnstableOperationDisabled`] until enabled through
//! [`Configuration::set_unstable_operation_enabled`].

use reqwest::Method;

use crate::datadog::request::{
    ApiClient, ApiResponse, Endpoint, OperationRequest, API_AND_APP_KEY_AUTH,
};
use crate::datadog::{Configuration, ConfigurationError, Error};
use crate::datadog_v2::model::{
    APIErrorResponse, IncidentRelatedObject, IncidentTeamCreateRequest, IncidentTeamResponse,
    IncidentTeamUpdateRequest, IncidentTeamsResponse,
};

const ERROR_STATUSES: &[u16] = &[400, 401, 403, 404, 429];

const CREATE_INCIDENT_TEAM: Endpoint = Endpoint {
    operation_id: "v2.CreateIncidentTeam",
    server_key: "v2.IncidentTeamsApi.CreateIncidentTeam",
    method: Method::POST,
    path: "/api/v2/teams",
    accept: "application/json",
    auth: API_AND_APP_KEY_AUTH,
    error_statuses: ERROR_STATUSES,
    unstable: true,
};

const DELETE_INCIDENT_TEAM: Endpoint = Endpoint {
    operation_id: "v2.DeleteIncidentTeam",
    server_key: "v2.IncidentTeamsApi.DeleteIncidentTeam",
    method: Method::DELETE,
    path: "/api/v2/teams/{team_id}",
    accept: "*/*",
    auth: API_AND_APP_KEY_AUTH,
    error_statuses: ERROR_STATUSES,
    unstable: true,
};

const GET_INCIDENT_TEAM: Endpoint = Endpoint {
    operation_id: "v2.GetIncidentTeam",
    server_key: "v2.IncidentTeamsApi.GetIncidentTeam",
    method: Method::GET,
    path: "/api/v2/teams/{team_id}",
    accept: "application/json",
    auth: API_AND_APP_KEY_AUTH,
    error_statuses: ERROR_STATUSES,
    unstable: true,
};

const LIST_INCIDENT_TEAMS: Endpoint = Endpoint {
    operation_id: "v2.ListIncidentTeams",
    server_key: "v2.IncidentTeamsApi.ListIncidentTeams",
    method: Method::GET,
    path: "/api/v2/teams",
    accept: "application/json",
    auth: API_AND_APP_KEY_AUTH,
    error_statuses: ERROR_STATUSES,
    unstable: true,
};

const UPDATE_INCIDENT_TEAM: Endpoint = Endpoint {
    operation_id: "v2.UpdateIncidentTeam",
    server_key: "v2.IncidentTeamsApi.UpdateIncidentTeam",
    method: Method::PATCH,
    path: "/api/v2/teams/{team_id}",
    accept: "application/json",
    auth: API_AND_APP_KEY_AUTH,
    error_statuses: ERROR_STATUSES,
    unstable: true,
};

/// Optional parameters of [`IncidentTeamsApi::get_incident_team`].
#[derive(Debug, Clone, Default)]
pub struct GetIncidentTeamOptionalParams {
    /// Related object to include in the response.
    pub include: Option<IncidentRelatedObject>,
}

impl GetIncidentTeamOptionalParams {
    pub fn with_include(mut self, value: IncidentRelatedObject) -> Self {
        self.include = Some(value);
        self
    }
}

/// Optional parameters of [`IncidentTeamsApi::list_incident_teams`].
#[derive(Debug, Clone, Default)]
pub struct ListIncidentTeamsOptionalParams {
    pub include: Option<IncidentRelatedObject>,
    /// Size for a given page. The maximum allowed value is 100.
    pub page_size: Option<i64>,
    /// Specific offset to use as the beginning of the returned page.
    pub page_offset: Option<i64>,
    /// A search query that filters teams by name.
    pub filter: Option<String>,
}

impl ListIncidentTeamsOptionalParams {
    pub fn with_include(mut self, value: IncidentRelatedObject) -> Self {
        self.include = Some(value);
        self
    }

    pub fn with_page_size(mut self, value: i64) -> Self {
        self.page_size = Some(value);
        self
    }

    pub fn with_page_offset(mut self, value: i64) -> Self {
        self.page_offset = Some(value);
        self
    }

    pub fn with_filter(mut self, value: String) -> Self {
        self.filter = Some(value);
        self
    }
}

/// The Incident Teams endpoints.
#[derive(Debug, Clone)]
pub struct IncidentTeamsApi {
    client: ApiClient,
}

impl IncidentTeamsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Builds the API around a dedicated [`ApiClient`].
    pub fn with_config(config: Configuration) -> Result<Self, ConfigurationError> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Creates a new incident team.
    pub async fn create_incident_team(
        &self,
        body: IncidentTeamCreateRequest,
    ) -> Result<IncidentTeamResponse, Error<APIErrorResponse>> {
        self.create_incident_team_with_http_info(body)
            .await
            .map(|response| response.entity)
    }

    pub async fn create_incident_team_with_http_info(
        &self,
        body: IncidentTeamCreateRequest,
    ) -> Result<ApiResponse<IncidentTeamResponse>, Error<APIErrorResponse>> {
        let request = OperationRequest::new().json_body(&body)?;
        self.client.execute(&CREATE_INCIDENT_TEAM, request).await
    }

    /// Deletes an existing incident team.
    pub async fn delete_incident_team(
        &self,
        team_id: String,
    ) -> Result<(), Error<APIErrorResponse>> {
        self.delete_incident_team_with_http_info(team_id)
            .await
            .map(|_| ())
    }

    pub async fn delete_incident_team_with_http_info(
        &self,
        team_id: String,
    ) -> Result<ApiResponse<()>, Error<APIErrorResponse>> {
        let request = OperationRequest::new().path_param("team_id", team_id);
        self.client.execute_empty(&DELETE_INCIDENT_TEAM, request).await
    }

    /// Gets details of an incident team. If the `include[users]` query
    /// parameter is provided, the included attribute will contain the users
    /// related to these incident teams.
    pub async fn get_incident_team(
        &self,
        team_id: String,
        params: GetIncidentTeamOptionalParams,
    ) -> Result<IncidentTeamResponse, Error<APIErrorResponse>> {
        self.get_incident_team_with_http_info(team_id, params)
            .await
            .map(|response| response.entity)
    }

    pub async fn get_incident_team_with_http_info(
        &self,
        team_id: String,
        params: GetIncidentTeamOptionalParams,
    ) -> Result<ApiResponse<IncidentTeamResponse>, Error<APIErrorResponse>> {
        let request = OperationRequest::new()
            .path_param("team_id", team_id)
            .query_param("include", params.include);
        self.client.execute(&GET_INCIDENT_TEAM, request).await
    }

    /// Gets all incident teams for the requesting user's organization.
    pub async fn list_incident_teams(
        &self,
        params: ListIncidentTeamsOptionalParams,
    ) -> Result<IncidentTeamsResponse, Error<APIErrorResponse>> {
        self.list_incident_teams_with_http_info(params)
            .await
            .map(|response| response.entity)
    }

    pub async fn list_incident_teams_with_http_info(
        &self,
        params: ListIncidentTeamsOptionalParams,
    ) -> Result<ApiResponse<IncidentTeamsResponse>, Error<APIErrorResponse>> {
        let request = OperationRequest::new()
            .query_param("include", params.include)
            .query_param("page[size]", params.page_size)
            .query_param("page[offset]", params.page_offset)
            .query_param("filter", params.filter);
        self.client.execute(&LIST_INCIDENT_TEAMS, request).await
    }

    /// Updates an existing incident team. Only provide the attributes which
    /// should be updated.
    pub async fn update_incident_team(
        &self,
        team_id: String,
        body: IncidentTeamUpdateRequest,
    ) -> Result<IncidentTeamResponse, Error<APIErrorResponse>> {
        self.update_incident_team_with_http_info(team_id, body)
            .await
            .map(|response| response.entity)
    }

    pub async fn update_incident_team_with_http_info(
        &self,
        team_id: String,
        body: IncidentTeamUpdateRequest,
    ) -> Result<ApiResponse<IncidentTeamResponse>, Error<APIErrorResponse>> {
        let request = OperationRequest::new()
            .path_param("team_id", team_id)
            .json_body(&body)?;
        self.client.execute(&UPDATE_INCIDENT_TEAM, request).await
    }
}
