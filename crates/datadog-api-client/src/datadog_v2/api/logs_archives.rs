// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Logs archives: configuration of the buckets logs are forwarded to, their
//! ordering, and the roles allowed to read them.

use reqwest::Method;

use crate::datadog::request::{
    ApiClient, ApiResponse, Endpoint, OperationRequest, API_AND_APP_KEY_AUTH,
};
use crate::datadog::{Configuration, ConfigurationError, Error};
use crate::datadog_v2::model::{
    APIErrorResponse, LogsArchive, LogsArchiveCreateRequest, LogsArchiveOrder, LogsArchives,
    RelationshipToRole,
};

const fn endpoint(
    operation_id: &'static str,
    server_key: &'static str,
    method: Method,
    path: &'static str,
    accept: &'static str,
    error_statuses: &'static [u16],
) -> Endpoint {
    Endpoint {
        operation_id,
        server_key,
        method,
        path,
        accept,
        auth: API_AND_APP_KEY_AUTH,
        error_statuses,
        unstable: false,
    }
}

const ARCHIVES_PATH: &str = "/api/v2/logs/config/archives";
const ARCHIVE_PATH: &str = "/api/v2/logs/config/archives/{archive_id}";
const ARCHIVE_READERS_PATH: &str = "/api/v2/logs/config/archives/{archive_id}/readers";
const ARCHIVE_ORDER_PATH: &str = "/api/v2/logs/config/archive-order";

const ADD_READ_ROLE_TO_ARCHIVE: Endpoint = endpoint(
    "v2.AddReadRoleToArchive",
    "v2.LogsArchivesApi.AddReadRoleToArchive",
    Method::POST,
    ARCHIVE_READERS_PATH,
    "*/*",
    &[400, 403, 404, 429],
);

const CREATE_LOGS_ARCHIVE: Endpoint = endpoint(
    "v2.CreateLogsArchive",
    "v2.LogsArchivesApi.CreateLogsArchive",
    Method::POST,
    ARCHIVES_PATH,
    "application/json",
    &[400, 403, 429],
);

const DELETE_LOGS_ARCHIVE: Endpoint = endpoint(
    "v2.DeleteLogsArchive",
    "v2.LogsArchivesApi.DeleteLogsArchive",
    Method::DELETE,
    ARCHIVE_PATH,
    "*/*",
    &[400, 403, 404, 429],
);

const GET_LOGS_ARCHIVE: Endpoint = endpoint(
    "v2.GetLogsArchive",
    "v2.LogsArchivesApi.GetLogsArchive",
    Method::GET,
    ARCHIVE_PATH,
    "application/json",
    &[400, 403, 404, 429],
);

const GET_LOGS_ARCHIVE_ORDER: Endpoint = endpoint(
    "v2.GetLogsArchiveOrder",
    "v2.LogsArchivesApi.GetLogsArchiveOrder",
    Method::GET,
    ARCHIVE_ORDER_PATH,
    "application/json",
    &[403, 429],
);

const LIST_LOGS_ARCHIVES: Endpoint = endpoint(
    "v2.ListLogsArchives",
    "v2.LogsArchivesApi.ListLogsArchives",
    Method::GET,
    ARCHIVES_PATH,
    "application/json",
    &[403, 429],
);

const REMOVE_ROLE_FROM_ARCHIVE: Endpoint = endpoint(
    "v2.RemoveRoleFromArchive",
    "v2.LogsArchivesApi.RemoveRoleFromArchive",
    Method::DELETE,
    ARCHIVE_READERS_PATH,
    "*/*",
    &[400, 403, 404, 429],
);

const UPDATE_LOGS_ARCHIVE: Endpoint = endpoint(
    "v2.UpdateLogsArchive",
    "v2.LogsArchivesApi.UpdateLogsArchive",
    Method::PUT,
    ARCHIVE_PATH,
    "application/json",
    &[400, 403, 404, 429],
);

const UPDATE_LOGS_ARCHIVE_ORDER: Endpoint = endpoint(
    "v2.UpdateLogsArchiveOrder",
    "v2.LogsArchivesApi.UpdateLogsArchiveOrder",
    Method::PUT,
    ARCHIVE_ORDER_PATH,
    "application/json",
    &[400, 403, 422, 429],
);

/// The Logs Archives endpoints.
#[derive(Debug, Clone)]
pub struct LogsArchivesApi {
    client: ApiClient,
}

impl LogsArchivesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn with_config(config: Configuration) -> Result<Self, ConfigurationError> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Adds a read role to an archive.
    pub async fn add_read_role_to_archive(
        &self,
        archive_id: String,
        body: RelationshipToRole,
    ) -> Result<(), Error<APIErrorResponse>> {
        self.add_read_role_to_archive_with_http_info(archive_id, body)
            .await
            .map(|_| ())
    }

    pub async fn add_read_role_to_archive_with_http_info(
        &self,
        archive_id: String,
        body: RelationshipToRole,
    ) -> Result<ApiResponse<()>, Error<APIErrorResponse>> {
        let request = OperationRequest::new()
            .path_param("archive_id", archive_id)
            .json_body(&body)?;
        self.client
            .execute_empty(&ADD_READ_ROLE_TO_ARCHIVE, request)
            .await
    }

    /// Creates an archive in your organization.
    pub async fn create_logs_archive(
        &self,
        body: LogsArchiveCreateRequest,
    ) -> Result<LogsArchive, Error<APIErrorResponse>> {
        self.create_logs_archive_with_http_info(body)
            .await
            .map(|response| response.entity)
    }

    pub async fn create_logs_archive_with_http_info(
        &self,
        body: LogsArchiveCreateRequest,
    ) -> Result<ApiResponse<LogsArchive>, Error<APIErrorResponse>> {
        let request = OperationRequest::new().json_body(&body)?;
        self.client.execute(&CREATE_LOGS_ARCHIVE, request).await
    }

    /// Deletes a given archive from your organization.
    pub async fn delete_logs_archive(
        &self,
        archive_id: String,
    ) -> Result<(), Error<APIErrorResponse>> {
        self.delete_logs_archive_with_http_info(archive_id)
            .await
            .map(|_| ())
    }

    pub async fn delete_logs_archive_with_http_info(
        &self,
        archive_id: String,
    ) -> Result<ApiResponse<()>, Error<APIErrorResponse>> {
        let request = OperationRequest::new().path_param("archive_id", archive_id);
        self.client.execute_empty(&DELETE_LOGS_ARCHIVE, request).await
    }

    /// Gets a specific archive from your organization.
    pub async fn get_logs_archive(
        &self,
        archive_id: String,
    ) -> Result<LogsArchive, Error<APIErrorResponse>> {
        self.get_logs_archive_with_http_info(archive_id)
            .await
            .map(|response| response.entity)
    }

    pub async fn get_logs_archive_with_http_info(
        &self,
        archive_id: String,
    ) -> Result<ApiResponse<LogsArchive>, Error<APIErrorResponse>> {
        let request = OperationRequest::new().path_param("archive_id", archive_id);
        self.client.execute(&GET_LOGS_ARCHIVE, request).await
    }

    /// Gets the current order of your archives.
    pub async fn get_logs_archive_order(
        &self,
    ) -> Result<LogsArchiveOrder, Error<APIErrorResponse>> {
        self.get_logs_archive_order_with_http_info()
            .await
            .map(|response| response.entity)
    }

    pub async fn get_logs_archive_order_with_http_info(
        &self,
    ) -> Result<ApiResponse<LogsArchiveOrder>, Error<APIErrorResponse>> {
        self.client
            .execute(&GET_LOGS_ARCHIVE_ORDER, OperationRequest::new())
            .await
    }

    /// Gets the list of configured logs archives with their definitions.
    pub async fn list_logs_archives(&self) -> Result<LogsArchives, Error<APIErrorResponse>> {
        self.list_logs_archives_with_http_info()
            .await
            .map(|response| response.entity)
    }

    pub async fn list_logs_archives_with_http_info(
        &self,
    ) -> Result<ApiResponse<LogsArchives>, Error<APIErrorResponse>> {
        self.client
            .execute(&LIST_LOGS_ARCHIVES, OperationRequest::new())
            .await
    }

    /// Removes a role from an archive.
    pub async fn remove_role_from_archive(
        &self,
        archive_id: String,
        body: RelationshipToRole,
    ) -> Result<(), Error<APIErrorResponse>> {
        self.remove_role_from_archive_with_http_info(archive_id, body)
            .await
            .map(|_| ())
    }

    pub async fn remove_role_from_archive_with_http_info(
        &self,
        archive_id: String,
        body: RelationshipToRole,
    ) -> Result<ApiResponse<()>, Error<APIErrorResponse>> {
        let request = OperationRequest::new()
            .path_param("archive_id", archive_id)
            .json_body(&body)?;
        self.client
            .execute_empty(&REMOVE_ROLE_FROM_ARCHIVE, request)
            .await
    }

    /// Updates a given archive configuration.
    ///
    /// Using this method updates your archive configuration by **replacing**
    /// your current configuration with the new one sent to your Datadog
    /// organization.
    pub async fn update_logs_archive(
        &self,
        archive_id: String,
        body: LogsArchiveCreateRequest,
    ) -> Result<LogsArchive, Error<APIErrorResponse>> {
        self.update_logs_archive_with_http_info(archive_id, body)
            .await
            .map(|response| response.entity)
    }

    pub async fn update_logs_archive_with_http_info(
        &self,
        archive_id: String,
        body: LogsArchiveCreateRequest,
    ) -> Result<ApiResponse<LogsArchive>, Error<APIErrorResponse>> {
        let request = OperationRequest::new()
            .path_param("archive_id", archive_id)
            .json_body(&body)?;
        self.client.execute(&UPDATE_LOGS_ARCHIVE, request).await
    }

    /// Updates the order of your archives. Since logs are processed
    /// sequentially, reordering an archive may change the structure and
    /// content of the data processed by other archives.
    ///
    /// Using the `PUT` method updates your archive's order by replacing the
    /// current order with the new one.
    pub async fn update_logs_archive_order(
        &self,
        body: LogsArchiveOrder,
    ) -> Result<LogsArchiveOrder, Error<APIErrorResponse>> {
        self.update_logs_archive_order_with_http_info(body)
            .await
            .map(|response| response.entity)
    }

    pub async fn update_logs_archive_order_with_http_info(
        &self,
        body: LogsArchiveOrder,
    ) -> Result<ApiResponse<LogsArchiveOrder>, Error<APIErrorResponse>> {
        let request = OperationRequest::new().json_body(&body)?;
        self.client.execute(&UPDATE_LOGS_ARCHIVE_ORDER, request).await
    }
}
