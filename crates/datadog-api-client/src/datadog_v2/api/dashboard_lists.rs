// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Items of manual dashboard lists.

use reqwest::Method;

use crate::datadog::request::{
    ApiClient, ApiResponse, Endpoint, OperationRequest, API_AND_APP_KEY_AUTH,
};
use crate::datadog::{Configuration, ConfigurationError, Error};
use crate::datadog_v2::model::{
    APIErrorResponse, DashboardListAddItemsRequest, DashboardListAddItemsResponse,
    DashboardListDeleteItemsRequest, DashboardListDeleteItemsResponse, DashboardListItems,
    DashboardListUpdateItemsRequest, DashboardListUpdateItemsResponse,
};

const ITEMS_PATH: &str = "/api/v2/dashboard/lists/manual/{dashboard_list_id}/dashboards";

const CREATE_DASHBOARD_LIST_ITEMS: Endpoint = Endpoint {
    operation_id: "v2.CreateDashboardListItems",
    server_key: "v2.DashboardListsApi.CreateDashboardListItems",
    method: Method::POST,
    path: ITEMS_PATH,
    accept: "application/json",
    auth: API_AND_APP_KEY_AUTH,
    error_statuses: &[400, 403, 404, 429],
    unstable: false,
};

const DELETE_DASHBOARD_LIST_ITEMS: Endpoint = Endpoint {
    operation_id: "v2.DeleteDashboardListItems",
    server_key: "v2.DashboardListsApi.DeleteDashboardListItems",
    method: Method::DELETE,
    path: ITEMS_PATH,
    accept: "application/json",
    auth: API_AND_APP_KEY_AUTH,
    error_statuses: &[400, 403, 404, 429],
    unstable: false,
};

const GET_DASHBOARD_LIST_ITEMS: Endpoint = Endpoint {
    operation_id: "v2.GetDashboardListItems",
    server_key: "v2.DashboardListsApi.GetDashboardListItems",
    method: Method::GET,
    path: ITEMS_PATH,
    accept: "application/json",
    auth: API_AND_APP_KEY_AUTH,
    error_statuses: &[403, 404, 429],
    unstable: false,
};

const UPDATE_DASHBOARD_LIST_ITEMS: Endpoint = Endpoint {
    operation_id: "v2.UpdateDashboardListItems",
    server_key: "v2.DashboardListsApi.UpdateDashboardListItems",
    method: Method::PUT,
    path: ITEMS_PATH,
    accept: "application/json",
    auth: API_AND_APP_KEY_AUTH,
    error_statuses: &[400, 403, 404, 429],
    unstable: false,
};

/// The Dashboard Lists endpoints.
#[derive(Debug, Clone)]
pub struct DashboardListsApi {
    client: ApiClient,
}

impl DashboardListsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn with_config(config: Configuration) -> Result<Self, ConfigurationError> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Adds dashboards to an existing dashboard list.
    pub async fn create_dashboard_list_items(
        &self,
        dashboard_list_id: i64,
        body: DashboardListAddItemsRequest,
    ) -> Result<DashboardListAddItemsResponse, Error<APIErrorResponse>> {
        self.create_dashboard_list_items_with_http_info(dashboard_list_id, body)
            .await
            .map(|response| response.entity)
    }

    pub async fn create_dashboard_list_items_with_http_info(
        &self,
        dashboard_list_id: i64,
        body: DashboardListAddItemsRequest,
    ) -> Result<ApiResponse<DashboardListAddItemsResponse>, Error<APIErrorResponse>> {
        let request = OperationRequest::new()
            .path_param("dashboard_list_id", dashboard_list_id)
            .json_body(&body)?;
        self.client
            .execute(&CREATE_DASHBOARD_LIST_ITEMS, request)
            .await
    }

    /// Deletes dashboards from an existing dashboard list.
    pub async fn delete_dashboard_list_items(
        &self,
        dashboard_list_id: i64,
        body: DashboardListDeleteItemsRequest,
    ) -> Result<DashboardListDeleteItemsResponse, Error<APIErrorResponse>> {
        self.delete_dashboard_list_items_with_http_info(dashboard_list_id, body)
            .await
            .map(|response| response.entity)
    }

    pub async fn delete_dashboard_list_items_with_http_info(
        &self,
        dashboard_list_id: i64,
        body: DashboardListDeleteItemsRequest,
    ) -> Result<ApiResponse<DashboardListDeleteItemsResponse>, Error<APIErrorResponse>> {
        let request = OperationRequest::new()
            .path_param("dashboard_list_id", dashboard_list_id)
            .json_body(&body)?;
        self.client
            .execute(&DELETE_DASHBOARD_LIST_ITEMS, request)
            .await
    }

    /// Fetches the dashboards of an existing dashboard list.
    pub async fn get_dashboard_list_items(
        &self,
        dashboard_list_id: i64,
    ) -> Result<DashboardListItems, Error<APIErrorResponse>> {
        self.get_dashboard_list_items_with_http_info(dashboard_list_id)
            .await
            .map(|response| response.entity)
    }

    pub async fn get_dashboard_list_items_with_http_info(
        &self,
        dashboard_list_id: i64,
    ) -> Result<ApiResponse<DashboardListItems>, Error<APIErrorResponse>> {
        let request = OperationRequest::new().path_param("dashboard_list_id", dashboard_list_id);
        self.client.execute(&GET_DASHBOARD_LIST_ITEMS, request).await
    }

    /// Replaces the dashboards of an existing dashboard list.
    pub async fn update_dashboard_list_items(
        &self,
        dashboard_list_id: i64,
        body: DashboardListUpdateItemsRequest,
    ) -> Result<DashboardListUpdateItemsResponse, Error<APIErrorResponse>> {
        self.update_dashboard_list_items_with_http_info(dashboard_list_id, body)
            .await
            .map(|response| response.entity)
    }

    pub async fn update_dashboard_list_items_with_http_info(
        &self,
        dashboard_list_id: i64,
        body: DashboardListUpdateItemsRequest,
    ) -> Result<ApiResponse<DashboardListUpdateItemsResponse>, Error<APIErrorResponse>> {
        let request = OperationRequest::new()
            .path_param("dashboard_list_id", dashboard_list_id)
            .json_body(&body)?;
        self.client
            .execute(&UPDATE_DASHBOARD_LIST_ITEMS, request)
            .await
    }
}
