// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Metric submission and metric tag configurations.

use reqwest::Method;

use crate::datadog::request::{
    ApiClient, ApiResponse, Endpoint, OperationRequest, API_AND_APP_KEY_AUTH, API_KEY_AUTH,
};
use crate::datadog::{Configuration, ConfigurationError, Error};
use crate::datadog_v2::model::{
    APIErrorResponse, IntakePayloadAccepted, MetricContentEncoding, MetricPayload,
    MetricTagConfigurationMetricTypes, MetricTagConfigurationResponse,
    MetricsAndMetricTagConfigurationsResponse,
};

const DELETE_TAG_CONFIGURATION: Endpoint = Endpoint {
    operation_id: "v2.DeleteTagConfiguration",
    server_key: "v2.MetricsApi.DeleteTagConfiguration",
    method: Method::DELETE,
    path: "/api/v2/metrics/{metric_name}/tags",
    accept: "*/*",
    auth: API_AND_APP_KEY_AUTH,
    error_statuses: &[403, 404, 429],
    unstable: false,
};

const LIST_TAG_CONFIGURATION_BY_NAME: Endpoint = Endpoint {
    operation_id: "v2.ListTagConfigurationByName",
    server_key: "v2.MetricsApi.ListTagConfigurationByName",
    method: Method::GET,
    path: "/api/v2/metrics/{metric_name}/tags",
    accept: "application/json",
    auth: API_AND_APP_KEY_AUTH,
    error_statuses: &[403, 404, 429],
    unstable: false,
};

const LIST_TAG_CONFIGURATIONS: Endpoint = Endpoint {
    operation_id: "v2.ListTagConfigurations",
    server_key: "v2.MetricsApi.ListTagConfigurations",
    method: Method::GET,
    path: "/api/v2/metrics",
    accept: "application/json",
    auth: API_AND_APP_KEY_AUTH,
    error_statuses: &[400, 403, 429],
    unstable: false,
};

const SUBMIT_METRICS: Endpoint = Endpoint {
    operation_id: "v2.SubmitMetrics",
    server_key: "v2.MetricsApi.SubmitMetrics",
    method: Method::POST,
    path: "/api/v2/series",
    accept: "application/json",
    auth: API_KEY_AUTH,
    error_statuses: &[400, 403, 408, 413, 429],
    unstable: false,
};

/// Optional parameters of [`MetricsApi::list_tag_configurations`].
#[derive(Debug, Clone, Default)]
pub struct ListTagConfigurationsOptionalParams {
    /// Filter custom metrics that have configured tags.
    pub filter_configured: Option<bool>,
    /// Filter tag configurations by configured tags.
    pub filter_tags_configured: Option<String>,
    /// Filter metrics by metric type.
    pub filter_metric_type: Option<MetricTagConfigurationMetricTypes>,
    /// Filter distributions with additional percentile aggregations enabled
    /// or disabled.
    pub filter_include_percentiles: Option<bool>,
    /// Only return metrics that have been queried recently. Requires
    /// `window_seconds`.
    pub filter_queried: Option<bool>,
    /// Filter metrics that have been submitted with the given tags. Supports
    /// boolean and wildcard expressions.
    pub filter_tags: Option<String>,
    /// The number of seconds of look back (from now) to apply to a
    /// `filter_tags` or `filter_queried` query.
    pub window_seconds: Option<i64>,
}

impl ListTagConfigurationsOptionalParams {
    pub fn with_filter_configured(mut self, value: bool) -> Self {
        self.filter_configured = Some(value);
        self
    }

    pub fn with_filter_tags_configured(mut self, value: String) -> Self {
        self.filter_tags_configured = Some(value);
        self
    }

    pub fn with_filter_metric_type(mut self, value: MetricTagConfigurationMetricTypes) -> Self {
        self.filter_metric_type = Some(value);
        self
    }

    pub fn with_filter_include_percentiles(mut self, value: bool) -> Self {
        self.filter_include_percentiles = Some(value);
        self
    }

    pub fn with_filter_queried(mut self, value: bool) -> Self {
        self.filter_queried = Some(value);
        self
    }

    pub fn with_filter_tags(mut self, value: String) -> Self {
        self.filter_tags = Some(value);
        self
    }

    pub fn with_window_seconds(mut self, value: i64) -> Self {
        self.window_seconds = Some(value);
        self
    }
}

/// Optional parameters of [`MetricsApi::submit_metrics`].
#[derive(Debug, Clone, Default)]
pub struct SubmitMetricsOptionalParams {
    /// Compression applied to the payload before it is sent.
    pub content_encoding: Option<MetricContentEncoding>,
}

impl SubmitMetricsOptionalParams {
    pub fn with_content_encoding(mut self, value: MetricContentEncoding) -> Self {
        self.content_encoding = Some(value);
        self
    }
}

/// The Metrics endpoints.
#[derive(Debug, Clone)]
pub struct MetricsApi {
    client: ApiClient,
}

impl MetricsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn with_config(config: Configuration) -> Result<Self, ConfigurationError> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Deletes a metric's tag configuration. Can only be used with
    /// application keys from users with the `Manage Tags for Metrics`
    /// permission.
    pub async fn delete_tag_configuration(
        &self,
        metric_name: String,
    ) -> Result<(), Error<APIErrorResponse>> {
        self.delete_tag_configuration_with_http_info(metric_name)
            .await
            .map(|_| ())
    }

    pub async fn delete_tag_configuration_with_http_info(
        &self,
        metric_name: String,
    ) -> Result<ApiResponse<()>, Error<APIErrorResponse>> {
        let request = OperationRequest::new().path_param("metric_name", metric_name);
        self.client
            .execute_empty(&DELETE_TAG_CONFIGURATION, request)
            .await
    }

    /// Returns the tag configuration for the given metric name.
    pub async fn list_tag_configuration_by_name(
        &self,
        metric_name: String,
    ) -> Result<MetricTagConfigurationResponse, Error<APIErrorResponse>> {
        self.list_tag_configuration_by_name_with_http_info(metric_name)
            .await
            .map(|response| response.entity)
    }

    pub async fn list_tag_configuration_by_name_with_http_info(
        &self,
        metric_name: String,
    ) -> Result<ApiResponse<MetricTagConfigurationResponse>, Error<APIErrorResponse>> {
        let request = OperationRequest::new().path_param("metric_name", metric_name);
        self.client
            .execute(&LIST_TAG_CONFIGURATION_BY_NAME, request)
            .await
    }

    /// Returns all metrics that can be configured in the Metrics Summary
    /// page or with Metrics without Limits™, optionally filtered.
    pub async fn list_tag_configurations(
        &self,
        params: ListTagConfigurationsOptionalParams,
    ) -> Result<MetricsAndMetricTagConfigurationsResponse, Error<APIErrorResponse>> {
        self.list_tag_configurations_with_http_info(params)
            .await
            .map(|response| response.entity)
    }

    pub async fn list_tag_configurations_with_http_info(
        &self,
        params: ListTagConfigurationsOptionalParams,
    ) -> Result<ApiResponse<MetricsAndMetricTagConfigurationsResponse>, Error<APIErrorResponse>>
    {
        let request = OperationRequest::new()
            .query_param("filter[configured]", params.filter_configured)
            .query_param("filter[tags_configured]", params.filter_tags_configured)
            .query_param("filter[metric_type]", params.filter_metric_type)
            .query_param(
                "filter[include_percentiles]",
                params.filter_include_percentiles,
            )
            .query_param("filter[queried]", params.filter_queried)
            .query_param("filter[tags]", params.filter_tags)
            .query_param("window[seconds]", params.window_seconds);
        self.client.execute(&LIST_TAG_CONFIGURATIONS, request).await
    }

    /// Submits metrics to Datadog.
    ///
    /// The maximum payload size is 500 kilobytes (512000 bytes), and
    /// compressed payloads must have a decompressed size of less than
    /// 5 megabytes (5242880 bytes). Only the API key is sent.
    pub async fn submit_metrics(
        &self,
        body: MetricPayload,
        params: SubmitMetricsOptionalParams,
    ) -> Result<IntakePayloadAccepted, Error<APIErrorResponse>> {
        self.submit_metrics_with_http_info(body, params)
            .await
            .map(|response| response.entity)
    }

    pub async fn submit_metrics_with_http_info(
        &self,
        body: MetricPayload,
        params: SubmitMetricsOptionalParams,
    ) -> Result<ApiResponse<IntakePayloadAccepted>, Error<APIErrorResponse>> {
        let request = OperationRequest::new()
            .header("Content-Encoding", params.content_encoding)
            .json_body(&body)?;
        self.client.execute(&SUBMIT_METRICS, request).await
    }
}
