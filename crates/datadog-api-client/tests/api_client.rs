// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use datadog_api_client::datadog::{Configuration, Error};
use datadog_api_client::datadog_v2::api::{
    DashboardListsApi, GetIncidentTeamOptionalParams, IncidentTeamsApi,
    ListIncidentTeamsOptionalParams, ListTagConfigurationsOptionalParams, LogsArchivesApi,
    MetricsApi, SubmitMetricsOptionalParams,
};
use datadog_api_client::datadog_v2::model::{
    DashboardListDeleteItemsRequest, DashboardListItemRequest, DashboardType,
    IncidentRelatedObject, IncidentTeamIncludedItems, LogsArchive, MetricContentEncoding,
    MetricIntakeType, MetricPayload, MetricPoint, MetricSeries, MetricTagConfigurationMetricTypes,
    MetricsAndMetricTagConfigurations,
};
use mockito::{Matcher, Server};
use serde_json::json;

fn config(server: &Server) -> Configuration {
    Configuration::new()
        .with_base_url(server.url())
        .with_api_key("mock-api-key")
        .with_application_key("mock-app-key")
}

#[tokio::test]
async fn test_disabled_unstable_operation_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/teams")
        .expect(0)
        .create_async()
        .await;

    let api = IncidentTeamsApi::with_config(config(&server)).unwrap();
    let err = api
        .list_incident_teams(ListIncidentTeamsOptionalParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnstableOperationDisabled(ref id) if id == "v2.ListIncidentTeams"));
    assert_eq!(err.to_string(), "Unstable operation 'v2.ListIncidentTeams' is disabled");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_enabled_unstable_operation_sends_query_params() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/teams")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("include".into(), "users".into()),
            Matcher::UrlEncoded("page[size]".into(), "2".into()),
            Matcher::UrlEncoded("filter".into(), "ops".into()),
        ]))
        .match_header("DD-API-KEY", "mock-api-key")
        .match_header("DD-APPLICATION-KEY", "mock-app-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": [{"id": "t1", "type": "teams", "attributes": {"name": "ops"}}],
                "included": [{"id": "u1", "type": "users", "attributes": {"handle": "a@b.c"}}],
                "meta": {"pagination": {"offset": 0, "next_offset": 2, "size": 2}}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut config = config(&server);
    assert!(config.set_unstable_operation_enabled("v2.ListIncidentTeams", true));
    let api = IncidentTeamsApi::with_config(config).unwrap();
    let teams = api
        .list_incident_teams(
            ListIncidentTeamsOptionalParams::default()
                .with_include(IncidentRelatedObject::USERS)
                .with_page_size(2)
                .with_filter("ops".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(teams.data[0].id.as_deref(), Some("t1"));
    assert!(matches!(
        teams.included.unwrap()[0],
        IncidentTeamIncludedItems::User(_)
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_only_the_enabled_operation_is_unlocked() {
    let server = Server::new_async().await;
    let mut config = config(&server);
    config.set_unstable_operation_enabled("v2.ListIncidentTeams", true);
    let api = IncidentTeamsApi::with_config(config).unwrap();

    let err = api
        .get_incident_team("t1".to_string(), GetIncidentTeamOptionalParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnstableOperationDisabled(_)));
}

#[tokio::test]
async fn test_tag_configuration_by_name_sends_both_keys() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/metrics/system.load.1/tags")
        .match_header("DD-API-KEY", "mock-api-key")
        .match_header("DD-APPLICATION-KEY", "mock-app-key")
        .match_header("Accept", "application/json")
        .match_header(
            "User-Agent",
            Matcher::Regex("^datadog-api-client-rust/".to_string()),
        )
        .with_status(200)
        .with_body(
            json!({"data": {
                "id": "system.load.1",
                "type": "manage_tags",
                "attributes": {"metric_type": "gauge", "tags": ["app", "env"], "created_at": "2020-03-25T09:48:37.463835Z"}
            }})
            .to_string(),
        )
        .create_async()
        .await;

    let api = MetricsApi::with_config(config(&server)).unwrap();
    let response = api
        .list_tag_configuration_by_name("system.load.1".to_string())
        .await
        .unwrap();

    let attributes = response.data.unwrap().attributes.unwrap();
    assert_eq!(attributes.metric_type, Some(MetricTagConfigurationMetricTypes::GAUGE));
    assert_eq!(attributes.tags.unwrap(), vec!["app", "env"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submit_metrics_sends_api_key_only_and_compresses() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/series")
        .match_header("DD-API-KEY", "mock-api-key")
        .match_header("DD-APPLICATION-KEY", Matcher::Missing)
        .match_header("Content-Type", "application/json")
        .match_header("Content-Encoding", "gzip")
        .with_status(202)
        .with_body(r#"{"errors": []}"#)
        .create_async()
        .await;

    let api = MetricsApi::with_config(config(&server)).unwrap();
    let payload = MetricPayload::new(vec![MetricSeries::new(
        "system.load.1".to_string(),
        vec![MetricPoint::new().with_timestamp(1636629071).with_value(0.7)],
    )
    .with_type(MetricIntakeType::GAUGE)]);
    let response = api
        .submit_metrics_with_http_info(
            payload,
            SubmitMetricsOptionalParams::default()
                .with_content_encoding(MetricContentEncoding::GZIP),
        )
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 202);
    assert_eq!(response.entity.errors, Some(vec![]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_uncompressed_responses_are_requested_when_compression_is_off() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/logs/config/archives")
        .match_header("Accept-Encoding", "identity")
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let api = LogsArchivesApi::with_config(config(&server).with_compress(false)).unwrap();
    let archives = api.list_logs_archives().await.unwrap();

    assert_eq!(archives.data, Some(vec![]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_declared_error_status_is_decoded() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2/logs/config/archives/missing")
        .with_status(404)
        .with_body(r#"{"errors": ["Archive not found"]}"#)
        .create_async()
        .await;

    let api = LogsArchivesApi::with_config(config(&server)).unwrap();
    let err = api.get_logs_archive("missing".to_string()).await.unwrap_err();

    let Error::Response(content) = &err else {
        panic!("expected a response error, got {err:?}");
    };
    assert_eq!(content.status.as_u16(), 404);
    assert_eq!(content.content, r#"{"errors": ["Archive not found"]}"#);
    assert_eq!(
        content.entity.as_ref().unwrap().errors,
        vec!["Archive not found".to_string()]
    );
    assert_eq!(err.to_string(), "404 Not Found");
}

#[tokio::test]
async fn test_error_envelope_is_dropped_when_it_does_not_match() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2/logs/config/archives/a1")
        .with_status(403)
        .with_body(r#"{"message": "forbidden"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/v2/logs/config/archives/a2")
        .with_status(500)
        .with_body(r#"{"errors": ["boom"]}"#)
        .create_async()
        .await;

    let api = LogsArchivesApi::with_config(config(&server)).unwrap();

    let err = api.get_logs_archive("a1".to_string()).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(403));
    assert!(err.entity().is_none());

    // 500 is not a declared status: the body is only kept raw.
    let err = api.get_logs_archive("a2".to_string()).await.unwrap_err();
    let Error::Response(content) = err else {
        panic!("expected a response error");
    };
    assert_eq!(content.status.as_u16(), 500);
    assert_eq!(content.content, r#"{"errors": ["boom"]}"#);
    assert!(content.entity.is_none());
}

#[tokio::test]
async fn test_malformed_success_body_is_a_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2/logs/config/archives/a1")
        .with_status(200)
        .with_body("[1, 2, 3]")
        .create_async()
        .await;

    let api = LogsArchivesApi::with_config(config(&server)).unwrap();
    let err = api.get_logs_archive("a1".to_string()).await.unwrap_err();

    let Error::Decode { status, body, .. } = err else {
        panic!("expected a decode error, got {err:?}");
    };
    assert_eq!(status.as_u16(), 200);
    assert_eq!(body, "[1, 2, 3]");
}

#[tokio::test]
async fn test_empty_success_body_decodes_to_default() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2/logs/config/archives/a1")
        .with_status(200)
        .create_async()
        .await;

    let api = LogsArchivesApi::with_config(config(&server)).unwrap();
    let archive = api.get_logs_archive("a1".to_string()).await.unwrap();

    assert_eq!(archive, LogsArchive::default());
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    let config = Configuration::new()
        .with_base_url("http://127.0.0.1:9")
        .with_api_key("mock-api-key")
        .with_application_key("mock-app-key");

    let api = LogsArchivesApi::with_config(config).unwrap();
    let err = api.get_logs_archive("a1".to_string()).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_empty_path_parameter_is_rejected_before_sending() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let api = LogsArchivesApi::with_config(config(&server)).unwrap();
    let err = api.delete_logs_archive(String::new()).await.unwrap_err();

    assert!(matches!(err, Error::MissingParameter("archive_id")));
    assert_eq!(err.to_string(), "archive_id is required and must be specified");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_with_empty_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/v2/metrics/http.requests/tags")
        .match_header("Accept", "*/*")
        .with_status(204)
        .create_async()
        .await;

    let api = MetricsApi::with_config(config(&server)).unwrap();
    api.delete_tag_configuration("http.requests".to_string())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_tag_configurations_resolves_union_items() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/metrics")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("filter[configured]".into(), "true".into()),
            Matcher::UrlEncoded("filter[metric_type]".into(), "distribution".into()),
            Matcher::UrlEncoded("window[seconds]".into(), "3600".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({"data": [
                {"id": "system.load.1", "type": "metrics"},
                {"id": "http.latency", "type": "manage_tags", "attributes": {"metric_type": "distribution", "include_percentiles": true}},
                {"id": "new.kind", "type": "metric_volumes"}
            ]})
            .to_string(),
        )
        .create_async()
        .await;

    let api = MetricsApi::with_config(config(&server)).unwrap();
    let response = api
        .list_tag_configurations(
            ListTagConfigurationsOptionalParams::default()
                .with_filter_configured(true)
                .with_filter_metric_type(MetricTagConfigurationMetricTypes::DISTRIBUTION)
                .with_window_seconds(3600),
        )
        .await
        .unwrap();

    let data = response.data.unwrap();
    assert!(matches!(data[0], MetricsAndMetricTagConfigurations::Metric(_)));
    assert!(matches!(
        data[1],
        MetricsAndMetricTagConfigurations::MetricTagConfiguration(_)
    ));
    let MetricsAndMetricTagConfigurations::UnparsedObject(raw) = &data[2] else {
        panic!("expected the unknown item to stay raw");
    };
    assert_eq!(raw.value, json!({"id": "new.kind", "type": "metric_volumes"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_dashboard_list_items_sends_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/v2/dashboard/lists/manual/4741/dashboards")
        .match_body(Matcher::Json(json!({
            "dashboards": [{"id": "q5j-nti-fv6", "type": "host_timeboard"}]
        })))
        .with_status(200)
        .with_body(
            json!({"deleted_dashboards_from_list": [{"id": "q5j-nti-fv6", "type": "host_timeboard"}]})
                .to_string(),
        )
        .create_async()
        .await;

    let api = DashboardListsApi::with_config(config(&server)).unwrap();
    let body = DashboardListDeleteItemsRequest::new().with_dashboards(vec![
        DashboardListItemRequest::new("q5j-nti-fv6".to_string(), DashboardType::HOST_TIMEBOARD),
    ]);
    let response = api.delete_dashboard_list_items(4741, body).await.unwrap();

    let deleted = response.deleted_dashboards_from_list.unwrap();
    assert_eq!(deleted[0].type_, DashboardType::HOST_TIMEBOARD);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_with_http_info_exposes_status_and_headers() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2/dashboard/lists/manual/1/dashboards")
        .with_status(200)
        .with_header("x-ratelimit-remaining", "99")
        .with_body(r#"{"dashboards": [], "total": 0}"#)
        .create_async()
        .await;

    let api = DashboardListsApi::with_config(config(&server)).unwrap();
    let response = api.get_dashboard_list_items_with_http_info(1).await.unwrap();

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.headers["x-ratelimit-remaining"], "99");
    assert_eq!(response.entity.total, Some(0));
    assert!(response.entity.dashboards.is_empty());
}

#[tokio::test]
async fn test_operation_server_override() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/logs/config/archive-order")
        .with_status(200)
        .with_body(r#"{"data": {"type": "archive_order", "attributes": {"archive_ids": ["a", "b"]}}}"#)
        .create_async()
        .await;

    // Global servers point nowhere useful; only this operation is redirected.
    let mut config = Configuration::new().with_base_url("http://127.0.0.1:9");
    config.operation_servers.insert(
        "v2.LogsArchivesApi.GetLogsArchiveOrder".to_string(),
        Configuration::new().with_base_url(server.url()).servers,
    );
    let api = LogsArchivesApi::with_config(config).unwrap();
    let order = api.get_logs_archive_order().await.unwrap();

    assert_eq!(order.data.unwrap().attributes.archive_ids, vec!["a", "b"]);
    mock.assert_async().await;
}
