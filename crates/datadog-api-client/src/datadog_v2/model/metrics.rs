// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Metric intake payloads and metric tag configurations.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;

use crate::datadog::enums::{int_enum, string_enum};
use crate::datadog::model::{
    impl_model, impl_one_of, model_accessors, AdditionalProperties, FieldReader, Model,
    UnparsedObject, Validate,
};

int_enum! {
    /// The type of metric.
    ///
    /// The available types are `0` (unspecified), `1` (count), `2` (rate) and
    /// `3` (gauge). `15` is kept for payloads produced by older agents.
    pub enum MetricIntakeType {
        UNSPECIFIED = 0,
        COUNT = 1,
        RATE = 2,
        GAUGE = 3,
        UNSPECIFIED_LEGACY = 15,
    }
}

string_enum! {
    /// HTTP header used to compress the media-type.
    pub enum MetricContentEncoding {
        DEFLATE = "deflate",
        ZSTD1 = "zstd1",
        GZIP = "gzip",
    }
}

string_enum! {
    /// The metric resource type.
    pub enum MetricType {
        METRICS = "metrics",
    }
}

string_enum! {
    /// The metric tag configuration resource type.
    pub enum MetricTagConfigurationType {
        MANAGE_TAGS = "manage_tags",
    }
}

string_enum! {
    /// The metric's type.
    pub enum MetricTagConfigurationMetricTypes {
        GAUGE = "gauge",
        COUNT = "count",
        RATE = "rate",
        DISTRIBUTION = "distribution",
    }
}

string_enum! {
    /// A space aggregation for use in query.
    pub enum MetricCustomSpaceAggregation {
        AVG = "avg",
        MAX = "max",
        MIN = "min",
        SUM = "sum",
    }
}

string_enum! {
    /// A time aggregation for use in query.
    pub enum MetricCustomTimeAggregation {
        AVG = "avg",
        COUNT = "count",
        MAX = "max",
        MIN = "min",
        SUM = "sum",
    }
}

/// A point object is of the form `{POSIX_timestamp, numeric_value}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricPoint {
    /// The timestamp should be in seconds and current.
    /// Current is defined as not more than 10 minutes in the future or more than 1 hour in the past.
    pub timestamp: Option<i64>,
    /// The numeric value format should be a 64bit float gauge-type value.
    pub value: Option<f64>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl MetricPoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamp(mut self, value: i64) -> Self {
        self.timestamp = Some(value);
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

impl Model for MetricPoint {
    const NAME: &'static str = "MetricPoint";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            timestamp: fields.optional("timestamp")?,
            value: fields.optional("value")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(timestamp) = &self.timestamp {
            map.serialize_entry("timestamp", timestamp)?;
        }
        if let Some(value) = &self.value {
            map.serialize_entry("value", value)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// Metric resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricResource {
    /// The name of the resource.
    pub name: Option<String>,
    /// The type of the resource.
    pub type_: Option<String>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl MetricResource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, value: String) -> Self {
        self.name = Some(value);
        self
    }

    pub fn with_type(mut self, value: String) -> Self {
        self.type_ = Some(value);
        self
    }
}

impl Model for MetricResource {
    const NAME: &'static str = "MetricResource";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            name: fields.optional("name")?,
            type_: fields.optional("type")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        if let Some(value) = &self.type_ {
            map.serialize_entry("type", value)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// Metric origin information.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricOrigin {
    /// The origin metric type code
    pub metric_type: Option<i32>,
    /// The origin product code
    pub product: Option<i32>,
    /// The origin service code
    pub service: Option<i32>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl MetricOrigin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metric_type(mut self, value: i32) -> Self {
        self.metric_type = Some(value);
        self
    }

    pub fn with_product(mut self, value: i32) -> Self {
        self.product = Some(value);
        self
    }

    pub fn with_service(mut self, value: i32) -> Self {
        self.service = Some(value);
        self
    }
}

impl Model for MetricOrigin {
    const NAME: &'static str = "MetricOrigin";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            metric_type: fields.optional("metric_type")?,
            product: fields.optional("product")?,
            service: fields.optional("service")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(metric_type) = &self.metric_type {
            map.serialize_entry("metric_type", metric_type)?;
        }
        if let Some(product) = &self.product {
            map.serialize_entry("product", product)?;
        }
        if let Some(service) = &self.service {
            map.serialize_entry("service", service)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// Metadata for the metric.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricMetadata {
    pub origin: Option<MetricOrigin>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl MetricMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(mut self, value: MetricOrigin) -> Self {
        self.origin = Some(value);
        self
    }
}

impl Model for MetricMetadata {
    const NAME: &'static str = "MetricMetadata";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            origin: fields.optional("origin")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(origin) = &self.origin {
            map.serialize_entry("origin", origin)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.origin.is_valid()
    }

    model_accessors!();
}

/// A metric to submit to Datadog.
/// See [Datadog metrics](https://docs.datadoghq.com/developers/metrics/#custom-metrics-properties).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricSeries {
    /// If the type of the metric is rate or count, define the corresponding interval.
    pub interval: Option<i64>,
    pub metadata: Option<MetricMetadata>,
    /// The name of the timeseries.
    pub metric: String,
    /// Points relating to a metric. All points must be objects with timestamp and a scalar value (cannot be a string).
    pub points: Vec<MetricPoint>,
    /// A list of resources to associate with this metric.
    pub resources: Option<Vec<MetricResource>>,
    /// The source type name.
    pub source_type_name: Option<String>,
    /// A list of tags associated with the metric.
    pub tags: Option<Vec<String>>,
    pub type_: Option<MetricIntakeType>,
    /// The unit of point value.
    pub unit: Option<String>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl MetricSeries {
    pub fn new(metric: String, points: Vec<MetricPoint>) -> Self {
        Self {
            metric,
            points,
            ..Default::default()
        }
    }

    pub fn with_interval(mut self, value: i64) -> Self {
        self.interval = Some(value);
        self
    }

    pub fn with_metadata(mut self, value: MetricMetadata) -> Self {
        self.metadata = Some(value);
        self
    }

    pub fn with_resources(mut self, value: Vec<MetricResource>) -> Self {
        self.resources = Some(value);
        self
    }

    pub fn with_source_type_name(mut self, value: String) -> Self {
        self.source_type_name = Some(value);
        self
    }

    pub fn with_tags(mut self, value: Vec<String>) -> Self {
        self.tags = Some(value);
        self
    }

    pub fn with_type(mut self, value: MetricIntakeType) -> Self {
        self.type_ = Some(value);
        self
    }

    pub fn with_unit(mut self, value: String) -> Self {
        self.unit = Some(value);
        self
    }
}

impl Model for MetricSeries {
    const NAME: &'static str = "MetricSeries";
    const REQUIRED_FIELDS: &'static [&'static str] = &["metric", "points"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            interval: fields.optional("interval")?,
            metadata: fields.optional("metadata")?,
            metric: fields.required("metric")?,
            points: fields.required("points")?,
            resources: fields.optional("resources")?,
            source_type_name: fields.optional("source_type_name")?,
            tags: fields.optional("tags")?,
            type_: fields.optional("type")?,
            unit: fields.optional("unit")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(interval) = &self.interval {
            map.serialize_entry("interval", interval)?;
        }
        if let Some(metadata) = &self.metadata {
            map.serialize_entry("metadata", metadata)?;
        }
        map.serialize_entry("metric", &self.metric)?;
        map.serialize_entry("points", &self.points)?;
        if let Some(resources) = &self.resources {
            map.serialize_entry("resources", resources)?;
        }
        if let Some(source_type_name) = &self.source_type_name {
            map.serialize_entry("source_type_name", source_type_name)?;
        }
        if let Some(tags) = &self.tags {
            map.serialize_entry("tags", tags)?;
        }
        if let Some(value) = &self.type_ {
            map.serialize_entry("type", value)?;
        }
        if let Some(unit) = &self.unit {
            map.serialize_entry("unit", unit)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.metadata.is_valid() && self.type_.is_valid()
    }

    model_accessors!();
}

/// The metrics' payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricPayload {
    /// A list of time series to submit to Datadog.
    pub series: Vec<MetricSeries>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl MetricPayload {
    pub fn new(series: Vec<MetricSeries>) -> Self {
        Self {
            series,
            ..Default::default()
        }
    }
}

impl Model for MetricPayload {
    const NAME: &'static str = "MetricPayload";
    const REQUIRED_FIELDS: &'static [&'static str] = &["series"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            series: fields.required("series")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("series", &self.series)?;
        Ok(())
    }

    model_accessors!();
}

/// The payload accepted for intake.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntakePayloadAccepted {
    /// A list of errors.
    pub errors: Option<Vec<String>>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IntakePayloadAccepted {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for IntakePayloadAccepted {
    const NAME: &'static str = "IntakePayloadAccepted";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            errors: fields.optional("errors")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(errors) = &self.errors {
            map.serialize_entry("errors", errors)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// A time and space aggregation combination for use in query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricCustomAggregation {
    pub space: MetricCustomSpaceAggregation,
    pub time: MetricCustomTimeAggregation,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl MetricCustomAggregation {
    pub fn new(space: MetricCustomSpaceAggregation, time: MetricCustomTimeAggregation) -> Self {
        Self {
            space,
            time,
            ..Default::default()
        }
    }
}

impl Model for MetricCustomAggregation {
    const NAME: &'static str = "MetricCustomAggregation";
    const REQUIRED_FIELDS: &'static [&'static str] = &["space", "time"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            space: fields.required("space")?,
            time: fields.required("time")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("space", &self.space)?;
        map.serialize_entry("time", &self.time)?;
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.space.is_valid() && self.time.is_valid()
    }

    model_accessors!();
}

/// Object containing the definition of a metric tag configuration attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricTagConfigurationAttributes {
    /// A list of queryable aggregation combinations for a count, rate, or gauge metric.
    pub aggregations: Option<Vec<MetricCustomAggregation>>,
    /// Timestamp when the tag configuration was created.
    pub created_at: Option<DateTime<Utc>>,
    /// Toggle to include or exclude percentile aggregations for distribution metrics.
    /// Only present when the `metric_type` is `distribution`.
    pub include_percentiles: Option<bool>,
    pub metric_type: Option<MetricTagConfigurationMetricTypes>,
    pub modified_at: Option<DateTime<Utc>>,
    /// List of tag keys on which to group.
    pub tags: Option<Vec<String>>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl MetricTagConfigurationAttributes {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for MetricTagConfigurationAttributes {
    const NAME: &'static str = "MetricTagConfigurationAttributes";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            aggregations: fields.optional("aggregations")?,
            created_at: fields.optional("created_at")?,
            include_percentiles: fields.optional("include_percentiles")?,
            metric_type: fields.optional("metric_type")?,
            modified_at: fields.optional("modified_at")?,
            tags: fields.optional("tags")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(aggregations) = &self.aggregations {
            map.serialize_entry("aggregations", aggregations)?;
        }
        if let Some(created_at) = &self.created_at {
            map.serialize_entry("created_at", created_at)?;
        }
        if let Some(include_percentiles) = &self.include_percentiles {
            map.serialize_entry("include_percentiles", include_percentiles)?;
        }
        if let Some(metric_type) = &self.metric_type {
            map.serialize_entry("metric_type", metric_type)?;
        }
        if let Some(modified_at) = &self.modified_at {
            map.serialize_entry("modified_at", modified_at)?;
        }
        if let Some(tags) = &self.tags {
            map.serialize_entry("tags", tags)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.metric_type.is_valid()
    }

    model_accessors!();
}

/// Object for a single metric tag configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricTagConfiguration {
    pub attributes: Option<MetricTagConfigurationAttributes>,
    /// The metric name for this resource.
    pub id: Option<String>,
    pub type_: Option<MetricTagConfigurationType>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl MetricTagConfiguration {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for MetricTagConfiguration {
    const NAME: &'static str = "MetricTagConfiguration";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            attributes: fields.optional("attributes")?,
            id: fields.optional("id")?,
            type_: fields.optional("type")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(attributes) = &self.attributes {
            map.serialize_entry("attributes", attributes)?;
        }
        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        if let Some(value) = &self.type_ {
            map.serialize_entry("type", value)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.attributes.is_valid() && self.type_.is_valid()
    }

    model_accessors!();
}

/// Response object which includes a single metric's tag configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricTagConfigurationResponse {
    pub data: Option<MetricTagConfiguration>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl MetricTagConfigurationResponse {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for MetricTagConfigurationResponse {
    const NAME: &'static str = "MetricTagConfigurationResponse";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            data: fields.optional("data")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(data) = &self.data {
            map.serialize_entry("data", data)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.data.is_valid()
    }

    model_accessors!();
}

/// Object for a single metric tag configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metric {
    /// The metric name for this resource.
    pub id: Option<String>,
    pub type_: Option<MetricType>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl Metric {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for Metric {
    const NAME: &'static str = "Metric";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: fields.optional("id")?,
            type_: fields.optional("type")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        if let Some(value) = &self.type_ {
            map.serialize_entry("type", value)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.type_.is_valid()
    }

    model_accessors!();
}

/// Object for a metrics and metric tag configurations.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricsAndMetricTagConfigurations {
    Metric(Box<Metric>),
    MetricTagConfiguration(Box<MetricTagConfiguration>),
    UnparsedObject(UnparsedObject),
}

impl_one_of!(MetricsAndMetricTagConfigurations {
    Metric(Metric),
    MetricTagConfiguration(MetricTagConfiguration),
});

/// Response object that includes metrics and metric tag configurations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsAndMetricTagConfigurationsResponse {
    /// Array of metrics and metric tag configurations.
    pub data: Option<Vec<MetricsAndMetricTagConfigurations>>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl MetricsAndMetricTagConfigurationsResponse {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for MetricsAndMetricTagConfigurationsResponse {
    const NAME: &'static str = "MetricsAndMetricTagConfigurationsResponse";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            data: fields.optional("data")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(data) = &self.data {
            map.serialize_entry("data", data)?;
        }
        Ok(())
    }

    model_accessors!();
}

impl_model!(
    MetricPoint,
    MetricResource,
    MetricOrigin,
    MetricMetadata,
    MetricSeries,
    MetricPayload,
    IntakePayloadAccepted,
    MetricCustomAggregation,
    MetricTagConfigurationAttributes,
    MetricTagConfiguration,
    MetricTagConfigurationResponse,
    Metric,
    MetricsAndMetricTagConfigurationsResponse,
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_legacy_intake_type_is_valid() {
        let series: MetricSeries = serde_json::from_value(json!({
            "metric": "system.load.1",
            "type": 15,
            "points": [{"timestamp": 1636629071, "value": 0.7}]
        }))
        .unwrap();
        assert!(!series.is_unparsed());
        assert_eq!(series.type_, Some(MetricIntakeType::UNSPECIFIED_LEGACY));
    }

    #[test]
    fn test_unknown_intake_type_makes_series_unparsed() {
        let payload = json!({"metric": "system.load.1", "type": 7, "points": []});
        let series: MetricSeries = serde_json::from_value(payload.clone()).unwrap();
        assert!(series.is_unparsed());
        assert_eq!(serde_json::to_value(&series).unwrap(), payload);
    }

    #[test]
    fn test_payload_encoding() {
        let payload = MetricPayload::new(vec![MetricSeries::new(
            "system.load.1".to_string(),
            vec![MetricPoint::new().with_timestamp(1636629071).with_value(0.7)],
        )
        .with_type(MetricIntakeType::GAUGE)
        .with_resources(vec![MetricResource::new()
            .with_name("dummyhost".to_string())
            .with_type("host".to_string())])]);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"series": [{
                "metric": "system.load.1",
                "points": [{"timestamp": 1636629071, "value": 0.7}],
                "resources": [{"name": "dummyhost", "type": "host"}],
                "type": 3
            }]})
        );
    }

    #[test]
    fn test_metrics_and_tag_configurations_union() {
        let response: MetricsAndMetricTagConfigurationsResponse = serde_json::from_value(json!({
            "data": [
                {"id": "system.load.1", "type": "metrics"},
                {"id": "http.requests", "type": "manage_tags", "attributes": {"metric_type": "count", "tags": ["env"]}},
                {"id": "mystery", "type": "widgets"}
            ]
        }))
        .unwrap();
        let data = response.data.unwrap();
        assert!(matches!(data[0], MetricsAndMetricTagConfigurations::Metric(_)));
        let MetricsAndMetricTagConfigurations::MetricTagConfiguration(config) = &data[1] else {
            panic!("expected a tag configuration, got {:?}", data[1]);
        };
        assert_eq!(
            config.attributes.as_ref().unwrap().metric_type,
            Some(MetricTagConfigurationMetricTypes::COUNT)
        );
        assert!(matches!(data[2], MetricsAndMetricTagConfigurations::UnparsedObject(_)));
    }

    #[test]
    fn test_ambiguous_union_keeps_number_text() {
        let payload = r#"{"id":"x","value":1e2,"big":18446744073709551616,"ratio":0.10}"#;
        let item: MetricsAndMetricTagConfigurations = serde_json::from_str(payload).unwrap();
        assert!(matches!(item, MetricsAndMetricTagConfigurations::UnparsedObject(_)));
        assert_eq!(serde_json::to_string(&item).unwrap(), payload);
    }
}
