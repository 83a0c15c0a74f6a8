// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Logs archive definitions, destinations and ordering.

use serde::ser::SerializeMap;

use crate::datadog::enums::string_enum;
use crate::datadog::model::{
    impl_model, impl_one_of, model_accessors, AdditionalProperties, FieldReader, Model,
    UnparsedObject, Validate,
};

string_enum! {
    /// The state of the archive.
    pub enum LogsArchiveState {
        UNKNOWN = "UNKNOWN",
        WORKING = "WORKING",
        FAILING = "FAILING",
        WORKING_AUTH_LEGACY = "WORKING_AUTH_LEGACY",
    }
}

string_enum! {
    pub enum LogsArchiveDestinationAzureType {
        AZURE = "azure",
    }
}

string_enum! {
    pub enum LogsArchiveDestinationGCSType {
        GCS = "gcs",
    }
}

string_enum! {
    pub enum LogsArchiveDestinationS3Type {
        S3 = "s3",
    }
}

string_enum! {
    /// Type of the archive order definition.
    pub enum LogsArchiveOrderDefinitionType {
        ARCHIVE_ORDER = "archive_order",
    }
}

string_enum! {
    /// Roles type.
    pub enum RolesType {
        ROLES = "roles",
    }
}

/// The Azure archive's integration destination.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveIntegrationAzure {
    /// A client ID.
    pub client_id: String,
    /// A tenant ID.
    pub tenant_id: String,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveIntegrationAzure {
    pub fn new(client_id: String, tenant_id: String) -> Self {
        Self {
            client_id,
            tenant_id,
            ..Default::default()
        }
    }
}

impl Model for LogsArchiveIntegrationAzure {
    const NAME: &'static str = "LogsArchiveIntegrationAzure";
    const REQUIRED_FIELDS: &'static [&'static str] = &["client_id", "tenant_id"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            client_id: fields.required("client_id")?,
            tenant_id: fields.required("tenant_id")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("client_id", &self.client_id)?;
        map.serialize_entry("tenant_id", &self.tenant_id)?;
        Ok(())
    }

    model_accessors!();
}

/// The GCS archive's integration destination.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveIntegrationGCS {
    /// A client email.
    pub client_email: String,
    /// A project ID.
    pub project_id: Option<String>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveIntegrationGCS {
    pub fn new(client_email: String) -> Self {
        Self {
            client_email,
            ..Default::default()
        }
    }

    pub fn with_project_id(mut self, value: String) -> Self {
        self.project_id = Some(value);
        self
    }
}

impl Model for LogsArchiveIntegrationGCS {
    const NAME: &'static str = "LogsArchiveIntegrationGCS";
    const REQUIRED_FIELDS: &'static [&'static str] = &["client_email"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            client_email: fields.required("client_email")?,
            project_id: fields.optional("project_id")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("client_email", &self.client_email)?;
        if let Some(project_id) = &self.project_id {
            map.serialize_entry("project_id", project_id)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// The S3 Archive's integration destination.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveIntegrationS3 {
    /// The account ID for the integration.
    pub account_id: String,
    /// The path of the integration.
    pub role_name: String,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveIntegrationS3 {
    pub fn new(account_id: String, role_name: String) -> Self {
        Self {
            account_id,
            role_name,
            ..Default::default()
        }
    }
}

impl Model for LogsArchiveIntegrationS3 {
    const NAME: &'static str = "LogsArchiveIntegrationS3";
    const REQUIRED_FIELDS: &'static [&'static str] = &["account_id", "role_name"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            account_id: fields.required("account_id")?,
            role_name: fields.required("role_name")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("account_id", &self.account_id)?;
        map.serialize_entry("role_name", &self.role_name)?;
        Ok(())
    }

    model_accessors!();
}

/// The Azure archive destination.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveDestinationAzure {
    /// The container where the archive will be stored.
    pub container: String,
    pub integration: LogsArchiveIntegrationAzure,
    /// The archive path.
    pub path: Option<String>,
    /// The region where the archive will be stored.
    pub region: Option<String>,
    /// The associated storage account.
    pub storage_account: String,
    pub type_: LogsArchiveDestinationAzureType,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveDestinationAzure {
    pub fn new(container: String, integration: LogsArchiveIntegrationAzure, storage_account: String, type_: LogsArchiveDestinationAzureType) -> Self {
        Self {
            container,
            integration,
            storage_account,
            type_,
            ..Default::default()
        }
    }

    pub fn with_path(mut self, value: String) -> Self {
        self.path = Some(value);
        self
    }

    pub fn with_region(mut self, value: String) -> Self {
        self.region = Some(value);
        self
    }
}

impl Model for LogsArchiveDestinationAzure {
    const NAME: &'static str = "LogsArchiveDestinationAzure";
    const REQUIRED_FIELDS: &'static [&'static str] = &["container", "integration", "storage_account", "type"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            container: fields.required("container")?,
            integration: fields.required("integration")?,
            path: fields.optional("path")?,
            region: fields.optional("region")?,
            storage_account: fields.required("storage_account")?,
            type_: fields.required("type")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("container", &self.container)?;
        map.serialize_entry("integration", &self.integration)?;
        if let Some(path) = &self.path {
            map.serialize_entry("path", path)?;
        }
        if let Some(region) = &self.region {
            map.serialize_entry("region", region)?;
        }
        map.serialize_entry("storage_account", &self.storage_account)?;
        map.serialize_entry("type", &self.type_)?;
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.integration.is_valid() && self.type_.is_valid()
    }

    model_accessors!();
}

/// The GCS archive destination.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveDestinationGCS {
    /// The bucket where the archive will be stored.
    pub bucket: String,
    pub integration: LogsArchiveIntegrationGCS,
    pub path: Option<String>,
    pub type_: LogsArchiveDestinationGCSType,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveDestinationGCS {
    pub fn new(bucket: String, integration: LogsArchiveIntegrationGCS, type_: LogsArchiveDestinationGCSType) -> Self {
        Self {
            bucket,
            integration,
            type_,
            ..Default::default()
        }
    }

    pub fn with_path(mut self, value: String) -> Self {
        self.path = Some(value);
        self
    }
}

impl Model for LogsArchiveDestinationGCS {
    const NAME: &'static str = "LogsArchiveDestinationGCS";
    const REQUIRED_FIELDS: &'static [&'static str] = &["bucket", "integration", "type"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            bucket: fields.required("bucket")?,
            integration: fields.required("integration")?,
            path: fields.optional("path")?,
            type_: fields.required("type")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("bucket", &self.bucket)?;
        map.serialize_entry("integration", &self.integration)?;
        if let Some(path) = &self.path {
            map.serialize_entry("path", path)?;
        }
        map.serialize_entry("type", &self.type_)?;
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.integration.is_valid() && self.type_.is_valid()
    }

    model_accessors!();
}

/// The S3 archive destination.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveDestinationS3 {
    pub bucket: String,
    pub integration: LogsArchiveIntegrationS3,
    pub path: Option<String>,
    pub type_: LogsArchiveDestinationS3Type,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveDestinationS3 {
    pub fn new(bucket: String, integration: LogsArchiveIntegrationS3, type_: LogsArchiveDestinationS3Type) -> Self {
        Self {
            bucket,
            integration,
            type_,
            ..Default::default()
        }
    }

    pub fn with_path(mut self, value: String) -> Self {
        self.path = Some(value);
        self
    }
}

impl Model for LogsArchiveDestinationS3 {
    const NAME: &'static str = "LogsArchiveDestinationS3";
    const REQUIRED_FIELDS: &'static [&'static str] = &["bucket", "integration", "type"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            bucket: fields.required("bucket")?,
            integration: fields.required("integration")?,
            path: fields.optional("path")?,
            type_: fields.required("type")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("bucket", &self.bucket)?;
        map.serialize_entry("integration", &self.integration)?;
        if let Some(path) = &self.path {
            map.serialize_entry("path", path)?;
        }
        map.serialize_entry("type", &self.type_)?;
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.integration.is_valid() && self.type_.is_valid()
    }

    model_accessors!();
}

/// An archive's destination.
#[derive(Clone, Debug, PartialEq)]
pub enum LogsArchiveDestination {
    Azure(Box<LogsArchiveDestinationAzure>),
    Gcs(Box<LogsArchiveDestinationGCS>),
    S3(Box<LogsArchiveDestinationS3>),
    UnparsedObject(UnparsedObject),
}

impl_one_of!(LogsArchiveDestination {
    Azure(LogsArchiveDestinationAzure),
    Gcs(LogsArchiveDestinationGCS),
    S3(LogsArchiveDestinationS3),
});

/// The attributes associated with the archive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveAttributes {
    /// Where the archive is stored. `None` when the destination is no longer available.
    pub destination: Option<LogsArchiveDestination>,
    /// Whether Datadog tags are kept in the archived log events.
    pub include_tags: Option<bool>,
    pub name: String,
    /// The archive query/filter. Logs matching this query are included in the archive.
    pub query: String,
    /// Maximum scan size for rehydration from this archive.
    pub rehydration_max_scan_size_in_gb: Option<Option<i64>>,
    pub rehydration_tags: Option<Vec<String>>,
    pub state: Option<LogsArchiveState>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveAttributes {
    pub fn new(destination: Option<LogsArchiveDestination>, name: String, query: String) -> Self {
        Self {
            destination,
            name,
            query,
            ..Default::default()
        }
    }

    pub fn with_include_tags(mut self, value: bool) -> Self {
        self.include_tags = Some(value);
        self
    }

    pub fn with_rehydration_max_scan_size_in_gb(mut self, value: Option<i64>) -> Self {
        self.rehydration_max_scan_size_in_gb = Some(value);
        self
    }

    pub fn with_rehydration_tags(mut self, value: Vec<String>) -> Self {
        self.rehydration_tags = Some(value);
        self
    }

    pub fn with_state(mut self, value: LogsArchiveState) -> Self {
        self.state = Some(value);
        self
    }
}

impl Model for LogsArchiveAttributes {
    const NAME: &'static str = "LogsArchiveAttributes";
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "query"];
    const REQUIRED_NULLABLE_FIELDS: &'static [&'static str] = &["destination"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            destination: fields.required("destination")?,
            include_tags: fields.optional("include_tags")?,
            name: fields.required("name")?,
            query: fields.required("query")?,
            rehydration_max_scan_size_in_gb: fields.nullable("rehydration_max_scan_size_in_gb")?,
            rehydration_tags: fields.optional("rehydration_tags")?,
            state: fields.optional("state")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("destination", &self.destination)?;
        if let Some(include_tags) = &self.include_tags {
            map.serialize_entry("include_tags", include_tags)?;
        }
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("query", &self.query)?;
        if let Some(rehydration_max_scan_size_in_gb) = &self.rehydration_max_scan_size_in_gb {
            map.serialize_entry("rehydration_max_scan_size_in_gb", rehydration_max_scan_size_in_gb)?;
        }
        if let Some(rehydration_tags) = &self.rehydration_tags {
            map.serialize_entry("rehydration_tags", rehydration_tags)?;
        }
        if let Some(state) = &self.state {
            map.serialize_entry("state", state)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.destination.is_valid() && self.state.is_valid()
    }

    model_accessors!();
}

/// The definition of an archive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveDefinition {
    pub attributes: Option<LogsArchiveAttributes>,
    pub id: Option<String>,
    /// The type of the resource. The value should always be archives.
    pub type_: String,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveDefinition {
    pub fn new(type_: String) -> Self {
        Self {
            type_,
            ..Default::default()
        }
    }

    pub fn with_attributes(mut self, value: LogsArchiveAttributes) -> Self {
        self.attributes = Some(value);
        self
    }

    pub fn with_id(mut self, value: String) -> Self {
        self.id = Some(value);
        self
    }
}

impl Model for LogsArchiveDefinition {
    const NAME: &'static str = "LogsArchiveDefinition";
    const REQUIRED_FIELDS: &'static [&'static str] = &["type"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            attributes: fields.optional("attributes")?,
            id: fields.optional("id")?,
            type_: fields.required("type")?,
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
        map.serialize_entry("type", &self.type_)?;
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.attributes.is_valid()
    }

    model_accessors!();
}

/// The logs archive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchive {
    pub data: Option<LogsArchiveDefinition>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, value: LogsArchiveDefinition) -> Self {
        self.data = Some(value);
        self
    }
}

impl Model for LogsArchive {
    const NAME: &'static str = "LogsArchive";

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

/// The available archives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchives {
    pub data: Option<Vec<LogsArchiveDefinition>>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchives {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, value: Vec<LogsArchiveDefinition>) -> Self {
        self.data = Some(value);
        self
    }
}

impl Model for LogsArchives {
    const NAME: &'static str = "LogsArchives";

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

/// The attributes associated with the archive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveCreateRequestAttributes {
    pub destination: LogsArchiveDestination,
    pub include_tags: Option<bool>,
    pub name: String,
    pub query: String,
    pub rehydration_max_scan_size_in_gb: Option<Option<i64>>,
    pub rehydration_tags: Option<Vec<String>>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveCreateRequestAttributes {
    pub fn new(destination: LogsArchiveDestination, name: String, query: String) -> Self {
        Self {
            destination,
            name,
            query,
            ..Default::default()
        }
    }

    pub fn with_include_tags(mut self, value: bool) -> Self {
        self.include_tags = Some(value);
        self
    }

    pub fn with_rehydration_max_scan_size_in_gb(mut self, value: Option<i64>) -> Self {
        self.rehydration_max_scan_size_in_gb = Some(value);
        self
    }

    pub fn with_rehydration_tags(mut self, value: Vec<String>) -> Self {
        self.rehydration_tags = Some(value);
        self
    }
}

impl Model for LogsArchiveCreateRequestAttributes {
    const NAME: &'static str = "LogsArchiveCreateRequestAttributes";
    const REQUIRED_FIELDS: &'static [&'static str] = &["destination", "name", "query"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            destination: fields.required("destination")?,
            include_tags: fields.optional("include_tags")?,
            name: fields.required("name")?,
            query: fields.required("query")?,
            rehydration_max_scan_size_in_gb: fields.nullable("rehydration_max_scan_size_in_gb")?,
            rehydration_tags: fields.optional("rehydration_tags")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("destination", &self.destination)?;
        if let Some(include_tags) = &self.include_tags {
            map.serialize_entry("include_tags", include_tags)?;
        }
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("query", &self.query)?;
        if let Some(rehydration_max_scan_size_in_gb) = &self.rehydration_max_scan_size_in_gb {
            map.serialize_entry("rehydration_max_scan_size_in_gb", rehydration_max_scan_size_in_gb)?;
        }
        if let Some(rehydration_tags) = &self.rehydration_tags {
            map.serialize_entry("rehydration_tags", rehydration_tags)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.destination.is_valid()
    }

    model_accessors!();
}

/// The definition of an archive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveCreateRequestDefinition {
    pub attributes: Option<LogsArchiveCreateRequestAttributes>,
    pub type_: String,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveCreateRequestDefinition {
    pub fn new(type_: String) -> Self {
        Self {
            type_,
            ..Default::default()
        }
    }

    pub fn with_attributes(mut self, value: LogsArchiveCreateRequestAttributes) -> Self {
        self.attributes = Some(value);
        self
    }
}

impl Model for LogsArchiveCreateRequestDefinition {
    const NAME: &'static str = "LogsArchiveCreateRequestDefinition";
    const REQUIRED_FIELDS: &'static [&'static str] = &["type"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            attributes: fields.optional("attributes")?,
            type_: fields.required("type")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(attributes) = &self.attributes {
            map.serialize_entry("attributes", attributes)?;
        }
        map.serialize_entry("type", &self.type_)?;
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.attributes.is_valid()
    }

    model_accessors!();
}

/// The logs archive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveCreateRequest {
    pub data: Option<LogsArchiveCreateRequestDefinition>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveCreateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, value: LogsArchiveCreateRequestDefinition) -> Self {
        self.data = Some(value);
        self
    }
}

impl Model for LogsArchiveCreateRequest {
    const NAME: &'static str = "LogsArchiveCreateRequest";

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

/// The attributes associated with the archive order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveOrderAttributes {
    /// An ordered array of `<ARCHIVE_ID>` strings, the order of archive IDs
    /// in the array define the overall archives order for Datadog.
    pub archive_ids: Vec<String>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveOrderAttributes {
    pub fn new(archive_ids: Vec<String>) -> Self {
        Self {
            archive_ids,
            ..Default::default()
        }
    }
}

impl Model for LogsArchiveOrderAttributes {
    const NAME: &'static str = "LogsArchiveOrderAttributes";
    const REQUIRED_FIELDS: &'static [&'static str] = &["archive_ids"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            archive_ids: fields.required("archive_ids")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("archive_ids", &self.archive_ids)?;
        Ok(())
    }

    model_accessors!();
}

/// The definition of an archive order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveOrderDefinition {
    pub attributes: LogsArchiveOrderAttributes,
    pub type_: LogsArchiveOrderDefinitionType,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveOrderDefinition {
    pub fn new(attributes: LogsArchiveOrderAttributes, type_: LogsArchiveOrderDefinitionType) -> Self {
        Self {
            attributes,
            type_,
            ..Default::default()
        }
    }
}

impl Model for LogsArchiveOrderDefinition {
    const NAME: &'static str = "LogsArchiveOrderDefinition";
    const REQUIRED_FIELDS: &'static [&'static str] = &["attributes", "type"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            attributes: fields.required("attributes")?,
            type_: fields.required("type")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("attributes", &self.attributes)?;
        map.serialize_entry("type", &self.type_)?;
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.attributes.is_valid() && self.type_.is_valid()
    }

    model_accessors!();
}

/// A ordered list of archive IDs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogsArchiveOrder {
    pub data: Option<LogsArchiveOrderDefinition>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl LogsArchiveOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, value: LogsArchiveOrderDefinition) -> Self {
        self.data = Some(value);
        self
    }
}

impl Model for LogsArchiveOrder {
    const NAME: &'static str = "LogsArchiveOrder";

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

/// Relationship to role object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationshipToRoleData {
    /// The unique identifier of the role.
    pub id: Option<String>,
    pub type_: Option<RolesType>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl RelationshipToRoleData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, value: String) -> Self {
        self.id = Some(value);
        self
    }

    pub fn with_type(mut self, value: RolesType) -> Self {
        self.type_ = Some(value);
        self
    }
}

impl Model for RelationshipToRoleData {
    const NAME: &'static str = "RelationshipToRoleData";

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

/// Relationship to role.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationshipToRole {
    pub data: Option<RelationshipToRoleData>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl RelationshipToRole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, value: RelationshipToRoleData) -> Self {
        self.data = Some(value);
        self
    }
}

impl Model for RelationshipToRole {
    const NAME: &'static str = "RelationshipToRole";

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

impl_model!(
    LogsArchiveIntegrationAzure,
    LogsArchiveIntegrationGCS,
    LogsArchiveIntegrationS3,
    LogsArchiveDestinationAzure,
    LogsArchiveDestinationGCS,
    LogsArchiveDestinationS3,
    LogsArchiveAttributes,
    LogsArchiveDefinition,
    LogsArchive,
    LogsArchives,
    LogsArchiveCreateRequestAttributes,
    LogsArchiveCreateRequestDefinition,
    LogsArchiveCreateRequest,
    LogsArchiveOrderAttributes,
    LogsArchiveOrderDefinition,
    LogsArchiveOrder,
    RelationshipToRoleData,
    RelationshipToRole,
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn archive(destination: serde_json::Value) -> serde_json::Value {
        json!({
            "data": {
                "id": "a2zcMylnM4OCHpYusxIi3g",
                "type": "archives",
                "attributes": {
                    "name": "Nginx Archive",
                    "query": "source:nginx",
                    "destination": destination,
                    "state": "WORKING"
                }
            }
        })
    }

    #[test]
    fn test_s3_destination_is_selected() {
        let archive: LogsArchive = serde_json::from_value(archive(json!({
            "type": "s3",
            "bucket": "bucket-name",
            "integration": {"account_id": "123456789012", "role_name": "DatadogRole"}
        })))
        .unwrap();
        let attributes = archive.data.unwrap().attributes.unwrap();
        assert!(matches!(attributes.destination, Some(LogsArchiveDestination::S3(_))));
        assert_eq!(attributes.state, Some(LogsArchiveState::WORKING));
    }

    #[test]
    fn test_azure_destination_is_selected() {
        let archive: LogsArchive = serde_json::from_value(archive(json!({
            "type": "azure",
            "container": "container-name",
            "storage_account": "account-name",
            "integration": {"client_id": "aaaa", "tenant_id": "bbbb"}
        })))
        .unwrap();
        let destination = archive.data.unwrap().attributes.unwrap().destination.unwrap();
        let LogsArchiveDestination::Azure(azure) = destination else {
            panic!("expected an azure destination, got {destination:?}");
        };
        assert_eq!(azure.storage_account, "account-name");
    }

    #[test]
    fn test_unknown_destination_keeps_archive_raw() {
        let payload = archive(json!({"type": "hdfs", "path": "/archives"}));
        let archive: LogsArchive = serde_json::from_value(payload.clone()).unwrap();
        assert!(archive.is_unparsed());
        assert_eq!(archive.data, None);
        assert_eq!(serde_json::to_value(&archive).unwrap(), payload);

        let attributes: LogsArchiveAttributes =
            serde_json::from_value(payload["data"]["attributes"].clone()).unwrap();
        assert!(attributes.is_unparsed());
    }

    #[test]
    fn test_null_destination() {
        let archive: LogsArchive = serde_json::from_value(archive(json!(null))).unwrap();
        let attributes = archive.data.unwrap().attributes.unwrap();
        assert!(!attributes.is_unparsed());
        assert_eq!(attributes.destination, None);
    }

    #[test]
    fn test_destination_is_required_even_if_nullable() {
        let err = serde_json::from_value::<LogsArchiveAttributes>(json!({"name": "n", "query": "q"}))
            .unwrap_err();
        assert!(err.to_string().contains("required field destination missing"));
    }

    #[test]
    fn test_order_encoding() {
        let order = LogsArchiveOrder::new().with_data(LogsArchiveOrderDefinition::new(
            LogsArchiveOrderAttributes::new(vec!["a".to_string(), "b".to_string()]),
            LogsArchiveOrderDefinitionType::ARCHIVE_ORDER,
        ));
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({"data": {"attributes": {"archive_ids": ["a", "b"]}, "type": "archive_order"}})
        );
    }
}
