// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;

use crate::datadog::enums::string_enum;
use crate::datadog::model::{
    impl_model, model_accessors, AdditionalProperties, FieldReader, Model, UnparsedObject, Validate,
};
use crate::datadog_v2::model::users::Creator;

string_enum! {
    /// The type of the dashboard.
    pub enum DashboardType {
        CUSTOM_TIMEBOARD = "custom_timeboard",
        CUSTOM_SCREENBOARD = "custom_screenboard",
        INTEGRATION_SCREENBOARD = "integration_screenboard",
        INTEGRATION_TIMEBOARD = "integration_timeboard",
        HOST_TIMEBOARD = "host_timeboard",
    }
}

/// A dashboard within a list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardListItem {
    pub author: Option<Creator>,
    /// Date of creation of the dashboard.
    pub created: Option<DateTime<Utc>>,
    /// URL to the icon of the dashboard.
    pub icon: Option<String>,
    /// ID of the dashboard.
    pub id: String,
    /// Whether or not the dashboard is in the favorites.
    pub is_favorite: Option<bool>,
    pub is_read_only: Option<bool>,
    /// Whether or not the dashboard is shared.
    pub is_shared: Option<bool>,
    pub modified: Option<DateTime<Utc>>,
    /// Popularity of the dashboard.
    pub popularity: Option<i32>,
    pub title: Option<String>,
    pub type_: DashboardType,
    /// URL path to the dashboard.
    pub url: Option<String>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl DashboardListItem {
    pub fn new(id: String, type_: DashboardType) -> Self {
        Self {
            id,
            type_,
            ..Default::default()
        }
    }
}

impl Model for DashboardListItem {
    const NAME: &'static str = "DashboardListItem";
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "type"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            author: fields.optional("author")?,
            created: fields.optional("created")?,
            icon: fields.optional("icon")?,
            id: fields.required("id")?,
            is_favorite: fields.optional("is_favorite")?,
            is_read_only: fields.optional("is_read_only")?,
            is_shared: fields.optional("is_shared")?,
            modified: fields.optional("modified")?,
            popularity: fields.optional("popularity")?,
            title: fields.optional("title")?,
            type_: fields.required("type")?,
            url: fields.optional("url")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(author) = &self.author {
            map.serialize_entry("author", author)?;
        }
        if let Some(created) = &self.created {
            map.serialize_entry("created", created)?;
        }
        if let Some(icon) = &self.icon {
            map.serialize_entry("icon", icon)?;
        }
        map.serialize_entry("id", &self.id)?;
        if let Some(is_favorite) = &self.is_favorite {
            map.serialize_entry("is_favorite", is_favorite)?;
        }
        if let Some(is_read_only) = &self.is_read_only {
            map.serialize_entry("is_read_only", is_read_only)?;
        }
        if let Some(is_shared) = &self.is_shared {
            map.serialize_entry("is_shared", is_shared)?;
        }
        if let Some(modified) = &self.modified {
            map.serialize_entry("modified", modified)?;
        }
        if let Some(popularity) = &self.popularity {
            map.serialize_entry("popularity", popularity)?;
        }
        if let Some(title) = &self.title {
            map.serialize_entry("title", title)?;
        }
        map.serialize_entry("type", &self.type_)?;
        if let Some(url) = &self.url {
            map.serialize_entry("url", url)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.author.is_valid() && self.type_.is_valid()
    }

    model_accessors!();
}

/// Dashboards within a list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardListItems {
    /// List of dashboards in the dashboard list.
    pub dashboards: Vec<DashboardListItem>,
    /// Number of dashboards in the dashboard list.
    pub total: Option<i64>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl DashboardListItems {
    pub fn new(dashboards: Vec<DashboardListItem>) -> Self {
        Self {
            dashboards,
            ..Default::default()
        }
    }
}

impl Model for DashboardListItems {
    const NAME: &'static str = "DashboardListItems";
    const REQUIRED_FIELDS: &'static [&'static str] = &["dashboards"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            dashboards: fields.required("dashboards")?,
            total: fields.optional("total")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("dashboards", &self.dashboards)?;
        if let Some(total) = &self.total {
            map.serialize_entry("total", total)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// A dashboard within a list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardListItemRequest {
    /// ID of the dashboard.
    pub id: String,
    pub type_: DashboardType,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl DashboardListItemRequest {
    pub fn new(id: String, type_: DashboardType) -> Self {
        Self {
            id,
            type_,
            ..Default::default()
        }
    }
}

impl Model for DashboardListItemRequest {
    const NAME: &'static str = "DashboardListItemRequest";
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "type"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: fields.required("id")?,
            type_: fields.required("type")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("type", &self.type_)?;
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.type_.is_valid()
    }

    model_accessors!();
}

/// A dashboard within a list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardListItemResponse {
    pub id: String,
    pub type_: DashboardType,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl DashboardListItemResponse {
    pub fn new(id: String, type_: DashboardType) -> Self {
        Self {
            id,
            type_,
            ..Default::default()
        }
    }
}

impl Model for DashboardListItemResponse {
    const NAME: &'static str = "DashboardListItemResponse";
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "type"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: fields.required("id")?,
            type_: fields.required("type")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("type", &self.type_)?;
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.type_.is_valid()
    }

    model_accessors!();
}

/// Request containing a list of dashboards to add.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardListAddItemsRequest {
    /// List of dashboards to add the dashboard list.
    pub dashboards: Option<Vec<DashboardListItemRequest>>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl DashboardListAddItemsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dashboards(mut self, value: Vec<DashboardListItemRequest>) -> Self {
        self.dashboards = Some(value);
        self
    }
}

impl Model for DashboardListAddItemsRequest {
    const NAME: &'static str = "DashboardListAddItemsRequest";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            dashboards: fields.optional("dashboards")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(dashboards) = &self.dashboards {
            map.serialize_entry("dashboards", dashboards)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// Response containing a list of added dashboards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardListAddItemsResponse {
    pub added_dashboards_to_list: Option<Vec<DashboardListItemResponse>>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl DashboardListAddItemsResponse {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for DashboardListAddItemsResponse {
    const NAME: &'static str = "DashboardListAddItemsResponse";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            added_dashboards_to_list: fields.optional("added_dashboards_to_list")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(added_dashboards_to_list) = &self.added_dashboards_to_list {
            map.serialize_entry("added_dashboards_to_list", added_dashboards_to_list)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// Request containing a list of dashboards to delete.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardListDeleteItemsRequest {
    pub dashboards: Option<Vec<DashboardListItemRequest>>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl DashboardListDeleteItemsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dashboards(mut self, value: Vec<DashboardListItemRequest>) -> Self {
        self.dashboards = Some(value);
        self
    }
}

impl Model for DashboardListDeleteItemsRequest {
    const NAME: &'static str = "DashboardListDeleteItemsRequest";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            dashboards: fields.optional("dashboards")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(dashboards) = &self.dashboards {
            map.serialize_entry("dashboards", dashboards)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// Response containing a list of deleted dashboards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardListDeleteItemsResponse {
    pub deleted_dashboards_from_list: Option<Vec<DashboardListItemResponse>>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl DashboardListDeleteItemsResponse {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for DashboardListDeleteItemsResponse {
    const NAME: &'static str = "DashboardListDeleteItemsResponse";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            deleted_dashboards_from_list: fields.optional("deleted_dashboards_from_list")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(deleted_dashboards_from_list) = &self.deleted_dashboards_from_list {
            map.serialize_entry("deleted_dashboards_from_list", deleted_dashboards_from_list)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// Request containing the list of dashboards to update to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardListUpdateItemsRequest {
    /// List of dashboards to update the dashboard list to.
    pub dashboards: Option<Vec<DashboardListItemRequest>>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl DashboardListUpdateItemsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dashboards(mut self, value: Vec<DashboardListItemRequest>) -> Self {
        self.dashboards = Some(value);
        self
    }
}

impl Model for DashboardListUpdateItemsRequest {
    const NAME: &'static str = "DashboardListUpdateItemsRequest";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            dashboards: fields.optional("dashboards")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(dashboards) = &self.dashboards {
            map.serialize_entry("dashboards", dashboards)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// Response containing a list of updated dashboards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardListUpdateItemsResponse {
    pub dashboards: Option<Vec<DashboardListItemResponse>>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl DashboardListUpdateItemsResponse {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for DashboardListUpdateItemsResponse {
    const NAME: &'static str = "DashboardListUpdateItemsResponse";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            dashboards: fields.optional("dashboards")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(dashboards) = &self.dashboards {
            map.serialize_entry("dashboards", dashboards)?;
        }
        Ok(())
    }

    model_accessors!();
}

impl_model!(
    DashboardListItem,
    DashboardListItems,
    DashboardListItemRequest,
    DashboardListItemResponse,
    DashboardListAddItemsRequest,
    DashboardListAddItemsResponse,
    DashboardListDeleteItemsRequest,
    DashboardListDeleteItemsResponse,
    DashboardListUpdateItemsRequest,
    DashboardListUpdateItemsResponse,
);
