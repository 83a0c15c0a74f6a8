// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;

use crate::datadog::enums::string_enum;
use crate::datadog::model::{
    impl_model, impl_one_of, model_accessors, AdditionalProperties, FieldReader, Model,
    UnparsedObject, Validate,
};
use crate::datadog_v2::model::users::{RelationshipToUser, User};

string_enum! {
    /// Incident Team resource type.
    pub enum IncidentTeamType {
        TEAMS = "teams",
    }
}

string_enum! {
    /// Object related to an incident.
    pub enum IncidentRelatedObject {
        USERS = "users",
    }
}

/// The incident team's attributes for a create request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentTeamCreateAttributes {
    /// Name of the incident team.
    pub name: String,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IncidentTeamCreateAttributes {
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }
}

impl Model for IncidentTeamCreateAttributes {
    const NAME: &'static str = "IncidentTeamCreateAttributes";
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            name: fields.required("name")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("name", &self.name)?;
        Ok(())
    }

    model_accessors!();
}

/// The incident team's attributes for an update request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentTeamUpdateAttributes {
    pub name: String,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IncidentTeamUpdateAttributes {
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }
}

impl Model for IncidentTeamUpdateAttributes {
    const NAME: &'static str = "IncidentTeamUpdateAttributes";
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            name: fields.required("name")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("name", &self.name)?;
        Ok(())
    }

    model_accessors!();
}

/// The incident team's attributes from a response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentTeamResponseAttributes {
    /// Timestamp of when the incident team was created.
    pub created: Option<DateTime<Utc>>,
    /// Timestamp of when the incident team was modified.
    pub modified: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IncidentTeamResponseAttributes {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for IncidentTeamResponseAttributes {
    const NAME: &'static str = "IncidentTeamResponseAttributes";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            created: fields.optional("created")?,
            modified: fields.optional("modified")?,
            name: fields.optional("name")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(created) = &self.created {
            map.serialize_entry("created", created)?;
        }
        if let Some(modified) = &self.modified {
            map.serialize_entry("modified", modified)?;
        }
        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// The incident team's relationships.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentTeamRelationships {
    pub created_by: Option<RelationshipToUser>,
    pub last_modified_by: Option<RelationshipToUser>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IncidentTeamRelationships {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_created_by(mut self, value: RelationshipToUser) -> Self {
        self.created_by = Some(value);
        self
    }

    pub fn with_last_modified_by(mut self, value: RelationshipToUser) -> Self {
        self.last_modified_by = Some(value);
        self
    }
}

impl Model for IncidentTeamRelationships {
    const NAME: &'static str = "IncidentTeamRelationships";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            created_by: fields.optional("created_by")?,
            last_modified_by: fields.optional("last_modified_by")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(created_by) = &self.created_by {
            map.serialize_entry("created_by", created_by)?;
        }
        if let Some(last_modified_by) = &self.last_modified_by {
            map.serialize_entry("last_modified_by", last_modified_by)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.created_by.is_valid() && self.last_modified_by.is_valid()
    }

    model_accessors!();
}

/// Incident Team data for a create request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentTeamCreateData {
    pub attributes: Option<IncidentTeamCreateAttributes>,
    pub relationships: Option<IncidentTeamRelationships>,
    pub type_: IncidentTeamType,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IncidentTeamCreateData {
    pub fn new(type_: IncidentTeamType) -> Self {
        Self {
            type_,
            ..Default::default()
        }
    }

    pub fn with_attributes(mut self, value: IncidentTeamCreateAttributes) -> Self {
        self.attributes = Some(value);
        self
    }

    pub fn with_relationships(mut self, value: IncidentTeamRelationships) -> Self {
        self.relationships = Some(value);
        self
    }
}

impl Model for IncidentTeamCreateData {
    const NAME: &'static str = "IncidentTeamCreateData";
    const REQUIRED_FIELDS: &'static [&'static str] = &["type"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            attributes: fields.optional("attributes")?,
            relationships: fields.optional("relationships")?,
            type_: fields.required("type")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(attributes) = &self.attributes {
            map.serialize_entry("attributes", attributes)?;
        }
        if let Some(relationships) = &self.relationships {
            map.serialize_entry("relationships", relationships)?;
        }
        map.serialize_entry("type", &self.type_)?;
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.attributes.is_valid() && self.relationships.is_valid() && self.type_.is_valid()
    }

    model_accessors!();
}

/// Create request with an incident team payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentTeamCreateRequest {
    pub data: IncidentTeamCreateData,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IncidentTeamCreateRequest {
    pub fn new(data: IncidentTeamCreateData) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }
}

impl Model for IncidentTeamCreateRequest {
    const NAME: &'static str = "IncidentTeamCreateRequest";
    const REQUIRED_FIELDS: &'static [&'static str] = &["data"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            data: fields.required("data")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("data", &self.data)?;
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.data.is_valid()
    }

    model_accessors!();
}

/// Incident Team data for an update request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentTeamUpdateData {
    pub attributes: Option<IncidentTeamUpdateAttributes>,
    /// The team's ID.
    pub id: Option<String>,
    pub relationships: Option<IncidentTeamRelationships>,
    pub type_: IncidentTeamType,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IncidentTeamUpdateData {
    pub fn new(type_: IncidentTeamType) -> Self {
        Self {
            type_,
            ..Default::default()
        }
    }

    pub fn with_attributes(mut self, value: IncidentTeamUpdateAttributes) -> Self {
        self.attributes = Some(value);
        self
    }

    pub fn with_id(mut self, value: String) -> Self {
        self.id = Some(value);
        self
    }

    pub fn with_relationships(mut self, value: IncidentTeamRelationships) -> Self {
        self.relationships = Some(value);
        self
    }
}

impl Model for IncidentTeamUpdateData {
    const NAME: &'static str = "IncidentTeamUpdateData";
    const REQUIRED_FIELDS: &'static [&'static str] = &["type"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            attributes: fields.optional("attributes")?,
            id: fields.optional("id")?,
            relationships: fields.optional("relationships")?,
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
        if let Some(relationships) = &self.relationships {
            map.serialize_entry("relationships", relationships)?;
        }
        map.serialize_entry("type", &self.type_)?;
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.attributes.is_valid() && self.relationships.is_valid() && self.type_.is_valid()
    }

    model_accessors!();
}

/// Update request with an incident team payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentTeamUpdateRequest {
    pub data: IncidentTeamUpdateData,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IncidentTeamUpdateRequest {
    pub fn new(data: IncidentTeamUpdateData) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }
}

impl Model for IncidentTeamUpdateRequest {
    const NAME: &'static str = "IncidentTeamUpdateRequest";
    const REQUIRED_FIELDS: &'static [&'static str] = &["data"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            data: fields.required("data")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("data", &self.data)?;
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.data.is_valid()
    }

    model_accessors!();
}

/// Incident Team data from a response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentTeamResponseData {
    pub attributes: Option<IncidentTeamResponseAttributes>,
    pub id: Option<String>,
    pub relationships: Option<IncidentTeamRelationships>,
    pub type_: Option<IncidentTeamType>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IncidentTeamResponseData {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for IncidentTeamResponseData {
    const NAME: &'static str = "IncidentTeamResponseData";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            attributes: fields.optional("attributes")?,
            id: fields.optional("id")?,
            relationships: fields.optional("relationships")?,
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
        if let Some(relationships) = &self.relationships {
            map.serialize_entry("relationships", relationships)?;
        }
        if let Some(value) = &self.type_ {
            map.serialize_entry("type", value)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.attributes.is_valid() && self.relationships.is_valid() && self.type_.is_valid()
    }

    model_accessors!();
}

/// An object related to an incident team which is present in the
/// `included` payload.
#[derive(Clone, Debug, PartialEq)]
pub enum IncidentTeamIncludedItems {
    User(Box<User>),
    UnparsedObject(UnparsedObject),
}

impl_one_of!(IncidentTeamIncludedItems {
    User(User),
});

/// Response with an incident team payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentTeamResponse {
    pub data: IncidentTeamResponseData,
    /// Included objects from relationships.
    pub included: Option<Vec<IncidentTeamIncludedItems>>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IncidentTeamResponse {
    pub fn new(data: IncidentTeamResponseData) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    pub fn with_included(mut self, value: Vec<IncidentTeamIncludedItems>) -> Self {
        self.included = Some(value);
        self
    }
}

impl Model for IncidentTeamResponse {
    const NAME: &'static str = "IncidentTeamResponse";
    const REQUIRED_FIELDS: &'static [&'static str] = &["data"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            data: fields.required("data")?,
            included: fields.optional("included")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("data", &self.data)?;
        if let Some(included) = &self.included {
            map.serialize_entry("included", included)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.data.is_valid()
    }

    model_accessors!();
}

/// Pagination properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentResponseMetaPagination {
    /// The index of the first element in the next page of results.
    pub next_offset: Option<i64>,
    pub offset: Option<i64>,
    /// Maximum size of pages to return.
    pub size: Option<i64>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IncidentResponseMetaPagination {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for IncidentResponseMetaPagination {
    const NAME: &'static str = "IncidentResponseMetaPagination";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            next_offset: fields.optional("next_offset")?,
            offset: fields.optional("offset")?,
            size: fields.optional("size")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(next_offset) = &self.next_offset {
            map.serialize_entry("next_offset", next_offset)?;
        }
        if let Some(offset) = &self.offset {
            map.serialize_entry("offset", offset)?;
        }
        if let Some(size) = &self.size {
            map.serialize_entry("size", size)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// The metadata object containing pagination metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentResponseMeta {
    pub pagination: Option<IncidentResponseMetaPagination>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IncidentResponseMeta {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for IncidentResponseMeta {
    const NAME: &'static str = "IncidentResponseMeta";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            pagination: fields.optional("pagination")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(pagination) = &self.pagination {
            map.serialize_entry("pagination", pagination)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.pagination.is_valid()
    }

    model_accessors!();
}

/// Response with a list of incident team payloads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentTeamsResponse {
    pub data: Vec<IncidentTeamResponseData>,
    pub included: Option<Vec<IncidentTeamIncludedItems>>,
    pub meta: Option<IncidentResponseMeta>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl IncidentTeamsResponse {
    pub fn new(data: Vec<IncidentTeamResponseData>) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }
}

impl Model for IncidentTeamsResponse {
    const NAME: &'static str = "IncidentTeamsResponse";
    const REQUIRED_FIELDS: &'static [&'static str] = &["data"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            data: fields.required("data")?,
            included: fields.optional("included")?,
            meta: fields.optional("meta")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("data", &self.data)?;
        if let Some(included) = &self.included {
            map.serialize_entry("included", included)?;
        }
        if let Some(meta) = &self.meta {
            map.serialize_entry("meta", meta)?;
        }
        Ok(())
    }

    fn fields_valid(&self) -> bool {
        self.meta.is_valid()
    }

    model_accessors!();
}

impl_model!(
    IncidentTeamCreateAttributes,
    IncidentTeamUpdateAttributes,
    IncidentTeamResponseAttributes,
    IncidentTeamRelationships,
    IncidentTeamCreateData,
    IncidentTeamCreateRequest,
    IncidentTeamUpdateData,
    IncidentTeamUpdateRequest,
    IncidentTeamResponseData,
    IncidentTeamResponse,
    IncidentResponseMetaPagination,
    IncidentResponseMeta,
    IncidentTeamsResponse,
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_encoding() {
        let request = IncidentTeamCreateRequest::new(
            IncidentTeamCreateData::new(IncidentTeamType::TEAMS)
                .with_attributes(IncidentTeamCreateAttributes::new("team name".to_string())),
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"data": {"attributes": {"name": "team name"}, "type": "teams"}})
        );
    }

    #[test]
    fn test_unknown_included_item_stays_raw() {
        let response: IncidentTeamResponse = serde_json::from_value(json!({
            "data": {"id": "t1", "type": "teams", "attributes": {"name": "ops"}},
            "included": [
                {"id": "u1", "type": "users", "attributes": {"handle": "a@b.c"}},
                {"id": "x1", "type": "services"}
            ]
        }))
        .unwrap();
        assert!(!response.is_unparsed());
        let included = response.included.as_ref().unwrap();
        assert!(matches!(included[0], IncidentTeamIncludedItems::User(_)));
        assert!(matches!(included[1], IncidentTeamIncludedItems::UnparsedObject(_)));
    }

    #[test]
    fn test_teams_response_with_pagination() {
        let response: IncidentTeamsResponse = serde_json::from_value(json!({
            "data": [{"id": "t1", "type": "teams", "attributes": {"name": "ops", "created": "2020-01-01T00:00:00Z"}}],
            "meta": {"pagination": {"next_offset": 1, "offset": 0, "size": 1}}
        }))
        .unwrap();
        assert_eq!(response.data.len(), 1);
        let pagination = response.meta.unwrap().pagination.unwrap();
        assert_eq!(pagination.next_offset, Some(1));
        assert_eq!(pagination.size, Some(1));
    }
}
