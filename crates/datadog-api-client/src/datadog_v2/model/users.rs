// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! User and creator objects referenced by other resources.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;

use crate::datadog::enums::string_enum;
use crate::datadog::model::{
    impl_model, model_accessors, AdditionalProperties, FieldReader, Model, UnparsedObject, Validate,
};

string_enum! {
    /// Users resource type.
    pub enum UsersType {
        USERS = "users",
    }
}

/// Attributes of user object returned by the API.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserAttributes {
    /// Creation time of the user.
    pub created_at: Option<DateTime<Utc>>,
    pub disabled: Option<bool>,
    pub email: Option<String>,
    pub handle: Option<String>,
    /// URL of the user's icon.
    pub icon: Option<String>,
    pub modified_at: Option<DateTime<Utc>>,
    /// Name of the user. Sent as `null` when the user never set one.
    pub name: Option<Option<String>>,
    /// Whether the user is a service account.
    pub service_account: Option<bool>,
    pub status: Option<String>,
    pub title: Option<Option<String>>,
    pub verified: Option<bool>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl UserAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_created_at(mut self, value: DateTime<Utc>) -> Self {
        self.created_at = Some(value);
        self
    }

    pub fn with_disabled(mut self, value: bool) -> Self {
        self.disabled = Some(value);
        self
    }

    pub fn with_email(mut self, value: String) -> Self {
        self.email = Some(value);
        self
    }

    pub fn with_handle(mut self, value: String) -> Self {
        self.handle = Some(value);
        self
    }

    pub fn with_icon(mut self, value: String) -> Self {
        self.icon = Some(value);
        self
    }

    pub fn with_modified_at(mut self, value: DateTime<Utc>) -> Self {
        self.modified_at = Some(value);
        self
    }

    pub fn with_name(mut self, value: Option<String>) -> Self {
        self.name = Some(value);
        self
    }

    pub fn with_service_account(mut self, value: bool) -> Self {
        self.service_account = Some(value);
        self
    }

    pub fn with_status(mut self, value: String) -> Self {
        self.status = Some(value);
        self
    }

    pub fn with_title(mut self, value: Option<String>) -> Self {
        self.title = Some(value);
        self
    }

    pub fn with_verified(mut self, value: bool) -> Self {
        self.verified = Some(value);
        self
    }
}

impl Model for UserAttributes {
    const NAME: &'static str = "UserAttributes";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            created_at: fields.optional("created_at")?,
            disabled: fields.optional("disabled")?,
            email: fields.optional("email")?,
            handle: fields.optional("handle")?,
            icon: fields.optional("icon")?,
            modified_at: fields.optional("modified_at")?,
            name: fields.nullable("name")?,
            service_account: fields.optional("service_account")?,
            status: fields.optional("status")?,
            title: fields.nullable("title")?,
            verified: fields.optional("verified")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(created_at) = &self.created_at {
            map.serialize_entry("created_at", created_at)?;
        }
        if let Some(disabled) = &self.disabled {
            map.serialize_entry("disabled", disabled)?;
        }
        if let Some(email) = &self.email {
            map.serialize_entry("email", email)?;
        }
        if let Some(handle) = &self.handle {
            map.serialize_entry("handle", handle)?;
        }
        if let Some(icon) = &self.icon {
            map.serialize_entry("icon", icon)?;
        }
        if let Some(modified_at) = &self.modified_at {
            map.serialize_entry("modified_at", modified_at)?;
        }
        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        if let Some(service_account) = &self.service_account {
            map.serialize_entry("service_account", service_account)?;
        }
        if let Some(status) = &self.status {
            map.serialize_entry("status", status)?;
        }
        if let Some(title) = &self.title {
            map.serialize_entry("title", title)?;
        }
        if let Some(verified) = &self.verified {
            map.serialize_entry("verified", verified)?;
        }
        Ok(())
    }

    model_accessors!();
}

/// User object returned by the API.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct User {
    pub attributes: Option<UserAttributes>,
    /// ID of the user.
    pub id: Option<String>,
    /// Always `users`.
    pub type_: Option<UsersType>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl User {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(mut self, value: UserAttributes) -> Self {
        self.attributes = Some(value);
        self
    }

    pub fn with_id(mut self, value: String) -> Self {
        self.id = Some(value);
        self
    }

    pub fn with_type(mut self, value: UsersType) -> Self {
        self.type_ = Some(value);
        self
    }
}

impl Model for User {
    const NAME: &'static str = "User";

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

/// Relationship to user object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationshipToUserData {
    /// A unique identifier that represents the user.
    pub id: String,
    pub type_: UsersType,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl RelationshipToUserData {
    pub fn new(id: String, type_: UsersType) -> Self {
        Self {
            id,
            type_,
            ..Default::default()
        }
    }
}

impl Model for RelationshipToUserData {
    const NAME: &'static str = "RelationshipToUserData";
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

/// Relationship to user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationshipToUser {
    pub data: RelationshipToUserData,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl RelationshipToUser {
    pub fn new(data: RelationshipToUserData) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }
}

impl Model for RelationshipToUser {
    const NAME: &'static str = "RelationshipToUser";
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

/// Creator of the object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Creator {
    pub email: Option<String>,
    pub handle: Option<String>,
    pub name: Option<Option<String>>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl Creator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, value: String) -> Self {
        self.email = Some(value);
        self
    }

    pub fn with_handle(mut self, value: String) -> Self {
        self.handle = Some(value);
        self
    }

    pub fn with_name(mut self, value: Option<String>) -> Self {
        self.name = Some(value);
        self
    }
}

impl Model for Creator {
    const NAME: &'static str = "Creator";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            email: fields.optional("email")?,
            handle: fields.optional("handle")?,
            name: fields.nullable("name")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(email) = &self.email {
            map.serialize_entry("email", email)?;
        }
        if let Some(handle) = &self.handle {
            map.serialize_entry("handle", handle)?;
        }
        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        Ok(())
    }

    model_accessors!();
}

impl_model!(
    UserAttributes,
    User,
    RelationshipToUserData,
    RelationshipToUser,
    Creator,
);
