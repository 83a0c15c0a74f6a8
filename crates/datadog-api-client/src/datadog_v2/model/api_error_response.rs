// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde::ser::SerializeMap;

use crate::datadog::model::{
    impl_model, model_accessors, AdditionalProperties, FieldReader, Model, UnparsedObject,
};

/// API error response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct APIErrorResponse {
    /// A list of errors.
    pub errors: Vec<String>,
    pub additional_properties: AdditionalProperties,
    pub unparsed: Option<UnparsedObject>,
}

impl APIErrorResponse {
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            errors,
            ..Default::default()
        }
    }
}

impl Model for APIErrorResponse {
    const NAME: &'static str = "APIErrorResponse";
    const REQUIRED_FIELDS: &'static [&'static str] = &["errors"];

    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
        Ok(Self {
            errors: fields.required("errors")?,
            ..Default::default()
        })
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("errors", &self.errors)?;
        Ok(())
    }

    model_accessors!();
}

impl_model!(APIErrorResponse);
