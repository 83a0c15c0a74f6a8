// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Building blocks shared by every API model.
//!
//! Records implement [`Model`] and get their serde implementations from
//! [`impl_model!`]. Decoding follows a fixed sequence:
//!
//! 1. the payload must be a JSON object;
//! 2. required fields must be present (and non-null unless declared nullable),
//!    otherwise decoding fails with [`DecodeError::MissingField`];
//! 3. known fields are decoded through a [`FieldReader`];
//! 4. keys the record does not know about are kept as additional properties;
//! 5. if step 3 fails, or a nested enum, record or union is not valid, the
//!    record is replaced by its default with the raw payload stored as an
//!    [`UnparsedObject`], which is emitted verbatim on encode.
//!
//! Unions (`oneOf`) are resolved with [`OneOf`], which requires exactly one
//! alternative to match.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::datadog::error::DecodeError;

/// Unknown object keys captured during decoding, in wire order.
pub type AdditionalProperties = Map<String, Value>;

/// Raw JSON payload kept when typed decoding was not possible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnparsedObject {
    pub value: Value,
}

impl UnparsedObject {
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

/// Reports whether a decoded value is fully understood by the client.
///
/// Enums are valid when inside their allow-list, records when they did not
/// fall back to an [`UnparsedObject`], unions when exactly one alternative
/// matched.
pub trait Validate {
    fn is_valid(&self) -> bool;
}

impl<T: Validate> Validate for Option<T> {
    fn is_valid(&self) -> bool {
        self.as_ref().map_or(true, Validate::is_valid)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn is_valid(&self) -> bool {
        self.iter().all(Validate::is_valid)
    }
}

impl<T: Validate> Validate for Box<T> {
    fn is_valid(&self) -> bool {
        self.as_ref().is_valid()
    }
}

/// A JSON object record.
pub trait Model: Default {
    /// Type name used in logs and decode errors.
    const NAME: &'static str;
    /// Fields that must be present and non-null.
    const REQUIRED_FIELDS: &'static [&'static str] = &[];
    /// Fields that must be present but may be `null`.
    const REQUIRED_NULLABLE_FIELDS: &'static [&'static str] = &[];

    /// Decodes the known fields. Additional properties are attached afterwards.
    fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error>;

    /// Emits the known fields: required ones always, optional ones when set.
    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error>;

    /// Whether every nested enum, record and union is valid.
    fn fields_valid(&self) -> bool {
        true
    }

    fn additional_properties(&self) -> &AdditionalProperties;

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties;

    fn unparsed(&self) -> Option<&UnparsedObject>;

    fn set_unparsed(&mut self, raw: UnparsedObject);

    /// Whether decoding fell back to the raw payload.
    fn is_unparsed(&self) -> bool {
        self.unparsed().is_some()
    }
}

/// Generates the [`Model`] accessors for records holding
/// `additional_properties` and `unparsed` fields.
macro_rules! model_accessors {
    () => {
        fn additional_properties(&self) -> &$crate::datadog::model::AdditionalProperties {
            &self.additional_properties
        }

        fn additional_properties_mut(
            &mut self,
        ) -> &mut $crate::datadog::model::AdditionalProperties {
            &mut self.additional_properties
        }

        fn unparsed(&self) -> Option<&$crate::datadog::model::UnparsedObject> {
            self.unparsed.as_ref()
        }

        fn set_unparsed(&mut self, raw: $crate::datadog::model::UnparsedObject) {
            self.unparsed = Some(raw);
        }
    };
}

/// Derives `Serialize`, `Deserialize` and `Validate` for [`Model`] types.
macro_rules! impl_model {
    ($($name:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $name {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    $crate::datadog::model::serialize_model(self, serializer)
                }
            }

            impl<'de> serde::Deserialize<'de> for $name {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    $crate::datadog::model::deserialize_model(deserializer)
                }
            }

            impl $crate::datadog::model::Validate for $name {
                fn is_valid(&self) -> bool {
                    !$crate::datadog::model::Model::is_unparsed(self)
                }
            }
        )+
    };
}

/// Derives `Serialize`, `Deserialize` and `Validate` for `oneOf` unions.
///
/// The union must be an enum whose variants each box one record type, plus an
/// `UnparsedObject(UnparsedObject)` variant.
macro_rules! impl_one_of {
    ($name:ident { $($variant:ident($inner:ty)),+ $(,)? }) => {
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                Ok($crate::datadog::model::OneOf::new(stringify!($name), &raw)
                    $( .attempt(|inner: $inner| $name::$variant(Box::new(inner))) )+
                    .resolve($name::UnparsedObject))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $( $name::$variant(inner) => serde::Serialize::serialize(inner, serializer), )+
                    $name::UnparsedObject(raw) => serde::Serialize::serialize(raw, serializer),
                }
            }
        }

        impl $crate::datadog::model::Validate for $name {
            fn is_valid(&self) -> bool {
                !matches!(self, $name::UnparsedObject(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::UnparsedObject($crate::datadog::model::UnparsedObject::default())
            }
        }

        $(
            impl From<$inner> for $name {
                fn from(inner: $inner) -> Self {
                    $name::$variant(Box::new(inner))
                }
            }
        )+
    };
}

pub(crate) use impl_model;
pub(crate) use impl_one_of;
pub(crate) use model_accessors;

/// Cursor over the keys of a JSON object during record decoding.
///
/// Every key read through the cursor counts as known; whatever is left is
/// returned by [`FieldReader::into_rest`] in its original order.
#[derive(Debug)]
pub struct FieldReader {
    fields: Map<String, Value>,
    taken: Vec<&'static str>,
}

impl FieldReader {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            taken: Vec::new(),
        }
    }

    fn take(&mut self, name: &'static str) -> Option<Value> {
        self.taken.push(name);
        self.fields.get(name).cloned()
    }

    fn decode<T: DeserializeOwned>(name: &str, value: Value) -> Result<T, serde_json::Error> {
        serde_json::from_value(value).map_err(|err| serde_json::Error::custom(format!("{name}: {err}")))
    }

    /// Required field. Presence is checked before decoding starts.
    pub fn required<T: DeserializeOwned>(&mut self, name: &'static str) -> Result<T, serde_json::Error> {
        let value = self.take(name).unwrap_or(Value::Null);
        Self::decode(name, value)
    }

    /// Optional field: absent and `null` both decode to `None`.
    pub fn optional<T: DeserializeOwned>(
        &mut self,
        name: &'static str,
    ) -> Result<Option<T>, serde_json::Error> {
        match self.take(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Self::decode(name, value).map(Some),
        }
    }

    /// Optional nullable field: absent is `None`, `null` is `Some(None)`.
    pub fn nullable<T: DeserializeOwned>(
        &mut self,
        name: &'static str,
    ) -> Result<Option<Option<T>>, serde_json::Error> {
        match self.take(name) {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(None)),
            Some(value) => Self::decode(name, value).map(|v| Some(Some(v))),
        }
    }

    /// Keys that were never read, in their original order.
    pub fn into_rest(self) -> AdditionalProperties {
        let Self { fields, taken } = self;
        fields
            .into_iter()
            .filter(|(key, _)| !taken.contains(&key.as_str()))
            .collect()
    }
}

/// Decodes a record, falling back to [`UnparsedObject`] on schema drift.
pub fn decode_model<T: Model>(raw: Value) -> Result<T, DecodeError> {
    let Value::Object(object) = &raw else {
        return Err(DecodeError::NotAnObject(T::NAME));
    };
    for field in T::REQUIRED_FIELDS {
        if object.get(*field).map_or(true, Value::is_null) {
            return Err(DecodeError::MissingField(*field));
        }
    }
    for field in T::REQUIRED_NULLABLE_FIELDS {
        if !object.contains_key(*field) {
            return Err(DecodeError::MissingField(*field));
        }
    }

    let mut reader = FieldReader::new(object.clone());
    let decoded = T::read_fields(&mut reader).map(|mut model| {
        *model.additional_properties_mut() = reader.into_rest();
        model
    });
    match decoded {
        Ok(model) if model.fields_valid() => Ok(model),
        Ok(_) => {
            debug!(model = T::NAME, "payload holds unknown nested values, keeping it unparsed");
            Ok(unparsed_model(raw))
        }
        Err(err) => {
            debug!(model = T::NAME, error = %err, "payload does not match schema, keeping it unparsed");
            Ok(unparsed_model(raw))
        }
    }
}

fn unparsed_model<T: Model>(raw: Value) -> T {
    let mut model = T::default();
    model.set_unparsed(UnparsedObject::new(raw));
    model
}

pub fn deserialize_model<'de, T: Model, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    decode_model(raw).map_err(D::Error::custom)
}

pub fn serialize_model<T: Model, S: Serializer>(model: &T, serializer: S) -> Result<S::Ok, S::Error> {
    if let Some(raw) = model.unparsed() {
        return raw.serialize(serializer);
    }
    let mut map = serializer.serialize_map(None)?;
    model.write_fields(&mut map)?;
    for (key, value) in model.additional_properties() {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// Resolution of a `oneOf` payload against its alternatives.
///
/// An alternative matches when it decodes, is valid, and does not encode to
/// an empty object. The payload activates an alternative only when exactly
/// one matches; with zero or several matches it is kept unparsed.
pub struct OneOf<'a, U> {
    name: &'static str,
    raw: &'a Value,
    matches: Vec<U>,
}

impl<'a, U> OneOf<'a, U> {
    pub fn new(name: &'static str, raw: &'a Value) -> Self {
        Self {
            name,
            raw,
            matches: Vec::new(),
        }
    }

    pub fn attempt<T, F>(mut self, variant: F) -> Self
    where
        T: DeserializeOwned + Serialize + Validate,
        F: FnOnce(T) -> U,
    {
        let Ok(candidate) = T::deserialize(self.raw) else {
            return self;
        };
        if !candidate.is_valid() {
            return self;
        }
        let empty = match serde_json::to_value(&candidate) {
            Ok(Value::Object(fields)) => fields.is_empty(),
            Ok(_) => false,
            Err(_) => true,
        };
        if !empty {
            self.matches.push(variant(candidate));
        }
        self
    }

    pub fn resolve<F>(mut self, fallback: F) -> U
    where
        F: FnOnce(UnparsedObject) -> U,
    {
        if self.matches.len() == 1 {
            if let Some(matched) = self.matches.pop() {
                return matched;
            }
        }
        debug!(
            union = self.name,
            matches = self.matches.len(),
            "oneOf payload is ambiguous or unknown, keeping it unparsed"
        );
        fallback(UnparsedObject::new(self.raw.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::datadog::enums::string_enum;
    use serde_json::json;

    string_enum! {
        enum Shape {
            CIRCLE = "circle",
            SQUARE = "square",
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Widget {
        id: String,
        shape: Option<Shape>,
        note: Option<Option<String>>,
        owner: Option<Owner>,
        additional_properties: AdditionalProperties,
        unparsed: Option<UnparsedObject>,
    }

    impl Model for Widget {
        const NAME: &'static str = "Widget";
        const REQUIRED_FIELDS: &'static [&'static str] = &["id"];

        fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
            Ok(Self {
                id: fields.required("id")?,
                shape: fields.optional("shape")?,
                note: fields.nullable("note")?,
                owner: fields.optional("owner")?,
                ..Default::default()
            })
        }

        fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
            map.serialize_entry("id", &self.id)?;
            if let Some(shape) = &self.shape {
                map.serialize_entry("shape", shape)?;
            }
            if let Some(note) = &self.note {
                map.serialize_entry("note", note)?;
            }
            if let Some(owner) = &self.owner {
                map.serialize_entry("owner", owner)?;
            }
            Ok(())
        }

        fn fields_valid(&self) -> bool {
            self.shape.is_valid() && self.owner.is_valid()
        }

        model_accessors!();
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Owner {
        handle: Option<String>,
        additional_properties: AdditionalProperties,
        unparsed: Option<UnparsedObject>,
    }

    impl Model for Owner {
        const NAME: &'static str = "Owner";

        fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
            Ok(Self {
                handle: fields.optional("handle")?,
                ..Default::default()
            })
        }

        fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
            if let Some(handle) = &self.handle {
                map.serialize_entry("handle", handle)?;
            }
            Ok(())
        }

        model_accessors!();
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Gadget {
        id: String,
        additional_properties: AdditionalProperties,
        unparsed: Option<UnparsedObject>,
    }

    impl Model for Gadget {
        const NAME: &'static str = "Gadget";
        const REQUIRED_FIELDS: &'static [&'static str] = &["id"];

        fn read_fields(fields: &mut FieldReader) -> Result<Self, serde_json::Error> {
            Ok(Self {
                id: fields.required("id")?,
                ..Default::default()
            })
        }

        fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
            map.serialize_entry("id", &self.id)
        }

        model_accessors!();
    }

    impl_model!(Widget, Owner, Gadget);

    #[derive(Debug, Clone, PartialEq)]
    enum Item {
        Owner(Box<Owner>),
        Gadget(Box<Gadget>),
        UnparsedObject(UnparsedObject),
    }

    impl_one_of!(Item {
        Owner(Owner),
        Gadget(Gadget),
    });

    #[test]
    fn test_decode_known_fields() {
        let widget: Widget =
            serde_json::from_value(json!({"id": "w1", "shape": "circle", "owner": {"handle": "bob"}}))
                .unwrap();
        assert_eq!(widget.id, "w1");
        assert_eq!(widget.shape, Some(Shape::CIRCLE));
        assert_eq!(widget.owner.as_ref().unwrap().handle.as_deref(), Some("bob"));
        assert!(widget.additional_properties.is_empty());
        assert!(!widget.is_unparsed());
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let err = serde_json::from_value::<Widget>(json!({"shape": "circle"})).unwrap_err();
        assert!(err.to_string().contains("required field id missing"));

        let err = serde_json::from_value::<Widget>(json!({"id": null})).unwrap_err();
        assert!(err.to_string().contains("required field id missing"));
    }

    #[test]
    fn test_non_object_payload_is_an_error() {
        assert!(serde_json::from_value::<Widget>(json!(["id"])).is_err());
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let payload = json!({"id": "w1", "colour": "red", "extra": {"nested": [1, 2]}});
        let widget: Widget = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(widget.additional_properties.get("colour"), Some(&json!("red")));
        assert_eq!(serde_json::to_value(&widget).unwrap(), payload);
    }

    #[test]
    fn test_invalid_enum_falls_back_to_unparsed() {
        let payload = json!({"id": "w1", "shape": "hexagon"});
        let widget: Widget = serde_json::from_value(payload.clone()).unwrap();
        assert!(widget.is_unparsed());
        assert!(!widget.is_valid());
        assert_eq!(widget.id, "");
        assert_eq!(serde_json::to_value(&widget).unwrap(), payload);
    }

    #[test]
    fn test_type_mismatch_falls_back_to_unparsed() {
        let payload = json!({"id": 42});
        let widget: Widget = serde_json::from_value(payload.clone()).unwrap();
        assert!(widget.is_unparsed());
        assert_eq!(serde_json::to_string(&widget).unwrap(), r#"{"id":42}"#);
    }

    #[test]
    fn test_unparsed_nested_record_makes_parent_unparsed() {
        let payload = json!({"id": "w1", "owner": "not-an-object"});
        let widget: Widget = serde_json::from_value(payload.clone()).unwrap();
        assert!(widget.is_unparsed());
        assert_eq!(serde_json::to_value(&widget).unwrap(), payload);
    }

    #[test]
    fn test_nullable_field_three_states() {
        let absent: Widget = serde_json::from_value(json!({"id": "a"})).unwrap();
        assert_eq!(absent.note, None);
        let null: Widget = serde_json::from_value(json!({"id": "a", "note": null})).unwrap();
        assert_eq!(null.note, Some(None));
        let set: Widget = serde_json::from_value(json!({"id": "a", "note": "hi"})).unwrap();
        assert_eq!(set.note, Some(Some("hi".to_string())));

        assert_eq!(serde_json::to_value(&absent).unwrap(), json!({"id": "a"}));
        assert_eq!(serde_json::to_value(&null).unwrap(), json!({"id": "a", "note": null}));
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let widget = Widget {
            id: "w2".to_string(),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&widget).unwrap(), r#"{"id":"w2"}"#);
    }

    #[test]
    fn test_one_of_single_match() {
        let item: Item = serde_json::from_value(json!({"handle": "bob"})).unwrap();
        assert!(matches!(item, Item::Owner(_)));
        assert!(item.is_valid());
    }

    #[test]
    fn test_one_of_ambiguous_payload_is_kept_raw() {
        let payload = json!({"id": "g1", "handle": "bob"});
        let item: Item = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(item, Item::UnparsedObject(UnparsedObject::new(payload.clone())));
        assert!(!item.is_valid());
        assert_eq!(serde_json::to_value(&item).unwrap(), payload);
    }

    #[test]
    fn test_one_of_empty_candidate_does_not_match() {
        let item: Item = serde_json::from_value(json!({"handle": null})).unwrap();
        assert!(matches!(item, Item::UnparsedObject(_)));

        let item: Item = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(item, Item::UnparsedObject(_)));
    }

    #[test]
    fn test_one_of_no_match_is_kept_raw() {
        let item: Item = serde_json::from_value(json!("plain string")).unwrap();
        assert_eq!(item, Item::UnparsedObject(UnparsedObject::new(json!("plain string"))));
        assert_eq!(serde_json::to_string(&item).unwrap(), "\"plain string\"");
    }

    #[test]
    fn test_one_of_encodes_active_variant() {
        let item = Item::from(Gadget {
            id: "g9".to_string(),
            ..Default::default()
        });
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({"id": "g9"}));
    }
}
