// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Allow-listed enum types.
//!
//! Every enum generated here decodes leniently: a wire value outside the
//! allow-list is kept in the `Unrecognized` variant and re-emitted unchanged,
//! so decoding only fails when the JSON type itself is wrong. Callers (and the
//! record decoding in [`crate::datadog::model`]) use `is_valid` to find out
//! whether the value is one the client knows about.

/// Declares a string-valued enum with an allow-list.
///
/// ```ignore
/// string_enum! {
///     /// Users resource type.
///     pub enum UsersType {
///         USERS = "users",
///     }
/// }
/// ```
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value outside the allow-list, kept verbatim.
            Unrecognized(String),
        }

        impl $name {
            pub const ALLOWED_VALUES: &'static [&'static str] = &[$($value),+];

            pub fn allowed_values() -> &'static [&'static str] {
                Self::ALLOWED_VALUES
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Unrecognized(value) => value.as_str(),
                }
            }

            /// Whether the value belongs to the allow-list.
            pub fn is_valid(&self) -> bool {
                Self::ALLOWED_VALUES.contains(&self.as_str())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Unrecognized(String::new())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    other => Self::Unrecognized(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::datadog::error::InvalidEnumValue;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let parsed = Self::from(value);
                if parsed.is_valid() {
                    Ok(parsed)
                } else {
                    Err($crate::datadog::error::InvalidEnumValue {
                        type_name: stringify!($name),
                        value: value.to_string(),
                        allowed: Self::ALLOWED_VALUES.iter().map(|v| v.to_string()).collect(),
                    })
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }

        impl $crate::datadog::model::Validate for $name {
            fn is_valid(&self) -> bool {
                $name::is_valid(self)
            }
        }
    };
}

/// Declares an integer-valued enum with an allow-list.
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value outside the allow-list, kept verbatim.
            Unrecognized(i64),
        }

        impl $name {
            pub const ALLOWED_VALUES: &'static [i64] = &[$($value),+];

            pub fn allowed_values() -> &'static [i64] {
                Self::ALLOWED_VALUES
            }

            pub fn value(&self) -> i64 {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Unrecognized(value) => *value,
                }
            }

            /// Whether the value belongs to the allow-list.
            pub fn is_valid(&self) -> bool {
                Self::ALLOWED_VALUES.contains(&self.value())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Unrecognized(0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    other => Self::Unrecognized(other),
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::datadog::error::InvalidEnumValue;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .map(Self::from)
                    .filter(Self::is_valid)
                    .ok_or_else(|| $crate::datadog::error::InvalidEnumValue {
                        type_name: stringify!($name),
                        value: value.to_string(),
                        allowed: Self::ALLOWED_VALUES.iter().map(|v| v.to_string()).collect(),
                    })
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::datadog::error::InvalidEnumValue;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::try_from(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.value())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <i64 as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }

        impl $crate::datadog::model::Validate for $name {
            fn is_valid(&self) -> bool {
                $name::is_valid(self)
            }
        }
    };
}

pub(crate) use int_enum;
pub(crate) use string_enum;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::datadog::model::Validate;

    string_enum! {
        enum Fruit {
            APPLE = "apple",
            PEAR = "pear",
        }
    }

    int_enum! {
        enum Level {
            LOW = 0,
            HIGH = 15,
        }
    }

    #[test]
    fn test_string_enum_known_values() {
        let fruit: Fruit = serde_json::from_str("\"pear\"").unwrap();
        assert_eq!(fruit, Fruit::PEAR);
        assert!(fruit.is_valid());
        assert_eq!(serde_json::to_string(&fruit).unwrap(), "\"pear\"");
    }

    #[test]
    fn test_string_enum_keeps_unknown_values() {
        let fruit: Fruit = serde_json::from_str("\"durian\"").unwrap();
        assert_eq!(fruit, Fruit::Unrecognized("durian".to_string()));
        assert!(!fruit.is_valid());
        assert!(!Validate::is_valid(&fruit));
        assert_eq!(serde_json::to_string(&fruit).unwrap(), "\"durian\"");
    }

    #[test]
    fn test_string_enum_rejects_wrong_json_type() {
        assert!(serde_json::from_str::<Fruit>("42").is_err());
        assert!(serde_json::from_str::<Fruit>("{}").is_err());
    }

    #[test]
    fn test_string_enum_strict_parse() {
        assert_eq!("apple".parse::<Fruit>().unwrap(), Fruit::APPLE);
        let err = "kiwi".parse::<Fruit>().unwrap_err();
        assert_eq!(err.type_name, "Fruit");
        assert_eq!(err.allowed, vec!["apple", "pear"]);
    }

    #[test]
    fn test_unrecognized_holding_allowed_value_is_valid() {
        assert!(Fruit::Unrecognized("apple".to_string()).is_valid());
        assert!(!Fruit::default().is_valid());
    }

    #[test]
    fn test_int_enum_round_trip() {
        let level: Level = serde_json::from_str("15").unwrap();
        assert_eq!(level, Level::HIGH);
        assert_eq!(serde_json::to_string(&level).unwrap(), "15");

        let level: Level = serde_json::from_str("7").unwrap();
        assert_eq!(level, Level::Unrecognized(7));
        assert!(!level.is_valid());
        assert_eq!(serde_json::to_string(&level).unwrap(), "7");

        assert!(serde_json::from_str::<Level>("\"high\"").is_err());
    }

    #[test]
    fn test_int_enum_strict_parse() {
        assert_eq!("0".parse::<Level>().unwrap(), Level::LOW);
        assert!("7".parse::<Level>().is_err());
        assert!("low".parse::<Level>().is_err());
    }
}
