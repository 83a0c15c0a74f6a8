// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use datadog_api_client::datadog::Model;
use datadog_api_client::datadog_v2::model::{
    Creator, DashboardListItemRequest, DashboardType, MetricIntakeType, MetricSeries,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn unknown_fields_survive_a_round_trip(
        key in "x_[a-z]{1,10}",
        value in json_leaf(),
        handle in "[a-z]{1,8}@example\\.com",
    ) {
        let mut payload = json!({"handle": handle, "name": null});
        payload
            .as_object_mut()
            .unwrap()
            .insert(key.clone(), value.clone());
        let creator: Creator = serde_json::from_value(payload.clone()).unwrap();

        prop_assert!(!creator.is_unparsed());
        prop_assert_eq!(creator.additional_properties.get(&key), Some(&value));
        prop_assert_eq!(serde_json::to_value(&creator).unwrap(), payload);
    }

    #[test]
    fn unknown_enum_values_are_preserved_but_invalid(value in "[a-z_]{1,20}") {
        prop_assume!(!DashboardType::ALLOWED_VALUES.contains(&value.as_str()));

        let parsed: DashboardType = serde_json::from_value(json!(value)).unwrap();
        prop_assert!(!parsed.is_valid());
        prop_assert_eq!(serde_json::to_value(&parsed).unwrap(), json!(value));
        prop_assert!(value.parse::<DashboardType>().is_err());

        let payload = json!({"id": "abc", "type": value});
        let request: DashboardListItemRequest = serde_json::from_value(payload.clone()).unwrap();
        prop_assert!(request.is_unparsed());
        prop_assert_eq!(serde_json::to_value(&request).unwrap(), payload);
    }

    #[test]
    fn int_enum_validity_follows_the_allow_list(value in -5i64..32) {
        let parsed = MetricIntakeType::from(value);
        prop_assert_eq!(parsed.is_valid(), MetricIntakeType::ALLOWED_VALUES.contains(&value));
        prop_assert_eq!(serde_json::to_value(parsed).unwrap(), json!(value));

        let payload = json!({"metric": "m", "points": [], "type": value});
        let series: MetricSeries = serde_json::from_value(payload).unwrap();
        prop_assert_eq!(series.is_unparsed(), !parsed.is_valid());
    }

    #[test]
    fn known_records_round_trip(id in "[a-z0-9-]{1,16}", index in 0usize..5) {
        let kind = DashboardType::from(DashboardType::ALLOWED_VALUES[index]);
        let request = DashboardListItemRequest::new(id, kind);
        let encoded = serde_json::to_value(&request).unwrap();
        let decoded: DashboardListItemRequest = serde_json::from_value(encoded).unwrap();
        prop_assert_eq!(decoded, request);
    }
}
