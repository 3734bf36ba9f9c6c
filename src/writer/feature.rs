//! Organization to GeoJSON feature conversion

use geo::Geometry;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::models::Organization;
use crate::models::wikidata::WIKIDATA_PROPERTIES;

fn string_list(values: Option<&Vec<String>>) -> Value {
    values.map_or(Value::Null, |values| {
        Value::Array(values.iter().cloned().map(Value::String).collect())
    })
}

/// Feature properties in output order
///
/// `org`, the authority columns, `kreis_list`, `state_codes`, then the
/// Wikidata columns. Every row gets every key; unknown values are `null`.
#[must_use]
pub fn feature_properties(
    organization: &Organization,
    authority_columns: &[String],
) -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert("org".to_string(), Value::String(organization.org.clone()));

    for column in authority_columns {
        let value = organization
            .authority
            .as_ref()
            .map_or(Value::Null, |authority| authority.attribute(column));
        properties.insert(column.clone(), value);
    }

    properties.insert("kreis_list".to_string(), string_list(organization.districts.as_ref()));
    properties.insert("state_codes".to_string(), string_list(organization.state_codes.as_ref()));

    let wikidata = organization
        .wikidata
        .as_ref()
        .map_or_else(|| std::array::from_fn(|_| Value::Null), |record| record.property_values());
    for (name, value) in WIKIDATA_PROPERTIES.into_iter().zip(wikidata) {
        properties.insert(name.to_string(), value);
    }

    properties
}

/// GeoJSON geometry object, or `null`
pub fn feature_geometry(geometry: Option<&Geometry<f64>>) -> Result<Value> {
    match geometry {
        Some(geometry) => {
            let geometry = geojson::Geometry::new(geojson::Value::from(geometry));
            Ok(serde_json::to_value(&geometry)?)
        }
        None => Ok(Value::Null),
    }
}

/// A complete `Feature` without an `id` member
pub fn to_feature(organization: &Organization, authority_columns: &[String]) -> Result<Value> {
    let mut feature = Map::new();
    feature.insert("type".to_string(), Value::String("Feature".to_string()));
    feature.insert(
        "properties".to_string(),
        Value::Object(feature_properties(organization, authority_columns)),
    );
    feature.insert(
        "geometry".to_string(),
        feature_geometry(organization.geometry.as_ref())?,
    );
    Ok(Value::Object(feature))
}
