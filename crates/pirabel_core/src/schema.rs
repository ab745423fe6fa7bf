//! Output-schema descriptors sent to the completion service, and the
//! conformance check run on whatever comes back.

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("at {path}: expected {expected}, found {found}")]
pub struct SchemaViolation {
    pub path: String,
    pub expected: String,
    pub found: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String { choices: Option<Vec<&'static str>> },
    Number { minimum: Option<f64>, maximum: Option<f64> },
    Boolean,
    Array(Box<Schema>),
    Object(Vec<Property>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: &'static str,
    pub schema: Schema,
    pub required: bool,
}

impl Property {
    pub fn required(name: &'static str, schema: Schema) -> Self {
        Self { name, schema, required: true }
    }

    pub fn optional(name: &'static str, schema: Schema) -> Self {
        Self { name, schema, required: false }
    }
}

impl Schema {
    pub fn string() -> Self {
        Schema::String { choices: None }
    }

    pub fn one_of(choices: &[&'static str]) -> Self {
        Schema::String { choices: Some(choices.to_vec()) }
    }

    pub fn number() -> Self {
        Schema::Number { minimum: None, maximum: None }
    }

    pub fn number_at_least(minimum: f64) -> Self {
        Schema::Number { minimum: Some(minimum), maximum: None }
    }

    pub fn number_between(minimum: f64, maximum: f64) -> Self {
        Schema::Number { minimum: Some(minimum), maximum: Some(maximum) }
    }

    pub fn boolean() -> Self {
        Schema::Boolean
    }

    pub fn array(items: Schema) -> Self {
        Schema::Array(Box::new(items))
    }

    pub fn object(properties: Vec<Property>) -> Self {
        Schema::Object(properties)
    }

    fn type_name(&self) -> &'static str {
        match self {
            Schema::String { .. } => "STRING",
            Schema::Number { .. } => "NUMBER",
            Schema::Boolean => "BOOLEAN",
            Schema::Array(_) => "ARRAY",
            Schema::Object(_) => "OBJECT",
        }
    }

    /// Descriptor in the completion service's `responseSchema` format.
    pub fn to_json(&self) -> Value {
        let mut node = Map::new();
        node.insert("type".to_string(), json!(self.type_name()));
        match self {
            Schema::String { choices: Some(choices) } => {
                node.insert("enum".to_string(), json!(choices));
            }
            Schema::String { choices: None } | Schema::Boolean => {}
            Schema::Number { minimum, maximum } => {
                if let Some(min) = minimum {
                    node.insert("minimum".to_string(), json!(min));
                }
                if let Some(max) = maximum {
                    node.insert("maximum".to_string(), json!(max));
                }
            }
            Schema::Array(items) => {
                node.insert("items".to_string(), items.to_json());
            }
            Schema::Object(properties) => {
                let props: Map<String, Value> = properties
                    .iter()
                    .map(|p| (p.name.to_string(), p.schema.to_json()))
                    .collect();
                let required: Vec<&str> = properties.iter().filter(|p| p.required).map(|p| p.name).collect();
                node.insert("properties".to_string(), Value::Object(props));
                if !required.is_empty() {
                    node.insert("required".to_string(), json!(required));
                }
            }
        }
        Value::Object(node)
    }

    /// Checks `value` against this schema. Unknown object keys are ignored,
    /// `null` counts as absent for optional properties.
    pub fn check(&self, value: &Value) -> Result<(), SchemaViolation> {
        self.check_at("$", value)
    }

    fn check_at(&self, path: &str, value: &Value) -> Result<(), SchemaViolation> {
        match (self, value) {
            (Schema::String { choices }, Value::String(s)) => match choices {
                Some(choices) if !choices.iter().any(|c| *c == s.as_str()) => Err(violation(
                    path,
                    format!("one of {}", choices.join("|")),
                    format!("\"{}\"", s),
                )),
                _ => Ok(()),
            },
            (Schema::Number { minimum, maximum }, Value::Number(n)) => {
                let n = n.as_f64().unwrap_or(f64::NAN);
                let below = minimum.map_or(false, |min| n < min);
                let above = maximum.map_or(false, |max| n > max);
                if below || above || n.is_nan() {
                    Err(violation(path, describe_range(*minimum, *maximum), n.to_string()))
                } else {
                    Ok(())
                }
            }
            (Schema::Boolean, Value::Bool(_)) => Ok(()),
            (Schema::Array(items), Value::Array(values)) => {
                for (i, item) in values.iter().enumerate() {
                    items.check_at(&format!("{}[{}]", path, i), item)?;
                }
                Ok(())
            }
            (Schema::Object(properties), Value::Object(map)) => {
                for property in properties {
                    let child = format!("{}.{}", path, property.name);
                    match map.get(property.name) {
                        None | Some(Value::Null) if property.required => {
                            return Err(violation(&child, property.schema.type_name().to_string(), "nothing".to_string()));
                        }
                        None | Some(Value::Null) => {}
                        Some(v) => property.schema.check_at(&child, v)?,
                    }
                }
                Ok(())
            }
            (schema, other) => Err(violation(path, schema.type_name().to_string(), kind_of(other).to_string())),
        }
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

fn violation(path: &str, expected: String, found: String) -> SchemaViolation {
    SchemaViolation { path: path.to_string(), expected, found }
}

fn describe_range(minimum: Option<f64>, maximum: Option<f64>) -> String {
    match (minimum, maximum) {
        (Some(min), Some(max)) => format!("NUMBER in [{}, {}]", min, max),
        (Some(min), None) => format!("NUMBER >= {}", min),
        (None, Some(max)) => format!("NUMBER <= {}", max),
        (None, None) => "NUMBER".to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "BOOLEAN",
        Value::Number(_) => "NUMBER",
        Value::String(_) => "STRING",
        Value::Array(_) => "ARRAY",
        Value::Object(_) => "OBJECT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword_like() -> Schema {
        Schema::object(vec![
            Property::required("keyword", Schema::string()),
            Property::required("kd", Schema::number_between(0.0, 100.0)),
            Property::optional("note", Schema::string()),
        ])
    }

    #[test]
    fn test_descriptor_format() {
        let descriptor = Schema::array(keyword_like()).to_json();
        assert_eq!(descriptor["type"], "ARRAY");
        assert_eq!(descriptor["items"]["type"], "OBJECT");
        assert_eq!(descriptor["items"]["properties"]["kd"]["maximum"], 100.0);
        assert_eq!(descriptor["items"]["required"], json!(["keyword", "kd"]));
    }

    #[test]
    fn test_accepts_conforming_value() {
        let value = json!([{ "keyword": "a", "kd": 12, "extra": true }, { "keyword": "b", "kd": 0, "note": null }]);
        assert!(Schema::array(keyword_like()).check(&value).is_ok());
    }

    #[test]
    fn test_reports_missing_required_field_with_path() {
        let value = json!([{ "keyword": "a", "kd": 12 }, { "keyword": "b" }]);
        let err = Schema::array(keyword_like()).check(&value).unwrap_err();
        assert_eq!(err.path, "$[1].kd");
        assert_eq!(err.found, "nothing");
    }

    #[test]
    fn test_rejects_out_of_range_and_wrong_types() {
        let err = keyword_like().check(&json!({ "keyword": "a", "kd": 140 })).unwrap_err();
        assert_eq!(err.path, "$.kd");

        let err = keyword_like().check(&json!({ "keyword": 3, "kd": 10 })).unwrap_err();
        assert_eq!(err.expected, "STRING");
        assert_eq!(err.found, "NUMBER");
    }

    #[test]
    fn test_enumerated_strings() {
        let schema = Schema::one_of(&["critical", "warning", "info"]);
        assert!(schema.check(&json!("warning")).is_ok());
        let err = schema.check(&json!("fatal")).unwrap_err();
        assert!(err.to_string().contains("critical|warning|info"));
    }
}
