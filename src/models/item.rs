use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog record, shared by the REST and SOAP front-ends
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// `None` is a distinct value from an empty description
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_description_deserializes_as_none() {
        let item: Item = serde_json::from_str(r#"{"id": 4, "name": "Mouse"}"#).unwrap();
        assert_eq!(item, Item::new(4, "Mouse", None));
    }

    #[test]
    fn test_none_description_serializes_as_null() {
        let json = serde_json::to_value(Item::new(4, "Mouse", None)).unwrap();
        assert!(json["description"].is_null());
        assert_eq!(json["name"], "Mouse");
    }
}
