use serde_json::Value;

use crate::model::Row;

/// Reads a column's comparison value from a row, following dotted paths
/// (`"profile.score"`) through nested objects.
///
/// Built once per sort pass and reused for every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    path: Vec<String>,
}

impl Accessor {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.split('.').map(str::to_string).collect(),
        }
    }

    /// The value at the path, or None when any step is missing, null or not
    /// an object. A null leaf also counts as absent.
    pub fn get<'a>(&self, row: &'a Row) -> Option<&'a Value> {
        let (first, rest) = self.path.split_first()?;
        let mut current = row.get(first)?;
        for key in rest {
            current = match current {
                Value::Object(map) => map.get(key)?,
                _ => return None,
            };
        }
        match current {
            Value::Null => None,
            value => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => panic!("test rows must be objects"),
        }
    }

    #[test]
    fn test_plain_key() {
        let r = row(json!({"age": 30}));
        assert_eq!(Accessor::new("age").get(&r), Some(&json!(30)));
        assert_eq!(Accessor::new("name").get(&r), None);
    }

    #[test]
    fn test_nested_path() {
        let r = row(json!({"profile": {"stats": {"score": 10}}}));
        assert_eq!(Accessor::new("profile.stats.score").get(&r), Some(&json!(10)));
    }

    #[test]
    fn test_missing_intermediate_is_absent() {
        let accessor = Accessor::new("profile.score");
        assert_eq!(accessor.get(&row(json!({"name": "Ann"}))), None);
        assert_eq!(accessor.get(&row(json!({"profile": null}))), None);
        assert_eq!(accessor.get(&row(json!({"profile": 0}))), None);
        assert_eq!(accessor.get(&row(json!({"profile": "x"}))), None);
    }

    #[test]
    fn test_null_leaf_is_absent() {
        assert_eq!(Accessor::new("a").get(&row(json!({"a": null}))), None);
    }
}
