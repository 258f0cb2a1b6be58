//! Row trait and row identity.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

/// Trait for records that can be displayed as rows in a [`TableView`](crate::TableView).
///
/// The only requirement is field lookup by a dot-separated path, which the
/// search pipeline uses to match free text. Columns, filters and groups take
/// their own closures and don't go through this trait.
///
/// # Examples
///
/// ```ignore
/// impl TableRow for Person {
///     fn field(&self, path: &str) -> Option<String> {
///         match path {
///             "name" => Some(self.name.clone()),
///             "address.city" => self.address.as_ref().map(|a| a.city.clone()),
///             _ => None,
///         }
///     }
/// }
/// ```
///
/// Rows that implement `Serialize` can delegate to [`json_field`].
pub trait TableRow: Clone {
    /// The stringified value at `path`, or `None` when the path doesn't
    /// resolve. `None` matches like the empty string.
    fn field(&self, path: &str) -> Option<String>;
}

/// Resolve a dot-separated path against any serializable value.
///
/// Object members are looked up by key, array elements by numeric index.
/// Returns `None` for missing paths, `null`, objects, or when `value` fails to
/// serialize.
pub fn json_field<S: Serialize + ?Sized>(value: &S, path: &str) -> Option<String> {
    let value = serde_json::to_value(value).ok()?;
    lookup_path(&value, path)
}

/// Resolve a dot-separated path inside a JSON value.
pub fn lookup_path(value: &Value, path: &str) -> Option<String> {
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    stringify(current)
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| stringify(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
    }
}

/// Derives a stable string identity for a row from the row and its position
/// in the current data.
pub struct RowId<T>(Option<Arc<dyn Fn(&T, usize) -> String + Send + Sync>>);

impl<T> RowId<T> {
    /// Identity from a caller-supplied function.
    pub fn new(f: impl Fn(&T, usize) -> String + Send + Sync + 'static) -> Self {
        Self(Some(Arc::new(f)))
    }

    /// Positional identity: the row's index as a string.
    pub fn positional() -> Self {
        Self(None)
    }

    /// Compute the id of `row` at `index`.
    pub fn id(&self, row: &T, index: usize) -> String {
        match &self.0 {
            Some(f) => f(row, index),
            None => index.to_string(),
        }
    }
}

impl<T> Default for RowId<T> {
    fn default() -> Self {
        Self::positional()
    }
}

impl<T> Clone for RowId<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> fmt::Debug for RowId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("RowId(custom)"),
            None => f.write_str("RowId(positional)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_nested_object() {
        let value = json!({ "client": { "name": "Alice" } });
        assert_eq!(lookup_path(&value, "client.name").as_deref(), Some("Alice"));
    }

    #[test]
    fn test_lookup_missing_and_null() {
        let value = json!({ "client": null, "name": "Bob" });
        assert_eq!(lookup_path(&value, "client.name"), None);
        assert_eq!(lookup_path(&value, "client"), None);
        assert_eq!(lookup_path(&value, "phone"), None);
    }

    #[test]
    fn test_lookup_scalars_and_arrays() {
        let value = json!({ "seats": 52, "active": true, "tags": ["vip", "school"] });
        assert_eq!(lookup_path(&value, "seats").as_deref(), Some("52"));
        assert_eq!(lookup_path(&value, "active").as_deref(), Some("true"));
        assert_eq!(lookup_path(&value, "tags").as_deref(), Some("vip,school"));
        assert_eq!(lookup_path(&value, "tags.1").as_deref(), Some("school"));
        assert_eq!(lookup_path(&value, "tags.x"), None);
    }

    #[test]
    fn test_row_id_positional_fallback() {
        let ids: RowId<&str> = RowId::default();
        assert_eq!(ids.id(&"anything", 4), "4");
        let custom = RowId::new(|row: &&str, _| row.to_uppercase());
        assert_eq!(custom.id(&"abc", 0), "ABC");
    }
}
