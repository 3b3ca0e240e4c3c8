use serde_json::Value;

/// One element of the index's JSON export, kept untyped.
///
/// The export is loosely shaped: fields come and go between records, and
/// an element is not guaranteed to be an object at all. Fields are read
/// with [`RawRecord::get_str`], which never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord(Value);

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the string at `key`, or `""` when it is missing or not a string.
    pub fn get_str(&self, key: &str) -> &str {
        match self.0.get(key) {
            Some(Value::String(s)) => s.as_str(),
            Some(other) => {
                tracing::debug!("Field '{}' is not a string: {}", key, other);
                ""
            }
            None => {
                tracing::debug!("Field '{}' missing from record", key);
                ""
            }
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
