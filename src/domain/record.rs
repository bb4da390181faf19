use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names shared by the account pages.
pub mod fields {
    pub const EMAIL: &str = "Email";
    pub const OLD_PASSWD: &str = "OldPasswd";
    pub const NEW_PASSWD: &str = "NewPasswd";
    pub const CONFIRM: &str = "Confirm";
    pub const URL: &str = "URL";
}

/// A form's bound data: named fields whose shape depends on the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for string fields.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, Value::String(value.into()));
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Sets every listed field to the empty string, the way a form input is cleared.
    pub fn blank_fields(&mut self, names: &[&str]) {
        for name in names {
            self.0.insert((*name).to_string(), Value::String(String::new()));
        }
    }

    /// Copy of the listed fields that are present; missing ones are skipped.
    pub fn subset(&self, names: &[&str]) -> Record {
        let picked = names
            .iter()
            .filter_map(|name| self.0.get(*name).map(|v| ((*name).to_string(), v.clone())))
            .collect();
        Record(picked)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record(map)
    }
}
