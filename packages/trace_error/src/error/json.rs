//! JSON view of a TraceError

use super::types::TraceError;
use crate::config::{self, STACK_PROPERTY};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

impl TraceError {
    /// `name`, `message` and the resolved trace under `stack`
    ///
    /// With prototype search enabled, the enumerable properties of every
    /// kind in the ancestry are added too; a nearer kind wins on conflicts
    /// and the three base keys are never replaced.
    #[must_use]
    pub fn to_json(&self) -> Map<String, Value> {
        let mut json = Map::new();
        json.insert("name".to_owned(), Value::String(self.name().to_owned()));
        json.insert("message".to_owned(), Value::String(self.message().to_owned()));
        json.insert(STACK_PROPERTY.to_owned(), Value::String(self.stack()));

        if config::current().search_prototype {
            for kind in self.ancestors() {
                for (key, value) in kind.enumerable_properties(self) {
                    json.entry(key).or_insert(value);
                }
            }
        }
        json
    }
}

impl Serialize for TraceError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
