//! Service description value type

use crate::JsonMap;
use serde::Serialize;
use serde_json::Value;

/// A parsed service description
///
/// Wraps the decoded JSON object as-is. The accessors read the conventional
/// `metadata`, `operations` and `shapes` sections but never require them to
/// be present or well-typed; anything missing simply reads as `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Service {
    definition: JsonMap,
}

impl Service {
    pub fn new(definition: JsonMap) -> Self {
        Self { definition }
    }

    /// The full decoded description
    pub fn definition(&self) -> &JsonMap {
        &self.definition
    }

    pub fn into_definition(self) -> JsonMap {
        self.definition
    }

    /// The `metadata` section
    pub fn metadata(&self) -> Option<&JsonMap> {
        self.definition.get("metadata").and_then(Value::as_object)
    }

    /// API version string from metadata (e.g. "2006-03-01")
    pub fn api_version(&self) -> Option<&str> {
        self.metadata_str("apiVersion")
    }

    pub fn endpoint_prefix(&self) -> Option<&str> {
        self.metadata_str("endpointPrefix")
    }

    /// Wire protocol (e.g. "rest-xml", "json", "query")
    pub fn protocol(&self) -> Option<&str> {
        self.metadata_str("protocol")
    }

    pub fn service_full_name(&self) -> Option<&str> {
        self.metadata_str("serviceFullName")
    }

    /// Signing name, falling back to the endpoint prefix
    pub fn signing_name(&self) -> Option<&str> {
        self.metadata_str("signingName").or_else(|| self.endpoint_prefix())
    }

    /// Operation names in description order
    pub fn operation_names(&self) -> Vec<&str> {
        self.section("operations")
            .map(|ops| ops.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn operation(&self, name: &str) -> Option<&JsonMap> {
        self.section("operations")?.get(name).and_then(Value::as_object)
    }

    pub fn has_operation(&self, name: &str) -> bool {
        self.operation(name).is_some()
    }

    pub fn shape(&self, name: &str) -> Option<&JsonMap> {
        self.section("shapes")?.get(name).and_then(Value::as_object)
    }

    fn section(&self, key: &str) -> Option<&JsonMap> {
        self.definition.get(key).and_then(Value::as_object)
    }

    fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata()?.get(key).and_then(Value::as_str)
    }
}

impl From<JsonMap> for Service {
    fn from(definition: JsonMap) -> Self {
        Self::new(definition)
    }
}
