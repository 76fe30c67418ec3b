use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A synthetic industrial asset, serialized as one `asset-NNN.json` file.
///
/// Field order is the order keys appear in the written JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Document {
    /// `doc-NNN`, 1-indexed.
    pub id: String,
    pub name: String,
    /// The chosen asset type followed by `Equipment`.
    pub assettypes: Vec<String>,
    pub description: String,
    pub region: String,
    pub tags: Vec<Tag>,
    pub streams: Vec<Stream>,
    /// Manufacturer, Location and InstallationDate, in that order.
    pub metadata: Vec<MetadataEntry>,
    /// Upload marker consumed by the search index loader.
    #[serde(rename = "@search.action")]
    pub search_action: String,
}

impl Document {
    /// Primary asset type, i.e. the first `assettypes` entry.
    pub fn asset_type(&self) -> Option<&str> {
        self.assettypes.first().map(String::as_str)
    }

    /// Looks up a metadata value by property name.
    pub fn metadata_value(&self, property: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|entry| entry.propertyname == property)
            .map(|entry| entry.propertyvalue.as_str())
    }
}

/// A simulated SCADA measurement point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Tag {
    /// `TAG-NNNN`.
    pub name: String,
    pub alias: String,
    pub description: String,
    pub source: String,
    /// `Analog` or `Discrete`.
    pub tagtype: String,
    pub engunit: String,
    pub dimension: String,
}

/// A simulated real-time data stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Stream {
    /// `Stream-NNN`.
    pub name: String,
    pub propertyname: String,
    pub description: String,
    pub alias: String,
    /// `dh-NNNNN`.
    pub datahubstreamid: String,
    pub source: String,
    pub tagtype: String,
    pub engunit: String,
    pub dimension: String,
}

/// A property/value pair describing a document attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MetadataEntry {
    pub propertyname: String,
    pub propertyvalue: String,
}

impl MetadataEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            propertyname: name.into(),
            propertyvalue: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document {
            id: "doc-001".to_string(),
            name: "Pump K001".to_string(),
            assettypes: vec!["Pump".to_string(), "Equipment".to_string()],
            description: "Heavy-duty Pump designed for extreme conditions in Region03.".to_string(),
            region: "Region03".to_string(),
            tags: Vec::new(),
            streams: Vec::new(),
            metadata: vec![
                MetadataEntry::new("Manufacturer", "GE"),
                MetadataEntry::new("Location", "Refinery B"),
                MetadataEntry::new("InstallationDate", "2015-01-15"),
            ],
            search_action: "upload".to_string(),
        }
    }

    #[test]
    fn serializes_action_marker_last() {
        let json = serde_json::to_string(&sample()).expect("serialize");
        assert!(json.starts_with("{\"id\":\"doc-001\""));
        assert!(json.ends_with("\"@search.action\":\"upload\"}"));
        assert!(!json.contains("search_action"));
    }

    #[test]
    fn metadata_lookup_by_property_name() {
        let doc = sample();
        assert_eq!(doc.asset_type(), Some("Pump"));
        assert_eq!(doc.metadata_value("Location"), Some("Refinery B"));
        assert_eq!(doc.metadata_value("Serial"), None);
    }
}
