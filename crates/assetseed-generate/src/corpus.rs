//! Read back a directory of generated documents.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use assetseed_core::{Document, PROPERTY_LOCATION, PROPERTY_MANUFACTURER};

use crate::errors::GenerationError;
use crate::output::json::document_file_index;

/// Document attribute counted by [`facet_counts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Region,
    AssetType,
    Manufacturer,
    Location,
}

impl Facet {
    fn value<'a>(&self, document: &'a Document) -> Option<&'a str> {
        match self {
            Facet::Region => Some(document.region.as_str()),
            Facet::AssetType => document.asset_type(),
            Facet::Manufacturer => document.metadata_value(PROPERTY_MANUFACTURER),
            Facet::Location => document.metadata_value(PROPERTY_LOCATION),
        }
    }
}

/// `asset-NNN.json` files in `dir`, in document index order. Other files are
/// skipped and a missing directory is empty.
pub fn list_document_files(dir: &Path) -> Result<Vec<PathBuf>, GenerationError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let index = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(document_file_index);
        if let Some(index) = index
            && path.is_file()
        {
            files.push((index, path));
        }
    }
    files.sort_by_key(|(index, _)| *index);
    Ok(files.into_iter().map(|(_, path)| path).collect())
}

pub fn read_document(path: &Path) -> Result<Document, GenerationError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Count documents per facet value.
pub fn facet_counts(documents: &[Document], facet: Facet) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for value in documents.iter().filter_map(|doc| facet.value(doc)) {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetseed_core::MetadataEntry;

    fn doc(region: &str, asset_type: &str, manufacturer: &str) -> Document {
        Document {
            id: "doc-001".to_string(),
            name: format!("{asset_type} A001"),
            assettypes: vec![asset_type.to_string(), "Equipment".to_string()],
            description: String::new(),
            region: region.to_string(),
            tags: Vec::new(),
            streams: Vec::new(),
            metadata: vec![
                MetadataEntry::new("Manufacturer", manufacturer),
                MetadataEntry::new("Location", "Refinery B"),
                MetadataEntry::new("InstallationDate", "2012-01-15"),
            ],
            search_action: "upload".to_string(),
        }
    }

    #[test]
    fn counts_by_facet() {
        let docs = vec![
            doc("Region01", "Pump", "GE"),
            doc("Region01", "Valve", "GE"),
            doc("Region02", "Pump", "Siemens"),
        ];

        let regions = facet_counts(&docs, Facet::Region);
        assert_eq!(regions.get("Region01"), Some(&2));
        assert_eq!(regions.get("Region02"), Some(&1));

        let types = facet_counts(&docs, Facet::AssetType);
        assert_eq!(types.get("Pump"), Some(&2));
        assert!(!types.contains_key("Equipment"));

        let makers = facet_counts(&docs, Facet::Manufacturer);
        assert_eq!(makers.get("Siemens"), Some(&1));

        let locations = facet_counts(&docs, Facet::Location);
        assert_eq!(locations.get("Refinery B"), Some(&3));
    }

    #[test]
    fn listing_skips_foreign_files_and_orders_by_index() {
        let dir = std::env::temp_dir().join(format!("assetseed_listing_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("create dir");
        for name in [
            "asset-1000.json",
            "asset-101.json",
            "asset-100.json",
            "asset-002.json",
            "report.json",
            "notes.txt",
        ] {
            fs::write(dir.join(name), "{}").expect("write");
        }

        let names: Vec<String> = list_document_files(&dir)
            .expect("list")
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            ["asset-002.json", "asset-100.json", "asset-101.json", "asset-1000.json"]
        );
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let dir = std::env::temp_dir().join(format!("assetseed_missing_{}", uuid::Uuid::new_v4()));
        assert!(list_document_files(&dir).expect("list").is_empty());
    }
}
