//! Core contracts for assetseed.
//!
//! This crate defines the asset document types written to disk, the fixed
//! vocabularies values are drawn from, and the error type shared by the
//! generator and the CLI.

pub mod document;
pub mod error;
pub mod vocab;

pub use document::{Document, MetadataEntry, Stream, Tag};
pub use error::{Error, Result};
pub use vocab::{
    ASSET_TYPES, ENG_UNITS, LOCATIONS, MANUFACTURERS, MAX_REGION_COUNT, PROPERTY_INSTALLATION_DATE,
    PROPERTY_LOCATION, PROPERTY_MANUFACTURER, TAG_TYPES, region_code, region_codes,
};

/// Second entry of every document's `assettypes`.
pub const EQUIPMENT_ASSET_TYPE: &str = "Equipment";

/// Value of the `@search.action` marker on every document.
pub const ACTION_UPLOAD: &str = "upload";
