//! Fixed vocabularies documents draw their values from.

use crate::error::{Error, Result};

pub const ASSET_TYPES: [&str; 6] = [
    "Compressor",
    "Pump",
    "Turbine",
    "Heat Exchanger",
    "Separator",
    "Valve",
];

pub const MANUFACTURERS: [&str; 5] = [
    "Siemens",
    "GE",
    "Atlas Copco",
    "Ingersoll Rand",
    "Mitsubishi",
];

pub const LOCATIONS: [&str; 5] = [
    "North Platform",
    "South Plant",
    "Offshore Unit 1",
    "Refinery B",
    "Pipeline Station 4",
];

pub const TAG_TYPES: [&str; 2] = ["Analog", "Discrete"];

pub const ENG_UNITS: [&str; 4] = ["C", "Bar", "RPM", "m3/h"];

pub const TAG_SOURCE: &str = "SCADA";
pub const STREAM_SOURCE: &str = "PI System";
pub const STREAM_PROPERTY: &str = "Value";
pub const STREAM_TAG_TYPE: &str = "Float";
pub const STREAM_ENG_UNIT: &str = "various";
pub const DIMENSION: &str = "1";

pub const PROPERTY_MANUFACTURER: &str = "Manufacturer";
pub const PROPERTY_LOCATION: &str = "Location";
pub const PROPERTY_INSTALLATION_DATE: &str = "InstallationDate";

/// Region codes are two digits wide.
pub const MAX_REGION_COUNT: usize = 99;

/// Region code for a 1-based position, e.g. `Region07`.
pub fn region_code(position: usize) -> String {
    format!("Region{position:02}")
}

/// `Region01` through `RegionNN` for `count` regions.
pub fn region_codes(count: usize) -> Result<Vec<String>> {
    if count == 0 || count > MAX_REGION_COUNT {
        return Err(Error::InvalidVocabulary(format!(
            "region count must be between 1 and {MAX_REGION_COUNT}, got {count}"
        )));
    }
    Ok((1..=count).map(region_code).collect())
}
