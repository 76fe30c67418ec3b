use std::ops::RangeInclusive;

use chrono::NaiveDate;
use rand::{Rng, RngCore};

use assetseed_core::{
    MetadataEntry, PROPERTY_INSTALLATION_DATE, PROPERTY_LOCATION, PROPERTY_MANUFACTURER,
};

pub(crate) const INSTALL_YEARS: RangeInclusive<i32> = 2010..=2023;

const INSTALL_MONTH: u32 = 1;
const INSTALL_DAY: u32 = 15;

/// Manufacturer, Location and InstallationDate entries, always in that order.
pub fn metadata(manufacturer: &str, location: &str, rng: &mut dyn RngCore) -> Vec<MetadataEntry> {
    vec![
        MetadataEntry::new(PROPERTY_MANUFACTURER, manufacturer),
        MetadataEntry::new(PROPERTY_LOCATION, location),
        MetadataEntry::new(PROPERTY_INSTALLATION_DATE, installation_date(rng)),
    ]
}

fn installation_date(rng: &mut dyn RngCore) -> String {
    let year = rng.random_range(INSTALL_YEARS);
    NaiveDate::from_ymd_opt(year, INSTALL_MONTH, INSTALL_DAY)
        .unwrap_or_default()
        .format("%Y-%m-%d")
        .to_string()
}
