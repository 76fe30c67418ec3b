//! Per-field generators and the document composer built on them.
//!
//! Every helper takes `&mut dyn RngCore` so the engine can drive the whole run
//! from a single seeded RNG.

mod metadata;
mod streams;
mod tags;
mod text;

pub use metadata::metadata;
pub use streams::streams;
pub use tags::tags;
pub use text::{description, document_id, name};

use rand::{Rng, RngCore};

use assetseed_core::{
    ACTION_UPLOAD, ASSET_TYPES, Document, EQUIPMENT_ASSET_TYPE, LOCATIONS, MANUFACTURERS,
};

use crate::errors::GenerationError;

/// Composes whole documents from the fixed vocabularies and a region set.
#[derive(Debug, Clone)]
pub struct DocumentGenerator {
    regions: Vec<String>,
}

impl DocumentGenerator {
    /// `regions` must be non-empty; the engine builds it from `region_codes`.
    pub fn new(regions: Vec<String>) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Builds the document for a 1-based `index`.
    pub fn document(
        &self,
        index: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Document, GenerationError> {
        let asset_type = choose(&ASSET_TYPES, "asset type", rng)?;
        let manufacturer = choose(&MANUFACTURERS, "manufacturer", rng)?;
        let location = choose(&LOCATIONS, "location", rng)?;
        let region = choose(&self.regions, "region", rng)?;
        let name = name(index, &asset_type, rng);
        let description = description(&asset_type, &region, &manufacturer, rng);
        let tags = tags(rng)?;
        let streams = streams(rng);
        let metadata = metadata(&manufacturer, &location, rng);

        Ok(Document {
            id: document_id(index),
            name,
            assettypes: vec![asset_type, EQUIPMENT_ASSET_TYPE.to_string()],
            description,
            region,
            tags,
            streams,
            metadata,
            search_action: ACTION_UPLOAD.to_string(),
        })
    }
}

fn pick<'a, S: AsRef<str>>(values: &'a [S], rng: &mut dyn RngCore) -> Option<&'a str> {
    if values.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..values.len());
    values.get(idx).map(|value| value.as_ref())
}

/// Draw from a vocabulary, failing on an empty one instead of emitting blanks.
pub(crate) fn choose<S: AsRef<str>>(
    values: &[S],
    field: &str,
    rng: &mut dyn RngCore,
) -> Result<String, GenerationError> {
    pick(values, rng)
        .map(str::to_string)
        .ok_or_else(|| GenerationError::InvalidOptions(format!("empty {field} vocabulary")))
}
