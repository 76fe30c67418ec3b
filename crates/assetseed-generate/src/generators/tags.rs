use rand::{Rng, RngCore};

use assetseed_core::vocab::{DIMENSION, TAG_SOURCE};
use assetseed_core::{ENG_UNITS, TAG_TYPES, Tag};

use super::choose;
use crate::errors::GenerationError;

pub(crate) const MIN_TAGS: usize = 1;
pub(crate) const MAX_TAGS: usize = 5;

/// Between `MIN_TAGS` and `MAX_TAGS` SCADA tags with independent random numbers.
pub fn tags(rng: &mut dyn RngCore) -> Result<Vec<Tag>, GenerationError> {
    let count = rng.random_range(MIN_TAGS..=MAX_TAGS);
    (0..count).map(|_| tag(rng)).collect()
}

fn tag(rng: &mut dyn RngCore) -> Result<Tag, GenerationError> {
    let name = format!("TAG-{}", rng.random_range(1000..=9999));
    Ok(Tag {
        alias: format!("Alias_{name}"),
        description: format!("Measurement tag for {name}"),
        source: TAG_SOURCE.to_string(),
        tagtype: choose(&TAG_TYPES, "tag type", rng)?,
        engunit: choose(&ENG_UNITS, "engineering unit", rng)?,
        dimension: DIMENSION.to_string(),
        name,
    })
}
