use rand::{Rng, RngCore};

use assetseed_core::Stream;
use assetseed_core::vocab::{
    DIMENSION, STREAM_ENG_UNIT, STREAM_PROPERTY, STREAM_SOURCE, STREAM_TAG_TYPE,
};

pub(crate) const MAX_STREAMS: usize = 3;

/// Up to `MAX_STREAMS` PI System streams; an asset may have none.
pub fn streams(rng: &mut dyn RngCore) -> Vec<Stream> {
    let count = rng.random_range(0..=MAX_STREAMS);
    (0..count).map(|_| stream(rng)).collect()
}

fn stream(rng: &mut dyn RngCore) -> Stream {
    let name = format!("Stream-{}", rng.random_range(100..=999));
    Stream {
        propertyname: STREAM_PROPERTY.to_string(),
        description: format!("Real-time stream for {name}"),
        alias: format!("S_{name}"),
        datahubstreamid: format!("dh-{}", rng.random_range(10000..=99999)),
        source: STREAM_SOURCE.to_string(),
        tagtype: STREAM_TAG_TYPE.to_string(),
        engunit: STREAM_ENG_UNIT.to_string(),
        dimension: DIMENSION.to_string(),
        name,
    }
}
