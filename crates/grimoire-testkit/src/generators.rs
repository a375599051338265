//! Proptest generators for property-based testing.

use proptest::prelude::*;

use grimoire_core::{AnalysisRecord, Block};

/// Generate free text, including quotes, control characters and non-ASCII.
pub fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 .,:]{0,32}",
        "[\"\\\\\n\t\r\u{1}]{0,8}",
        any::<String>(),
    ]
}

/// Generate a divergence, weighted toward the usual `[0, 1]` range.
pub fn divergence() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.0f64..=1.0,
        1 => Just(0.5),
        1 => any::<f64>(),
    ]
}

/// Generate a reasonable millisecond timestamp.
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=4_102_444_800_000
}

/// Generate an analysis record.
pub fn analysis_record() -> impl Strategy<Value = AnalysisRecord> {
    (text(), text(), text(), divergence(), text())
        .prop_map(|(a, m, v, d, s)| AnalysisRecord::new(a, m, v, d, s))
}

/// Parameters for generating a chain.
#[derive(Debug, Clone)]
pub struct ChainParams {
    pub genesis_timestamp: i64,
    /// Records and timestamps of each sealed block.
    pub entries: Vec<(AnalysisRecord, i64)>,
}

impl Arbitrary for ChainParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            timestamp(),
            prop::collection::vec((analysis_record(), timestamp()), 0..12),
        )
            .prop_map(|(genesis_timestamp, entries)| ChainParams {
                genesis_timestamp,
                entries,
            })
            .boxed()
    }
}

/// Build a chain from parameters.
pub fn chain_from_params(params: &ChainParams) -> Vec<Block> {
    let mut chain = vec![Block::genesis_at(params.genesis_timestamp)];
    for (record, ts) in &params.entries {
        let next = match chain.last() {
            Some(tail) => Block::seal_at(tail, record.clone(), *ts),
            None => Block::genesis_at(*ts),
        };
        chain.push(next);
    }
    chain
}
