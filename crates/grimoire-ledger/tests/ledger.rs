//! End-to-end behavior of the Ledger over the in-memory store.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use grimoire_ledger::core::CoreError;
use grimoire_ledger::store::{self, ChainStore, MemoryChain};
use grimoire_ledger::{
    AnalysisRecord, Block, Digest, Ledger, LedgerConfig, LedgerError, SealType, ViolationKind,
};
use grimoire_testkit::fixtures::{example_record, tamperings, ChainFixture, BASE_TIMESTAMP};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

async fn open() -> anyhow::Result<Ledger<MemoryChain>> {
    init_tracing();
    Ok(Ledger::open(MemoryChain::new(), LedgerConfig::default()).await?)
}

#[tokio::test]
async fn test_open_creates_genesis() -> anyhow::Result<()> {
    let ledger = open().await?;

    let chain = ledger.snapshot().await?;
    assert_eq!(chain.len(), 1);

    let genesis = &chain[0];
    assert_eq!(genesis.index, 0);
    assert_eq!(genesis.previous_hash, Digest::ZERO);
    assert_eq!(genesis.seal_type, SealType::Genesis);
    assert_eq!(genesis.data, AnalysisRecord::genesis());
    assert!(genesis.is_self_consistent());
    assert!(ledger.is_valid().await?);
    Ok(())
}

#[tokio::test]
async fn test_seal_appends_linked_blocks() -> anyhow::Result<()> {
    let ledger = open().await?;

    for i in 1..=10u64 {
        let tail = ledger.tail().await?;
        let block = ledger.seal(example_record()).await?;
        assert_eq!(block.index, i);
        assert_eq!(block.previous_hash, tail.hash);
        assert_eq!(block.seal_type, SealType::Sealed);
    }

    assert_eq!(ledger.len().await?, 11);
    assert!(ledger.is_valid().await?);
    assert_eq!(ledger.get(4).await?.map(|b| b.index), Some(4));
    assert_eq!(ledger.get(11).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_worked_example() -> anyhow::Result<()> {
    let ledger = open().await?;
    let genesis = ledger.tail().await?;

    let block = ledger.seal(AnalysisRecord::new("a", "m", "v", 0.5, "s")).await?;
    assert_eq!(block.index, 1);
    assert_eq!(block.previous_hash, genesis.hash);
    assert_eq!(block.hash, block.compute_hash());

    // Editing the divergence after sealing breaks block 1 only.
    let mut chain = ledger.snapshot().await?;
    chain[1].data.divergence = 0.6;
    let verdict = grimoire_ledger::verify_chain(&chain);
    let violation = verdict.violation().expect("tamper must be detected");
    assert_eq!(violation.index, 1);
    assert!(matches!(violation.kind, ViolationKind::HashMismatch { .. }));

    // The ledger's own copy is untouched.
    assert!(ledger.is_valid().await?);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_seals_stay_linked() -> anyhow::Result<()> {
    let ledger = Arc::new(open().await?);

    let mut handles = Vec::new();
    for i in 0..50 {
        let ledger = Arc::clone(&ledger);
        handles.push(tokio::spawn(async move {
            let record = AnalysisRecord::new(format!("arch-{i}"), "m", "v", 0.1, "s");
            ledger.seal(record).await
        }));
    }

    let mut indices = HashSet::new();
    for handle in handles {
        let block = handle.await??;
        assert!(indices.insert(block.index), "index {} sealed twice", block.index);
    }

    assert_eq!(indices.len(), 50);
    assert_eq!(ledger.len().await?, 51);
    assert!(ledger.verify().await?.is_intact());
    Ok(())
}

#[tokio::test]
async fn test_adopts_existing_chain() -> anyhow::Result<()> {
    init_tracing();
    let store = ChainFixture::new().store(3).await?;
    let expected = store.snapshot().await?;

    let ledger = Ledger::open(store, LedgerConfig::default()).await?;
    assert_eq!(ledger.snapshot().await?, expected);

    let block = ledger.seal_at(example_record(), BASE_TIMESTAMP + 10_000).await?;
    assert_eq!(block.index, 4);
    assert_eq!(block.previous_hash, expected[3].hash);
    assert!(ledger.is_valid().await?);
    Ok(())
}

#[tokio::test]
async fn test_tampered_store_reported_not_repaired() -> anyhow::Result<()> {
    init_tracing();
    let chain = ChainFixture::new().chain(4);

    for (name, tampered) in tamperings(&chain, 2) {
        let store = MemoryChain::new();
        for block in tampered.clone() {
            store.append(block).await?;
        }
        let ledger = Ledger::open(store, LedgerConfig::default()).await?;

        let verdict = ledger.verify().await?;
        let violation = verdict.violation().unwrap_or_else(|| panic!("{name} not detected"));
        assert_eq!(violation.index, 2, "{name} reported at the wrong block");
        assert!(!ledger.is_valid().await?);

        // Still readable, still unchanged.
        assert_eq!(ledger.snapshot().await?, tampered);
    }
    Ok(())
}

#[tokio::test]
async fn test_views_and_header_prefix() -> anyhow::Result<()> {
    init_tracing();
    let config = LedgerConfig {
        display_hash_width: 8,
        ..LedgerConfig::default()
    };
    let ledger = Ledger::open(MemoryChain::new(), config).await?;
    ledger.seal(AnalysisRecord::new("a", "m", "v", 0.9, "s")).await?;

    let views = ledger.views().await?;
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].seal_type, SealType::Genesis);
    assert_eq!(views[0].previous_hash, "00000000");
    assert_eq!(views[1].hash.len(), 8);
    assert_eq!(views[1].previous_hash, views[0].hash);
    assert_eq!(views[1].divergence_percent, "90%");
    assert!(views[1].divergent);

    let tail = ledger.tail().await?;
    assert_eq!(ledger.latest_hash_prefix().await?, &tail.hash.to_hex()[..8]);
    Ok(())
}

#[tokio::test]
async fn test_custom_genesis_record() -> anyhow::Result<()> {
    init_tracing();
    let config = LedgerConfig::from_json(
        r#"{"genesis_record": {"architect": "", "mystic": "", "void": "", "divergence": 1.0, "synthesis": ""}}"#,
    )?;
    let ledger = Ledger::open(MemoryChain::new(), config).await?;

    let genesis = ledger.tail().await?;
    assert_eq!(genesis.data.divergence, 1.0);
    assert!(genesis.data.architect.is_empty());
    assert!(ledger.is_valid().await?);
    Ok(())
}

/// A store that accepts blocks and keeps none of them.
#[derive(Default)]
struct Forgetful;

#[async_trait]
impl ChainStore for Forgetful {
    async fn append(&self, _block: Block) -> store::Result<()> {
        Ok(())
    }

    async fn tail(&self) -> store::Result<Block> {
        Err(store::StoreError::EmptyChain)
    }

    async fn snapshot(&self) -> store::Result<Vec<Block>> {
        Ok(Vec::new())
    }

    async fn get(&self, _index: u64) -> store::Result<Option<Block>> {
        Ok(None)
    }

    async fn len(&self) -> store::Result<usize> {
        Ok(0)
    }
}

#[tokio::test]
async fn test_seal_without_genesis_is_empty_chain() -> anyhow::Result<()> {
    init_tracing();
    let ledger = Ledger::open(Forgetful, LedgerConfig::default()).await?;

    let err = ledger.seal(example_record()).await.unwrap_err();
    assert!(matches!(err, LedgerError::EmptyChain));
    assert!(matches!(ledger.tail().await, Err(LedgerError::EmptyChain)));

    // An empty chain verifies as intact with nothing in it.
    assert!(ledger.is_valid().await?);
    Ok(())
}

async fn store_with_edited_tail() -> anyhow::Result<MemoryChain> {
    let mut chain = ChainFixture::new().chain(2);
    chain[2].data.divergence = 0.99;

    let store = MemoryChain::new();
    for block in chain {
        store.append(block).await?;
    }
    Ok(store)
}

#[tokio::test]
async fn test_seal_refuses_edited_tail() -> anyhow::Result<()> {
    init_tracing();
    let ledger = Ledger::open(store_with_edited_tail().await?, LedgerConfig::default()).await?;
    assert!(ledger.config().verify_tail);
    assert!(!ledger.is_valid().await?);

    let err = ledger.seal(example_record()).await.unwrap_err();
    match err {
        LedgerError::Integrity(violation) => {
            assert_eq!(violation.index, 2);
            assert!(matches!(violation.kind, ViolationKind::HashMismatch { .. }));
        }
        other => panic!("expected an integrity error, got {other:?}"),
    }

    // Nothing was appended.
    assert_eq!(ledger.len().await?, 3);
    Ok(())
}

#[tokio::test]
async fn test_seal_onto_edited_tail_without_check() -> anyhow::Result<()> {
    init_tracing();
    let config = LedgerConfig {
        verify_tail: false,
        ..LedgerConfig::default()
    };
    let ledger = Ledger::open(store_with_edited_tail().await?, config).await?;

    let block = ledger.seal(example_record()).await?;
    assert_eq!(block.index, 3);
    assert_eq!(ledger.len().await?, 4);

    // The break is still reported where it happened.
    let verdict = ledger.verify().await?;
    assert_eq!(verdict.violation().map(|v| v.index), Some(2));
    Ok(())
}

#[tokio::test]
async fn test_seal_at_index_limit_is_an_error() -> anyhow::Result<()> {
    init_tracing();
    let mut last = Block::genesis_at(BASE_TIMESTAMP);
    last.index = u64::MAX;
    last.seal_type = SealType::Sealed;
    last.hash = last.compute_hash();

    let store = MemoryChain::new();
    store.append(last).await?;
    let ledger = Ledger::open(store, LedgerConfig::default()).await?;

    let err = ledger.seal(example_record()).await.unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Core(CoreError::IndexOverflow(u64::MAX))
    ));
    assert_eq!(ledger.len().await?, 1);
    Ok(())
}
