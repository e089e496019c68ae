use medreview_core::config::StorageConfig;
use medreview_core::item::FlashcardContent;
use medreview_core::models::AutoCheckResult;
use medreview_core::traits::IItemRepository;
use medreview_core::{Item, ItemContent, Reference};
use medreview_storage::migrations::LATEST_VERSION;
use medreview_storage::pool::pragmas::verify_wal_mode;
use medreview_storage::StorageEngine;

fn item() -> Item {
    Item::new(
        "Physiology",
        "Renal",
        ItemContent::Flashcard(FlashcardContent {
            front: "Normal GFR?".into(),
            back: "About 125 ml per minute".into(),
        }),
        vec![Reference::new("Guyton").with_page("330")],
    )
}

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("review.db");
    let config = StorageConfig::default();
    let item = item();

    {
        let engine = StorageEngine::open_path(&path, &config).unwrap();
        engine.put(&item).unwrap();
        engine
            .put_checks(&AutoCheckResult::neutral(item.id.clone()))
            .unwrap();
    }

    let engine = StorageEngine::open_path(&path, &config).unwrap();
    let loaded = engine.get(&item.id).unwrap().unwrap();
    assert_eq!(loaded.references, item.references);
    assert!(engine.get_checks(&item.id).unwrap().is_some());
}

#[test]
fn open_uses_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        db_path: dir.path().join("configured.db").to_string_lossy().into_owned(),
        ..Default::default()
    };
    let engine = StorageEngine::open(&config).unwrap();
    engine.put(&item()).unwrap();
    assert!(dir.path().join("configured.db").exists());
}

#[test]
fn migrations_reach_latest_and_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("review.db");
    let config = StorageConfig::default();

    let engine = StorageEngine::open_path(&path, &config).unwrap();
    assert_eq!(engine.schema_version().unwrap(), LATEST_VERSION);
    drop(engine);

    let engine = StorageEngine::open_path(&path, &config).unwrap();
    assert_eq!(engine.schema_version().unwrap(), LATEST_VERSION);
}

#[test]
fn file_backed_writer_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let engine =
        StorageEngine::open_path(&dir.path().join("wal.db"), &StorageConfig::default()).unwrap();
    let wal = engine
        .pool()
        .writer
        .with_conn_sync(verify_wal_mode)
        .unwrap();
    assert!(wal);
}

#[test]
fn reads_see_committed_writes_through_read_pool() {
    let dir = tempfile::tempdir().unwrap();
    let engine =
        StorageEngine::open_path(&dir.path().join("pool.db"), &StorageConfig::default()).unwrap();
    assert_eq!(engine.pool().readers.size(), 4);

    let items: Vec<Item> = (0..6).map(|_| item()).collect();
    for item in &items {
        engine.put(item).unwrap();
    }
    // Several reads rotate through every reader.
    for item in &items {
        assert!(engine.get(&item.id).unwrap().is_some());
    }
    assert_eq!(engine.list().unwrap().len(), 6);
}
