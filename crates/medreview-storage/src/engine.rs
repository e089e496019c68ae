//! StorageEngine: owns the ConnectionPool, runs migrations on open and
//! implements IItemRepository over SQLite.

use std::path::Path;

use medreview_core::config::StorageConfig;
use medreview_core::errors::ReviewResult;
use medreview_core::item::{Item, ItemKind};
use medreview_core::models::AutoCheckResult;
use medreview_core::traits::IItemRepository;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{check_ops, item_crud};

/// Number of read connections for file-backed databases.
const READ_POOL_SIZE: usize = 4;

pub struct StorageEngine {
    pool: ConnectionPool,
    /// In-memory readers are separate databases, so reads go through the
    /// writer unless the engine is file-backed.
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open the database named by `config.db_path`.
    pub fn open(config: &StorageConfig) -> ReviewResult<Self> {
        Self::open_path(Path::new(&config.db_path), config)
    }

    pub fn open_path(path: &Path, config: &StorageConfig) -> ReviewResult<Self> {
        let pool = ConnectionPool::open(path, config, READ_POOL_SIZE)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    pub fn open_in_memory() -> ReviewResult<Self> {
        let pool = ConnectionPool::open_in_memory(&StorageConfig::default())?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> ReviewResult<()> {
        let applied = self
            .pool
            .writer
            .with_conn_sync(migrations::run_migrations)?;
        tracing::debug!(applied, "storage initialized");
        Ok(())
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn schema_version(&self) -> ReviewResult<u32> {
        self.with_reader(migrations::current_version)
    }

    fn with_reader<F, T>(&self, f: F) -> ReviewResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> ReviewResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }
}

impl IItemRepository for StorageEngine {
    fn get(&self, id: &str) -> ReviewResult<Option<Item>> {
        self.with_reader(|conn| item_crud::get_item(conn, id))
    }

    fn list(&self) -> ReviewResult<Vec<Item>> {
        self.with_reader(|conn| item_crud::list_items(conn, None))
    }

    fn list_by_kind(&self, kind: ItemKind) -> ReviewResult<Vec<Item>> {
        self.with_reader(|conn| item_crud::list_items(conn, Some(kind)))
    }

    fn put(&self, item: &Item) -> ReviewResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| item_crud::upsert_item(conn, item))
    }

    fn delete(&self, id: &str) -> ReviewResult<bool> {
        self.pool
            .writer
            .with_conn_sync(|conn| item_crud::delete_item(conn, id))
    }

    fn get_checks(&self, item_id: &str) -> ReviewResult<Option<AutoCheckResult>> {
        self.with_reader(|conn| check_ops::get_checks(conn, item_id))
    }

    fn put_checks(&self, result: &AutoCheckResult) -> ReviewResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| check_ops::upsert_checks(conn, result))
    }

    fn list_checks(&self) -> ReviewResult<Vec<AutoCheckResult>> {
        self.with_reader(check_ops::list_checks)
    }
}
