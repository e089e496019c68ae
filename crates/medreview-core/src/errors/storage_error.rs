/// Storage-layer errors for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("{what} lock poisoned")]
    LockPoisoned { what: String },

    #[error("corrupt row for item {id}: {details}")]
    CorruptRow { id: String, details: String },
}
