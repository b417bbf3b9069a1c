use thiserror::Error;

/// Unified error type for the entire vendor-dashboard-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
///
/// None of these are fatal: the UI boundary decides whether to show a
/// message, re-seed, or retry a write.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Persisted State ─────────────────────────────────────────────
    /// The stored bytes are not a valid `VendorData`.
    /// Recover by re-initializing from seed data.
    #[error("Corrupt persisted state: {0}")]
    CorruptState(String),

    /// The transport accepted the read call but could not produce a value.
    #[error("Storage read failed: {0}")]
    StorageRead(String),

    /// The transport rejected a write. The in-memory mutation has already
    /// been applied; only durability is missing.
    #[error("Persistence write failed: {0}")]
    PersistenceWrite(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CoreError {
    /// `true` for errors that mean "treat as no data and re-seed".
    #[must_use]
    pub fn is_corrupt_state(&self) -> bool {
        matches!(self, CoreError::CorruptState(_))
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
