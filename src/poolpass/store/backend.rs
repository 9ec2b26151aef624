use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for the persistent key-value substrate.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while PassportStore handles the "what" (encodings, migration, defaults).
///
/// Implementations report substrate problems as `ReadFailure` / `WriteFailure`
/// so callers can recover from them uniformly.
pub trait KvBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST leave the previous value intact when the write fails.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Forget `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Where the value for `key` lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self, key: &str) -> PathBuf;
}
