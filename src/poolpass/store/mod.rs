//! # Storage Layer
//!
//! Progress lives in a tiny key-value substrate, abstracted behind the
//! [`backend::KvBackend`] trait so the same logic runs against the filesystem
//! in production and against memory in tests.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key in the data directory,
//!   written atomically (temp file + rename).
//! - [`mem_backend::MemBackend`]: in-memory, with switches that simulate
//!   read and write failures.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── visited.json    # PoolId -> { done, date }
//! ├── selected        # selected catalog index, decimal text
//! ├── stamps-page     # passport page index, decimal text
//! └── config.json     # settings (see config.rs)
//! ```
//!
//! [`passport_store::PassportStore`] owns the encodings on top of the raw
//! substrate. Its reads never fail: a broken substrate yields defaults plus
//! the failure, wrapped in [`crate::error::Recovered`].

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod passport_store;

pub mod keys {
    pub const VISITED: &str = "visited";
    pub const SELECTED: &str = "selected";
    pub const STAMPS_PAGE: &str = "stamps-page";

    /// Keys whose values are JSON documents.
    pub fn is_json(key: &str) -> bool {
        key == VISITED
    }
}
