//! Document store backed by a single JSON file.
//!
//! The entire application state is one [`Document`] serialized to one
//! file. There are no partial or incremental writes anywhere: every
//! mutation in the system is "copy the document, change the copy,
//! persist the whole thing".
//!
//! ## Example
//!
//! ```no_run
//! use poker_league::store::Store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Store::open("data.json").await?;
//!     let doc = store.snapshot().await;
//!     println!("{} tournaments on file", doc.tournaments.len());
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod errors;

pub use document::Document;
pub use errors::{StorageError, StorageResult};

use std::path::PathBuf;
use tokio::sync::RwLock;

/// Shared handle to the persisted document.
///
/// The document is held in memory as the authoritative copy. Reads
/// clone a snapshot and never observe a half-applied mutation. Writes
/// go through [`Store::mutate`], which holds the write lock across the
/// whole copy-modify-persist cycle, so two concurrent registrations
/// can never both pass a capacity check that only one of them should.
pub struct Store {
    path: PathBuf,
    doc: RwLock<Document>,
}

impl Store {
    /// Open the store, loading the document from `path`.
    ///
    /// A missing file is treated as an empty document; an unreadable or
    /// unparseable file is a [`StorageError`].
    pub async fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let doc = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Document::default(),
            Err(e) => {
                return Err(StorageError::Read {
                    path: path.clone(),
                    source: e,
                });
            }
        };
        Ok(Self {
            path,
            doc: RwLock::new(doc),
        })
    }

    /// A point-in-time copy of the document.
    pub async fn snapshot(&self) -> Document {
        self.doc.read().await.clone()
    }

    /// Apply `f` to a copy of the document and persist the result.
    ///
    /// If `f` fails, or the file cannot be written, neither the file
    /// nor the in-memory document changes. The write lock is held
    /// until the file write completes, which serializes every mutation
    /// in the system.
    pub async fn mutate<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Document) -> Result<T, E>,
        E: From<StorageError>,
    {
        let mut guard = self.doc.write().await;
        let mut draft = guard.clone();
        let out = f(&mut draft)?;
        self.persist(&draft).await?;
        *guard = draft;
        Ok(out)
    }

    /// Write the whole document out, replacing the previous file.
    ///
    /// Writes to a sibling temp file and renames it over the target so
    /// a crash mid-write cannot leave a truncated document behind.
    async fn persist(&self, doc: &Document) -> StorageResult<()> {
        let bytes = serde_json::to_vec_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StorageError::Write {
                path: tmp.clone(),
                source: e,
            })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        Ok(())
    }
}
