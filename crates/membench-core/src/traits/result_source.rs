//! `IResultSource`: the narrow "list candidates for a prefix" interface.
//!
//! The view builders never touch the filesystem directly. The directory-backed
//! implementation lives in `membench-analysis::discovery`; tests use
//! `InMemoryResultSource`.

use std::sync::Arc;

use crate::errors::DiscoveryError;
use crate::types::ResultFile;

/// Read-only access to result files.
pub trait IResultSource: Send + Sync {
    /// All files named `{prefix}-*.json` that are not partial runs, sorted by name.
    ///
    /// Re-reads on every call. A file that cannot be decoded is still returned,
    /// with a `Null` payload; only a failure to list the source is an error.
    fn list_candidates(&self, prefix: &str) -> Result<Vec<ResultFile>, DiscoveryError>;
}

// ─── Blanket impls ──────────────────────────────────────────────────

impl<T: IResultSource + ?Sized> IResultSource for Arc<T> {
    fn list_candidates(&self, prefix: &str) -> Result<Vec<ResultFile>, DiscoveryError> {
        (**self).list_candidates(prefix)
    }
}

impl<T: IResultSource + ?Sized> IResultSource for &T {
    fn list_candidates(&self, prefix: &str) -> Result<Vec<ResultFile>, DiscoveryError> {
        (**self).list_candidates(prefix)
    }
}
