//! Per-document diagnostic store.
//!
//! Every pass takes a ticket before it starts. Publishing replaces the
//! document's diagnostics only when the ticket is newer than the one that
//! produced the stored list, so a slow pass can never overwrite the result
//! of a later one.
//!
//! Uses `parking_lot` locks: no poisoning, and guards are held only while
//! the map is touched.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::lint::Diagnostic;

/// Sequence number identifying one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassTicket(u64);

impl PassTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Entry {
    ticket: PassTicket,
    diagnostics: Vec<Diagnostic>,
}

/// Latest diagnostics per document path
#[derive(Debug, Default)]
pub struct DiagnosticStore {
    next_ticket: AtomicU64,
    entries: RwLock<HashMap<PathBuf, Entry>>,
}

impl DiagnosticStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a pass that is about to start
    pub fn begin_pass(&self) -> PassTicket {
        PassTicket(self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Store the result of a pass. Returns false when a newer pass already
    /// published for this document.
    pub fn publish(&self, path: &Path, ticket: PassTicket, diagnostics: Vec<Diagnostic>) -> bool {
        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(path) {
            if existing.ticket >= ticket {
                tracing::debug!(
                    "dropping stale pass {} for {} (stored {})",
                    ticket.value(),
                    path.display(),
                    existing.ticket.value()
                );
                return false;
            }
        }
        entries.insert(
            path.to_path_buf(),
            Entry {
                ticket,
                diagnostics,
            },
        );
        true
    }

    /// Current diagnostics of a document
    pub fn get(&self, path: &Path) -> Option<Vec<Diagnostic>> {
        self.entries
            .read()
            .get(path)
            .map(|entry| entry.diagnostics.clone())
    }

    /// Forget a document (closed or deleted)
    pub fn remove(&self, path: &Path) -> bool {
        self.entries.write().remove(path).is_some()
    }

    /// All documents with their diagnostics, sorted by path
    pub fn snapshot(&self) -> Vec<(PathBuf, Vec<Diagnostic>)> {
        let entries = self.entries.read();
        let mut all: Vec<(PathBuf, Vec<Diagnostic>)> = entries
            .iter()
            .map(|(path, entry)| (path.clone(), entry.diagnostics.clone()))
            .collect();
        drop(entries);
        all.sort_by(|a, b| a.0.cmp(&b.0));
        all
    }

    /// Total number of stored diagnostics
    pub fn diagnostic_count(&self) -> usize {
        self.entries
            .read()
            .values()
            .map(|entry| entry.diagnostics.len())
            .sum()
    }
}
