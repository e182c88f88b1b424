//! The run ledger entity.

use super::digest::content_hash;
use super::value_objects::{Direction, LedgerEntry, Provenance};
use crate::core::agent::AgentId;
use std::sync::{Mutex, MutexGuard, PoisonError};

const SNAPSHOT_OPEN: &str = "<LEDGER>";
const SNAPSHOT_CLOSE: &str = "</LEDGER>";

/// Append-only record of one orchestration run (Entity)
///
/// A single mutex guards both [`append`](Self::append) and
/// [`snapshot`](Self::snapshot), so a snapshot never observes a partially
/// applied append. Entries are kept in append order, which under concurrent
/// writers is completion order rather than logical step order.
#[derive(Debug)]
pub struct Ledger {
    original_prompt: String,
    entries: Mutex<Vec<LedgerEntry>>,
}

impl Ledger {
    pub fn new(original_prompt: impl Into<String>) -> Self {
        Self {
            original_prompt: original_prompt.into(),
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Hash `content`, stamp the current time and append the entry.
    ///
    /// Returns a copy of the appended entry.
    pub fn append(
        &self,
        direction: Direction,
        step_index: usize,
        agent: &AgentId,
        content: &str,
        provenance: Provenance,
    ) -> LedgerEntry {
        let content_hash = content_hash(content);
        let mut entries = self.lock();
        // Stamped under the lock so timestamps never run backwards in append order
        let entry = LedgerEntry {
            direction,
            step_index,
            agent: agent.clone(),
            content_hash,
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            provenance,
        };
        entries.push(entry.clone());
        entry
    }

    /// Render the ledger as the context block prefixed to prompts.
    ///
    /// ```text
    /// <LEDGER>
    /// Original: <prompt>
    ///
    /// F0 | agent | 0123456789ab | 2025-01-01T00:00:00.000Z
    /// </LEDGER>
    /// ```
    pub fn snapshot(&self) -> String {
        let entries = self.lock();
        let mut out = format!("{}\nOriginal: {}\n\n", SNAPSHOT_OPEN, self.original_prompt);
        for entry in entries.iter() {
            out.push_str(&entry.render_line());
            out.push('\n');
        }
        out.push_str(SNAPSHOT_CLOSE);
        out.push('\n');
        out
    }

    /// Copy of all entries in append order.
    pub fn entries(&self) -> Vec<LedgerEntry> {
        self.lock().clone()
    }

    /// Consume the ledger and return its entries in append order.
    pub fn into_entries(self) -> Vec<LedgerEntry> {
        self.entries
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A panicking writer cannot leave a half-pushed Vec behind, so the
    // poisoned state is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<LedgerEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
