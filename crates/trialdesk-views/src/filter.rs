//! Live text filtering.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use trialdesk_core::entity::Entity;

/// Quiet period before a filter input is considered settled.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(350);

/// True when any searchable field contains `needle_lower` (already
/// lower-cased) as a substring.
pub fn matches<E: Entity>(entity: &E, needle_lower: &str) -> bool {
    let mut terms = Vec::new();
    entity.search_terms(&mut terms);
    terms
        .iter()
        .any(|term| term.to_lowercase().contains(needle_lower))
}

/// Collapses a burst of keystrokes into the final value.
///
/// Each [`settle`](Self::settle) call supersedes every earlier one; only
/// the call still current after the quiet period resolves with its input.
/// This keeps filter recomputation off the per-keystroke path. It is a
/// responsiveness measure, not a correctness one.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    latest: Arc<AtomicU64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Wait out the quiet period; resolves `Some(input)` only if no newer
    /// call arrived meanwhile.
    pub async fn settle(&self, input: String) -> Option<String> {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.quiet).await;
        if self.latest.load(Ordering::SeqCst) == token {
            Some(input)
        } else {
            None
        }
    }
}
