use tracing::{debug, warn};

use super::domain::{check_sequence, Candidate};
use super::storage::KeyValueStore;

/// Fixed key the candidate list lives under.
pub const STORAGE_KEY: &str = "take-me-hire-candidates";

/// Loads and saves the candidate list as a single JSON blob.
///
/// Both directions fail soft: unreadable or malformed data loads as an empty list and write
/// failures are logged and dropped. Durability is best effort.
#[derive(Debug, Clone)]
pub struct CandidatePersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CandidatePersistence<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: STORAGE_KEY.to_string(),
        }
    }

    pub fn load(&self) -> Vec<Candidate> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored candidates");
                return Vec::new();
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "candidate storage unreadable; treating as empty");
                return Vec::new();
            }
        };

        let mut candidates: Vec<Candidate> = match serde_json::from_slice(&raw) {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(key = %self.key, error = %err, "stored candidates failed to parse; treating as empty");
                return Vec::new();
            }
        };

        // Earlier writers stored a blank bio as "" rather than omitting it.
        for candidate in &mut candidates {
            if candidate.bio.as_deref().is_some_and(|bio| bio.trim().is_empty()) {
                candidate.bio = None;
            }
        }

        if let Err(defect) = check_sequence(&candidates) {
            warn!(key = %self.key, error = %defect, "stored candidates violate record invariants; treating as empty");
            return Vec::new();
        }

        candidates
    }

    pub fn save(&self, candidates: &[Candidate]) {
        let encoded = match serde_json::to_vec(candidates) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to encode candidates; skipping save");
                return;
            }
        };

        match self.store.set(&self.key, &encoded) {
            Ok(()) => debug!(key = %self.key, count = candidates.len(), "candidates saved"),
            Err(err) => warn!(key = %self.key, error = %err, "failed to save candidates"),
        }
    }
}
