use tracing::info;

use super::domain::{seed_candidates, Candidate, CandidateDefect, CandidateId};
use super::persistence::CandidatePersistence;
use super::storage::KeyValueStore;

#[derive(Debug)]
enum StoreState {
    Uninitialized,
    Ready(Vec<Candidate>),
}

/// Authoritative in-memory candidate list with write-through persistence.
///
/// The list only grows: records are prepended by [`CandidateStore::add`] and never edited or
/// removed.
#[derive(Debug)]
pub struct CandidateStore<S> {
    persistence: CandidatePersistence<S>,
    state: StoreState,
}

impl<S: KeyValueStore> CandidateStore<S> {
    pub fn new(persistence: CandidatePersistence<S>) -> Self {
        Self {
            persistence,
            state: StoreState::Uninitialized,
        }
    }

    /// Builds a store and immediately runs [`CandidateStore::initialize`].
    pub fn open(persistence: CandidatePersistence<S>) -> Self {
        let mut store = Self::new(persistence);
        store.initialize();
        store
    }

    /// Loads persisted candidates, seeding (and saving) the example set when storage is empty.
    /// Runs once; later calls leave the ready state untouched.
    pub fn initialize(&mut self) {
        if self.is_ready() {
            return;
        }

        let loaded = self.persistence.load();
        let candidates = if loaded.is_empty() {
            let seeds = seed_candidates();
            self.persistence.save(&seeds);
            info!(count = seeds.len(), "seeded empty candidate store");
            seeds
        } else {
            info!(count = loaded.len(), "loaded stored candidates");
            loaded
        };

        self.state = StoreState::Ready(candidates);
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, StoreState::Ready(_))
    }

    /// Current list, newest first. Empty until initialized.
    pub fn candidates(&self) -> &[Candidate] {
        match &self.state {
            StoreState::Ready(candidates) => candidates,
            StoreState::Uninitialized => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.candidates().len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates().is_empty()
    }

    pub fn contains(&self, id: &CandidateId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &CandidateId) -> Option<&Candidate> {
        self.candidates()
            .iter()
            .find(|candidate| &candidate.id == id)
    }

    /// Prepends `candidate` and persists the full list before returning. Records that would
    /// make the stored list unloadable are refused before anything changes.
    pub fn add(&mut self, candidate: Candidate) -> Result<&Candidate, StoreError> {
        let StoreState::Ready(candidates) = &mut self.state else {
            return Err(StoreError::Uninitialized);
        };
        candidate.check().map_err(StoreError::InvalidRecord)?;
        if candidates.iter().any(|existing| existing.id == candidate.id) {
            return Err(StoreError::DuplicateId(candidate.id));
        }

        candidates.insert(0, candidate);
        self.persistence.save(candidates);
        info!(id = %candidates[0].id, total = candidates.len(), "candidate added");
        Ok(&candidates[0])
    }
}

/// Error raised when a candidate cannot be added.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("candidate store has not been initialized")]
    Uninitialized,
    #[error("candidate {0} already exists")]
    DuplicateId(CandidateId),
    #[error("candidate rejected: {0}")]
    InvalidRecord(CandidateDefect),
}
