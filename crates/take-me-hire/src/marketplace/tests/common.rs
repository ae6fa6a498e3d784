use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::marketplace::domain::{Availability, Candidate, CandidateId};
use crate::marketplace::form::ProfileDraft;
use crate::marketplace::persistence::CandidatePersistence;
use crate::marketplace::storage::{KeyValueStore, MemoryKeyValueStore, StorageError};
use crate::marketplace::store::CandidateStore;

pub(super) fn candidate(
    id: &str,
    title: &str,
    location: &str,
    availability: Availability,
    verified: bool,
) -> Candidate {
    Candidate {
        id: CandidateId::from(id),
        name: format!("Candidate {id}"),
        title: title.to_string(),
        location: location.to_string(),
        availability,
        skills: vec!["Payroll".to_string()],
        bio: None,
        verified,
    }
}

/// Three records ordered A, B, C with overlapping attributes.
pub(super) fn roster() -> Vec<Candidate> {
    vec![
        candidate("a", "Payroll Officer", "Whangārei", Availability::FullTime, true),
        candidate("b", "Accounts Clerk", "Auckland", Availability::Contract, false),
        candidate("c", "Payroll Clerk", "auckland central", Availability::FullTime, true),
    ]
}

pub(super) fn complete_draft() -> ProfileDraft {
    ProfileDraft {
        name: "  A B ".to_string(),
        title: "Clerk".to_string(),
        location: "Auckland".to_string(),
        availability: Some(Availability::Contract),
        skills: "Payroll, Xero, , HRIS".to_string(),
        bio: "  Available from March.  ".to_string(),
        verified: true,
    }
}

pub(super) fn ready_store() -> (CandidateStore<MemoryKeyValueStore>, MemoryKeyValueStore) {
    let backend = MemoryKeyValueStore::new();
    let store = CandidateStore::open(CandidatePersistence::new(backend.clone()));
    (store, backend)
}

pub(super) fn shared_store() -> Arc<Mutex<CandidateStore<MemoryKeyValueStore>>> {
    Arc::new(Mutex::new(ready_store().0))
}

/// Backend whose writes always fail, standing in for a full disk or quota error.
#[derive(Default, Clone)]
pub(super) struct ReadOnlyBackend {
    pub(super) inner: MemoryKeyValueStore,
    pub(super) attempted_writes: Arc<Mutex<usize>>,
}

impl ReadOnlyBackend {
    pub(super) fn attempts(&self) -> usize {
        *self.attempted_writes.lock().expect("counter mutex poisoned")
    }
}

impl KeyValueStore for ReadOnlyBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &[u8]) -> Result<(), StorageError> {
        *self.attempted_writes.lock().expect("counter mutex poisoned") += 1;
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

/// Backend whose reads always fail.
pub(super) struct UnreadableBackend;

impl KeyValueStore for UnreadableBackend {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Err(StorageError::Unavailable("disk offline".to_string()))
    }

    fn set(&self, _key: &str, _value: &[u8]) -> Result<(), StorageError> {
        Ok(())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
