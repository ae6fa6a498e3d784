//! Candidate marketplace: profile storage, employer search, and job-seeker intake.
//!
//! Data flows from the key-value backend through [`CandidatePersistence`] into the
//! [`CandidateStore`], is narrowed by [`filter_candidates`], and is rendered by the
//! [`AppShell`]. Profiles submitted through the [`ProfileForm`] go back the other way and are
//! written through before the call returns.

pub mod domain;
pub mod filter;
pub mod form;
pub mod persistence;
pub mod router;
pub mod shell;
pub mod storage;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    seed_candidates, Availability, Candidate, CandidateDefect, CandidateId, UnknownAvailability,
};
pub use filter::{filter_candidates, FilterCriteria};
pub use form::{
    split_skills, validate_and_build, ProfileDraft, ProfileForm, ProfileValidationError,
    RequiredField, SubmitError,
};
pub use persistence::{CandidatePersistence, STORAGE_KEY};
pub use router::{candidate_router, SearchQuery, SharedCandidateStore};
pub use shell::{
    employer_dashboard, ActiveView, AppShell, Body, CandidateCard, EmployerDashboard, Screen,
    SeekerProfile, SubmitOutcome,
};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};
pub use store::{CandidateStore, StoreError};
