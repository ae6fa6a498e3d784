use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{Availability, Candidate, CandidateId};
use super::storage::KeyValueStore;
use super::store::{CandidateStore, StoreError};

/// Raw job-seeker input, held apart from the store until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub name: String,
    pub title: String,
    pub location: String,
    #[serde(deserialize_with = "deserialize_selection")]
    pub availability: Option<Availability>,
    /// Comma separated.
    pub skills: String,
    pub bio: String,
    /// "Request verification badge".
    pub verified: bool,
}

fn deserialize_selection<'de, D>(deserializer: D) -> Result<Option<Availability>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        Some(value) => Availability::parse_selection(&value).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Fields a profile cannot be saved without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Name,
    Title,
    Location,
    Availability,
}

impl RequiredField {
    pub const fn label(self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Title => "title",
            RequiredField::Location => "location",
            RequiredField::Availability => "availability",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("please fill in {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),
}

impl ProfileValidationError {
    pub fn missing(&self) -> &[RequiredField] {
        match self {
            ProfileValidationError::MissingFields(fields) => fields,
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    let labels: Vec<&str> = fields.iter().map(|field| field.label()).collect();
    match labels.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Checks the required fields and normalizes the draft into a storable record.
pub fn validate_and_build(
    draft: &ProfileDraft,
    id: CandidateId,
) -> Result<Candidate, ProfileValidationError> {
    let mut missing = Vec::new();
    let name = draft.name.trim();
    let title = draft.title.trim();
    let location = draft.location.trim();

    if name.is_empty() {
        missing.push(RequiredField::Name);
    }
    if title.is_empty() {
        missing.push(RequiredField::Title);
    }
    if location.is_empty() {
        missing.push(RequiredField::Location);
    }
    let Some(availability) = draft.availability else {
        missing.push(RequiredField::Availability);
        return Err(ProfileValidationError::MissingFields(missing));
    };
    if !missing.is_empty() {
        return Err(ProfileValidationError::MissingFields(missing));
    }

    let bio = draft.bio.trim();
    Ok(Candidate {
        id,
        name: name.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        availability,
        skills: split_skills(&draft.skills),
        bio: (!bio.is_empty()).then(|| bio.to_string()),
        verified: draft.verified,
    })
}

/// Splits comma separated skills, dropping blank pieces.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// Time-derived id (`cand-<unix millis>`), suffixed when the plain value is taken.
pub fn next_candidate_id(now: DateTime<Utc>, taken: impl Fn(&CandidateId) -> bool) -> CandidateId {
    let base = format!("cand-{}", now.timestamp_millis());
    let plain = CandidateId(base.clone());
    if !taken(&plain) {
        return plain;
    }
    (1u32..)
        .map(|suffix| CandidateId(format!("{base}-{suffix}")))
        .find(|candidate| !taken(candidate))
        .unwrap_or(plain)
}

/// Seeker-side form: owns the draft and hands finished profiles to the store.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    draft: ProfileDraft,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    pub fn reset(&mut self) {
        self.draft = ProfileDraft::default();
    }

    pub fn submit<S: KeyValueStore>(
        &mut self,
        store: &mut CandidateStore<S>,
    ) -> Result<Candidate, SubmitError> {
        self.submit_at(store, Utc::now())
    }

    /// Submits with an explicit clock reading for the generated id. The draft is cleared only
    /// when the store accepted the record.
    pub fn submit_at<S: KeyValueStore>(
        &mut self,
        store: &mut CandidateStore<S>,
        now: DateTime<Utc>,
    ) -> Result<Candidate, SubmitError> {
        let id = next_candidate_id(now, |id| store.contains(id));
        let candidate = validate_and_build(&self.draft, id)?;
        let stored = store.add(candidate)?.clone();
        self.reset();
        Ok(stored)
    }
}

/// Error raised by a profile submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ProfileValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
