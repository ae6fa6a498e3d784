use serde::{Deserialize, Serialize};

use super::domain::{Availability, Candidate};

/// Employer-side constraints. Empty fields do not constrain anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub title: String,
    pub location: String,
    pub availability: Option<Availability>,
    pub verified_only: bool,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.location.is_empty()
            && self.availability.is_none()
            && !self.verified_only
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, candidate: &Candidate) -> bool {
        contains_folded(&candidate.title, &self.title)
            && contains_folded(&candidate.location, &self.location)
            && self
                .availability
                .map_or(true, |wanted| candidate.availability == wanted)
            && (!self.verified_only || candidate.verified)
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Stable filter: matching records come back in input order.
pub fn filter_candidates<'a>(
    candidates: &'a [Candidate],
    criteria: &FilterCriteria,
) -> Vec<&'a Candidate> {
    candidates
        .iter()
        .filter(|candidate| criteria.matches(candidate))
        .collect()
}
