use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for candidate profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CandidateId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Working arrangement a candidate is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
}

impl Availability {
    pub const ALL: [Availability; 3] = [
        Availability::FullTime,
        Availability::PartTime,
        Availability::Contract,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Availability::FullTime => "Full-time",
            Availability::PartTime => "Part-time",
            Availability::Contract => "Contract",
        }
    }

    /// Parses a selector value. An empty selection means "unset" and yields `Ok(None)`.
    pub fn parse_selection(raw: &str) -> Result<Option<Self>, UnknownAvailability> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "" => Ok(None),
            "full-time" | "fulltime" => Ok(Some(Availability::FullTime)),
            "part-time" | "parttime" => Ok(Some(Availability::PartTime)),
            "contract" => Ok(Some(Availability::Contract)),
            _ => Err(UnknownAvailability(raw.to_string())),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when an availability selector holds something other than the three known options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown availability '{0}' (expected Full-time, Part-time or Contract)")]
pub struct UnknownAvailability(pub String);

/// Job-seeker profile as listed on the employer dashboard and persisted in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub title: String,
    pub location: String,
    pub availability: Availability,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Self-declared; there is no verification process behind the badge.
    #[serde(default)]
    pub verified: bool,
}

impl Candidate {
    /// Checks the record-level invariants stored records must satisfy.
    pub fn check(&self) -> Result<(), CandidateDefect> {
        if self.id.0.trim().is_empty() {
            return Err(CandidateDefect::BlankId);
        }
        for (field, value) in [
            ("name", &self.name),
            ("title", &self.title),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(CandidateDefect::BlankField {
                    id: self.id.clone(),
                    field,
                });
            }
        }
        if self
            .skills
            .iter()
            .any(|skill| skill.is_empty() || skill.trim() != skill)
        {
            return Err(CandidateDefect::UntrimmedSkill(self.id.clone()));
        }
        Ok(())
    }
}

/// Reason a stored record sequence cannot be adopted as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CandidateDefect {
    #[error("candidate id is blank")]
    BlankId,
    #[error("candidate {id} has a blank {field}")]
    BlankField { id: CandidateId, field: &'static str },
    #[error("candidate {0} lists a blank or untrimmed skill")]
    UntrimmedSkill(CandidateId),
    #[error("candidate id {0} appears more than once")]
    DuplicateId(CandidateId),
}

/// Validates a whole sequence, including id uniqueness across records.
pub fn check_sequence(candidates: &[Candidate]) -> Result<(), CandidateDefect> {
    let mut seen = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        candidate.check()?;
        if !seen.insert(&candidate.id) {
            return Err(CandidateDefect::DuplicateId(candidate.id.clone()));
        }
    }
    Ok(())
}

/// The three example profiles that populate an empty store on first run.
pub fn seed_candidates() -> Vec<Candidate> {
    fn skills(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    vec![
        Candidate {
            id: CandidateId::from("seed-1"),
            name: "Sarah Thompson".to_string(),
            title: "Payroll Officer".to_string(),
            location: "Whangārei".to_string(),
            availability: Availability::FullTime,
            skills: skills(&["Payroll Systems", "Xero", "HRIS"]),
            bio: Some("5+ years payroll in SMEs.".to_string()),
            verified: true,
        },
        Candidate {
            id: CandidateId::from("seed-2"),
            name: "James Walker".to_string(),
            title: "Payroll Specialist".to_string(),
            location: "Auckland".to_string(),
            availability: Availability::PartTime,
            skills: skills(&["MYOB", "Compliance", "Data Entry"]),
            bio: Some("Returning parent seeking 3 days/week.".to_string()),
            verified: false,
        },
        Candidate {
            id: CandidateId::from("seed-3"),
            name: "Emma Roberts".to_string(),
            title: "Payroll & HR Advisor".to_string(),
            location: "Whangārei".to_string(),
            availability: Availability::FullTime,
            skills: skills(&["Payroll Legislation", "Onboarding", "Recruitment"]),
            bio: Some("HR generalist with payroll focus.".to_string()),
            verified: true,
        },
    ]
}
