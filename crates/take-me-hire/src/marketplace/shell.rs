use serde::Serialize;

use super::domain::{Availability, Candidate, CandidateId};
use super::filter::{filter_candidates, FilterCriteria};
use super::form::{ProfileDraft, ProfileForm, SubmitError};
use super::persistence::CandidatePersistence;
use super::storage::KeyValueStore;
use super::store::CandidateStore;

pub const APP_TITLE: &str = "Take Me Hire";
pub const FOOTER_NOTICE: &str =
    "Demo only. Profiles are stored locally using a key-value store on this machine.";
pub const PROFILE_CREATED_NOTICE: &str = "Profile created and added to the employer search!";

/// Which of the two screens is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveView {
    #[default]
    Employer,
    Seeker,
}

impl ActiveView {
    pub const fn button_label(self) -> &'static str {
        match self {
            ActiveView::Employer => "Employer Dashboard",
            ActiveView::Seeker => "Create Job Seeker Profile",
        }
    }
}

/// Single application-state object: view mode, candidate store, filter inputs, and form draft.
#[derive(Debug)]
pub struct AppShell<S> {
    view: ActiveView,
    store: CandidateStore<S>,
    criteria: FilterCriteria,
    form: ProfileForm,
}

impl<S: KeyValueStore> AppShell<S> {
    /// Opens the store behind `backend` and starts on the employer view.
    pub fn start(backend: S) -> Self {
        Self::with_store(CandidateStore::open(CandidatePersistence::new(backend)))
    }

    pub fn with_store(mut store: CandidateStore<S>) -> Self {
        store.initialize();
        Self {
            view: ActiveView::default(),
            store,
            criteria: FilterCriteria::default(),
            form: ProfileForm::new(),
        }
    }

    pub fn view(&self) -> ActiveView {
        self.view
    }

    pub fn switch_view(&mut self, view: ActiveView) {
        self.view = view;
    }

    pub fn store(&self) -> &CandidateStore<S> {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn reset_filters(&mut self) {
        self.criteria.reset();
    }

    pub fn draft(&self) -> &ProfileDraft {
        self.form.draft()
    }

    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        self.form.draft_mut()
    }

    /// Submits the seeker draft. The notice is what the user should be shown either way.
    pub fn submit_profile(&mut self) -> SubmitOutcome {
        match self.form.submit(&mut self.store) {
            Ok(candidate) => SubmitOutcome {
                notice: PROFILE_CREATED_NOTICE.to_string(),
                created: Some(candidate),
                error: None,
            },
            Err(err) => SubmitOutcome {
                notice: err.to_string(),
                created: None,
                error: Some(err),
            },
        }
    }

    pub fn render(&self) -> Screen {
        let body = match self.view {
            ActiveView::Employer => Body::Employer(employer_dashboard(
                self.store.candidates(),
                &self.criteria,
            )),
            ActiveView::Seeker => Body::Seeker(SeekerProfile {
                heading: "Create Your Job Seeker Profile",
                draft: self.form.draft().clone(),
                availability_options: Availability::ALL,
            }),
        };

        Screen {
            title: APP_TITLE,
            nav: [ActiveView::Employer, ActiveView::Seeker].map(|view| NavButton {
                view,
                label: view.button_label(),
                active: view == self.view,
            }),
            body,
            footer: FOOTER_NOTICE,
        }
    }
}

#[derive(Debug)]
pub struct SubmitOutcome {
    pub notice: String,
    pub created: Option<Candidate>,
    pub error: Option<SubmitError>,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        self.created.is_some()
    }
}

/// Complete render of the shell for a given state.
#[derive(Debug, Clone, Serialize)]
pub struct Screen {
    pub title: &'static str,
    pub nav: [NavButton; 2],
    pub body: Body,
    pub footer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavButton {
    pub view: ActiveView,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Body {
    Employer(EmployerDashboard),
    Seeker(SeekerProfile),
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployerDashboard {
    pub criteria: FilterCriteria,
    pub heading: String,
    pub total: usize,
    pub cards: Vec<CandidateCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeekerProfile {
    pub heading: &'static str,
    pub draft: ProfileDraft,
    pub availability_options: [Availability; 3],
}

/// Card shown for each matching candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateCard {
    pub id: CandidateId,
    pub name: String,
    pub title: String,
    pub location: String,
    pub availability: &'static str,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub skills: Vec<String>,
}

impl From<&Candidate> for CandidateCard {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            title: candidate.title.clone(),
            location: candidate.location.clone(),
            availability: candidate.availability.label(),
            verified: candidate.verified,
            bio: candidate
                .bio
                .clone()
                .filter(|bio| !bio.trim().is_empty()),
            skills: candidate.skills.clone(),
        }
    }
}

/// Runs the filter and shapes the employer view; recomputed on every render.
pub fn employer_dashboard(candidates: &[Candidate], criteria: &FilterCriteria) -> EmployerDashboard {
    let cards: Vec<CandidateCard> = filter_candidates(candidates, criteria)
        .into_iter()
        .map(CandidateCard::from)
        .collect();

    EmployerDashboard {
        criteria: criteria.clone(),
        heading: format!("Matching Candidates ({})", cards.len()),
        total: cards.len(),
        cards,
    }
}
