use crate::infra::{open_backend, parse_availability, DynBackend};
use crate::render::{CardText, ScreenText};
use clap::Args;
use std::sync::Arc;
use take_me_hire::config::AppConfig;
use take_me_hire::error::AppError;
use take_me_hire::marketplace::{
    ActiveView, AppShell, Availability, Body, CandidateCard, CandidatePersistence, CandidateStore,
    FilterCriteria, MemoryKeyValueStore, ProfileDraft, Screen,
};

#[derive(Args, Debug, Default)]
pub(crate) struct CandidatesArgs {
    /// Case-insensitive substring of the job title
    #[arg(long)]
    pub(crate) title: Option<String>,
    /// Case-insensitive substring of the location
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// full-time, part-time or contract
    #[arg(long, value_parser = parse_availability)]
    pub(crate) availability: Option<Availability>,
    /// Only list candidates with the verified badge
    #[arg(long)]
    pub(crate) verified_only: bool,
    /// Print the dashboard as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ProfileCreateArgs {
    /// Full name
    #[arg(long)]
    pub(crate) name: String,
    /// Desired role, e.g. "Payroll Officer"
    #[arg(long)]
    pub(crate) title: String,
    /// Location, e.g. "Whangārei"
    #[arg(long)]
    pub(crate) location: String,
    /// full-time, part-time or contract
    #[arg(long, value_parser = parse_availability)]
    pub(crate) availability: Availability,
    /// Key skills, comma separated
    #[arg(long)]
    pub(crate) skills: Option<String>,
    /// Short bio
    #[arg(long)]
    pub(crate) bio: Option<String>,
    /// Ask for the verified badge
    #[arg(long)]
    pub(crate) request_verification: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Title filter the employer applies after the new profile is saved
    #[arg(long, default_value = "clerk")]
    pub(crate) search: String,
}

fn open_shell() -> Result<AppShell<DynBackend>, AppError> {
    let config = AppConfig::load()?;
    let backend = open_backend(&config.storage);
    Ok(AppShell::with_store(CandidateStore::open(
        CandidatePersistence::new(backend),
    )))
}

pub(crate) fn run_candidates(args: CandidatesArgs) -> Result<(), AppError> {
    let mut shell = open_shell()?;
    *shell.criteria_mut() = FilterCriteria {
        title: args.title.unwrap_or_default(),
        location: args.location.unwrap_or_default(),
        availability: args.availability,
        verified_only: args.verified_only,
    };

    let screen = shell.render();
    if args.json {
        if let Some(json) = dashboard_json(&screen)? {
            println!("{json}");
        }
    } else {
        print!("{}", ScreenText(&screen));
    }
    Ok(())
}

/// JSON payload of an employer screen; `None` for any other view.
fn dashboard_json(screen: &Screen) -> Result<Option<String>, AppError> {
    let Body::Employer(dashboard) = &screen.body else {
        return Ok(None);
    };
    let json = serde_json::to_string_pretty(dashboard).map_err(std::io::Error::from)?;
    Ok(Some(json))
}

pub(crate) fn run_profile_create(args: ProfileCreateArgs) -> Result<(), AppError> {
    let mut shell = open_shell()?;
    shell.switch_view(ActiveView::Seeker);
    *shell.draft_mut() = ProfileDraft {
        name: args.name,
        title: args.title,
        location: args.location,
        availability: Some(args.availability),
        skills: args.skills.unwrap_or_default(),
        bio: args.bio.unwrap_or_default(),
        verified: args.request_verification,
    };

    let outcome = shell.submit_profile();
    if let Some(err) = outcome.error {
        return Err(err.into());
    }

    println!("{}", outcome.notice);
    if let Some(candidate) = &outcome.created {
        print!("{}", CardText(&CandidateCard::from(candidate)));
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { search } = args;
    let backend: DynBackend = Arc::new(MemoryKeyValueStore::new());
    let mut shell = AppShell::start(backend);

    println!("Take Me Hire demo (in-memory storage, nothing is written to disk)\n");
    print!("{}", ScreenText(&shell.render()));

    println!("\n--- Job seeker submits an incomplete profile ---\n");
    shell.switch_view(ActiveView::Seeker);
    *shell.draft_mut() = ProfileDraft {
        name: "A B".to_string(),
        title: "Clerk".to_string(),
        location: "Auckland".to_string(),
        ..ProfileDraft::default()
    };
    let rejected = shell.submit_profile();
    println!("Notice: {}", rejected.notice);

    println!("\n--- Job seeker picks an availability and saves ---\n");
    shell.draft_mut().availability = Some(Availability::Contract);
    print!("{}", ScreenText(&shell.render()));
    let accepted = shell.submit_profile();
    println!("\nNotice: {}", accepted.notice);

    println!("\n--- Employer searches for \"{search}\" ---\n");
    shell.switch_view(ActiveView::Employer);
    shell.criteria_mut().title = search;
    print!("{}", ScreenText(&shell.render()));

    println!("\n--- Employer resets the filters ---\n");
    shell.reset_filters();
    print!("{}", ScreenText(&shell.render()));

    Ok(())
}
