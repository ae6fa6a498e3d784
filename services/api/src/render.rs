use std::fmt;
use take_me_hire::marketplace::{Body, CandidateCard, EmployerDashboard, Screen, SeekerProfile};

/// Plain-text rendering of a shell screen for terminal output.
pub(crate) struct ScreenText<'a>(pub(crate) &'a Screen);

/// One candidate card as printed on the dashboard.
pub(crate) struct CardText<'a>(pub(crate) &'a CandidateCard);

impl fmt::Display for ScreenText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let screen = self.0;
        let nav: Vec<String> = screen
            .nav
            .iter()
            .map(|button| {
                if button.active {
                    format!("[{}]", button.label)
                } else {
                    format!(" {} ", button.label)
                }
            })
            .collect();
        writeln!(f, "{}  {}", screen.title, nav.join(" "))?;
        writeln!(f)?;

        match &screen.body {
            Body::Employer(dashboard) => write_dashboard(f, dashboard)?,
            Body::Seeker(profile) => write_seeker(f, profile)?,
        }

        writeln!(f, "\n{}", screen.footer)
    }
}

fn write_dashboard(f: &mut fmt::Formatter<'_>, dashboard: &EmployerDashboard) -> fmt::Result {
    let criteria = &dashboard.criteria;
    let mut active = Vec::new();
    if !criteria.title.is_empty() {
        active.push(format!("title~\"{}\"", criteria.title));
    }
    if !criteria.location.is_empty() {
        active.push(format!("location~\"{}\"", criteria.location));
    }
    if let Some(availability) = criteria.availability {
        active.push(format!("availability={availability}"));
    }
    if criteria.verified_only {
        active.push("verified only".to_string());
    }
    let filters = if active.is_empty() {
        "none".to_string()
    } else {
        active.join(", ")
    };

    writeln!(f, "Filters: {filters}")?;
    writeln!(f, "{}", dashboard.heading)?;
    for card in &dashboard.cards {
        write!(f, "{}", CardText(card))?;
    }
    Ok(())
}

impl fmt::Display for CardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;
        let badge = if card.verified { "  (Verified)" } else { "" };
        writeln!(f, "\n  {}{}  [{}]", card.name, badge, card.id)?;
        writeln!(f, "  {}", card.title)?;
        writeln!(f, "  Location: {}", card.location)?;
        writeln!(f, "  Availability: {}", card.availability)?;
        if let Some(bio) = &card.bio {
            writeln!(f, "  {bio}")?;
        }
        if !card.skills.is_empty() {
            writeln!(f, "  Skills: {}", card.skills.join(" | "))?;
        }
        Ok(())
    }
}

fn write_seeker(f: &mut fmt::Formatter<'_>, profile: &SeekerProfile) -> fmt::Result {
    let draft = &profile.draft;
    let availability = draft
        .availability
        .map(|value| value.label())
        .unwrap_or("(choose one)");
    let options: Vec<&str> = profile
        .availability_options
        .iter()
        .map(|option| option.label())
        .collect();

    writeln!(f, "{}", profile.heading)?;
    writeln!(f, "  Full Name: {}", draft.name)?;
    writeln!(f, "  Desired Role: {}", draft.title)?;
    writeln!(f, "  Location: {}", draft.location)?;
    writeln!(
        f,
        "  Availability: {availability}  (options: {})",
        options.join(", ")
    )?;
    writeln!(f, "  Key Skills: {}", draft.skills)?;
    writeln!(f, "  Bio: {}", draft.bio)?;
    writeln!(
        f,
        "  Request Verification Badge: {}",
        if draft.verified { "yes" } else { "no" }
    )
}
