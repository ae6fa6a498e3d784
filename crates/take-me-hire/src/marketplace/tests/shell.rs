use super::common::*;
use crate::marketplace::domain::{seed_candidates, Availability};
use crate::marketplace::shell::{
    ActiveView, AppShell, Body, CandidateCard, PROFILE_CREATED_NOTICE,
};
use crate::marketplace::storage::MemoryKeyValueStore;
use crate::marketplace::store::CandidateStore;

#[test]
fn starts_on_employer_view_with_every_candidate() {
    let shell = AppShell::start(MemoryKeyValueStore::new());
    assert_eq!(shell.view(), ActiveView::Employer);

    let screen = shell.render();
    assert_eq!(screen.title, "Take Me Hire");
    assert!(screen.nav[0].active);
    assert!(!screen.nav[1].active);
    match screen.body {
        Body::Employer(dashboard) => {
            assert_eq!(dashboard.heading, "Matching Candidates (3)");
            assert_eq!(dashboard.cards.len(), seed_candidates().len());
            assert_eq!(dashboard.cards[0].availability, "Full-time");
        }
        Body::Seeker(_) => panic!("expected employer view"),
    }
}

#[test]
fn switching_views_leaves_the_store_alone() {
    let mut shell = AppShell::start(MemoryKeyValueStore::new());
    shell.criteria_mut().title = "specialist".to_string();

    shell.switch_view(ActiveView::Seeker);
    let screen = shell.render();
    assert!(screen.nav[1].active);
    assert!(matches!(screen.body, Body::Seeker(_)));
    assert_eq!(shell.store().len(), 3);

    shell.switch_view(ActiveView::Employer);
    match shell.render().body {
        Body::Employer(dashboard) => {
            assert_eq!(dashboard.total, 1);
            assert_eq!(dashboard.cards[0].name, "James Walker");
        }
        Body::Seeker(_) => panic!("expected employer view"),
    }
}

#[test]
fn reset_filters_restores_the_full_list() {
    let mut shell = AppShell::start(MemoryKeyValueStore::new());
    shell.criteria_mut().verified_only = true;
    shell.criteria_mut().availability = Some(Availability::PartTime);
    match shell.render().body {
        Body::Employer(dashboard) => assert_eq!(dashboard.total, 0),
        Body::Seeker(_) => panic!("expected employer view"),
    }

    shell.reset_filters();
    match shell.render().body {
        Body::Employer(dashboard) => assert_eq!(dashboard.total, 3),
        Body::Seeker(_) => panic!("expected employer view"),
    }
}

#[test]
fn submit_profile_reports_success_and_failure_notices() {
    let (store, _) = ready_store();
    let mut shell = AppShell::with_store(store);
    shell.switch_view(ActiveView::Seeker);

    let rejected = shell.submit_profile();
    assert!(!rejected.is_success());
    assert_eq!(
        rejected.notice,
        "please fill in name, title, location and availability"
    );

    *shell.draft_mut() = complete_draft();
    let accepted = shell.submit_profile();
    assert!(accepted.is_success());
    assert_eq!(accepted.notice, PROFILE_CREATED_NOTICE);
    assert_eq!(shell.draft().name, "");
    assert_eq!(shell.view(), ActiveView::Seeker);
    assert_eq!(shell.store().len(), 4);
}

#[test]
fn with_store_initializes_a_fresh_store() {
    let store = CandidateStore::new(crate::marketplace::CandidatePersistence::new(
        MemoryKeyValueStore::new(),
    ));
    let shell = AppShell::with_store(store);
    assert!(shell.store().is_ready());
}

#[test]
fn cards_hide_blank_bios() {
    let mut blank = candidate("a", "Clerk", "Auckland", Availability::Contract, false);
    blank.bio = Some(String::new());
    assert_eq!(CandidateCard::from(&blank).bio, None);

    blank.bio = Some("Night shifts only".to_string());
    assert_eq!(
        CandidateCard::from(&blank).bio.as_deref(),
        Some("Night shifts only")
    );
}
