//! End-to-end behavior of the state machines the way the application
//! drives them: restore, interact, persist, restore again.

use std::sync::Arc;

use portfolio_canvas::content::SiteContent;
use portfolio_canvas::filter::{TabFilter, ALL};
use portfolio_canvas::motion::{FullMotion, ReducedMotion};
use portfolio_canvas::reveal::{RevealDispatcher, RevealState, RevealStyle};
use portfolio_canvas::theme::{MemoryStore, PreferenceStore, ThemeManager, ThemeMode};

#[test]
fn theme_preference_survives_a_restart() {
    let mut store = MemoryStore::default();

    // first session: environment says light, user toggles to dark
    let mut theme = ThemeManager::restore(
        store.load().as_deref(),
        Some(ThemeMode::Light),
        Arc::new(FullMotion),
    );
    assert_eq!(theme.mode(), ThemeMode::Light);
    theme.toggle(&mut store, 1.0);
    assert_eq!(theme.mode(), ThemeMode::Dark);

    // second session: saved choice wins even though the environment still
    // reports light, and environment changes are no longer honored
    let mut theme = ThemeManager::restore(
        store.load().as_deref(),
        Some(ThemeMode::Light),
        Arc::new(FullMotion),
    );
    assert_eq!(theme.mode(), ThemeMode::Dark);
    theme.environment_changed(ThemeMode::Light, 2.0);
    assert_eq!(theme.mode(), ThemeMode::Dark);
}

#[test]
fn skills_page_flow_filters_and_restores() {
    let content = SiteContent::built_in();
    let categories: Vec<&str> = content
        .skill_categories
        .iter()
        .map(|c| c.key.as_str())
        .collect();
    let mut filter = TabFilter::new(&categories);

    filter.select("web", 0.0);
    assert_eq!(filter.active(), "web");
    assert!(filter.display("web", 1.0).in_layout);
    assert!(!filter.display("programming", 1.0).in_layout);
    assert!(!filter.display("multimedia", 1.0).in_layout);

    filter.select(ALL, 2.0);
    for category in &categories {
        assert!(filter.display(category, 2.0).in_layout);
    }
}

#[test]
fn sections_reveal_once_as_the_page_scrolls() {
    let mut reveals = RevealDispatcher::new(Arc::new(FullMotion));
    let about = reveals.register(RevealStyle::SlideLeft, 0.3);
    let projects = reveals.register(RevealStyle::ScaleIn, 0.3);
    let contact = reveals.register(RevealStyle::SlideRight, 0.3);

    // initial viewport: about fully visible, the rest off-screen
    reveals.observe(&[(about, 1.0), (projects, 0.0), (contact, 0.0)], 0.0);
    assert_eq!(reveals.state(about, 5.0), RevealState::REST);
    assert_eq!(reveals.state(projects, 5.0).opacity, 0.0);

    // scroll down: projects crosses the threshold
    reveals.observe(&[(about, 0.2), (projects, 0.8), (contact, 0.1)], 5.0);
    assert_eq!(reveals.state(projects, 10.0), RevealState::REST);
    // about was retired on first trigger and does not animate again
    assert_eq!(reveals.state(about, 10.0), RevealState::REST);
    // contact never crossed its threshold and stays hidden
    assert_eq!(reveals.state(contact, 100.0).opacity, 0.0);
}

#[test]
fn reduced_motion_flow_snaps_everything() {
    let mut reveals = RevealDispatcher::new(Arc::new(ReducedMotion));
    let handles: Vec<_> = (0..4)
        .map(|_| reveals.register(RevealStyle::FadeIn, 0.3))
        .collect();
    let batch: Vec<_> = handles.iter().map(|h| (*h, 1.0)).collect();
    reveals.observe(&batch, 3.0);
    for handle in handles {
        assert_eq!(reveals.state(handle, 3.0), RevealState::REST);
    }
}
