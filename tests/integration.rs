// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::config::{self, Config, FragmentScope};
use iced_folio::content::{Portfolio, ALL_TAB};
use iced_folio::i18n::fluent::I18n;
use iced_folio::navigation::{Fragment, Location, SectionId};
use iced_folio::ui::lazy_section::{GateState, LazySection, TriggerCause};
use iced_folio::ui::state::VisibilityThreshold;
use iced_folio::ui::theming::ThemeMode;
use tempfile::tempdir;

fn gated() -> LazySection<&'static str> {
    LazySection::new(VisibilityThreshold::default(), FragmentScope::Any)
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = loaded;
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("nav-contact"), "Contact");
}

#[test]
fn theme_and_sections_survive_a_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut saved = Config::default();
    saved.general.theme_mode = ThemeMode::Light;
    saved.sections.fragment_scope = FragmentScope::Matching;
    saved.chat.enabled = Some(false);
    config::save_with_override(&saved, Some(dir.path().to_path_buf())).expect("save");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, saved);
}

#[test]
fn corrupt_config_falls_back_with_a_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = ").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn rejected_content_file_falls_back_to_embedded() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("portfolio.toml");
    std::fs::write(&path, "not = [valid").expect("write");

    let (portfolio, warning) = Portfolio::load_or_embedded(Some(&path)).expect("embedded content");
    assert_eq!(portfolio, Portfolio::embedded().expect("embedded content"));
    assert_eq!(warning, Some("error-content-parse"));
}

#[test]
fn every_tab_filter_is_a_subset_of_all() {
    let portfolio = Portfolio::embedded().expect("embedded content");
    let total = portfolio.projects.count(ALL_TAB);
    assert_eq!(total, portfolio.projects.items.len());
    for tab in &portfolio.projects.tabs {
        assert!(portfolio.projects.count(&tab.id) <= total);
    }
}

#[test]
fn dormant_section_renders_only_the_placeholder() {
    let mut section = gated();
    assert_eq!(section.mount(&Location::default()), None);
    assert_eq!(section.state(), GateState::Dormant);
    assert!(section.content().is_none());
}

#[test]
fn visibility_builds_once_and_stays_built() {
    let mut section = gated();
    section.mount(&Location::default());

    assert_eq!(section.observe(0.05, || "built"), None);
    assert_eq!(section.observe(0.1, || "built"), Some(TriggerCause::Visible));
    assert_eq!(section.observe(0.0, || "rebuilt"), None);
    assert_eq!(section.observe(1.0, || "rebuilt"), None);

    assert_eq!(section.content(), Some(&"built"));
    assert_eq!(section.build_count(), 1);
}

#[test]
fn initial_fragment_builds_immediately() {
    let mut section = gated();
    let location = Location::new(Fragment::parse("#contact"));
    assert_eq!(section.mount(&location), Some(TriggerCause::InitialFragment));
    assert!(section.build_if_triggered(|| "built"));
    assert_eq!(section.content(), Some(&"built"));
}

#[test]
fn second_fragment_change_is_a_no_op() {
    let mut section = gated();
    section.mount(&Location::default());

    let first = Fragment::from(SectionId::Blog);
    assert_eq!(
        section.fragment_changed(&first, || "built"),
        Some(TriggerCause::FragmentChanged)
    );
    let second = Fragment::from(SectionId::Contact);
    assert_eq!(section.fragment_changed(&second, || "rebuilt"), None);
    assert_eq!(section.build_count(), 1);
}

#[test]
fn unmounted_section_ignores_later_events() {
    let mut section = gated();
    section.mount(&Location::default());
    section.unmount();

    assert!(!section.gate().listeners().any());
    assert_eq!(section.observe(1.0, || "built"), None);
    assert_eq!(
        section.fragment_changed(&Fragment::from(SectionId::About), || "built"),
        None
    );
    assert!(section.content().is_none());
}
