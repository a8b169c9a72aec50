//! Lazy loading: one fetch, re-evaluation on arrival, retry after failure.

use super::common::{last_render, ms, sample_corpus, type_and_settle};
use lupa::{Effect, Error, LoadState, Overlay, OverlayState, SearchConfig};
use std::path::PathBuf;

fn fetches(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, Effect::Fetch { .. }))
        .count()
}

fn io_error() -> Error {
    Error::Io {
        path: PathBuf::from("data/search-index.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    }
}

#[test]
fn test_open_fetches_once_while_loading() {
    let mut overlay = Overlay::new(SearchConfig::default());
    assert_eq!(fetches(&overlay.open()), 1);
    overlay.close();
    assert_eq!(fetches(&overlay.open()), 0);
    assert_eq!(overlay.load_state(), LoadState::Loading);
}

#[test]
fn test_fetch_names_both_files() {
    let mut overlay = Overlay::new(SearchConfig::default());
    let effects = overlay.open();
    assert!(effects.contains(&Effect::Fetch {
        index_url: "/data/search-index.json".to_string(),
        articles_url: "/data/artigos.json".to_string(),
    }));
}

#[test]
fn test_typing_during_load_then_completion_renders_results() {
    let mut overlay = Overlay::new(SearchConfig::default());
    overlay.open();

    let effects = overlay.input("politica", ms(0));
    assert_eq!(overlay.state(), OverlayState::Loading);
    assert!(last_render(&effects).unwrap().contains("Carregando"));

    let effects = overlay.load_succeeded(sample_corpus());
    assert_eq!(overlay.state(), OverlayState::Results);
    let html = last_render(&effects).unwrap();
    assert!(html.contains("/publicacoes/politica-fiscal.html"));
    assert_eq!(overlay.load_state(), LoadState::Loaded);
}

#[test]
fn test_completion_with_short_input_renders_nothing() {
    let mut overlay = Overlay::new(SearchConfig::default());
    overlay.open();
    overlay.input("p", ms(0));
    assert!(overlay.load_succeeded(sample_corpus()).is_empty());
    assert_eq!(overlay.state(), OverlayState::Empty);
}

#[test]
fn test_completion_after_close_is_kept_silently() {
    let mut overlay = Overlay::new(SearchConfig::default());
    overlay.open();
    overlay.close();
    assert!(overlay.load_succeeded(sample_corpus()).is_empty());
    assert!(overlay.index().is_some());

    overlay.open();
    let effects = type_and_settle(&mut overlay, "ipca", ms(0));
    assert!(last_render(&effects).unwrap().contains("<mark>IPCA</mark>"));
}

#[test]
fn test_duplicate_completion_is_ignored() {
    let mut overlay = Overlay::new(SearchConfig::default());
    overlay.open();
    overlay.load_succeeded(sample_corpus());
    assert!(overlay.load_succeeded(lupa::Corpus::default()).is_empty());
    assert_eq!(overlay.index().unwrap().len(), 5);
}

#[test]
fn test_failure_while_loading_shows_no_results() {
    let mut overlay = Overlay::new(SearchConfig::default());
    overlay.open();
    overlay.input("politica", ms(0));

    let effects = overlay.load_failed(&io_error());
    assert_eq!(overlay.state(), OverlayState::NoResults);
    assert!(last_render(&effects).unwrap().contains("Nenhum resultado"));
    assert_eq!(overlay.load_state(), LoadState::NotLoaded);
}

#[test]
fn test_failure_is_retried_on_next_open() {
    let mut overlay = Overlay::new(SearchConfig::default());
    overlay.open();
    assert!(overlay.load_failed(&io_error()).is_empty());

    // Typing with no data degrades to an empty result set.
    let effects = type_and_settle(&mut overlay, "politica", ms(0));
    assert_eq!(overlay.state(), OverlayState::NoResults);
    assert!(last_render(&effects).is_some());

    overlay.close();
    assert_eq!(fetches(&overlay.open()), 1);
    assert_eq!(overlay.load_state(), LoadState::Loading);
}

#[test]
fn test_destroy_during_load_discards_late_data() {
    let mut overlay = Overlay::new(SearchConfig::default());
    overlay.open();
    overlay.destroy();

    assert!(overlay.load_succeeded(sample_corpus()).is_empty());
    assert!(overlay.index().is_none());

    // The next session fetches afresh.
    assert_eq!(fetches(&overlay.open()), 1);
}

#[test]
fn test_reopen_after_destroy_during_load_fetches_once() {
    let mut overlay = Overlay::new(SearchConfig::default());
    assert_eq!(fetches(&overlay.open()), 1);
    overlay.destroy();
    assert_eq!(fetches(&overlay.open()), 0);

    overlay.input("politica", ms(0));
    assert_eq!(overlay.state(), OverlayState::Loading);

    let effects = overlay.load_succeeded(sample_corpus());
    assert_eq!(overlay.state(), OverlayState::Results);
    assert!(last_render(&effects)
        .unwrap()
        .contains("/publicacoes/politica-fiscal.html"));
}

#[test]
fn test_late_failure_after_destroy_is_silent() {
    let mut overlay = Overlay::new(SearchConfig::default());
    overlay.open();
    overlay.destroy();
    assert!(overlay.load_failed(&io_error()).is_empty());
    assert_eq!(overlay.load_state(), LoadState::NotLoaded);
}
