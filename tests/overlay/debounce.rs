//! Debounced evaluation through the overlay.

use super::common::{last_render, ms, open_with, sample_corpus};
use lupa::{Debouncer, Effect, OverlayState};

#[test]
fn test_only_last_keystroke_is_evaluated() {
    let mut overlay = open_with(sample_corpus());
    overlay.input("po", ms(0));
    overlay.input("pol", ms(50));
    overlay.input("ipca", ms(100));

    assert_eq!(
        overlay.tick(ms(170)),
        vec![Effect::ScheduleTick { delay_ms: 50 }]
    );
    let effects = overlay.tick(ms(220));
    let html = last_render(&effects).unwrap();
    assert!(html.contains("/indicadores/ipca.html"));
    assert!(!html.contains("politica-fiscal"));
    assert!(overlay.tick(ms(400)).is_empty());
}

#[test]
fn test_input_schedules_tick_with_quiet_period() {
    let mut overlay = open_with(sample_corpus());
    let effects = overlay.input("ipca", ms(0));
    assert_eq!(effects, vec![Effect::ScheduleTick { delay_ms: 120 }]);
    assert_eq!(overlay.pending_deadline(), Some(ms(120)));
}

#[test]
fn test_early_tick_keeps_last_query_alive() {
    let mut overlay = open_with(sample_corpus());
    overlay.input("ipca", ms(1000));

    // Host timer fired a millisecond ahead of the clock.
    let effects = overlay.tick(ms(1119));
    assert_eq!(effects, vec![Effect::ScheduleTick { delay_ms: 1 }]);
    assert_eq!(overlay.pending_deadline(), Some(ms(1120)));

    let effects = overlay.tick(ms(1120));
    assert!(last_render(&effects).unwrap().contains("<mark>IPCA</mark>"));
    assert_eq!(overlay.state(), OverlayState::Results);
    assert_eq!(overlay.pending_deadline(), None);
}

#[test]
fn test_dropping_below_minimum_cancels_pending() {
    let mut overlay = open_with(sample_corpus());
    overlay.input("ipca", ms(0));
    let effects = overlay.input("i", ms(10));
    assert!(last_render(&effects).unwrap().contains("srch-empty"));
    assert_eq!(overlay.state(), OverlayState::Empty);
    assert!(overlay.tick(ms(500)).is_empty());
}

#[test]
fn test_unmatched_query_shows_no_results_message() {
    let mut overlay = open_with(sample_corpus());
    overlay.input("xyzzy", ms(0));
    let effects = overlay.tick(ms(120));
    assert_eq!(overlay.state(), OverlayState::NoResults);
    assert!(last_render(&effects)
        .unwrap()
        .contains("<strong>\"xyzzy\"</strong>"));
}

#[test]
fn test_debouncer_restarts_quiet_period() {
    let mut debouncer = Debouncer::new(ms(100));
    debouncer.schedule("a", ms(0));
    debouncer.schedule("b", ms(90));
    assert_eq!(debouncer.poll(ms(150)), None);
    assert_eq!(debouncer.poll(ms(190)), Some("b"));
    assert!(!debouncer.is_pending());
}
