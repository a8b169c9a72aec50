//! Keyboard navigation over rendered rows.

use super::common::{last_render, ms, open_with, sample_corpus, type_and_settle};
use lupa::{Effect, KeyPress, Overlay, OverlayState};

fn loaded_with_three_rows() -> Overlay {
    let mut overlay = open_with(sample_corpus());
    type_and_settle(&mut overlay, "politica", ms(0));
    assert_eq!(overlay.panel().row_count(), 3);
    overlay
}

fn focus_rows(effects: &[Effect]) -> Vec<usize> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::FocusRow { index } => Some(*index),
            _ => None,
        })
        .collect()
}

#[test]
fn test_arrow_down_clamps_at_last_row() {
    let mut overlay = loaded_with_three_rows();
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.extend(focus_rows(&overlay.key(&KeyPress::plain("ArrowDown"))));
    }
    assert_eq!(seen, vec![0, 1, 2, 2]);
    assert_eq!(overlay.focused(), Some(2));
}

#[test]
fn test_arrow_up_at_top_stays() {
    let mut overlay = loaded_with_three_rows();
    overlay.key(&KeyPress::plain("ArrowDown"));
    let effects = overlay.key(&KeyPress::plain("ArrowUp"));
    assert_eq!(focus_rows(&effects), vec![0]);
    assert_eq!(overlay.focused(), Some(0));
}

#[test]
fn test_arrow_up_without_focus_lands_on_first_row() {
    let mut overlay = loaded_with_three_rows();
    let effects = overlay.key(&KeyPress::plain("ArrowUp"));
    assert_eq!(effects[0], Effect::PreventDefault);
    assert_eq!(overlay.focused(), Some(0));
}

#[test]
fn test_arrows_without_rows_only_prevent_default() {
    let mut overlay = open_with(sample_corpus());
    let effects = overlay.key(&KeyPress::plain("ArrowDown"));
    assert_eq!(effects, vec![Effect::PreventDefault]);
    assert_eq!(overlay.focused(), None);
}

#[test]
fn test_enter_navigates_to_focused_row() {
    let mut overlay = loaded_with_three_rows();
    overlay.key(&KeyPress::plain("ArrowDown"));
    overlay.key(&KeyPress::plain("ArrowDown"));
    let effects = overlay.key(&KeyPress::plain("Enter"));
    assert_eq!(
        effects,
        vec![Effect::Navigate {
            url: "/publicacoes/relatorio-anual.html".to_string()
        }]
    );
}

#[test]
fn test_enter_without_focus_does_nothing() {
    let mut overlay = loaded_with_three_rows();
    assert!(overlay.key(&KeyPress::plain("Enter")).is_empty());
}

#[test]
fn test_new_render_clears_focus() {
    let mut overlay = loaded_with_three_rows();
    overlay.key(&KeyPress::plain("ArrowDown"));
    assert_eq!(overlay.focused(), Some(0));
    type_and_settle(&mut overlay, "ipca", ms(1000));
    assert_eq!(overlay.focused(), None);
}

#[test]
fn test_escape_closes() {
    let mut overlay = loaded_with_three_rows();
    assert_eq!(overlay.key(&KeyPress::plain("Escape")), vec![Effect::Hide]);
    assert_eq!(overlay.state(), OverlayState::Closed);
    assert!(overlay.global_key(&KeyPress::plain("Escape")).is_empty());
}

#[test]
fn test_reopen_starts_clean() {
    let mut overlay = loaded_with_three_rows();
    overlay.close();
    let effects = overlay.open();
    assert!(effects.contains(&Effect::ClearInput));
    assert_eq!(overlay.input_text(), "");
    assert_eq!(overlay.state(), OverlayState::Empty);
    assert!(last_render(&effects).unwrap().contains("srch-empty"));
}
