//! Normalization: the accent- and punctuation-insensitive half of matching.

use lupa::normalize;

#[test]
fn test_portuguese_accents() {
    assert_eq!(normalize("Ensino à Distância"), "ensino a distancia");
    assert_eq!(normalize("Preços"), "precos");
    assert_eq!(normalize("Ação"), "acao");
}

#[test]
fn test_idempotent_on_examples() {
    for input in ["Política Fiscal", "IPCA (12m)", "  já é  ", "日本語", "naïve café"] {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "not a fixed point for {:?}", input);
    }
}

#[test]
fn test_output_alphabet() {
    let out = normalize("R$ 1.234,56 — 10% a.a.!");
    assert!(out
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
    assert!(out.contains("1 234 56"));
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize(""), "");
}
