// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the search API to verify it never panics
//! and never violates the tier ordering.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lupa::{Corpus, SearchConfig, SearchIndex};

const INDEX: &str = r#"[
    {"id": "e1", "tipo": "Ensino", "secaoLabel": "Macroeconomia", "titulo": "Contas Nacionais",
     "resumo": "PIB, renda e política fiscal.", "tags": ["pib"], "url": "/ensino/1.html"},
    {"id": "i1", "tipo": "Indicadores", "titulo": "IPCA", "resumo": "Inflação oficial.",
     "tags": ["inflação", "preços"], "url": "/indicadores/ipca.html"},
    {"id": "x1", "tipo": "Outro", "titulo": "日本語 ☃ émoji 🎉", "url": "/x.html"}
]"#;

const ARTICLES: &str = r#"{"artigos": [
    {"id": 1, "titulo": "Política Fiscal", "subtitulo": "Regras", "tags": ["economia"], "slug": "pf"}
]}"#;

fuzz_target!(|query: &[u8]| {
    static INDEX_ONCE: std::sync::OnceLock<SearchIndex> = std::sync::OnceLock::new();
    let index = INDEX_ONCE.get_or_init(|| {
        let corpus = Corpus::from_json(INDEX.as_bytes(), ARTICLES.as_bytes(), &SearchConfig::default())
            .expect("fixture parses");
        SearchIndex::from_corpus(corpus)
    });

    let query_str = String::from_utf8_lossy(query);
    let query_str: String = query_str.chars().take(200).collect();

    // INVARIANT 1: search never panics
    let hits = index.search_hits(&query_str);

    // INVARIANT 2: tiers are non-increasing
    for pair in hits.windows(2) {
        assert!(pair[0].tier >= pair[1].tier, "tiers out of order for {:?}", query_str);
    }

    // INVARIANT 3: queries below the minimum return nothing
    if query_str.trim().chars().count() < 2 {
        assert!(hits.is_empty(), "short query {:?} returned results", query_str);
    }

    // INVARIANT 4: deterministic
    let again = index.search(&query_str);
    assert_eq!(hits.len(), again.len());
    for (hit, item) in hits.iter().zip(&again) {
        assert_eq!(hit.item.id, item.id);
    }
});
