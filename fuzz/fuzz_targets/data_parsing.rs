// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for data file parsing.
//!
//! Malformed JSON must come back as an error, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lupa::{Corpus, SearchConfig};

fuzz_target!(|data: &[u8]| {
    let config = SearchConfig::default();
    let split = data.first().map_or(0, |b| *b as usize).min(data.len());
    let (index, articles) = data.split_at(split);

    if let Ok(corpus) = Corpus::from_json(index, articles, &config) {
        for item in corpus.items() {
            let _ = lupa::normalize(&item.title);
        }
    }
    let _ = Corpus::from_json(data, b"{}", &config);
    let _ = Corpus::from_json(b"[]", data, &config);
});
