// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting.
//!
//! Whatever the text and query, the output must contain no markup other than
//! the `<mark>` pairs the highlighter inserts.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lupa::highlight;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    query: String,
}

fuzz_target!(|input: Input| {
    let query: String = input.query.chars().take(200).collect();
    let out = highlight(&input.text, &query);

    let opens = out.matches("<mark>").count();
    let closes = out.matches("</mark>").count();
    assert_eq!(opens, closes);

    let stripped = out.replace("<mark>", "").replace("</mark>", "");
    assert!(!stripped.contains('<'), "unescaped '<' in {:?}", out);
    assert!(!stripped.contains('>'), "unescaped '>' in {:?}", out);
    assert!(!stripped.contains('"'), "unescaped quote in {:?}", out);
});
