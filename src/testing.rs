//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{SearchItem, GROUP_TEACHING};

/// Create a simple test item in the teaching group.
///
/// This is the canonical implementation used across all tests.
pub fn make_item(id: &str, title: &str) -> SearchItem {
    make_item_in(id, title, GROUP_TEACHING)
}

/// Create a test item in a specific group.
pub fn make_item_in(id: &str, title: &str, group: &str) -> SearchItem {
    SearchItem {
        id: id.to_string(),
        group: group.to_string(),
        category: None,
        title: title.to_string(),
        excerpt: String::new(),
        tags: vec![],
        url: format!("/item/{}", id),
        display_date: None,
    }
}

/// Create a test item with tags.
pub fn make_item_with_tags(id: &str, title: &str, tags: &[&str]) -> SearchItem {
    SearchItem {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..make_item(id, title)
    }
}
