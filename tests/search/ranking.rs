//! Tier ranking over merged data.
//!
//! Title > tag > excerpt/category, ties broken by merge order (articles
//! first, then index entries), and nothing at all below two characters.

use super::common::{make_item, make_item_with_tags, sample_index};
use lupa::{score, search, MatchTier, SearchIndex};

fn ids<'a>(items: &[&'a lupa::SearchItem]) -> Vec<&'a str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn test_title_tag_example() {
    let items = vec![
        make_item_with_tags("item1", "Política Fiscal", &["economia"]),
        make_item_with_tags("item2", "Relatório Anual", &["política"]),
    ];
    assert_eq!(score(&items[0], "politica"), 3);
    assert_eq!(score(&items[1], "politica"), 2);
    assert_eq!(ids(&search(&items, "politica")), vec!["item1", "item2"]);
}

#[test]
fn test_short_queries_return_nothing() {
    let index = sample_index();
    assert!(index.search("").is_empty());
    assert!(index.search("a").is_empty());
    assert!(index.search("p").is_empty());
    assert!(index.search("   p   ").is_empty());
}

#[test]
fn test_decomposed_single_letter_is_below_minimum() {
    let index = SearchIndex::new(vec![make_item("x", "Macro")]);
    assert!(index.search("a\u{0301}").is_empty());
    assert!(index.search_hits(" a\u{0301} ").is_empty());
    assert_eq!(index.search("ma\u{0301}").len(), 1);
}

#[test]
fn test_merged_ranking_over_fixture() {
    let index = sample_index();
    let hits = index.search_hits("politica");
    let got: Vec<(&str, MatchTier)> = hits.iter().map(|h| (h.item.id.as_str(), h.tier)).collect();
    assert_eq!(
        got,
        vec![
            ("artigo-1", MatchTier::Title),
            ("blog-1", MatchTier::Title),
            ("artigo-2", MatchTier::Tag),
            ("ensino-macro-1", MatchTier::Summary),
        ]
    );
}

#[test]
fn test_category_label_matches_at_lowest_tier() {
    let index = sample_index();
    let hits = index.search_hits("macroeconomia");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item.id, "ensino-macro-1");
    assert_eq!(hits[0].tier, MatchTier::Summary);
}

#[test]
fn test_accented_tag_matches_plain_query() {
    let index = sample_index();
    let hits = index.search_hits("inflacao");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item.id, "ind-ipca");
    assert_eq!(hits[0].tier, MatchTier::Tag);
}

#[test]
fn test_punctuation_in_query_is_ignored() {
    let index = SearchIndex::new(vec![make_item("a", "Pós-graduação")]);
    assert_eq!(index.search("pos graduacao").len(), 1);
    assert_eq!(index.search("pós-graduação").len(), 1);
}

#[test]
fn test_title_equal_to_query_ranks_first() {
    let mut excerpt_only = make_item("excerpt", "Outra coisa");
    excerpt_only.excerpt = "fala de juros".to_string();
    let items = vec![
        make_item_with_tags("tag", "Nada", &["juros"]),
        excerpt_only,
        make_item("title", "JUROS"),
    ];
    let index = SearchIndex::new(items);
    assert_eq!(index.search("Juros")[0].id, "title");
}

#[test]
fn test_search_does_not_mutate_items() {
    let index = sample_index();
    let before = index.items().to_vec();
    let _ = index.search("politica");
    assert_eq!(index.items(), before.as_slice());
}
