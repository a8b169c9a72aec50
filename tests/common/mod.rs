//! Shared test utilities and fixtures.

#![allow(dead_code)]

use lupa::{Corpus, Effect, Overlay, SearchConfig, SearchIndex};
use std::fs;
use std::path::Path;
use std::time::Duration;

// Re-export canonical test utilities from lupa::testing
pub use lupa::testing::{make_item, make_item_in, make_item_with_tags};

// ============================================================================
// FIXTURE DATA
// ============================================================================

/// Generic content index, written the way the site writes it (Portuguese keys).
pub const SAMPLE_INDEX: &str = r#"[
    {
        "id": "ensino-macro-1",
        "tipo": "Ensino",
        "secaoLabel": "Macroeconomia",
        "titulo": "Contas Nacionais",
        "resumo": "Notas de aula sobre PIB, renda e política fiscal.",
        "tags": ["pib", "renda"],
        "url": "/ensino/macro/contas-nacionais.html"
    },
    {
        "id": "ind-ipca",
        "tipo": "Indicadores",
        "secaoLabel": "Preços",
        "titulo": "IPCA",
        "resumo": "Inflação oficial medida pelo IBGE.",
        "tags": ["inflação", "preços"],
        "url": "/indicadores/ipca.html",
        "dataFormatada": "Mar 2025"
    },
    {
        "id": "blog-1",
        "tipo": "Blog",
        "titulo": "Política no fim de semana",
        "url": "/blog/1.html"
    }
]"#;

/// Article feed with numeric ids and the extra fields the page generator uses.
pub const SAMPLE_ARTICLES: &str = r#"{
    "artigos": [
        {
            "id": 1,
            "titulo": "Política Fiscal",
            "subtitulo": "Regras fiscais e dívida pública",
            "resumo": "Resumo longo",
            "categoria": "Economia",
            "tags": ["economia", "dívida"],
            "slug": "politica-fiscal",
            "dataFormatada": "12 de março de 2025",
            "autor": "Fulano"
        },
        {
            "id": 2,
            "titulo": "Relatório Anual",
            "subtitulo": "",
            "resumo": "Balanço do ano.",
            "categoria": "Institucional",
            "tags": ["política"],
            "slug": "relatorio-anual"
        }
    ]
}"#;

pub fn sample_corpus() -> Corpus {
    Corpus::from_json(
        SAMPLE_INDEX.as_bytes(),
        SAMPLE_ARTICLES.as_bytes(),
        &SearchConfig::default(),
    )
    .expect("fixture data parses")
}

pub fn sample_index() -> SearchIndex {
    SearchIndex::from_corpus(sample_corpus())
}

/// Write the fixture files below `root` at their default site paths.
pub fn write_site(root: &Path) {
    let data = root.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("search-index.json"), SAMPLE_INDEX).unwrap();
    fs::write(data.join("artigos.json"), SAMPLE_ARTICLES).unwrap();
}

// ============================================================================
// OVERLAY HELPERS
// ============================================================================

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// An open overlay with `corpus` already loaded.
pub fn open_with(corpus: Corpus) -> Overlay {
    let mut overlay = Overlay::new(SearchConfig::default());
    overlay.open();
    overlay.load_succeeded(corpus);
    overlay
}

/// Type `text` at `now` and let the debounce elapse.
pub fn type_and_settle(overlay: &mut Overlay, text: &str, now: Duration) -> Vec<Effect> {
    let mut effects = overlay.input(text, now);
    let quiet = ms(overlay.config().debounce_ms);
    effects.extend(overlay.tick(now + quiet));
    effects
}

/// The HTML of the last `Render` effect, if any.
pub fn last_render(effects: &[Effect]) -> Option<&str> {
    effects.iter().rev().find_map(|e| match e {
        Effect::Render { html } => Some(html.as_str()),
        _ => None,
    })
}
