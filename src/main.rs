use clap::Parser;
use std::collections::BTreeMap;
use std::process::ExitCode;

use lupa::{
    load_corpus, DirSource, GroupOrder, Hit, Panel, SearchConfig, SearchIndex, SearchItem,
};
use serde::Serialize;

mod cli;
use cli::display::{self, *};
use cli::{Cli, Commands, SiteArgs};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            site,
            query,
            limit,
            json,
        } => run_search(&site, &query, limit, json),
        Commands::Render { site, query } => run_render(&site, &query),
        Commands::Inspect { site } => run_inspect(&site),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", display::error_line(&format!("❌ {}", e)));
            ExitCode::FAILURE
        }
    }
}

/// Load config and data the same way the overlay does, but from disk.
fn load(site: &SiteArgs) -> lupa::Result<(SearchConfig, SearchIndex)> {
    let config = match &site.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(|source| lupa::Error::Io {
            path: site.site.clone(),
            source,
        })?;
    let source = DirSource::new(&site.site);
    let corpus = runtime.block_on(load_corpus(&source, &config))?;
    log::info!("loaded {} items from {}", corpus.len(), site.site.display());

    let index = SearchIndex::from_corpus(corpus).with_min_query_chars(config.min_query_chars);
    Ok((config, index))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HitOutput<'a> {
    score: u8,
    #[serde(flatten)]
    item: &'a SearchItem,
}

fn run_search(site: &SiteArgs, query: &str, limit: usize, json: bool) -> lupa::Result<()> {
    let (config, index) = load(site)?;
    let hits = index.search_hits(query);

    if json {
        let out: Vec<HitOutput<'_>> = hits
            .iter()
            .take(limit)
            .map(|hit| HitOutput {
                score: hit.tier.score(),
                item: hit.item,
            })
            .collect();
        // Serializing plain structs into a String cannot fail.
        let text = serde_json::to_string_pretty(&out).unwrap_or_default();
        println!("{}", text);
        return Ok(());
    }

    if hits.is_empty() {
        println!("{}", dim(&format!("no results for \"{}\"", query.trim())));
        return Ok(());
    }

    let order = GroupOrder::from_config(&config);
    let shown: Vec<&Hit<'_>> = hits.iter().take(limit).collect();
    let items: Vec<&SearchItem> = shown.iter().map(|hit| hit.item).collect();

    for (label, members) in lupa::group_items(&items, &order) {
        section_top(label);
        for item in members {
            let tier = shown
                .iter()
                .find(|hit| std::ptr::eq(hit.item, item))
                .map(|hit| hit.tier);
            let badge = tier.map(tier_badge).unwrap_or_default();
            row(&format!(" {} {}", pad_right(&badge, 10), clip(&item.title, 66)));
            row(&format!("            {}", dim(&clip(&item.url, 66))));
        }
        section_bot();
    }

    let hidden = items
        .iter()
        .filter(|item| !config.group_order.contains(&item.group))
        .count();
    if hidden > 0 && config.other_group.is_none() {
        println!(
            "{} result(s) in groups outside groupOrder are not shown by the overlay",
            count_colored(hidden, true)
        );
    }
    Ok(())
}

fn run_render(site: &SiteArgs, query: &str) -> lupa::Result<()> {
    let (config, index) = load(site)?;
    let panel = match lupa::Query::parse(query, config.min_query_chars) {
        Some(_) => Panel::build(&index.search(query), query, &config),
        None => Panel::Prompt,
    };
    println!("{}", panel.to_html(&config.messages));
    Ok(())
}

fn run_inspect(site: &SiteArgs) -> lupa::Result<()> {
    let (config, index) = load(site)?;

    let mut per_group: BTreeMap<&str, usize> = BTreeMap::new();
    let mut per_id: BTreeMap<&str, usize> = BTreeMap::new();
    for item in index.items() {
        *per_group.entry(item.group.as_str()).or_default() += 1;
        *per_id.entry(item.id.as_str()).or_default() += 1;
    }
    let duplicates: Vec<&str> = per_id
        .iter()
        .filter(|(_, n)| **n > 1)
        .map(|(id, _)| *id)
        .collect();

    section_top("GROUPS");
    for (group, count) in &per_group {
        let listed = config.group_order.iter().any(|g| g == group);
        let note = if listed {
            String::new()
        } else if let Some(other) = &config.other_group {
            dim(&format!("(shown under {})", other))
        } else {
            warn("(not rendered)")
        };
        row(&format!(
            " {} {} {}",
            pad_right(group, 30),
            pad_right(&count_colored(*count, false), 8),
            note
        ));
    }
    section_bot();

    section_top("CHECKS");
    row(&format!(
        " {} {}",
        pad_right("items", 30),
        count_colored(index.len(), false)
    ));
    row(&format!(
        " {} {}",
        pad_right("duplicate ids", 30),
        count_colored(duplicates.len(), true)
    ));
    for id in duplicates {
        row(&format!("   {}", dim(&clip(id, 70))));
    }
    let untitled = index
        .items()
        .iter()
        .filter(|item| item.title.trim().is_empty())
        .count();
    row(&format!(
        " {} {}",
        pad_right("items without a title", 30),
        count_colored(untitled, true)
    ));
    section_bot();
    Ok(())
}
