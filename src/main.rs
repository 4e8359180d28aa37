// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use sporjeger::{
    suggest_filters, ActiveFilters, CatalogStore, DeliveryType, FacetDimension, FacetFilter,
    JsonCatalogSource, Phase, PricingTier, SearchCoordinator, SearchOptions, SearchResults,
    SUGGESTION_LIMIT,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::display::{self, themed, BOLD, CYAN, DIM, GRAY};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            catalog,
            query,
            filters,
            limit,
            options,
            json,
        } => run_search(&catalog, &query, filters, limit, options.as_deref(), json),
        Commands::Facets { catalog, json } => run_facets(&catalog, json),
        Commands::Suggest { catalog, query } => run_suggest(&catalog, &query),
    }
}

fn load_store(catalog: &Path) -> Result<Arc<CatalogStore>> {
    let store = Arc::new(CatalogStore::new());
    let source = JsonCatalogSource::new(catalog);
    let snapshot = store
        .refresh(&source)
        .with_context(|| format!("loading catalog {}", catalog.display()))?;
    info!(entries = snapshot.len(), "catalog loaded");
    Ok(store)
}

/// Closed dimensions know every valid value; say so when a filter can never match.
fn warn_if_unknown(filter: &FacetFilter) {
    let known = match filter.dimension {
        FacetDimension::Type => filter.value.parse::<DeliveryType>().is_ok(),
        FacetDimension::Price => filter.value.parse::<PricingTier>().is_ok(),
        FacetDimension::Phase => filter.value.parse::<Phase>().is_ok(),
        FacetDimension::Category | FacetDimension::Region => true,
    };
    if !known {
        warn!(
            dimension = %filter.dimension,
            value = %filter.value,
            "unknown filter value matches no entries"
        );
    }
}

fn run_search(
    catalog: &Path,
    query: &str,
    filters: Vec<FacetFilter>,
    limit: Option<usize>,
    options: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut options = match options {
        Some(path) => SearchOptions::from_file(path)
            .with_context(|| format!("reading options {}", path.display()))?,
        None => SearchOptions::default(),
    };
    if let Some(limit) = limit {
        options.limit = limit;
    }

    let store = load_store(catalog)?;
    let mut search = SearchCoordinator::new(store, options)?;
    filters.iter().for_each(warn_if_unknown);
    search.set_filters(filters.into_iter().collect::<ActiveFilters>());
    search.set_query(query);
    search.settle();

    let start = Instant::now();
    let results = search.results();
    let elapsed = start.elapsed();

    if json {
        print_json_results(&results)?;
    } else {
        print_results(query, search.filters(), &results, elapsed.as_secs_f64() * 1000.0);
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonHit<'a> {
    id: &'a str,
    name: &'a str,
    url: &'a str,
    score: Option<f64>,
}

fn print_json_results(results: &SearchResults) -> Result<()> {
    let entries = results.snapshot().entries();
    let hits: Vec<JsonHit> = results
        .hits()
        .iter()
        .filter_map(|h| {
            entries.get(h.position).map(|e| JsonHit {
                id: e.id.as_str(),
                name: &e.name,
                url: &e.url,
                score: h.score,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}

fn print_results(query: &str, filters: &ActiveFilters, results: &SearchResults, elapsed_ms: f64) {
    let mut header = format!("\"{}\"", query);
    for filter in filters.iter() {
        header.push(' ');
        header.push_str(&display::dimension_badge(filter.dimension));
        header.push_str(&filter.value);
    }
    display::section_top(&format!("RESULTS ({})", results.len()));
    display::row(&format!(" {}", header));
    display::section_mid("MATCHES");

    if results.is_empty() {
        display::row(&themed(GRAY, &[DIM], " no matches"));
    }
    let entries = results.snapshot().entries();
    for hit in results.hits() {
        let Some(entry) = entries.get(hit.position) else {
            continue;
        };
        let name = display::pad_right(
            &themed(CYAN, &[BOLD], &display::truncate(&entry.name, 32)),
            34,
        );
        display::row(&format!(
            " {} {} {} {}",
            display::score_value(hit.score),
            name,
            display::pad_right(&display::pricing_label(entry.pricing_model), 10),
            themed(GRAY, &[], &display::truncate(&entry.url, 24)),
        ));
    }
    display::section_mid("TIMING");
    display::row(&format!(" {:.2} ms", elapsed_ms));
    display::section_bot();
}

fn run_facets(catalog: &Path, json: bool) -> Result<()> {
    let store = load_store(catalog)?;
    let snapshot = store.current();
    let vocabulary = snapshot.vocabulary();

    if json {
        println!("{}", serde_json::to_string_pretty(vocabulary.choices())?);
        return Ok(());
    }

    for (i, dimension) in FacetDimension::ALL.iter().enumerate() {
        let label = dimension.as_str().to_uppercase();
        if i == 0 {
            display::section_top(&label);
        } else {
            display::section_mid(&label);
        }
        for choice in vocabulary.dimension(*dimension) {
            display::row(&format!(
                " {} {} {}",
                display::pad_right(&choice.value, 20),
                display::pad_right(&choice.label, 28),
                themed(GRAY, &[], &choice.count.to_string()),
            ));
        }
    }
    display::section_bot();
    Ok(())
}

fn run_suggest(catalog: &Path, query: &str) -> Result<()> {
    let store = load_store(catalog)?;
    let snapshot = store.current();
    let suggestions = suggest_filters(
        query,
        snapshot.vocabulary(),
        &ActiveFilters::new(),
        SUGGESTION_LIMIT,
    );

    display::section_top(&format!("SUGGESTIONS ({})", suggestions.len()));
    for choice in &suggestions {
        display::row(&format!(
            " {} {} {}",
            display::dimension_badge(choice.dimension),
            display::pad_right(&choice.label, 28),
            themed(GRAY, &[DIM], &format!("{}:{}", choice.dimension, choice.value)),
        ));
    }
    display::section_bot();
    Ok(())
}
