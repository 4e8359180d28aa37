// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sporjeger command-line interface.
//!
//! Three subcommands over an exported catalog file: `search` runs a query
//! with optional filters, `facets` lists the filter vocabulary with counts,
//! and `suggest` shows the filter suggestions for a partial query.

pub mod display;

use clap::{Parser, Subcommand};
use sporjeger::FacetFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sporjeger",
    about = "Fuzzy search and facet filtering over a research tool catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog file
    Search {
        /// Catalog JSON (array of tools, or {"tools": [...], "categories": [...]})
        catalog: PathBuf,

        /// Free-text query; omit to list what the filters select
        #[arg(default_value = "")]
        query: String,

        /// Facet filter as dimension:value (category, type, price, region, phase)
        ///
        /// Repeat for more. Same dimension ORs, different dimensions AND.
        #[arg(short, long = "filter", value_name = "DIM:VALUE")]
        filters: Vec<FacetFilter>,

        /// Maximum number of results (overrides the options file)
        #[arg(short, long)]
        limit: Option<usize>,

        /// JSON file with search options (weights, threshold, limit, cache_key)
        #[arg(long)]
        options: Option<PathBuf>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List filter choices with entry counts
    Facets {
        catalog: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Show filter suggestions for a partial query
    Suggest {
        catalog: PathBuf,

        query: String,
    },
}
