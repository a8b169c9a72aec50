// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lupa command-line interface.
//!
//! Three subcommands, all reading the same two JSON files the browser
//! fetches, resolved below a site root: `search` to run a query the way the
//! overlay would, `render` to print the HTML the overlay would inject, and
//! `inspect` to check the data for ids and groups the overlay can't show.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lupa",
    about = "Accent-insensitive site search for static sites",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Clone)]
pub struct SiteArgs {
    /// Site root; `/data/...` URLs resolve below it
    #[arg(short, long, default_value = ".")]
    pub site: PathBuf,

    /// JSON config file (defaults apply to missing fields)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the site data and display grouped results
    Search {
        #[command(flatten)]
        site: SiteArgs,

        /// Search query
        query: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the results-area HTML the overlay would render for a query
    Render {
        #[command(flatten)]
        site: SiteArgs,

        /// Search query
        query: String,
    },

    /// Summarize the site data and report items the overlay cannot show
    Inspect {
        #[command(flatten)]
        site: SiteArgs,
    },
}
