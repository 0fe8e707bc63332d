// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the tupaia command-line interface.
//!
//! Three subcommands: `check` for membership, `get` for stored values, and
//! `scan` for phrase matching over running text. Every subcommand loads the
//! dictionary fresh from a TSV file; `scan` takes its text from an argument
//! or from stdin, and can emit a machine-readable JSON report for pipelines.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tupaia",
    about = "Exact-match phrase dictionary with greedy text scanning",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Test whether a key is present in the dictionary
    Check {
        /// Dictionary file (newline-delimited records, tab before the value)
        #[arg(short, long)]
        dict: String,

        /// Key to look up
        query: String,

        /// Treat the query as raw bytes rather than UTF-8 text
        #[arg(long)]
        bytes: bool,
    },

    /// Print the value stored for a key
    Get {
        /// Dictionary file (newline-delimited records, tab before the value)
        #[arg(short, long)]
        dict: String,

        /// Key to look up
        query: String,

        /// Treat the query as raw bytes rather than UTF-8 text
        #[arg(long)]
        bytes: bool,
    },

    /// Scan text for known phrases, longest match first
    Scan {
        /// Dictionary file (newline-delimited records, tab before the value)
        #[arg(short, long)]
        dict: String,

        /// Text to scan (read from stdin when omitted)
        text: Option<String>,

        /// Widest phrase window to try, in words
        #[arg(short = 'n', long, default_value = "3")]
        max_ngram: usize,

        /// Treat the text as raw bytes rather than UTF-8 text
        #[arg(long)]
        bytes: bool,

        /// Emit a JSON report instead of one match per line
        #[arg(long)]
        json: bool,
    },
}
