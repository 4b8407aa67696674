//! CLI argument definitions for Hotelier.
//!
//! # Invocation
//!
//! Two positional inputs select what the reconciled catalogue returns:
//!
//! ```bash
//! # Specific hotels within specific destinations
//! hotelier iJhz,SjyX 5432
//!
//! # Every hotel in destination 1122, pretty-printed
//! hotelier none 1122 --pretty
//!
//! # The whole catalogue
//! hotelier none none
//! ```
//!
//! The literal `none` (case-insensitive) means "no restriction" for either
//! list. Destination identifiers must parse as integers; a bad token is
//! reported before any supplier is contacted.

use clap::Parser;

/// Multi-supplier hotel catalogue CLI
///
/// Fetches hotel data from all suppliers, reconciles records describing the
/// same hotel into one canonical record, and prints the filtered catalogue
/// as a JSON array.
#[derive(Debug, Parser)]
#[command(
    name = "hotelier",
    author,
    version,
    about = "Multi-supplier hotel catalogue CLI",
    long_about = "Hotelier merges hotel data procured from multiple suppliers into a single \
canonical catalogue and serves filtered lookups over it.\n\
\n\
  • Supplier feeds are fetched and merged in a fixed, documented order\n\
  • Richer field values win merges; collections are deduplicated\n\
  • Output is a JSON array on stdout; diagnostics go to stderr\n\
\n\
Set RUST_LOG=debug for per-supplier ingestion diagnostics."
)]
pub struct Cli {
    /// Comma-separated list of hotel IDs, or 'none' for no restriction.
    pub hotel_ids: String,

    /// Comma-separated list of destination IDs, or 'none' for no restriction.
    pub destination_ids: String,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Supplier request timeout budget in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,
}
