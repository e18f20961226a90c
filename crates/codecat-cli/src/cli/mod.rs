//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names and help
//! text.  No business logic lives here.
//!
//! `codecat` deliberately takes no positional arguments or subcommands: it
//! always bundles the current working directory into `all_code.txt` there.
//! What it collects is not configurable from the command line; only the
//! ambient flags (verbosity, colour) are.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "codecat",
    bin_name = "codecat",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{1f4e6} Bundle a source tree into one annotated text file",
    long_about = "Codecat walks the current directory, collects .cs and .dart \
                  sources (skipping .dart_tool, obj and Migrations), and \
                  concatenates them into all_code.txt with a header line \
                  recording each file's path.",
    after_help = "EXAMPLES:\n\
        \x20 codecat            # bundle the CWD into ./all_code.txt\n\
        \x20 codecat -v         # same, with progress logging\n\
        \x20 codecat --quiet    # errors only",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}
