use clap::{Parser, Subcommand, ValueEnum};

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Color handling for table output.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    pub color: ColorMode,
    pub base_url: Option<String>,
}

/// Top-level CLI parser for the `joblens` binary.
#[derive(Debug, Parser)]
#[command(name = "joblens", version, about = "joblens - job board filter client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max rows to show
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Color output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Board API base URL (overrides config)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            base_url: self.base_url.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the board and list jobs matching the given filters
    List(ListArgs),
    /// List the company filter options
    Companies,
    /// List the location filter options
    Locations,
    /// Show all four filter option lists
    Filters,
    /// Interactively filter the board from the terminal
    Browse,
}

#[derive(Debug, Default, clap::Args)]
pub struct ListArgs {
    /// Company filter (case-insensitive exact match)
    #[arg(long)]
    pub company: Option<String>,

    /// Location filter (case-insensitive exact match)
    #[arg(long)]
    pub location: Option<String>,

    /// Experience-level filter (matches the derived level)
    #[arg(long)]
    pub experience: Option<String>,

    /// Work-type filter (matches the derived type)
    #[arg(long)]
    pub work_type: Option<String>,

    /// Search term (substring over title, company, location)
    #[arg(short, long)]
    pub search: Option<String>,
}
