use clap::{Args, Subcommand};

/// Top-level subcommands for the `scout` binary.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List catalog entries matching the given filters
    List(FilterArgs),
    /// List catalog categories with entry counts
    Categories,
    /// Render the filtered card grid as HTML fragments
    Render(RenderArgs),
    /// Browse the catalog interactively
    Browse,
}

/// Filter criteria shared by one-shot commands.
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Free-text search over name, description, and category key
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact category key
    #[arg(short, long)]
    pub category: Option<String>,

    /// Server type: local or remote
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub server_type: Option<String>,

    /// Max entries to return (0 = unlimited, overrides config)
    #[arg(short, long)]
    pub limit: Option<u32>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Write the fragment to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<std::path::PathBuf>,
}
