//! Route a parsed command to its handler.

use scout_catalog::CatalogSource;
use scout_config::ScoutConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands::{browse, categories, list, render};

pub async fn dispatch(
    command: Commands,
    source: &CatalogSource,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => list::handle(&args, source, config, flags).await,
        Commands::Categories => categories::handle(source, flags).await,
        Commands::Render(args) => render::handle(&args, source).await,
        Commands::Browse => browse::handle(source, config, flags).await,
    }
}
