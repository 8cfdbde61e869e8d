//! Handle `scout list`.

use scout_catalog::CatalogSource;
use scout_config::ScoutConfig;
use scout_search::filter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FilterArgs;
use crate::commands::shared;
use crate::output;

pub async fn handle(
    args: &FilterArgs,
    source: &CatalogSource,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let state = shared::filter_state_from_args(args)?;
    let catalog = shared::load_catalog(source).await?;

    let filtered = filter(&catalog.servers, &state);
    let limit = args.limit.unwrap_or(config.general.default_limit);
    let rows = shared::rows_from_entries(&filtered, limit);

    output::output(&rows, flags.format)
}
