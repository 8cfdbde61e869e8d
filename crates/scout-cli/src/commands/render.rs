//! Handle `scout render`.
//!
//! Emits the card grid as HTML fragments. On a load failure the grid is
//! replaced by the static error panel; the failure is terminal for the run
//! and there is no retry.

use anyhow::Context;
use scout_catalog::CatalogSource;
use scout_render::{GridView, error_panel};
use scout_search::filter;

use crate::cli::root_commands::RenderArgs;
use crate::commands::shared;

pub async fn handle(args: &RenderArgs, source: &CatalogSource) -> anyhow::Result<()> {
    let state = shared::filter_state_from_args(&args.filter)?;

    let fragment = match shared::load_catalog(source).await {
        Ok(catalog) => {
            let filtered = filter(&catalog.servers, &state);
            GridView::render(&filtered, &catalog.categories).to_fragment()
        }
        // The error panel replaces the grid; no entries are rendered.
        Err(_) => error_panel(shared::LOAD_FAILURE_MESSAGE),
    };

    emit(args, &fragment)
}

fn emit(args: &RenderArgs, fragment: &str) -> anyhow::Result<()> {
    match &args.out {
        Some(path) => std::fs::write(path, fragment)
            .with_context(|| format!("failed to write fragment to '{}'", path.display())),
        None => {
            println!("{fragment}");
            Ok(())
        }
    }
}
