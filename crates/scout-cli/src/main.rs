use clap::Parser;
use scout_catalog::{CatalogError, CatalogSource};
use scout_config::ScoutConfig;

mod cli;
mod commands;
mod output;
mod progress;
mod session;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("scout error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = ScoutConfig::load_with_dotenv()?;
    let source = resolve_catalog_source(&flags, &config)?;

    commands::dispatch::dispatch(cli.command, &source, &config, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SCOUT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Pick the catalog source: CLI flags win over config, file over URL.
fn resolve_catalog_source(
    flags: &cli::GlobalFlags,
    config: &ScoutConfig,
) -> anyhow::Result<CatalogSource> {
    if let Some(path) = &flags.catalog_file {
        return Ok(CatalogSource::File(path.into()));
    }
    if let Some(url) = &flags.catalog {
        return Ok(CatalogSource::Url(url.clone()));
    }
    if !config.catalog.path.is_empty() {
        return Ok(CatalogSource::File(config.catalog.path.clone().into()));
    }
    if !config.catalog.url.is_empty() {
        return Ok(CatalogSource::Url(config.catalog.url.clone()));
    }
    Err(CatalogError::NoSource.into())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scout_config::CatalogConfig;

    use super::*;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Table,
            quiet: false,
            catalog: None,
            catalog_file: None,
        }
    }

    #[test]
    fn flag_file_beats_everything() {
        let mut flags = flags();
        flags.catalog_file = Some("/tmp/a.json".to_string());
        flags.catalog = Some("https://example.com/servers.json".to_string());
        let config = ScoutConfig {
            catalog: CatalogConfig {
                url: "https://config.example.com".to_string(),
                path: "/cfg.json".to_string(),
            },
            ..ScoutConfig::default()
        };

        let source = resolve_catalog_source(&flags, &config).unwrap();
        assert_eq!(source, CatalogSource::File("/tmp/a.json".into()));
    }

    #[test]
    fn flag_url_beats_config() {
        let mut flags = flags();
        flags.catalog = Some("https://flag.example.com/servers.json".to_string());
        let config = ScoutConfig {
            catalog: CatalogConfig {
                url: "https://config.example.com".to_string(),
                path: String::new(),
            },
            ..ScoutConfig::default()
        };

        let source = resolve_catalog_source(&flags, &config).unwrap();
        assert_eq!(
            source,
            CatalogSource::Url("https://flag.example.com/servers.json".to_string())
        );
    }

    #[test]
    fn config_path_beats_config_url() {
        let config = ScoutConfig {
            catalog: CatalogConfig {
                url: "https://config.example.com".to_string(),
                path: "./servers.json".to_string(),
            },
            ..ScoutConfig::default()
        };

        let source = resolve_catalog_source(&flags(), &config).unwrap();
        assert_eq!(source, CatalogSource::File("./servers.json".into()));
    }

    #[test]
    fn no_source_is_an_error() {
        let error = resolve_catalog_source(&flags(), &ScoutConfig::default()).unwrap_err();
        assert!(error.to_string().contains("no catalog source"));
    }
}
