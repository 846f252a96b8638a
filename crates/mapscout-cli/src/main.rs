//! mapscout command line interface.
//!
//! One-shot `search` and `reviews` subcommands plus an `interactive` prompt
//! loop. Ctrl-C during a search sets a cancellation flag: no further API
//! calls are made and the partial results are shown but not persisted.

mod interactive;
mod reviews;
mod search;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};

use mapscout_core::taxonomy::CategoryTaxonomy;
use mapscout_serpapi::{IdKind, SerpApiClient};

#[derive(Debug, Parser)]
#[command(name = "mapscout")]
#[command(about = "Find hotspots and reviews around Google Maps places")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find hotspots around a place identified by data id or place id
    Search {
        /// Google Maps data id or place id of the anchor place
        identifier: String,

        /// How to interpret the identifier
        #[arg(long, value_enum, default_value_t = IdTypeArg::Auto)]
        id_type: IdTypeArg,

        /// Search radius in kilometers (clamped to 1-50)
        #[arg(long, default_value_t = 10)]
        radius: u32,

        /// Category subset; searches the whole taxonomy when omitted
        #[arg(long)]
        categories: Vec<String>,

        /// Skip writing the JSON report
        #[arg(long)]
        no_save: bool,
    },

    /// Fetch and display reviews for a place by data id
    Reviews {
        /// Google Maps data id (format: 0x...:0x...)
        data_id: String,

        /// Review language code (e.g. "en", "hi")
        #[arg(long)]
        language: Option<String>,

        /// Skip writing the JSON file
        #[arg(long)]
        no_save: bool,
    },

    /// Looping prompt session
    Interactive,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IdTypeArg {
    Auto,
    DataId,
    PlaceId,
}

impl From<IdTypeArg> for IdKind {
    fn from(arg: IdTypeArg) -> Self {
        match arg {
            IdTypeArg::Auto => IdKind::Auto,
            IdTypeArg::DataId => IdKind::DataId,
            IdTypeArg::PlaceId => IdKind::PlaceId,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = mapscout_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let taxonomy = match &config.taxonomy_path {
        Some(path) => CategoryTaxonomy::from_yaml_file(path)?,
        None => CategoryTaxonomy::builtin(),
    };

    let client = SerpApiClient::new(&config.serpapi_api_key, config.request_timeout_secs)?;

    // One process-wide flag; searches reset it before they start.
    let cancel = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&cancel);
        tokio::spawn(async move {
            loop {
                if tokio::signal::ctrl_c().await.is_err() {
                    break;
                }
                flag.store(true, Ordering::SeqCst);
            }
        });
    }

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            identifier,
            id_type,
            radius,
            categories,
            no_save,
        } => {
            let request = search::SearchRequest {
                identifier,
                id_type: id_type.into(),
                radius_km: search::clamp_radius(radius),
                categories: if categories.is_empty() {
                    None
                } else {
                    Some(categories)
                },
                save: !no_save,
            };
            search::run_search(&config, &client, &taxonomy, &cancel, &request).await?;
        }
        Commands::Reviews {
            data_id,
            language,
            no_save,
        } => {
            reviews::run_reviews(&config, &client, &data_id, language.as_deref(), !no_save)
                .await?;
        }
        Commands::Interactive => {
            interactive::run(&config, &client, &taxonomy, &cancel).await?;
        }
    }

    Ok(())
}
