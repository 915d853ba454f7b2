//! CLI over the resource catalog and the remote like backend
//!
//! Outputs JSON so results can be piped into other tools.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directory_core::config::ClientConfig;
use directory_core::domains::likes::{LikeLedger, ToggleOutcome};
use directory_core::domains::resources::{
    apply_view, Category, Resource, ResourceStore, SortMode, ViewQuery,
};
use directory_core::kernel::SupabaseLikeBackend;
use serde::Serialize;
use supabase_client::SupabaseClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "resources")]
#[command(about = "Browse, validate and like catalog resources")]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(long, env = "CATALOG_PATH", default_value = "data/resources.json")]
    catalog: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report duplicate ids and urls
    Validate,

    /// List resources the way the page shows them
    List {
        /// Case-insensitive search text
        #[arg(long, default_value = "")]
        query: String,

        /// Category filter; repeat for several (any match)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// featured | popular | newest
        #[arg(long, default_value = "featured")]
        sort: String,

        /// Skip fetching like counts from the backend
        #[arg(long)]
        offline: bool,
    },

    /// List resources in a single category
    Category { name: String },

    /// Toggle the like on a resource as a fresh anonymous viewer
    Like { id: String },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListedResource<'a> {
    #[serde(flatten)]
    resource: &'a Resource,
    like_count: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LikeResult {
    resource_id: String,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    liked: Option<bool>,
    like_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn build_ledger() -> Result<LikeLedger> {
    let config = ClientConfig::from_env()?;
    let client = Arc::new(SupabaseClient::new(
        config.supabase_url,
        config.supabase_anon_key,
    ));
    Ok(LikeLedger::new(Arc::new(SupabaseLikeBackend::new(client)))
        .with_rollback_on_failure(config.rollback_on_failure))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let store = ResourceStore::load(&cli.catalog)
        .with_context(|| format!("Failed to load catalog from {}", cli.catalog))?;

    match cli.command {
        Commands::Validate => {
            let report = store.validate();
            print_json(&report)?;
            if !report.is_valid {
                std::process::exit(1);
            }
        }

        Commands::List {
            query,
            categories,
            sort,
            offline,
        } => {
            let categories = categories
                .iter()
                .map(|c| c.parse::<Category>())
                .collect::<Result<HashSet<_>, _>>()?;
            let view = ViewQuery {
                query,
                categories,
                sort: sort.parse::<SortMode>()?,
            };

            let like_counts = if offline {
                HashMap::new()
            } else {
                build_ledger()?.initialize().await.like_counts
            };

            let listed: Vec<_> = apply_view(store.get_all(), &view, &like_counts)
                .into_iter()
                .map(|resource| ListedResource {
                    like_count: like_counts.get(&resource.id).copied().unwrap_or(0),
                    resource,
                })
                .collect();
            print_json(&listed)?;
        }

        Commands::Category { name } => {
            print_json(&store.get_by_category(&name))?;
        }

        Commands::Like { id } => {
            if !store.contains(&id) {
                anyhow::bail!("Unknown resource: {}", id);
            }

            let ledger = build_ledger()?;
            ledger.initialize().await;
            let outcome = ledger.toggle(&id).await;

            let (label, error) = match &outcome {
                ToggleOutcome::Confirmed { .. } => ("confirmed", None),
                ToggleOutcome::Unconfirmed { error, .. } => ("unconfirmed", Some(error.to_string())),
                ToggleOutcome::RolledBack(e) => ("rolled_back", Some(e.to_string())),
                ToggleOutcome::Skipped(e) => ("skipped", Some(e.to_string())),
            };

            print_json(&LikeResult {
                like_count: ledger.like_count(&id),
                resource_id: id,
                outcome: label,
                liked: outcome.liked(),
                error,
            })?;
        }
    }

    Ok(())
}
