//! # Chattia — bilingual BM25-grounded voice chat assistant
//!
//! Usage:
//!   chattia serve                        # Start the HTTP gateway
//!   chattia search "bm25" --language en  # One-shot ranked retrieval
//!   chattia chat "hola" --language es    # One-shot grounded reply

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chattia_core::config::ChattiaConfig;
use chattia_responder::{Responder, RuleResponder};
use chattia_retrieval::RetrieverRegistry;

#[derive(Parser)]
#[command(
    name = "chattia",
    version,
    about = "🗣️ Chattia — bilingual voice chat grounded in BM25 retrieval"
)]
struct Cli {
    /// Path to config file (default: $CHATTIA_CONFIG or ~/.chattia/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP gateway
    Serve,
    /// Rank the corpus against a query and print the snippets
    Search {
        query: String,
        /// Language code to search in
        #[arg(short, long, default_value = "en")]
        language: String,
        /// Maximum number of snippets
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },
    /// Print a grounded reply for one message
    Chat {
        message: String,
        /// Language code to answer in
        #[arg(short, long, default_value = "en")]
        language: String,
    },
}

fn load_config(cli: &Cli) -> Result<ChattiaConfig> {
    match &cli.config {
        Some(path) => {
            let expanded = shellexpand::tilde(path).to_string();
            Ok(ChattiaConfig::load_from(std::path::Path::new(&expanded))?)
        }
        None => Ok(ChattiaConfig::load()?),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "chattia=debug,tower_http=debug"
    } else {
        "chattia=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Command::Serve => {
            println!("🗣️  Chattia v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Corpus dir: {}", config.retrieval.corpus_dir);
            chattia_gateway::start_server(config).await?;
        }
        Command::Search { query, language, top_k } => {
            let registry = RetrieverRegistry::build(&config.retrieval);
            let Some(retriever) = registry.get(&language.to_lowercase()) else {
                anyhow::bail!("No corpus available for '{language}' or the default language");
            };
            let top_k = top_k.unwrap_or(config.retrieval.top_k);
            let results = retriever.search(&query, top_k);
            if results.is_empty() {
                println!("No matching snippets.");
            }
            for (rank, doc) in results.iter().enumerate() {
                println!("{}. [{:.4}] {}", rank + 1, doc.score, doc.text);
            }
        }
        Command::Chat { message, language } => {
            let language = language.to_lowercase();
            let registry = RetrieverRegistry::build(&config.retrieval);
            let documents = registry
                .get(&language)
                .map(|r| r.search(&message, config.retrieval.top_k))
                .unwrap_or_default();
            let generation = RuleResponder::new()
                .generate(&message, &documents, &language)
                .await;
            println!("{}", generation.text);
        }
    }

    Ok(())
}
