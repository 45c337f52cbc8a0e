mod locate;
mod search;

use clap::{Parser, Subcommand};
use hop_core::MatchPolicy;
use hop_search::SmartSearchAnalyzer;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hop")]
#[command(about = "House of Paradise smart search tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a search query and print the result as JSON
    Analyze {
        query: String,
        /// Caller country used to fill a missing trip origin
        #[arg(long)]
        country: Option<String>,
        /// Mark the caller location as private (ignored for trip origins)
        #[arg(long)]
        private: bool,
        /// Override the configured matching policy (substring or word)
        #[arg(long)]
        policy: Option<MatchPolicy>,
    },
    /// List supported destinations, one per country code
    Countries,
    /// Run the labelled query corpus and print accuracy
    Eval {
        /// Print every query that was not reproduced exactly
        #[arg(long)]
        misses: bool,
        /// Override the configured matching policy (substring or word)
        #[arg(long)]
        policy: Option<MatchPolicy>,
    },
    /// Look up the location of an IP address
    Locate { ip: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = hop_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("hop: pass --help to list commands");
        return Ok(());
    };

    let analyzer = SmartSearchAnalyzer::from_config(&config)?;

    match command {
        Commands::Analyze {
            query,
            country,
            private,
            policy,
        } => {
            let analyzer = with_policy(analyzer, policy);
            search::run_analyze(&analyzer, &query, country, private)?;
        }
        Commands::Countries => search::run_countries(&analyzer),
        Commands::Eval { misses, policy } => {
            search::run_eval(&with_policy(analyzer, policy), misses);
        }
        Commands::Locate { ip } => locate::run_locate(&config, &ip).await?,
    }

    Ok(())
}

fn with_policy(
    analyzer: SmartSearchAnalyzer,
    policy: Option<MatchPolicy>,
) -> SmartSearchAnalyzer {
    match policy {
        Some(policy) => analyzer.with_policy(policy),
        None => analyzer,
    }
}

#[cfg(test)]
mod tests;
