use anyhow::Result;
use clap::Parser;
use query::{Querier, DEFAULT_MAX_RESULTS};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};
use wikisearch_core::persist::ArtifactPaths;

#[derive(Parser)]
#[command(name = "query")]
#[command(about = "Interactive search over built index artifacts", long_about = None)]
struct Args {
    /// Path of the id -> title map
    #[arg(long)]
    titles: String,
    /// Path of the id -> rank vector
    #[arg(long)]
    ranks: String,
    /// Path of the term -> id -> relevance table
    #[arg(long)]
    relevance: String,
    /// Weight relevance by link-graph rank
    #[arg(long, default_value_t = false)]
    pagerank: bool,
    /// Maximum results per query
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();
    let paths = ArtifactPaths::new(args.titles, args.ranks, args.relevance);
    let querier = Querier::load(&paths, args.pagerank)?.with_max_results(args.max_results);

    querier.run_repl(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
