mod dump;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};
use wikisearch_core::config::{DEFAULT_EPSILON, DEFAULT_TOLERANCE};
use wikisearch_core::persist::{save_artifacts, ArtifactPaths};
use wikisearch_core::{DocId, IndexBuilder, RankConfig};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build title, rank and relevance artifacts from a document dump", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index from an XML dump, JSON/JSONL files, or a directory of them
    Build {
        /// Input path (file or directory)
        #[arg(long)]
        input: String,
        /// Output path for the id -> title map
        #[arg(long)]
        titles: String,
        /// Output path for the id -> rank vector
        #[arg(long)]
        ranks: String,
        /// Output path for the term -> id -> relevance table
        #[arg(long)]
        relevance: String,
        /// Teleportation probability of the rank computation
        #[arg(long, default_value_t = DEFAULT_EPSILON)]
        epsilon: f64,
        /// Stop iterating once consecutive rank vectors are this close
        #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, titles, ranks, relevance, epsilon, tolerance } => {
            let config = RankConfig { epsilon, tolerance };
            config.validate()?;
            build_index(Path::new(&input), &ArtifactPaths::new(titles, ranks, relevance), config)
        }
    }
}

fn build_index(input: &Path, out_paths: &ArtifactPaths, config: RankConfig) -> Result<()> {
    let files = dump::collect_input_files(input)?;
    if files.is_empty() {
        bail!("no .xml, .json or .jsonl files under {}", input.display());
    }

    let mut builder = IndexBuilder::new(config);
    let mut seen_ids: HashMap<DocId, String> = HashMap::new();
    for file in &files {
        let docs = dump::read_file(file)?;
        tracing::info!(file = %file.display(), num_docs = docs.len(), "read dump file");
        for doc in docs {
            if let Some(previous) = seen_ids.insert(doc.id, doc.title.clone()) {
                tracing::warn!(
                    id = doc.id,
                    previous = %previous,
                    title = %doc.title,
                    "duplicate document id"
                );
            }
            builder.add_document(doc.id, &doc.title, &doc.text);
        }
    }

    let index = builder.finish();

    save_artifacts(out_paths, &index)?;

    tracing::info!(
        num_docs = index.num_docs(),
        num_terms = index.relevance.len(),
        "index build complete"
    );
    Ok(())
}
