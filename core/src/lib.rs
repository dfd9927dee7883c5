//! Index building for title-keyed document corpora: term statistics, tf-idf
//! relevance, and link-graph ranks.

pub mod builder;
pub mod config;
pub mod document;
pub mod graph;
pub mod index;
pub mod links;
pub mod persist;
pub mod rank;
pub mod relevance;
pub mod tokenizer;
pub mod weights;

pub use builder::IndexBuilder;
pub use config::RankConfig;
pub use index::{CorpusStats, DocId, Document, IndexArtifacts, RankVector, RelevanceTable, TitleMap};
