use crate::config::RankConfig;
use crate::document::process_text;
use crate::graph::LinkGraph;
use crate::index::{CorpusStats, DocId, Document, IndexArtifacts};
use crate::rank::page_rank;
use crate::relevance::compute_relevance;
use crate::tokenizer::normalize;
use crate::weights::WeightMatrix;
use std::collections::HashMap;
use tracing::{info, warn};

/// Accumulates documents and corpus statistics, then computes the artifacts in one go.
pub struct IndexBuilder {
    config: RankConfig,
    corpus: CorpusStats,
    documents: Vec<Document>,
    positions: HashMap<String, usize>,
}

impl IndexBuilder {
    pub fn new(config: RankConfig) -> Self {
        Self {
            config,
            corpus: CorpusStats::new(),
            documents: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Index one source document. The title is trimmed and case-folded the same way
    /// link text is; a repeated title replaces the earlier document and its statistics.
    pub fn add_document(&mut self, id: DocId, title: &str, text: &str) -> &Document {
        let title = normalize(title).trim().to_string();
        if let Some(&pos) = self.positions.get(&title) {
            let previous_id = self.documents[pos].id;
            warn!(title = %title, previous_id, id, "duplicate title, replacing earlier document");
            self.corpus.forget(&self.documents[pos]);
            self.documents[pos] = process_text(id, &title, text, &mut self.corpus);
            return &self.documents[pos];
        }

        let doc = process_text(id, &title, text, &mut self.corpus);
        let pos = self.documents.len();
        self.positions.insert(title, pos);
        self.documents.push(doc);
        &self.documents[pos]
    }

    pub fn documents(&self) -> &[Document] { &self.documents }

    pub fn corpus(&self) -> &CorpusStats { &self.corpus }

    pub fn finish(self) -> IndexArtifacts {
        let num_docs = self.documents.len();
        info!(num_docs, num_terms = self.corpus.num_terms(), "ingested documents");

        let relevance = compute_relevance(&self.documents, &self.corpus);

        let graph = LinkGraph::from_documents(&self.documents);
        let matrix = WeightMatrix::build(&graph, self.config.epsilon);
        let outcome = page_rank(&matrix, self.config.tolerance);
        info!(num_docs, iterations = outcome.iterations, "ranks converged");

        let ranks = self.documents.iter().zip(outcome.ranks).map(|(d, r)| (d.id, r)).collect();
        let titles = self.documents.into_iter().map(|d| (d.id, d.title)).collect();
        IndexArtifacts { titles, ranks, relevance }
    }
}

impl Default for IndexBuilder {
    fn default() -> Self { Self::new(RankConfig::default()) }
}
