use anyhow::Result;
use std::collections::HashMap;
use std::io::{BufRead, Write};
use wikisearch_core::persist::{load_artifacts, ArtifactPaths};
use wikisearch_core::tokenizer::query_terms;
use wikisearch_core::{DocId, IndexArtifacts};

pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const PROMPT: &str = "search> ";
pub const QUIT: &str = ":quit";
pub const NO_RESULTS: &str = "NO SEARCH RESULTS MATCHED YOUR QUERY. TRY AGAIN.";

/// Per-query scores, discarded after each response.
pub type ScoreMap = HashMap<DocId, f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub title: String,
    pub score: f64,
}

pub struct Querier {
    index: IndexArtifacts,
    use_page_rank: bool,
    max_results: usize,
}

impl Querier {
    pub fn new(index: IndexArtifacts, use_page_rank: bool) -> Self {
        Self { index, use_page_rank, max_results: DEFAULT_MAX_RESULTS }
    }

    pub fn load(paths: &ArtifactPaths, use_page_rank: bool) -> Result<Self> {
        let index = load_artifacts(paths)?;
        tracing::info!(
            num_docs = index.num_docs(),
            num_terms = index.relevance.len(),
            use_page_rank,
            "index loaded"
        );
        Ok(Self::new(index, use_page_rank))
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sum the relevance of each query term per document; repeated terms count again.
    /// With rank weighting on, the sum is multiplied by the document's rank.
    pub fn score(&self, terms: &[String]) -> ScoreMap {
        self.index
            .titles
            .keys()
            .map(|&doc_id| {
                let relevance: f64 = terms
                    .iter()
                    .filter_map(|t| self.index.relevance.get(t))
                    .filter_map(|docs| docs.get(&doc_id))
                    .sum();
                let score = if self.use_page_rank {
                    relevance * self.index.ranks.get(&doc_id).copied().unwrap_or(0.0)
                } else {
                    relevance
                };
                (doc_id, score)
            })
            .collect()
    }

    /// Highest-scoring documents, best first, at most `min(num_docs, max_results)`.
    /// Only strictly positive scores qualify; equal scores order by ascending id.
    pub fn rank(&self, scores: &ScoreMap) -> Vec<SearchHit> {
        let limit = self.index.num_docs().min(self.max_results);
        let mut scored: Vec<(DocId, f64)> = scores
            .iter()
            .filter(|(_, s)| **s > 0.0)
            .map(|(d, s)| (*d, *s))
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(doc_id, score)| SearchHit {
                doc_id,
                title: self.index.titles.get(&doc_id).cloned().unwrap_or_default(),
                score,
            })
            .collect()
    }

    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let terms = query_terms(query);
        tracing::debug!(?terms, "query terms");
        self.rank(&self.score(&terms))
    }

    /// Prompt for queries until `:quit` or end of input, printing `<n> <title>` per hit.
    pub fn run_repl<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<()> {
        let mut lines = input.lines();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            let query = line.trim();
            if query == QUIT { break; }

            let hits = self.search(query);
            if hits.is_empty() {
                writeln!(output, "{NO_RESULTS}")?;
            }
            for (i, hit) in hits.iter().enumerate() {
                writeln!(output, "{} {}", i + 1, hit.title)?;
            }
        }
        Ok(())
    }
}
