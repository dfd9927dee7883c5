use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

pub type DocId = u32;

/// Document id -> case-folded title.
pub type TitleMap = BTreeMap<DocId, String>;
/// Document id -> authority score; sums to 1 over the corpus.
pub type RankVector = BTreeMap<DocId, f64>;
/// Term -> (document id -> tf-idf). Only nonzero-occurrence pairs are stored.
pub type RelevanceTable = HashMap<String, HashMap<DocId, f64>>;

/// Per-document statistics gathered while indexing. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub term_counts: HashMap<String, u32>,
    /// Largest value in `term_counts`, 0 when the document has no terms.
    pub max_count: u32,
    /// Raw link targets, deduplicated. May name titles outside the corpus.
    pub outbound_links: BTreeSet<String>,
}

/// Corpus-wide document frequencies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusStats {
    document_frequency: HashMap<String, u32>,
}

impl CorpusStats {
    pub fn new() -> Self { Self::default() }

    /// Count one more document containing `term`. Callers must call this once per document.
    pub fn observe(&mut self, term: &str) {
        *self.document_frequency.entry(term.to_string()).or_insert(0) += 1;
    }

    /// Undo the contribution of a document that is being replaced.
    pub fn forget(&mut self, doc: &Document) {
        for term in doc.term_counts.keys() {
            if let Some(df) = self.document_frequency.get_mut(term) {
                *df -= 1;
                if *df == 0 {
                    self.document_frequency.remove(term);
                }
            }
        }
    }

    pub fn document_frequency(&self, term: &str) -> u32 {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    pub fn num_terms(&self) -> usize { self.document_frequency.len() }
}

impl<S: Into<String>> FromIterator<(S, u32)> for CorpusStats {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self { document_frequency: iter.into_iter().map(|(t, df)| (t.into(), df)).collect() }
    }
}

/// The three artifacts the query phase consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexArtifacts {
    pub titles: TitleMap,
    pub ranks: RankVector,
    pub relevance: RelevanceTable,
}

impl IndexArtifacts {
    pub fn num_docs(&self) -> usize { self.titles.len() }

    /// Reverse lookup of the title map.
    pub fn title_ids(&self) -> HashMap<&str, DocId> {
        self.titles.iter().map(|(id, t)| (t.as_str(), *id)).collect()
    }
}
