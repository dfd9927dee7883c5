use crate::index::{CorpusStats, Document, RelevanceTable};

/// tf-idf for every (term, document) pair where the term occurs.
///
/// `tf = count / max_count`, `idf = ln(n / df)`. Documents with no terms contribute nothing.
pub fn compute_relevance(documents: &[Document], corpus: &CorpusStats) -> RelevanceTable {
    let n = documents.len() as f64;
    let mut table = RelevanceTable::new();
    for doc in documents {
        if doc.max_count == 0 { continue; }
        let max_count = doc.max_count as f64;
        for (term, &count) in &doc.term_counts {
            let df = corpus.document_frequency(term);
            if df == 0 { continue; }
            let tf = count as f64 / max_count;
            let idf = (n / df as f64).ln();
            table.entry(term.clone()).or_default().insert(doc.id, tf * idf);
        }
    }
    table
}
