use crate::index::{CorpusStats, DocId, Document};
use crate::links::extract_link;
use crate::tokenizer::{is_stop_word, stem, tokenize, Token};
use std::collections::{HashMap, VecDeque};

/// Index one document's body and title.
///
/// Returns the document's term counts, max count and outbound links. Document
/// frequencies in `corpus` are bumped the first time each term is seen in this
/// document, in text-processing order.
///
/// Link tokens are resolved through [`extract_link`]; their display words go to the
/// back of the work queue as plain words, so link text is never scanned for links.
pub fn process_text(id: DocId, title: &str, text: &str, corpus: &mut CorpusStats) -> Document {
    let mut queue: VecDeque<Token> = tokenize(text).into_iter().chain(tokenize(title)).collect();
    let mut doc = Document { id, title: title.to_string(), ..Document::default() };
    let mut term_counts: HashMap<String, u32> = HashMap::new();

    while let Some(token) = queue.pop_front() {
        let word = match token {
            Token::Link(link) => {
                let display = extract_link(&link, &mut doc.outbound_links);
                queue.extend(display.into_iter().map(Token::Word));
                continue;
            }
            Token::Word(word) => word,
        };
        if is_stop_word(&word) { continue; }

        let term = stem(&word);
        let count = term_counts.entry(term.clone()).or_insert(0);
        if *count == 0 {
            // first occurrence in this document
            corpus.observe(&term);
        }
        *count += 1;
        doc.max_count = doc.max_count.max(*count);
    }

    doc.term_counts = term_counts;
    doc
}
