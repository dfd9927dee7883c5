use crate::tokenizer::words;
use std::collections::BTreeSet;

const CATEGORY_MARKER: &str = "category:";

/// Resolve the inner text of a `[[...]]` link.
///
/// Registers the link target in `outbound` (a set, so repeats collapse to one edge)
/// and returns the words to index in place of the link. The target is kept raw;
/// only the returned words are normalized.
///
/// - `target|display text`: edge to `target`, index the display text.
/// - `Category:Name`: edge to the whole link text, index `category` plus the name.
/// - anything else: edge to the link text, index its words.
pub fn extract_link(link: &str, outbound: &mut BTreeSet<String>) -> Vec<String> {
    if link.contains('|') {
        let mut segments = link.split('|');
        let target = segments.next().unwrap_or_default();
        let display = segments.next().unwrap_or_default();
        outbound.insert(target.to_string());
        return words(display);
    }

    if let Some(name) = strip_category_marker(link) {
        outbound.insert(link.to_string());
        let mut terms = vec!["category".to_string()];
        terms.extend(words(name));
        return terms;
    }

    outbound.insert(link.to_string());
    words(link)
}

fn strip_category_marker(link: &str) -> Option<&str> {
    let head = link.get(..CATEGORY_MARKER.len())?;
    head.eq_ignore_ascii_case(CATEGORY_MARKER).then(|| &link[CATEGORY_MARKER.len()..])
}
