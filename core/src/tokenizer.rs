use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;
use std::collections::HashSet;

lazy_static! {
    // Link syntax first so `[[...]]` is never split into words.
    static ref TOKEN_RE: Regex = Regex::new(r"(?u)\[\[[^\[]+?\]\]|[\p{L}\p{N}]+'[\p{L}\p{N}]+|[\p{L}\p{N}]+").expect("valid regex");
    static ref WORD_RE: Regex = Regex::new(r"(?u)[\p{L}\p{N}]+'[\p{L}\p{N}]+|[\p{L}\p{N}]+").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// A raw token in textual order, lowercased but not yet filtered or stemmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(String),
    /// Inner text of a `[[...]]` link, delimiters stripped.
    Link(String),
}

/// NFKC + lowercase. Titles and link targets both go through this so they compare equal.
pub fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

/// Split text into words and links using NFKC normalization and lowercasing.
pub fn tokenize(text: &str) -> Vec<Token> {
    let normalized = normalize(text);
    TOKEN_RE
        .find_iter(&normalized)
        .map(|mat| {
            let token = mat.as_str();
            match token.strip_prefix("[[").and_then(|t| t.strip_suffix("]]")) {
                Some(inner) => Token::Link(inner.to_string()),
                None => Token::Word(token.to_string()),
            }
        })
        .collect()
}

/// Lowercased words of `text`, ignoring any link syntax.
pub fn words(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    WORD_RE.find_iter(&normalized).map(|m| m.as_str().to_string()).collect()
}

pub fn is_stop_word(word: &str) -> bool { STOPWORDS.contains(word) }

pub fn stem(word: &str) -> String { STEMMER.stem(word).to_string() }

/// Normalize free text the way document text is indexed: words, stop-word removal, stemming.
pub fn query_terms(text: &str) -> Vec<String> {
    words(text)
        .into_iter()
        .filter(|w| !is_stop_word(w))
        .map(|w| stem(&w))
        .collect()
}
