use crate::index::Document;
use std::collections::{BTreeSet, HashMap};

/// Outbound links resolved against the corpus.
///
/// Nodes keep the order they were given in. Each node's targets are the distinct
/// corpus members it links to, excluding itself; links to unknown titles are dropped.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    targets: Vec<Vec<usize>>,
}

impl LinkGraph {
    pub fn new<'a, I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a BTreeSet<String>)>,
    {
        let nodes: Vec<(&str, &BTreeSet<String>)> = nodes.into_iter().collect();
        let positions: HashMap<&str, usize> =
            nodes.iter().enumerate().map(|(i, (t, _))| (*t, i)).collect();

        let targets = nodes
            .iter()
            .enumerate()
            .map(|(source, (_, links))| {
                links
                    .iter()
                    .filter_map(|link| positions.get(link.as_str()).copied())
                    .filter(|&target| target != source)
                    .collect::<BTreeSet<usize>>()
                    .into_iter()
                    .collect()
            })
            .collect();

        Self { targets }
    }

    pub fn from_documents(documents: &[Document]) -> Self {
        Self::new(documents.iter().map(|d| (d.title.as_str(), &d.outbound_links)))
    }

    pub fn num_docs(&self) -> usize { self.targets.len() }

    /// Valid targets of `source`, ascending by position.
    pub fn targets(&self, source: usize) -> &[usize] { &self.targets[source] }

    /// Number of distinct in-corpus, non-self targets (`nk`).
    pub fn out_degree(&self, source: usize) -> usize { self.targets[source].len() }
}
