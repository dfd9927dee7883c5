use std::collections::BTreeSet;
use wikisearch_core::graph::LinkGraph;
use wikisearch_core::persist::{load_artifacts, save_artifacts, ArtifactPaths};
use wikisearch_core::rank::page_rank;
use wikisearch_core::relevance::compute_relevance;
use wikisearch_core::weights::WeightMatrix;
use wikisearch_core::{CorpusStats, Document, IndexBuilder, RankConfig};

const EPSILON: f64 = 0.15;
const TOLERANCE: f64 = 0.001;

fn doc(id: u32, title: &str, counts: &[(&str, u32)], max_count: u32) -> Document {
    Document {
        id,
        title: title.to_string(),
        term_counts: counts.iter().map(|(t, c)| (t.to_string(), *c)).collect(),
        max_count,
        outbound_links: BTreeSet::new(),
    }
}

fn ranks_for(nodes: &[(&str, &[&str])]) -> Vec<f64> {
    let sets: Vec<(String, BTreeSet<String>)> = nodes
        .iter()
        .map(|(t, links)| (t.to_string(), links.iter().map(|l| l.to_string()).collect()))
        .collect();
    let graph = LinkGraph::new(sets.iter().map(|(t, l)| (t.as_str(), l)));
    page_rank(&WeightMatrix::build(&graph, EPSILON), TOLERANCE).ranks
}

fn assert_uniform(ranks: &[f64]) {
    let expected = 1.0 / ranks.len() as f64;
    for r in ranks {
        assert!((r - expected).abs() < 1e-9, "{r} != {expected}");
    }
}

#[test]
fn relevance_matches_closed_form() {
    let docs = vec![
        doc(1, "aa", &[("aa", 1), ("dd", 1)], 1),
        doc(2, "bb", &[("bb", 1), ("cc", 2), ("dd", 2)], 2),
        doc(3, "cc", &[("cc", 2), ("dd", 3)], 3),
    ];
    let corpus: CorpusStats = [("aa", 1), ("bb", 1), ("cc", 2), ("dd", 3)].into_iter().collect();
    let table = compute_relevance(&docs, &corpus);

    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
    assert_eq!(table["aa"].len(), 1);
    assert!(close(table["aa"][&1], 1.0986122886681098));
    assert_eq!(table["bb"].len(), 1);
    assert!(close(table["bb"][&2], 0.5493061443340549));
    assert_eq!(table["cc"].len(), 2);
    assert!(close(table["cc"][&2], 0.4054651081081644));
    assert!(close(table["cc"][&3], 0.27031007207210955));
    // present in every document: idf 0, still stored where it occurs
    assert_eq!(table["dd"].len(), 3);
    assert!(table["dd"].values().all(|v| *v == 0.0));
}

#[test]
fn four_document_graph_converges_to_known_vector() {
    let ranks = ranks_for(&[("a", &["c"]), ("b", &["d"]), ("c", &["d"]), ("d", &["a", "c"])]);
    let expected = [0.20184346250214996, 0.03749999999999998, 0.37396603749279056, 0.3866905000050588];
    for (r, e) in ranks.iter().zip(expected) {
        assert!((r - e).abs() < 1e-6, "{r} != {e}");
    }
}

#[test]
fn self_links_only_is_uniform() {
    assert_uniform(&ranks_for(&[("a", &["a"]), ("b", &["b"]), ("c", &["c"]), ("d", &["d"]), ("e", &["e"])]));
}

#[test]
fn no_links_is_uniform() {
    assert_uniform(&ranks_for(&[("a", &[]), ("b", &[]), ("c", &[]), ("d", &[]), ("e", &[])]));
}

#[test]
fn links_outside_corpus_is_uniform() {
    assert_uniform(&ranks_for(&[("a", &["f"]), ("b", &["f"]), ("c", &["f"]), ("d", &["f"]), ("e", &["f"])]));
}

#[test]
fn ranks_form_a_distribution() {
    let ranks = ranks_for(&[("a", &["b", "c"]), ("b", &[]), ("c", &["a"]), ("d", &["a", "nowhere"])]);
    assert!(ranks.iter().all(|r| *r >= 0.0));
    assert!((ranks.iter().sum::<f64>() - 1.0).abs() < 1e-6);
}

#[test]
fn repeated_link_syntax_counts_once() {
    let mut builder = IndexBuilder::new(RankConfig::default());
    builder.add_document(1, "A", "[[B]] [[B]] [[B|the letter b]] [[f]]");
    builder.add_document(2, "B", "");
    let a = &builder.documents()[0];
    assert_eq!(a.outbound_links.len(), 2);

    let graph = LinkGraph::from_documents(builder.documents());
    assert_eq!(graph.out_degree(0), 1);
    assert_eq!(graph.out_degree(1), 0);
}

#[test]
fn build_and_reload_artifacts() {
    let mut builder = IndexBuilder::new(RankConfig::default());
    builder.add_document(10, "Rust", "Rust is a systems language. See [[Cargo]].");
    builder.add_document(11, "Cargo", "Cargo builds [[Rust]] crates.");
    builder.add_document(12, "Python", "A scripting language.");
    let built = builder.finish();

    assert_eq!(built.num_docs(), 3);
    assert!((built.ranks.values().sum::<f64>() - 1.0).abs() < 1e-6);
    assert!(built.ranks[&10] > built.ranks[&12]);

    let dir = tempfile::tempdir().unwrap();
    let paths = ArtifactPaths::in_dir(dir.path().join("out"));
    save_artifacts(&paths, &built).unwrap();
    let loaded = load_artifacts(&paths).unwrap();

    assert_eq!(loaded.titles, built.titles);
    assert_eq!(loaded.ranks, built.ranks);
    assert_eq!(loaded.relevance, built.relevance);
    assert_eq!(loaded.title_ids()["cargo"], 11);
}

#[test]
fn loading_missing_artifact_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_artifacts(&ArtifactPaths::in_dir(dir.path())).is_err());
}
