use crate::graph::LinkGraph;

/// Dense row-stochastic transition matrix over the corpus.
///
/// `get(source, target)` is the probability of moving from `source` to `target`:
/// `epsilon / n` teleportation everywhere, plus `(1 - epsilon) / nk` on each of the
/// source's `nk` valid targets. A source with no valid targets (dangling) spreads
/// the extra mass over every other document instead. Self-links never add mass.
#[derive(Debug, Clone)]
pub struct WeightMatrix {
    n: usize,
    weights: Vec<f64>,
}

impl WeightMatrix {
    pub fn build(graph: &LinkGraph, epsilon: f64) -> Self {
        let n = graph.num_docs();
        if n == 1 {
            // no other document to teleport to
            return Self { n, weights: vec![1.0] };
        }

        let base = epsilon / n as f64;
        let mut weights = vec![base; n * n];
        for source in 0..n {
            let row = &mut weights[source * n..(source + 1) * n];
            let targets = graph.targets(source);
            if targets.is_empty() {
                let linked = base + (1.0 - epsilon) / (n - 1) as f64;
                for (target, w) in row.iter_mut().enumerate() {
                    if target != source { *w = linked; }
                }
            } else {
                let linked = base + (1.0 - epsilon) / targets.len() as f64;
                for &target in targets {
                    row[target] = linked;
                }
            }
        }
        Self { n, weights }
    }

    pub fn num_docs(&self) -> usize { self.n }

    #[inline]
    pub fn get(&self, source: usize, target: usize) -> f64 {
        self.weights[source * self.n + target]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn matrix(nodes: &[(&str, &[&str])]) -> WeightMatrix {
        let sets: Vec<(String, BTreeSet<String>)> = nodes
            .iter()
            .map(|(t, links)| (t.to_string(), links.iter().map(|l| l.to_string()).collect()))
            .collect();
        WeightMatrix::build(&LinkGraph::new(sets.iter().map(|(t, l)| (t.as_str(), l))), 0.15)
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn three_document_weights() {
        let m = matrix(&[("a", &["b", "c"]), ("b", &[]), ("c", &["a"])]);
        assert_close(m.get(0, 0), 0.05);
        assert_close(m.get(0, 1), 0.475);
        assert_close(m.get(0, 2), 0.475);
        // dangling
        assert_close(m.get(1, 0), 0.475);
        assert_close(m.get(1, 1), 0.05);
        assert_close(m.get(1, 2), 0.475);
        assert_close(m.get(2, 0), 0.9);
        assert_close(m.get(2, 1), 0.05);
        assert_close(m.get(2, 2), 0.05);
    }

    #[test]
    fn four_document_weights() {
        let m = matrix(&[("a", &["c"]), ("b", &["d"]), ("c", &["d"]), ("d", &["a", "c"])]);
        assert_close(m.get(0, 2), 0.8875);
        assert_close(m.get(0, 1), 0.0375);
        assert_close(m.get(3, 0), 0.4625);
        assert_close(m.get(3, 2), 0.4625);
        assert_close(m.get(3, 3), 0.0375);
    }

    #[test]
    fn self_links_get_no_boost() {
        let m = matrix(&[("a", &["a", "b"]), ("b", &[])]);
        assert_close(m.get(0, 0), 0.075);
        assert_close(m.get(0, 1), 0.925);
    }

    #[test]
    fn rows_are_stochastic() {
        let m = matrix(&[
            ("a", &["a"]),
            ("b", &["zz"]),
            ("c", &["a", "b", "d"]),
            ("d", &[]),
            ("e", &["a"]),
        ]);
        for source in 0..m.num_docs() {
            let total: f64 = (0..m.num_docs()).map(|target| m.get(source, target)).sum();
            assert_close(total, 1.0);
        }
    }

    #[test]
    fn single_document_keeps_all_mass() {
        let m = matrix(&[("only", &["only"])]);
        assert_close(m.get(0, 0), 1.0);
    }
}
