use crate::weights::WeightMatrix;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct RankOutcome {
    /// Stationary distribution, indexed like the matrix.
    pub ranks: Vec<f64>,
    pub iterations: usize,
}

/// Power iteration from the uniform distribution until consecutive vectors are
/// within `tolerance` (Euclidean). Each sweep reads only the previous vector.
pub fn page_rank(matrix: &WeightMatrix, tolerance: f64) -> RankOutcome {
    let n = matrix.num_docs();
    if n == 0 {
        return RankOutcome { ranks: Vec::new(), iterations: 0 };
    }

    let mut previous = vec![0.0; n];
    let mut current = vec![1.0 / n as f64; n];
    let mut iterations = 0;
    loop {
        let distance = euclidean_distance(&previous, &current);
        if distance <= tolerance { break; }
        let next = step(matrix, &current);
        previous = std::mem::replace(&mut current, next);
        iterations += 1;
        debug!(iterations, distance, "rank iteration");
    }
    RankOutcome { ranks: current, iterations }
}

fn step(matrix: &WeightMatrix, current: &[f64]) -> Vec<f64> {
    let n = matrix.num_docs();
    (0..n)
        .map(|target| (0..n).map(|source| matrix.get(source, target) * current[source]).sum())
        .collect()
}

pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_equal_vectors_is_zero() {
        assert_eq!(euclidean_distance(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn distance_matches_closed_form() {
        let d = euclidean_distance(&[3.0, -2.0, 0.0], &[10.0, 6.0, 4.0]);
        assert!((d - 129f64.sqrt()).abs() < 1e-12);
    }
}
