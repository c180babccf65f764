//! LeaderRank vertex centrality.
//!
//! LeaderRank adds a *ground* vertex linked in both directions to every real
//! vertex with weight `1.0`, which makes the graph strongly connected, and
//! then runs a random-walk diffusion to a steady state:
//!
//! 1. Build the `(n + 1) x (n + 1)` weight matrix (unweighted edges weigh `1.0`).
//! 2. Normalize each row to sum to one, then transpose.
//! 3. Start from score `1.0` on every real vertex and `0.0` on the ground, and
//!    multiply until the mean absolute change over the real vertices drops below
//!    [`LeaderRankConfig::error_threshold`].
//! 4. Spread the ground's final score evenly over the real vertices.
//!
//! The walk conserves the total score, so the returned scores sum to `n`.
//!
//! Reference: Lü et al., "Leaders in Social Networks, the Delicious Case",
//! PLoS ONE 6(6), 2011.

use std::collections::BTreeMap;

use glab_core::{Graph, GraphEdge, VertexId};
use tracing::{debug, warn};

use crate::config::LeaderRankConfig;

#[derive(Debug, Clone)]
pub struct LeaderRank<'g, I, E> {
    graph: &'g Graph<I, E>,
    config: LeaderRankConfig,
}

impl<'g, I: VertexId, E: GraphEdge<I>> LeaderRank<'g, I, E> {
    pub fn new(graph: &'g Graph<I, E>, config: LeaderRankConfig) -> Self {
        Self { graph, config }
    }

    /// Steady-state score of every vertex; empty for an empty graph.
    pub fn vertices_scores(&self) -> BTreeMap<I, f64> {
        let (ids, matrix) = self.augmented_matrix();
        let n = ids.len();
        if n == 0 {
            return BTreeMap::new();
        }
        let transition = transpose(&normalize_rows(matrix));

        let mut scores = vec![1.0; n + 1];
        scores[n] = 0.0;
        let mut iterations = 0;
        let mut error = f64::INFINITY;
        while error >= self.config.error_threshold {
            if iterations == self.config.max_iterations {
                warn!(
                    graph = self.graph.label(),
                    iterations,
                    error,
                    "leaderrank stopped before converging"
                );
                break;
            }
            let next = multiply(&transition, &scores);
            error = mean_real_change(&next, &scores, n);
            scores = next;
            iterations += 1;
        }
        debug!(
            graph = self.graph.label(),
            iterations,
            error,
            "leaderrank diffusion finished"
        );

        let ground_share = scores[n] / n as f64;
        ids.into_iter()
            .zip(scores)
            .map(|(id, score)| (id, score + ground_share))
            .collect()
    }

    /// Vertices ordered from highest to lowest score (ties by identifier).
    pub fn ranked(&self) -> Vec<(I, f64)> {
        let mut ranked: Vec<(I, f64)> = self.vertices_scores().into_iter().collect();
        ranked.sort_by(|(a_id, a), (b_id, b)| b.total_cmp(a).then_with(|| a_id.cmp(b_id)));
        ranked
    }

    /// Vertex order and the weight matrix extended with the ground vertex (last index).
    pub(crate) fn augmented_matrix(&self) -> (Vec<I>, Vec<Vec<f64>>) {
        let ids = self.graph.id_vertices();
        let n = ids.len();
        let index: BTreeMap<&I, usize> = ids.iter().enumerate().map(|(i, id)| (id, i)).collect();
        let mut matrix = vec![vec![0.0; n + 1]; n + 1];
        for edge in self.graph.edges() {
            if let (Some(&row), Some(&column)) = (index.get(edge.source()), index.get(edge.target())) {
                matrix[row][column] = edge.weight_or(1.0);
            }
        }
        for i in 0..n {
            matrix[i][n] = 1.0;
            matrix[n][i] = 1.0;
        }
        (ids, matrix)
    }
}

/// Mean absolute change over the first `n` entries; the ground vertex is excluded.
pub(crate) fn mean_real_change(next: &[f64], previous: &[f64], n: usize) -> f64 {
    next[..n]
        .iter()
        .zip(&previous[..n])
        .map(|(new, old)| (new - old).abs())
        .sum::<f64>()
        / n as f64
}

pub(crate) fn normalize_rows(mut matrix: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    for row in &mut matrix {
        let sum: f64 = row.iter().sum();
        if sum != 0.0 {
            row.iter_mut().for_each(|value| *value /= sum);
        }
    }
    matrix
}

pub(crate) fn transpose(matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let size = matrix.len();
    let mut transposed = vec![vec![0.0; size]; size];
    for (i, row) in matrix.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            transposed[j][i] = *value;
        }
    }
    transposed
}

pub(crate) fn multiply(matrix: &[Vec<f64>], vector: &[f64]) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| row.iter().zip(vector).map(|(a, b)| a * b).sum())
        .collect()
}
