use std::collections::HashSet;

use glab_core::{Graph, GraphEdge, GraphResult, VertexId};
use tracing::debug;

use super::ModularityEvaluator;
use crate::config::ClusteringConfig;
use crate::utils::SetPartition;

/// Final partition of a clustering run.
#[derive(Debug, Clone)]
pub struct ClusteringResult<I> {
    pub partition: SetPartition<I>,
    pub modularity: f64,
    /// Local-move passes executed, including the last unproductive one.
    pub passes: usize,
}

/// Greedy modularity clustering starting from singleton communities.
pub fn louvain_clustering<I: VertexId, E: GraphEdge<I>>(
    graph: &Graph<I, E>,
    config: &ClusteringConfig,
) -> GraphResult<ClusteringResult<I>> {
    let partition = SetPartition::singletons(graph.id_vertices());
    louvain_clustering_from(graph, partition, config)
}

/// Greedy modularity clustering starting from `partition`.
///
/// Graph vertices missing from `partition` join as singletons; an element that
/// is not a graph vertex fails with [`GraphError::UnknownVertex`](glab_core::GraphError::UnknownVertex).
///
/// Each pass visits the vertices in order and, for each one, prices a move into
/// every distinct community reached by its outgoing edges. The best strictly
/// positive move is applied, moving only that vertex. Passes repeat until one
/// raises modularity by no more than `config.min_modularity_gain`, or
/// `config.max_passes` is reached.
pub fn louvain_clustering_from<I: VertexId, E: GraphEdge<I>>(
    graph: &Graph<I, E>,
    mut partition: SetPartition<I>,
    config: &ClusteringConfig,
) -> GraphResult<ClusteringResult<I>> {
    for (_, community) in partition.groups() {
        if let Some(stranger) = community.iter().find(|member| !graph.contains_vertex(member)) {
            return Err(graph.unknown_vertex(stranger));
        }
    }
    for id in graph.id_vertices() {
        partition.add_element(id);
    }

    let vertices = graph.id_vertices();
    let mut evaluator = ModularityEvaluator::new(graph);
    let mut modularity = evaluator.evaluate_modularity(&partition);
    let mut passes = 0;

    while passes < config.max_passes {
        passes += 1;
        let start = modularity;
        let mut moves = 0;

        for vertex in &vertices {
            let home = partition.group_id(vertex)?;
            let mut priced = HashSet::from([home]);
            let mut best: Option<(f64, &I)> = None;

            for edge in graph.vertex_edges(vertex) {
                let neighbour = edge.target();
                if !priced.insert(partition.group_id(neighbour)?) {
                    continue;
                }
                let change = evaluator.evaluate_modularity_change(
                    vertex,
                    partition.element_set(vertex)?,
                    partition.element_set(neighbour)?,
                );
                if change.delta > best.map_or(0.0, |(delta, _)| delta) {
                    best = Some((change.delta, neighbour));
                }
            }

            let Some((delta, neighbour)) = best else {
                continue;
            };
            let mut left_behind = partition.element_set(vertex)?.clone();
            left_behind.remove(vertex);
            partition.connect_elements(vertex, neighbour)?;
            modularity += delta;
            moves += 1;
            evaluator.refresh_community(&left_behind);
            let joined = partition.element_set(vertex)?.clone();
            evaluator.refresh_community(&joined);
        }

        // resync with the batch score so rounding never accumulates across passes
        modularity = evaluator.evaluate_modularity(&partition);
        let gain = modularity - start;
        debug!(
            graph = graph.label(),
            pass = passes,
            moves,
            modularity,
            gain,
            "clustering pass finished"
        );
        if gain <= config.min_modularity_gain {
            break;
        }
    }

    Ok(ClusteringResult {
        partition,
        modularity,
        passes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{divisibility_graph, two_cliques};
    use glab_core::{GraphError, UnweightedGraph};
    use std::collections::BTreeSet;

    #[test]
    fn test_two_cliques_split() {
        let graph = two_cliques();
        let result = louvain_clustering(&graph, &ClusteringConfig::precise()).unwrap();
        let expected: BTreeSet<BTreeSet<u32>> = [
            BTreeSet::from([1, 2, 3, 4]),
            BTreeSet::from([5, 6, 7, 8]),
        ]
        .into_iter()
        .collect();
        assert_eq!(result.partition.partition(), expected);
        assert!(result.modularity > 0.4);
        assert!(result.passes >= 1);
    }

    #[test]
    fn test_modularity_never_drops() {
        let graph = divisibility_graph(12);
        let mut evaluator = ModularityEvaluator::new(&graph);
        let singletons = SetPartition::singletons(graph.id_vertices());
        let baseline = evaluator.evaluate_modularity(&singletons);

        let result = louvain_clustering(&graph, &ClusteringConfig::default()).unwrap();
        assert!(result.modularity >= baseline);
        let rescored = evaluator.evaluate_modularity(&result.partition);
        assert!((rescored - result.modularity).abs() < 1e-9);
    }

    #[test]
    fn test_start_partition_is_completed() {
        let graph = two_cliques();
        let start = SetPartition::from_groups([vec![1, 2]]);
        let result = louvain_clustering_from(&graph, start, &ClusteringConfig::precise()).unwrap();
        assert_eq!(result.partition.len(), 8);
    }

    #[test]
    fn test_foreign_element_is_rejected() {
        let graph = two_cliques();
        let start = SetPartition::singletons([1, 99]);
        let err = louvain_clustering_from(&graph, start, &ClusteringConfig::default()).unwrap_err();
        assert!(matches!(err, GraphError::UnknownVertex { .. }));
    }

    #[test]
    fn test_edgeless_graph_stops_after_one_pass() {
        let mut graph: UnweightedGraph<u32> = UnweightedGraph::undirected("isolated");
        for v in 0..4 {
            graph.add_vertex(v);
        }
        let result = louvain_clustering(&graph, &ClusteringConfig::default()).unwrap();
        assert_eq!(result.passes, 1);
        assert_eq!(result.modularity, 0.0);
        assert_eq!(result.partition.group_count(), 4);
    }

    #[test]
    fn test_max_passes_is_respected() {
        let graph = two_cliques();
        let config = ClusteringConfig {
            min_modularity_gain: -1.0,
            max_passes: 2,
        };
        let result = louvain_clustering(&graph, &config).unwrap();
        assert_eq!(result.passes, 2);
    }
}
