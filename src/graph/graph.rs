//! The directed concept graph and its traversal operations.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::error::{LexigraphError, Result};
use crate::graph::concept::{Concept, ConceptId, RelationEdge, RelationKind};

/// A directed graph of concepts with typed relation edges.
///
/// Built once during the load phase and read-only afterwards. Traversals are
/// cycle-protected: ingested data may violate the IsA-acyclicity expectation
/// and must still terminate.
#[derive(Debug, Default, Clone)]
pub struct ConceptGraph {
    concepts: Vec<Concept>,
    by_key: AHashMap<String, ConceptId>,
    edges: Vec<Vec<RelationEdge>>,
}

impl ConceptGraph {
    pub(crate) fn from_parts(
        concepts: Vec<Concept>,
        by_key: AHashMap<String, ConceptId>,
        edges: Vec<Vec<RelationEdge>>,
    ) -> Self {
        ConceptGraph {
            concepts,
            by_key,
            edges,
        }
    }

    /// Number of concepts in the graph.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Whether the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// All concepts in insertion order.
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    /// The concept with the given id, or a contract violation for an id not
    /// present in this graph.
    pub fn concept(&self, id: ConceptId) -> Result<&Concept> {
        self.concepts.get(id.as_usize()).ok_or_else(|| {
            LexigraphError::contract(format!("concept id {} not present in graph", id.0))
        })
    }

    /// Look up a concept by its source key. A missing key is a legitimate
    /// absence, not an error.
    pub fn concept_by_key(&self, key: &str) -> Option<&Concept> {
        self.by_key.get(key).map(|id| &self.concepts[id.as_usize()])
    }

    /// Outgoing edges of the given concept.
    pub fn edges_from(&self, id: ConceptId) -> Result<&[RelationEdge]> {
        self.concept(id)?;
        Ok(&self.edges[id.as_usize()])
    }

    /// All concepts reachable from `start` over one or more edges of the
    /// given kind.
    ///
    /// `start` itself appears in the result only when a cycle leads back to
    /// it. Cyclic input terminates: each node is expanded at most once.
    pub fn successors(&self, start: ConceptId, kind: RelationKind) -> Result<AHashSet<ConceptId>> {
        self.concept(start)?;

        let mut reached = AHashSet::new();
        let mut visited = AHashSet::new();
        visited.insert(start);
        let mut queue = VecDeque::from([start]);

        while let Some(node) = queue.pop_front() {
            for edge in &self.edges[node.as_usize()] {
                if edge.kind != kind {
                    continue;
                }
                if edge.target == start {
                    // Reached through a cycle, not trivially.
                    reached.insert(start);
                }
                if visited.insert(edge.target) {
                    reached.insert(edge.target);
                    queue.push_back(edge.target);
                }
            }
        }

        Ok(reached)
    }

    /// Union of two successor sets.
    pub fn union(a: &AHashSet<ConceptId>, b: &AHashSet<ConceptId>) -> AHashSet<ConceptId> {
        a.union(b).copied().collect()
    }

    /// Intersection of two successor sets.
    pub fn intersect(a: &AHashSet<ConceptId>, b: &AHashSet<ConceptId>) -> AHashSet<ConceptId> {
        a.intersection(b).copied().collect()
    }

    /// Best-effort topological ordering of `nodes` over the IsA edges among
    /// them, most-specific first.
    ///
    /// Kahn's algorithm restricted to the given subset. When no zero-indegree
    /// node remains (a cycle among the inputs), the earliest unprocessed node
    /// in input order is forced and the algorithm resumes, so any finite
    /// input terminates and identical input always yields the same order.
    /// This is a ranking aid, not a valid total order on cyclic input.
    pub fn approximate_topological_order(&self, nodes: &[ConceptId]) -> Result<Vec<ConceptId>> {
        // Dedupe while keeping first-seen input order.
        let mut order: Vec<ConceptId> = Vec::with_capacity(nodes.len());
        let mut position: AHashMap<ConceptId, usize> = AHashMap::new();
        for &node in nodes {
            self.concept(node)?;
            if !position.contains_key(&node) {
                position.insert(node, order.len());
                order.push(node);
            }
        }

        // Indegree and adjacency restricted to the subset.
        let mut indegree: AHashMap<ConceptId, usize> =
            order.iter().map(|&n| (n, 0)).collect();
        let mut within: AHashMap<ConceptId, Vec<ConceptId>> = AHashMap::new();
        for &node in &order {
            for edge in &self.edges[node.as_usize()] {
                if edge.kind == RelationKind::IsA
                    && edge.target != node
                    && let Some(degree) = indegree.get_mut(&edge.target)
                {
                    *degree += 1;
                    within.entry(node).or_default().push(edge.target);
                }
            }
        }

        let mut queue: VecDeque<ConceptId> = order
            .iter()
            .copied()
            .filter(|n| indegree.get(n) == Some(&0))
            .collect();
        let mut processed: AHashSet<ConceptId> = AHashSet::new();
        let mut sorted: Vec<ConceptId> = Vec::with_capacity(order.len());

        while sorted.len() < order.len() {
            let node = match queue.pop_front() {
                Some(node) => node,
                None => {
                    // Residual cycle: force the earliest unprocessed input.
                    match order.iter().find(|n| !processed.contains(n)) {
                        Some(&node) => node,
                        None => break,
                    }
                }
            };
            if !processed.insert(node) {
                continue;
            }
            sorted.push(node);

            if let Some(targets) = within.get(&node) {
                for target in targets {
                    if let Some(degree) = indegree.get_mut(target) {
                        *degree = degree.saturating_sub(1);
                        if *degree == 0 && !processed.contains(target) {
                            queue.push_back(*target);
                        }
                    }
                }
            }
        }

        Ok(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::concept::NounForms;

    fn graph(names: &[&str], edges: &[(u32, RelationKind, u32)]) -> ConceptGraph {
        let concepts: Vec<Concept> = names
            .iter()
            .enumerate()
            .map(|(i, name)| Concept {
                id: ConceptId(i as u32),
                key: format!("t:{name}"),
                name: name.to_string(),
                definition: None,
                noun_forms: NounForms::default(),
                entries: vec![],
            })
            .collect();
        let by_key = concepts
            .iter()
            .map(|c| (c.key.clone(), c.id))
            .collect();
        let mut edge_lists = vec![Vec::new(); names.len()];
        for &(source, kind, target) in edges {
            edge_lists[source as usize].push(RelationEdge {
                source: ConceptId(source),
                kind,
                target: ConceptId(target),
            });
        }
        ConceptGraph::from_parts(concepts, by_key, edge_lists)
    }

    #[test]
    fn test_successors_transitive() {
        // feline -> mammal -> animal
        let g = graph(
            &["feline", "mammal", "animal"],
            &[
                (0, RelationKind::IsA, 1),
                (1, RelationKind::IsA, 2),
            ],
        );

        let successors = g.successors(ConceptId(0), RelationKind::IsA).unwrap();
        assert!(successors.contains(&ConceptId(1)));
        assert!(successors.contains(&ConceptId(2)));
        assert!(!successors.contains(&ConceptId(0)));
    }

    #[test]
    fn test_successors_filters_by_kind() {
        let g = graph(
            &["wheel", "car", "vehicle"],
            &[
                (0, RelationKind::PartOf, 1),
                (1, RelationKind::IsA, 2),
            ],
        );

        let is_a = g.successors(ConceptId(0), RelationKind::IsA).unwrap();
        assert!(is_a.is_empty());

        let part_of = g.successors(ConceptId(0), RelationKind::PartOf).unwrap();
        assert_eq!(part_of, [ConceptId(1)].into_iter().collect());
    }

    #[test]
    fn test_successors_tolerates_cycles() {
        let g = graph(
            &["a", "b", "c"],
            &[
                (0, RelationKind::IsA, 1),
                (1, RelationKind::IsA, 2),
                (2, RelationKind::IsA, 0),
            ],
        );

        let successors = g.successors(ConceptId(0), RelationKind::IsA).unwrap();
        // Start is included because the cycle leads back to it.
        assert_eq!(
            successors,
            [ConceptId(0), ConceptId(1), ConceptId(2)].into_iter().collect()
        );
    }

    #[test]
    fn test_successors_dangling_id_is_contract_violation() {
        let g = graph(&["only"], &[]);
        let result = g.successors(ConceptId(9), RelationKind::IsA);
        assert!(matches!(
            result,
            Err(LexigraphError::ContractViolation(_))
        ));
    }

    #[test]
    fn test_set_algebra() {
        let a: AHashSet<ConceptId> = [ConceptId(0), ConceptId(1)].into_iter().collect();
        let b: AHashSet<ConceptId> = [ConceptId(1), ConceptId(2)].into_iter().collect();

        assert_eq!(
            ConceptGraph::union(&a, &b),
            [ConceptId(0), ConceptId(1), ConceptId(2)].into_iter().collect()
        );
        assert_eq!(
            ConceptGraph::intersect(&a, &b),
            [ConceptId(1)].into_iter().collect()
        );
    }

    #[test]
    fn test_topological_order_specific_first() {
        // feline -> mammal -> animal; ask for [animal, mammal, feline].
        let g = graph(
            &["feline", "mammal", "animal"],
            &[
                (0, RelationKind::IsA, 1),
                (1, RelationKind::IsA, 2),
            ],
        );

        let sorted = g
            .approximate_topological_order(&[ConceptId(2), ConceptId(1), ConceptId(0)])
            .unwrap();
        assert_eq!(sorted, vec![ConceptId(0), ConceptId(1), ConceptId(2)]);
    }

    #[test]
    fn test_topological_order_terminates_on_cycle() {
        let g = graph(
            &["a", "b", "c"],
            &[
                (0, RelationKind::IsA, 1),
                (1, RelationKind::IsA, 0),
                (1, RelationKind::IsA, 2),
            ],
        );

        let input = [ConceptId(2), ConceptId(0), ConceptId(1)];
        let sorted = g.approximate_topological_order(&input).unwrap();
        assert_eq!(sorted.len(), 3);

        // Deterministic across repeated calls.
        assert_eq!(sorted, g.approximate_topological_order(&input).unwrap());
    }

    #[test]
    fn test_topological_order_dedupes_input() {
        let g = graph(&["a", "b"], &[(0, RelationKind::IsA, 1)]);
        let sorted = g
            .approximate_topological_order(&[
                ConceptId(1),
                ConceptId(0),
                ConceptId(1),
                ConceptId(0),
            ])
            .unwrap();
        assert_eq!(sorted, vec![ConceptId(0), ConceptId(1)]);
    }
}
