//! Taxonomic queries: identity, direct relation and common-ancestor search
//! over one or two (possibly ambiguous) concept sets.

use std::fmt;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{ConceptGraph, ConceptId, RelationKind};
use crate::query::ambiguity::AmbiguousSet;
use crate::util::join::join_or;

/// The tagged outcome of a taxonomic query.
///
/// Carries presentation-ready display forms so the caller can render an
/// answer without going back to the graph. `Display` produces the sentence
/// forms of the original console demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// Both words name the same concept.
    Synonym {
        /// Name of the shared concept.
        concept: String,
    },
    /// The noun is (transitively) an instance of the class.
    DirectIsA {
        /// Singular display form of the noun sense.
        noun: String,
        /// Singular display form of the class sense.
        class: String,
        /// True when both inputs were resolved to a single sense; an
        /// ambiguous input only supports "can be a", not "is a".
        certain: bool,
    },
    /// Only the converse relation holds: the class is an instance of the
    /// noun.
    ReverseIsA {
        /// Plural display form of the noun sense.
        nouns: String,
        /// Plural display form of the class sense.
        classes: String,
    },
    /// No direct relation either way, but the two sides share ancestors,
    /// ranked most-specific first and deduplicated by display name.
    CommonAncestor {
        /// Plural display names of the shared ancestors.
        ancestors: Vec<String>,
    },
    /// No relation and no common ancestry anywhere in the graph.
    NoRelation {
        /// Plural display form of the noun sense.
        nouns: String,
        /// Plural display form of the class sense.
        classes: String,
    },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Synonym { .. } => write!(f, "Yes, those words can be synonyms."),
            Verdict::DirectIsA {
                noun,
                class,
                certain: true,
            } => write!(f, "Yes, a {noun} is a {class}."),
            Verdict::DirectIsA {
                noun,
                class,
                certain: false,
            } => write!(f, "Yes, a {noun} can be a {class}."),
            Verdict::ReverseIsA { nouns, classes } => {
                write!(f, "No, but some {classes} are {nouns}.")
            }
            Verdict::CommonAncestor { ancestors } => {
                write!(f, "They are both {}.", join_or(ancestors.iter().cloned()))
            }
            Verdict::NoRelation { nouns, classes } => write!(
                f,
                "No, no {nouns} are {classes} and no {classes} are {nouns}."
            ),
        }
    }
}

/// Answers taxonomic queries against a frozen [`ConceptGraph`].
#[derive(Debug, Clone, Copy)]
pub struct TaxonomicQueryEngine<'a> {
    graph: &'a ConceptGraph,
}

impl<'a> TaxonomicQueryEngine<'a> {
    /// Create an engine over the given graph.
    pub fn new(graph: &'a ConceptGraph) -> Self {
        TaxonomicQueryEngine { graph }
    }

    /// Answer "is an X a Y" for two possibly ambiguous sets of senses.
    ///
    /// Tries, in order: identity across the cross-product, a transitive IsA
    /// connection, the same search with the roles swapped, and finally the
    /// ranked common ancestors of the two sides.
    pub fn find_connection(
        &self,
        nouns: &AmbiguousSet<ConceptId>,
        classes: &AmbiguousSet<ConceptId>,
    ) -> Result<Verdict> {
        let certain = nouns.is_resolved() && classes.is_resolved();

        if let Some(verdict) = self.direct_connection(nouns, classes, certain)? {
            return Ok(verdict);
        }

        let noun_plural = self.graph.concept(*nouns.first())?.display_plural();
        let class_plural = self.graph.concept(*classes.first())?.display_plural();

        if self.direct_connection(classes, nouns, certain)?.is_some() {
            return Ok(Verdict::ReverseIsA {
                nouns: noun_plural.to_string(),
                classes: class_plural.to_string(),
            });
        }

        let ancestors = self.common_ancestors(nouns, classes)?;
        if ancestors.is_empty() {
            return Ok(Verdict::NoRelation {
                nouns: noun_plural.to_string(),
                classes: class_plural.to_string(),
            });
        }

        let mut names: Vec<String> = Vec::new();
        for id in ancestors {
            let name = self.graph.concept(id)?.display_plural().to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Ok(Verdict::CommonAncestor { ancestors: names })
    }

    /// Answer "is an X a Y" for a single resolved pair.
    ///
    /// Only a binary answer is needed at this call site, so no
    /// common-ancestor fallback is attempted: identity, direct IsA in either
    /// direction, else no relation.
    pub fn is_a(&self, noun: ConceptId, class: ConceptId) -> Result<Verdict> {
        if noun == class {
            return Ok(Verdict::Synonym {
                concept: self.graph.concept(noun)?.name.clone(),
            });
        }

        let noun_successors = self.graph.successors(noun, RelationKind::IsA)?;
        if noun_successors.contains(&class) {
            return Ok(Verdict::DirectIsA {
                noun: self.graph.concept(noun)?.display_singular().to_string(),
                class: self.graph.concept(class)?.display_singular().to_string(),
                certain: true,
            });
        }

        let class_successors = self.graph.successors(class, RelationKind::IsA)?;
        if class_successors.contains(&noun) {
            return Ok(Verdict::ReverseIsA {
                nouns: self.graph.concept(noun)?.display_plural().to_string(),
                classes: self.graph.concept(class)?.display_plural().to_string(),
            });
        }

        Ok(Verdict::NoRelation {
            nouns: self.graph.concept(noun)?.display_plural().to_string(),
            classes: self.graph.concept(class)?.display_plural().to_string(),
        })
    }

    /// The IsA ancestors shared by the two sides, ranked most-specific
    /// first.
    ///
    /// Each side contributes the union of its senses' transitive IsA
    /// successors; the intersection is ordered with the graph's
    /// cycle-tolerant approximate topological sort. Swapping the argument
    /// order changes only the presentation order, never the set.
    pub fn common_ancestors(
        &self,
        a: &AmbiguousSet<ConceptId>,
        b: &AmbiguousSet<ConceptId>,
    ) -> Result<Vec<ConceptId>> {
        let ancestors_a = self.side_successors(a)?;
        let ancestors_b = self.side_successors(b)?;

        let mut common: Vec<ConceptId> = ConceptGraph::intersect(&ancestors_a, &ancestors_b)
            .into_iter()
            .collect();
        // Hash-set iteration order is arbitrary; fix it before ranking so the
        // result is deterministic.
        common.sort();

        self.graph.approximate_topological_order(&common)
    }

    fn side_successors(&self, side: &AmbiguousSet<ConceptId>) -> Result<AHashSet<ConceptId>> {
        let mut union = AHashSet::new();
        for &concept in side {
            let successors = self.graph.successors(concept, RelationKind::IsA)?;
            union = ConceptGraph::union(&union, &successors);
        }
        Ok(union)
    }

    fn direct_connection(
        &self,
        nouns: &AmbiguousSet<ConceptId>,
        classes: &AmbiguousSet<ConceptId>,
        certain: bool,
    ) -> Result<Option<Verdict>> {
        for &class in classes {
            for &noun in nouns {
                if class == noun {
                    return Ok(Some(Verdict::Synonym {
                        concept: self.graph.concept(noun)?.name.clone(),
                    }));
                }

                let successors = self.graph.successors(noun, RelationKind::IsA)?;
                if successors.contains(&class) {
                    return Ok(Some(Verdict::DirectIsA {
                        noun: self.graph.concept(noun)?.display_singular().to_string(),
                        class: self.graph.concept(class)?.display_singular().to_string(),
                        certain,
                    }));
                }
            }
        }
        Ok(None)
    }
}
