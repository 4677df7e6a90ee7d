//! Species identity and evolution trees

/// Species record: the identity a creature's evolution data hangs off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    pub name: String,
    /// Absolute URL of this species' evolution-chain resource
    pub evolution_chain_url: String,
}

/// One node of a branching evolution tree.
///
/// The tree is rooted at a base species; branches are alternative evolutions
/// from a shared stage. The source data guarantees there are no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionNode {
    pub species: String,
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    /// Leaf node with no further evolutions
    pub fn leaf(species: impl Into<String>) -> Self {
        Self { species: species.into(), evolves_to: Vec::new() }
    }
}
