//! Evolution-tree flattening

use crate::types::EvolutionNode;

/// Enumerate every root-to-leaf lineage of an evolution tree, in
/// depth-first order.
///
/// A childless root yields a single one-element path (the creature does not
/// evolve). Branch multiplicity is preserved as-is; callers that display the
/// result are responsible for deduplicating identical sequences.
pub fn lineages(root: &EvolutionNode) -> Vec<Vec<String>> {
    let mut paths = Vec::new();
    let mut trail = Vec::new();
    walk(root, &mut trail, &mut paths);
    paths
}

fn walk(node: &EvolutionNode, trail: &mut Vec<String>, paths: &mut Vec<Vec<String>>) {
    trail.push(node.species.clone());

    if node.evolves_to.is_empty() {
        paths.push(trail.clone());
    } else {
        for child in &node.evolves_to {
            walk(child, trail, paths);
        }
    }

    trail.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(species: &str, evolves_to: Vec<EvolutionNode>) -> EvolutionNode {
        EvolutionNode { species: species.to_string(), evolves_to }
    }

    #[test]
    fn test_childless_root_yields_single_one_element_path() {
        let paths = lineages(&EvolutionNode::leaf("ditto"));
        assert_eq!(paths, vec![vec!["ditto".to_string()]]);
    }

    #[test]
    fn test_linear_chain_of_three_yields_one_path() {
        let root = node(
            "bulbasaur",
            vec![node("ivysaur", vec![EvolutionNode::leaf("venusaur")])],
        );

        let paths = lineages(&root);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0], vec!["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[test]
    fn test_nested_branching_yields_one_path_per_leaf() {
        // two second-stage branches, one of which branches again
        let root = node(
            "wurmple",
            vec![
                node("silcoon", vec![EvolutionNode::leaf("beautifly")]),
                node(
                    "cascoon",
                    vec![
                        EvolutionNode::leaf("dustox"),
                        EvolutionNode::leaf("dustox-alt"),
                    ],
                ),
            ],
        );

        let paths = lineages(&root);
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], vec!["wurmple", "silcoon", "beautifly"]);
        assert_eq!(paths[1], vec!["wurmple", "cascoon", "dustox"]);
        assert_eq!(paths[2], vec!["wurmple", "cascoon", "dustox-alt"]);
    }

    #[test]
    fn test_wide_branching_from_root() {
        let root = node(
            "eevee",
            vec![
                EvolutionNode::leaf("vaporeon"),
                EvolutionNode::leaf("jolteon"),
                EvolutionNode::leaf("flareon"),
            ],
        );

        let paths = lineages(&root);
        assert_eq!(paths.len(), 3);
        for path in &paths {
            assert_eq!(path[0], "eevee");
            assert_eq!(path.len(), 2);
        }
    }

    #[test]
    fn test_duplicate_branches_are_preserved() {
        let root = node(
            "base",
            vec![EvolutionNode::leaf("stage"), EvolutionNode::leaf("stage")],
        );

        // raw multiplicity is kept; display-level code dedups
        assert_eq!(lineages(&root).len(), 2);
    }
}
