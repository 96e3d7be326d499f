//! The select → expand → simulate → backpropagate driver.

use rand::Rng;

use crate::mcts::node::NodeId;
use crate::mcts::selection::{backpropagate, select};
use crate::mcts::simulation::simulate;
use crate::mcts::tree::SearchTree;
use crate::Result;

/// Runs a fixed budget of search iterations from `from`, mutating the tree
/// in place.
///
/// Each iteration descends to a childless guess node, expands and plays it
/// out (or, for a terminal node, takes its known depth as the reward), and
/// backpropagates the single reward up the full path. Exactly one root
/// child is updated per iteration, so visit mass is conserved.
pub fn run_search(
    tree: &mut SearchTree,
    from: NodeId,
    iterations: usize,
    rng: &mut impl Rng,
) -> Result<()> {
    for _ in 0..iterations {
        let leaf = select(tree, from, rng);

        let reward = if tree.node(leaf).is_terminal() {
            // The secret is determined; the game ends at this depth.
            tree.node(leaf).moves
        } else {
            tree.expand_guess_node(leaf)?;
            simulate(tree, leaf, rng)?
        };

        backpropagate(tree, leaf, reward);
    }

    log::debug!(
        "ran {} iterations from node {}: tree holds {} nodes, {} visits at the subtree root",
        iterations,
        from,
        tree.len(),
        tree.node(from).visit_count
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::parameters::GameParameters;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_visit_mass_is_conserved_at_the_root() {
        let mut tree = SearchTree::new(GameParameters::new(2, 3));
        let mut rng = StdRng::seed_from_u64(42);

        run_search(&mut tree, SearchTree::ROOT, 50, &mut rng).unwrap();

        let root = tree.node(SearchTree::ROOT);
        assert_eq!(root.visit_count, 50);

        let child_visits: usize = root
            .children
            .iter()
            .map(|&child| tree.node(child).visit_count)
            .sum();
        assert_eq!(child_visits, 50);
    }

    #[test]
    fn test_every_root_child_is_tried_before_revisits() {
        let mut tree = SearchTree::new(GameParameters::new(2, 3));
        let mut rng = StdRng::seed_from_u64(7);

        // Nine root children, nine iterations: one visit each.
        run_search(&mut tree, SearchTree::ROOT, 9, &mut rng).unwrap();

        for &child in &tree.node(SearchTree::ROOT).children {
            assert_eq!(tree.node(child).visit_count, 1);
        }
    }

    #[test]
    fn test_search_is_reproducible_with_a_seed() {
        let run = |seed: u64| {
            let mut tree = SearchTree::new(GameParameters::new(2, 3));
            let mut rng = StdRng::seed_from_u64(seed);
            run_search(&mut tree, SearchTree::ROOT, 80, &mut rng).unwrap();
            tree.node(SearchTree::ROOT)
                .children
                .iter()
                .map(|&child| (tree.node(child).visit_count, tree.node(child).total_moves))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    fn test_rewards_accumulate_plausible_game_lengths() {
        let mut tree = SearchTree::new(GameParameters::new(2, 3));
        let mut rng = StdRng::seed_from_u64(11);

        run_search(&mut tree, SearchTree::ROOT, 200, &mut rng).unwrap();

        for &child in &tree.node(SearchTree::ROOT).children {
            let node = tree.node(child);
            if node.visit_count > 0 {
                let mean = node.average_moves();
                assert!(mean >= 1.0);
                assert!(mean <= 9.0);
            }
        }
    }
}
