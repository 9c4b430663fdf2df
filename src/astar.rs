//! A variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! that keeps the frontier as a plain list scanned linearly for the smallest estimated cost.
//! Among equal estimates the record that entered the frontier first is expanded first, which
//! decides which of several equally cheap paths is returned.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use log::{debug, warn};
use num_traits::Zero;
use std::fmt::Debug;
use std::hash::Hash;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Handle of the root record, which has no parent.
const ROOT: usize = usize::MAX;

/// One scored entry of the search tree. Two records for the same node may exist at once, so
/// records are never compared with each other; set membership goes through the node alone.
#[derive(Clone, Debug)]
pub struct SearchRecord<N, C> {
    pub node: N,
    pub parent: usize,
    pub g: C,
    pub h: C,
    pub f: C,
}

impl<N, C: Zero + Copy> SearchRecord<N, C> {
    fn root(node: N) -> Self {
        SearchRecord {
            node,
            parent: ROOT,
            g: Zero::zero(),
            h: Zero::zero(),
            f: Zero::zero(),
        }
    }
}

fn reverse_path<N: Clone, C>(arena: &[SearchRecord<N, C>], start: usize) -> Vec<N> {
    let mut path: Vec<N> = std::iter::successors(Some(start), |&i| {
        Some(arena[i].parent).filter(|&p| p != ROOT)
    })
    .map(|i| arena[i].node.clone())
    .collect();
    path.reverse();
    path
}

/// Position in `open` of the first record with the smallest `f`.
fn cheapest<N, C: Ord + Copy>(arena: &[SearchRecord<N, C>], open: &[usize]) -> Option<usize> {
    open.iter()
        .enumerate()
        .min_by_key(|(_, &ix)| arena[ix].f)
        .map(|(pos, _)| pos)
}

/// Searches from `start` until `success` holds for an expanded node and returns the path to
/// it together with its cost.
///
/// The start record is scored zero on all three values. A successor already in the closed set
/// is skipped, as is one whose node is already on the frontier at an equal or lower cost.
/// Cheaper duplicates are added next to the existing entry rather than replacing it. When
/// `trace` is set every expansion logs the path leading up to it.
pub fn astar_linear<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    trace: bool,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut arena: Vec<SearchRecord<N, C>> = vec![SearchRecord::root(start.clone())];
    let mut open: Vec<usize> = vec![0];
    let mut closed: FxIndexSet<N> = FxIndexSet::default();

    while let Some(pos) = cheapest(&arena, &open) {
        let index = open.remove(pos);
        let (node, cost) = {
            let record = &arena[index];
            (record.node.clone(), record.g)
        };
        closed.insert(node.clone());
        if success(&node) {
            return Some((reverse_path(&arena, index), cost));
        }
        if trace {
            debug!("Expanding {:?}", reverse_path(&arena, index));
        }
        for (successor, move_cost) in successors(&node) {
            if closed.contains(&successor) {
                continue;
            }
            let g = cost + move_cost;
            let known = open.iter().any(|&ix| {
                let record = &arena[ix];
                record.node == successor && record.g <= g
            });
            if known {
                continue;
            }
            let h = heuristic(&successor);
            arena.push(SearchRecord {
                node: successor,
                parent: index,
                g,
                h,
                f: g + h,
            });
            open.push(arena.len() - 1);
        }
    }
    warn!(
        "Frontier exhausted after closing {} nodes without reaching the goal",
        closed.len()
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nodes on a line, each connected to its neighbours at unit cost.
    fn line_successors(n: i32) -> impl FnMut(&i32) -> Vec<(i32, i32)> {
        move |&x| {
            [x - 1, x + 1]
                .into_iter()
                .filter(|y| (0..n).contains(y))
                .map(|y| (y, 1))
                .collect()
        }
    }

    #[test]
    fn reaches_goal_on_a_line() {
        let (path, cost) =
            astar_linear(&0, line_successors(5), |&x| 4 - x, |&x| x == 4, false).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3, 4]);
        assert_eq!(cost, 4);
    }

    #[test]
    fn start_is_goal() {
        let (path, cost) = astar_linear(&3, line_successors(5), |_| 0, |&x| x == 3, true).unwrap();
        assert_eq!(path, vec![3]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn unreachable_goal_exhausts_frontier() {
        assert!(astar_linear(&0, line_successors(3), |_| 0, |&x| x == 7, false).is_none());
    }

    #[test]
    fn equal_estimates_expand_in_insertion_order() {
        // 0 branches to 1 and 2 which both lead to 3 at the same cost; 1 was generated first.
        let graph = |&x: &i32| -> Vec<(i32, i32)> {
            match x {
                0 => vec![(1, 1), (2, 1)],
                1 | 2 => vec![(3, 1)],
                _ => vec![],
            }
        };
        let (path, _) = astar_linear(&0, graph, |_| 0, |&x| x == 3, false).unwrap();
        assert_eq!(path, vec![0, 1, 3]);

        let graph = |&x: &i32| -> Vec<(i32, i32)> {
            match x {
                0 => vec![(2, 1), (1, 1)],
                1 | 2 => vec![(3, 1)],
                _ => vec![],
            }
        };
        let (path, _) = astar_linear(&0, graph, |_| 0, |&x| x == 3, false).unwrap();
        assert_eq!(path, vec![0, 2, 3]);
    }

    #[test]
    fn cheaper_route_is_added_next_to_existing_entry() {
        // 0 -> 1 costs 5 directly, or 2 via 2.
        let graph = |&x: &i32| -> Vec<(i32, i32)> {
            match x {
                0 => vec![(1, 5), (2, 1)],
                2 => vec![(1, 1)],
                _ => vec![],
            }
        };
        let (path, cost) = astar_linear(&0, graph, |_| 0, |&x| x == 1, false).unwrap();
        assert_eq!(path, vec![0, 2, 1]);
        assert_eq!(cost, 2);
    }
}
