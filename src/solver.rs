//! The two search strategies: depth-first and breadth-first.
//!
//! Both consume any [`Puzzle`] implementation and return a
//! [`SearchTree`] whose root-to-leaf chain is the solution path, or
//! `None` when no solution is reachable. Each call keeps its own
//! visited set of configuration signatures, and both strategies run on
//! explicit work lists rather than native recursion, so solution depth
//! is bounded by memory rather than by the call stack.

use std::collections::HashSet;

use crate::puzzle::Puzzle;
use crate::tree::SearchTree;

/// A partially explored configuration on the depth-first stack.
struct Frame<P> {
    state: P,
    pending: std::vec::IntoIter<Option<P>>,
}

impl<P: Puzzle> Frame<P> {
    fn new(state: P) -> Self {
        let pending = state.extensions().into_iter();
        Self { state, pending }
    }
}

/// Search depth-first for any solution reachable from `initial`.
///
/// Successors are explored in enumeration order and the first solution
/// found wins, so the returned chain is not necessarily shortest.
/// Configurations already seen and configurations whose
/// [`fail_fast`](Puzzle::fail_fast) check fires are never expanded;
/// dead ends stay in the visited set and are never retried. The initial
/// configuration seeds the visited set but is itself exempt from the
/// fail-fast check.
pub fn depth_first_search<P: Puzzle>(initial: P) -> Option<SearchTree<P>> {
    if initial.is_solved() {
        return Some(SearchTree::new(initial));
    }

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(initial.signature());

    // The stack holds the path from the initial configuration down to
    // the configuration currently being expanded.
    let mut stack = vec![Frame::new(initial)];

    while let Some(frame) = stack.last_mut() {
        match frame.pending.next() {
            // successors exhausted: dead end, backtrack (the signature
            // stays visited, so the dead end is never retried)
            None => {
                stack.pop();
            }
            // absent placeholder entry in the enumeration
            Some(None) => {}
            Some(Some(next)) => {
                let sig = next.signature();
                if visited.contains(&sig) {
                    continue;
                }
                if next.fail_fast() {
                    visited.insert(sig);
                    continue;
                }
                if next.is_solved() {
                    // the stack is the solution path; the solved
                    // configuration becomes the leaf
                    let mut states = stack.drain(..).map(|f| f.state);
                    // the stack always holds at least the initial frame
                    let mut tree = SearchTree::new(states.next().unwrap());
                    let mut tip = tree.root();
                    for state in states {
                        tip = tree.push_child(tip, state);
                    }
                    tree.push_child(tip, next);
                    return Some(tree);
                }
                visited.insert(sig);
                stack.push(Frame::new(next));
            }
        }
    }

    None
}

/// A configuration discovered during breadth-first exploration, with a
/// back index to the entry whose move produced it.
struct Discovered<P> {
    state: P,
    parent: Option<usize>,
}

/// Search breadth-first for a shortest solution reachable from
/// `initial`.
///
/// The frontier is processed level by level, so the first solved
/// configuration encountered lies at minimum move distance and the
/// returned chain has minimal length. Sibling branches that do not lead
/// to the solution never appear in the result. As with
/// [`depth_first_search`], the initial configuration seeds the visited
/// set and is exempt from the fail-fast check.
pub fn breadth_first_search<P: Puzzle>(initial: P) -> Option<SearchTree<P>> {
    if initial.is_solved() {
        return Some(SearchTree::new(initial));
    }

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(initial.signature());

    // Exploration arena: every discovered configuration, with a back
    // index for path reconstruction.
    let mut arena: Vec<Discovered<P>> = vec![Discovered {
        state: initial,
        parent: None,
    }];

    let first = arena[0].state.extensions();
    let mut frontier: Vec<usize> = Vec::new();
    for state in first.into_iter().flatten() {
        arena.push(Discovered {
            state,
            parent: Some(0),
        });
        frontier.push(arena.len() - 1);
    }

    while !frontier.is_empty() {
        let mut next_frontier: Vec<usize> = Vec::new();
        for id in frontier {
            // solved is checked before the visited/fail-fast gate: in
            // level order the first solved configuration is at minimum
            // move distance
            if arena[id].state.is_solved() {
                return Some(solution_chain(&arena, id));
            }
            let sig = arena[id].state.signature();
            if visited.contains(&sig) || arena[id].state.fail_fast() {
                continue;
            }
            visited.insert(sig);
            let extensions = arena[id].state.extensions();
            for state in extensions.into_iter().flatten() {
                arena.push(Discovered {
                    state,
                    parent: Some(id),
                });
                next_frontier.push(arena.len() - 1);
            }
        }
        frontier = next_frontier;
    }

    None
}

/// Rebuild the root-to-leaf chain by walking parent indices up from the
/// solved entry. Siblings that did not lead to the solution are left
/// behind in the arena.
fn solution_chain<P: Puzzle>(arena: &[Discovered<P>], solved: usize) -> SearchTree<P> {
    let mut path = vec![solved];
    let mut cur = arena[solved].parent;
    while let Some(id) = cur {
        path.push(id);
        cur = arena[id].parent;
    }
    path.reverse();

    let mut states = path.into_iter().map(|id| arena[id].state.clone());
    // the walk always ends at the root entry
    let mut tree = SearchTree::new(states.next().unwrap());
    let mut tip = tree.root();
    for state in states {
        tip = tree.push_child(tip, state);
    }
    tree
}
