use model::Instance;
use solution::{weighted_tardiness, CompletionMatrix};

/// A best-improvement local search neighborhood.
///
/// Implementations scan every move in their neighborhood, apply the single
/// move with strictly the lowest resulting weighted tardiness, and leave
/// `order` untouched if no move improves on it. `completion` is scratch
/// space the caller owns so repeated calls don't reallocate.
pub trait Neighborhood {
    fn improve(
        &self,
        instance: &Instance,
        completion: &mut CompletionMatrix,
        order: &mut Vec<usize>,
    ) -> bool;
}

/// Adjacent-swap neighborhood: for `i` in `[0, N-2]`, swap positions `i`
/// and `i+1`. `N-1` candidates.
pub struct SwapNeighborhood;

impl Neighborhood for SwapNeighborhood {
    fn improve(
        &self,
        instance: &Instance,
        completion: &mut CompletionMatrix,
        order: &mut Vec<usize>,
    ) -> bool {
        let n = order.len();
        let mut best_wt = weighted_tardiness(instance, order, completion, true);
        let mut best_move = None;
        for i in 0..n.saturating_sub(1) {
            order.swap(i, i + 1);
            let wt = weighted_tardiness(instance, order, completion, true);
            order.swap(i, i + 1);
            if wt < best_wt {
                best_wt = wt;
                best_move = Some(i);
            }
        }
        match best_move {
            Some(i) => {
                order.swap(i, i + 1);
                true
            }
            None => false,
        }
    }
}

/// Pairwise-interchange neighborhood: for every unordered pair `(i, j)`
/// with `0 <= j < i < N`, exchange the jobs at those positions.
/// `N(N-1)/2` candidates, scanned in increasing-`i`-then-`j` order so ties
/// keep the earliest candidate.
///
/// The source this engine is derived from has interchange_search call the
/// adjacent-swap kernel by mistake; this implementation performs a genuine
/// interchange, as the neighborhood's definition requires.
pub struct InterchangeNeighborhood;

impl Neighborhood for InterchangeNeighborhood {
    fn improve(
        &self,
        instance: &Instance,
        completion: &mut CompletionMatrix,
        order: &mut Vec<usize>,
    ) -> bool {
        let n = order.len();
        let mut best_wt = weighted_tardiness(instance, order, completion, true);
        let mut best_move = None;
        for i in 1..n {
            for j in 0..i {
                order.swap(i, j);
                let wt = weighted_tardiness(instance, order, completion, true);
                order.swap(i, j);
                if wt < best_wt {
                    best_wt = wt;
                    best_move = Some((i, j));
                }
            }
        }
        match best_move {
            Some((i, j)) => {
                order.swap(i, j);
                true
            }
            None => false,
        }
    }
}

/// Insertion neighborhood: for every ordered pair `(i, j)` with `j < i`,
/// remove the job at position `i` and reinsert it at position `j`,
/// shifting intermediates right. `~N^2` candidates, scanned in
/// increasing-`i`-then-`j` order.
///
/// Each trial fully recomputes the completion matrix from the modified
/// sequence rather than restoring the pre-move state from a partial
/// expression — the source this engine is derived from restores via what
/// appears to be a dead expression with no effect.
pub struct InsertionNeighborhood;

impl Neighborhood for InsertionNeighborhood {
    fn improve(
        &self,
        instance: &Instance,
        completion: &mut CompletionMatrix,
        order: &mut Vec<usize>,
    ) -> bool {
        let n = order.len();
        let mut best_wt = weighted_tardiness(instance, order, completion, true);
        let mut best_move = None;
        for i in 0..n {
            for j in 0..i {
                let job = order.remove(i);
                order.insert(j, job);
                let wt = weighted_tardiness(instance, order, completion, true);
                let job = order.remove(j);
                order.insert(i, job);
                if wt < best_wt {
                    best_wt = wt;
                    best_move = Some((i, j));
                }
            }
        }
        match best_move {
            Some((i, j)) => {
                let job = order.remove(i);
                order.insert(j, job);
                true
            }
            None => false,
        }
    }
}
