//! The NEH constructive heuristic (Nawaz, Enscore & Ham, 1983), adapted to
//! weighted tardiness instead of NEH's original makespan objective.

use model::Instance;
use solution::{weighted_tardiness, CompletionMatrix, Permutation};

/// Builds an initial permutation by the NEH insertion procedure:
///
/// 1. Sort job identifiers by ascending due date (ties keep the original,
///    ascending-by-id order — Rust's `sort_by_key` is stable).
/// 2. Seed the partial sequence with the first sorted id.
/// 3. For each remaining id, try every insertion position in the current
///    partial sequence and keep the one with the lowest partial weighted
///    tardiness, breaking ties toward the earliest (smallest) position.
pub fn neh(instance: &Instance) -> Permutation {
    let n = instance.n();
    let mut sorted_ids: Vec<usize> = (0..n).collect();
    sorted_ids.sort_by_key(|&job| instance.due_date(job));

    let mut partial = vec![sorted_ids[0]];
    let mut completion = CompletionMatrix::new(n, instance.m());

    for &next_id in &sorted_ids[1..] {
        let mut best_wt = f64::INFINITY;
        let mut best_position = 0;
        for position in 0..=partial.len() {
            let mut candidate = partial.clone();
            candidate.insert(position, next_id);
            let wt = weighted_tardiness(instance, &candidate, &mut completion, true);
            if wt < best_wt {
                best_wt = wt;
                best_position = position;
            }
        }
        partial.insert(best_position, next_id);
    }

    Permutation::new(partial)
}
