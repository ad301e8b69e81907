use model::Instance;

use crate::CompletionMatrix;

/// Weighted tardiness of `order`: `Σ_i w[π_i] * max(C[i, M-1] - d[π_i], 0)`.
///
/// `order` is a job-id ordering (the full instance's permutation, or a
/// partial sequence while NEH is still being built). When `refresh` is
/// true, `completion` is recomputed from `order` first; pass `false` only
/// when the caller just filled `completion` from this exact ordering.
pub fn weighted_tardiness(
    instance: &Instance,
    order: &[usize],
    completion: &mut CompletionMatrix,
    refresh: bool,
) -> f64 {
    if refresh {
        completion.fill(instance, order);
    }
    let last_machine = instance.m() - 1;
    let mut total = 0.0;
    for (i, &job) in order.iter().enumerate() {
        let tardiness = (completion.get(i, last_machine) - instance.due_date(job)).max(0);
        total += instance.weight(job) * tardiness as f64;
    }
    total
}

/// Makespan of `order`: `C[N-1, M-1]`.
pub fn makespan(
    instance: &Instance,
    order: &[usize],
    completion: &mut CompletionMatrix,
    refresh: bool,
) -> i64 {
    if refresh {
        completion.fill(instance, order);
    }
    completion.makespan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Permutation;

    #[test]
    fn tiny_instance_is_already_on_time() {
        let instance = Instance::new(
            vec![vec![3, 2], vec![2, 4], vec![1, 3]],
            vec![5, 9, 12],
            vec![1.0, 1.0, 1.0],
        )
        .unwrap();
        let perm = Permutation::identity(3);
        let mut c = CompletionMatrix::new(3, 2);
        let wt = weighted_tardiness(&instance, perm.as_slice(), &mut c, true);
        assert_eq!(wt, 0.0);
    }

    #[test]
    fn forced_tardiness_scenario_matches_hand_calculation() {
        // N=2, M=1, P=[[5],[5]], d=[1,1], w=[1,2]
        let instance =
            Instance::new(vec![vec![5], vec![5]], vec![1, 1], vec![1.0, 2.0]).unwrap();
        let mut c = CompletionMatrix::new(2, 1);

        let forward = Permutation::new(vec![0, 1]);
        let wt_forward = weighted_tardiness(&instance, forward.as_slice(), &mut c, true);
        assert_eq!(wt_forward, 22.0);

        let reversed = Permutation::new(vec![1, 0]);
        let wt_reversed = weighted_tardiness(&instance, reversed.as_slice(), &mut c, true);
        assert_eq!(wt_reversed, 17.0);

        assert!(wt_reversed < wt_forward);
    }

    #[test]
    fn makespan_is_completion_of_last_job_last_machine() {
        let instance = Instance::new(
            vec![vec![3, 2], vec![2, 4], vec![1, 3]],
            vec![5, 9, 12],
            vec![1.0, 1.0, 1.0],
        )
        .unwrap();
        let perm = Permutation::identity(3);
        let mut c = CompletionMatrix::new(3, 2);
        assert_eq!(makespan(&instance, perm.as_slice(), &mut c, true), 12);
    }
}
