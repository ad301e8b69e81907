use rand::rngs::SmallRng;
use rand::Rng;

/// Samples an index into `weights` with probability proportional to its
/// value. Falls back to a uniform pick over `weights` when they sum to
/// zero, per the source's weighted-sampling fallback.
pub(crate) fn sample_weighted(weights: &[f64], rng: &mut SmallRng) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.gen_range(0..weights.len());
    }
    let target = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if target < cumulative {
            return i;
        }
    }
    weights.len() - 1
}

/// Whether `order` is a permutation of `[0, order.len())`. Construction
/// paths fall back to the current best whenever this fails.
pub(crate) fn is_permutation(order: &[usize]) -> bool {
    let n = order.len();
    let mut seen = vec![false; n];
    for &job in order {
        if job >= n || seen[job] {
            return false;
        }
        seen[job] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn zero_weights_fall_back_to_uniform_and_stay_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let idx = sample_weighted(&[0.0, 0.0, 0.0], &mut rng);
            assert!(idx < 3);
        }
    }

    #[test]
    fn detects_repeated_and_out_of_range_identifiers() {
        assert!(is_permutation(&[0, 1, 2]));
        assert!(!is_permutation(&[0, 0, 1]));
        assert!(!is_permutation(&[5, 7, 6]));
    }
}
