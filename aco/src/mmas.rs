use model::Matrix;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::policy::AcoPolicy;
use crate::util::{is_permutation, sample_weighted};

/// MMAS, Stützle's Min-Max Ant System for the flow-shop: trail bounds
/// `tau_min`/`tau_max` are recomputed every iteration from the best-so-far
/// weighted tardiness, and only the iteration's best ant deposits.
pub struct Mmas {
    n: usize,
    rho: f64,
    tau: Matrix<f64>,
    tau_min: f64,
    tau_max: f64,
}

impl Mmas {
    pub fn new(n: usize, rho: f64) -> Mmas {
        Mmas {
            n,
            rho,
            tau: Matrix::filled(n, n, 0.0),
            tau_min: 0.0,
            tau_max: 1.0,
        }
    }

    pub fn tau_min(&self) -> f64 {
        self.tau_min
    }

    pub fn tau_max(&self) -> f64 {
        self.tau_max
    }

    pub fn tau(&self) -> &Matrix<f64> {
        &self.tau
    }
}

impl AcoPolicy for Mmas {
    fn pheromones_are_individual(&self) -> bool {
        false
    }

    fn init_pheromones(&mut self, _best: &[usize], _best_wt: f64) {
        self.tau = Matrix::filled(self.n, self.n, self.tau_max);
    }

    fn update_parameters(&mut self, best_wt: f64) {
        let z = best_wt.max(1.0);
        self.tau_max = 1.0 / ((1.0 - self.rho) * z);
        self.tau_min = self.tau_max / 5.0;
    }

    fn create_solution(&self, best: &[usize], rng: &mut SmallRng) -> Vec<usize> {
        let n = self.n;
        let mut candidates: Vec<usize> = best.to_vec();
        let mut solution = Vec::with_capacity(n);

        for k in 0..n {
            let u: f64 = rng.gen();
            let chosen_index = if u < (n as f64 - 4.0) / n as f64 {
                candidates
                    .iter()
                    .enumerate()
                    .max_by(|(_, &a), (_, &b)| {
                        self.tau
                            .get(a, k)
                            .partial_cmp(self.tau.get(b, k))
                            .unwrap()
                    })
                    .map(|(idx, _)| idx)
                    .unwrap()
            } else {
                let window = candidates.len().min(5);
                let weights: Vec<f64> = candidates[..window]
                    .iter()
                    .map(|&c| *self.tau.get(c, k))
                    .collect();
                sample_weighted(&weights, rng)
            };
            let job = candidates.remove(chosen_index);
            solution.push(job);
        }

        if is_permutation(&solution) {
            solution
        } else {
            best.to_vec()
        }
    }

    fn update_pheromones(&mut self, order: &[usize], wt: f64, _best: &[usize]) {
        let n = self.n;
        let z = wt.max(1e-9);

        for i in 0..n {
            for k in 0..n {
                let evaporated = *self.tau.get(i, k) * self.rho;
                self.tau.set(i, k, evaporated);
            }
        }
        for (k, &job) in order.iter().enumerate() {
            let deposited = *self.tau.get(job, k) + 1.0 / z;
            self.tau.set(job, k, deposited);
        }
        for i in 0..n {
            for k in 0..n {
                let clamped = self.tau.get(i, k).clamp(self.tau_min, self.tau_max);
                self.tau.set(i, k, clamped);
            }
        }
    }
}
