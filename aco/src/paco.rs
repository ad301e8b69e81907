use model::Matrix;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::policy::AcoPolicy;
use crate::util::{is_permutation, sample_weighted};

/// PACO, the Rajendran-Ziegler ant-colony variant: no evolving trail
/// bounds, every ant deposits its own trail, and construction is guided by
/// a seed sequence frozen at initialization rather than the live best.
pub struct Paco {
    n: usize,
    rho: f64,
    tau: Matrix<f64>,
    seed: Vec<usize>,
}

impl Paco {
    pub fn new(n: usize, rho: f64) -> Paco {
        Paco {
            n,
            rho,
            tau: Matrix::filled(n, n, 0.0),
            seed: Vec::new(),
        }
    }

    pub fn tau(&self) -> &Matrix<f64> {
        &self.tau
    }

    pub fn seed(&self) -> &[usize] {
        &self.seed
    }

    fn bound(&self) -> isize {
        if self.n <= 40 {
            1
        } else {
            2
        }
    }
}

impl AcoPolicy for Paco {
    fn pheromones_are_individual(&self) -> bool {
        true
    }

    fn init_pheromones(&mut self, best: &[usize], best_wt: f64) {
        let n = self.n;
        self.seed = best.to_vec();

        let z = best_wt.max(1e-9);
        let mut position = vec![0usize; n];
        for (pos, &job) in best.iter().enumerate() {
            position[job] = pos;
        }

        let quarter = n as f64 / 4.0;
        let half = n as f64 / 2.0;
        for i in 0..n {
            for k in 0..n {
                let diff = (position[i] as isize - k as isize).unsigned_abs() as f64 + 1.0;
                let mut value = 1.0 / z;
                if diff > quarter {
                    value /= 2.0;
                }
                if diff > half {
                    value /= 2.0;
                }
                self.tau.set(i, k, value);
            }
        }
    }

    fn create_solution(&self, _best: &[usize], rng: &mut SmallRng) -> Vec<usize> {
        let n = self.n;

        let mut cumulative = Matrix::filled(n, n, 0.0);
        for i in 0..n {
            let mut running = 0.0;
            for k in 0..n {
                running += *self.tau.get(i, k);
                cumulative.set(i, k, running);
            }
        }

        let window = 5.min(n);
        let mut candidates: Vec<usize> = self.seed[..window].to_vec();
        let mut next_id = window;
        let mut solution = Vec::with_capacity(n);

        for k in 0..n {
            let u: f64 = rng.gen();
            let chosen_index = if u <= 0.4 {
                0
            } else if u <= 0.8 {
                candidates
                    .iter()
                    .enumerate()
                    .max_by(|(_, &a), (_, &b)| {
                        cumulative
                            .get(a, k)
                            .partial_cmp(cumulative.get(b, k))
                            .unwrap()
                    })
                    .map(|(idx, _)| idx)
                    .unwrap()
            } else {
                let weights: Vec<f64> = candidates.iter().map(|&c| *cumulative.get(c, k)).collect();
                sample_weighted(&weights, rng)
            };

            let job = candidates.remove(chosen_index);
            solution.push(job);

            if next_id < n {
                candidates.push(self.seed[next_id]);
                next_id += 1;
            }
        }

        if is_permutation(&solution) {
            solution
        } else {
            self.seed.clone()
        }
    }

    fn update_pheromones(&mut self, order: &[usize], wt: f64, best: &[usize]) {
        let n = self.n;
        let z = wt.max(1e-9);
        let bound = self.bound();

        let mut position = vec![0usize; n];
        for (pos, &job) in order.iter().enumerate() {
            position[job] = pos;
        }
        let mut position_best = vec![0usize; n];
        for (pos, &job) in best.iter().enumerate() {
            position_best[job] = pos;
        }

        for i in 0..n {
            for k in 0..n {
                let evaporated = *self.tau.get(i, k) * self.rho;
                self.tau.set(i, k, evaporated);
            }
        }

        for i in 0..n {
            for k in 0..n {
                if (position[i] as isize - k as isize).abs() <= bound {
                    let diff = ((position_best[i] as isize - k as isize).unsigned_abs() as f64 + 1.0).sqrt();
                    let deposited = *self.tau.get(i, k) + 1.0 / (diff * z);
                    self.tau.set(i, k, deposited);
                }
            }
        }
    }

    fn update_parameters(&mut self, _best_wt: f64) {
        // PACO has no evolving bounds between iterations.
    }
}
