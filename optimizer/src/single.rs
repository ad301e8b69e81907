use log::info;
use rand::rngs::SmallRng;

use crate::budget::Budget;
use crate::StoppingCriteria;

/// Heuristic optimizer tracking the best-so-far weighted tardiness.
///
/// `evaluate` compares each candidate's weighted tardiness against the
/// incumbent with strict `<`; ties are not improvements.
pub struct SingleObjectiveOptimizer {
    budget: Budget,
    best_order: Option<Vec<usize>>,
    best_weighted_tardiness: f64,
    history: Vec<f64>,
}

impl SingleObjectiveOptimizer {
    pub fn new(criteria: StoppingCriteria) -> SingleObjectiveOptimizer {
        SingleObjectiveOptimizer {
            budget: Budget::new(criteria),
            best_order: None,
            best_weighted_tardiness: f64::INFINITY,
            history: Vec::new(),
        }
    }

    pub fn start(&mut self) {
        self.budget.start();
        self.best_order = None;
        self.best_weighted_tardiness = f64::INFINITY;
        self.history.clear();
        info!("single-objective optimizer started");
    }

    /// Evaluates `order`'s weighted tardiness, updating the best-so-far
    /// and the stagnation counter. Returns whether it improved on the
    /// incumbent.
    pub fn evaluate(&mut self, weighted_tardiness: f64, order: &[usize]) -> bool {
        let is_improvement = weighted_tardiness < self.best_weighted_tardiness;
        if is_improvement {
            self.best_weighted_tardiness = weighted_tardiness;
            self.best_order = Some(order.to_vec());
        }
        self.budget.record_outcome(is_improvement);
        self.history.push(weighted_tardiness);
        is_improvement
    }

    pub fn step(&mut self) {
        self.budget.step();
    }

    pub fn is_running(&mut self) -> bool {
        self.budget.is_running()
    }

    pub fn iteration(&self) -> u64 {
        self.budget.iteration()
    }

    pub fn rng_mut(&mut self) -> &mut SmallRng {
        self.budget.rng_mut()
    }

    pub fn best(&self) -> Option<(&[usize], f64)> {
        self.best_order
            .as_deref()
            .map(|order| (order, self.best_weighted_tardiness))
    }

    pub fn best_weighted_tardiness(&self) -> f64 {
        self.best_weighted_tardiness
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_best_and_resets_stagnation_on_improvement() {
        let mut optimizer = SingleObjectiveOptimizer::new(StoppingCriteria::unbounded());
        optimizer.start();
        assert!(optimizer.evaluate(10.0, &[0, 1, 2]));
        assert!(!optimizer.evaluate(12.0, &[2, 1, 0]));
        assert!(optimizer.evaluate(5.0, &[1, 0, 2]));
        assert_eq!(optimizer.best_weighted_tardiness(), 5.0);
        assert_eq!(optimizer.best().unwrap().0, &[1, 0, 2]);
        assert_eq!(optimizer.history().len(), 3);
    }

    #[test]
    fn is_running_becomes_false_after_early_stopping_bound() {
        let criteria = StoppingCriteria {
            early_stopping: Some(2),
            ..StoppingCriteria::unbounded()
        };
        let mut optimizer = SingleObjectiveOptimizer::new(criteria);
        optimizer.start();
        optimizer.evaluate(10.0, &[0, 1]);
        assert!(optimizer.is_running());
        optimizer.evaluate(11.0, &[1, 0]);
        assert!(optimizer.is_running());
        optimizer.evaluate(12.0, &[0, 1]);
        assert!(optimizer.is_running());
        optimizer.evaluate(13.0, &[1, 0]);
        assert!(!optimizer.is_running());
    }

    #[test]
    fn is_running_never_flips_back_to_true() {
        let criteria = StoppingCriteria {
            max_n_iterations: Some(1),
            ..StoppingCriteria::unbounded()
        };
        let mut optimizer = SingleObjectiveOptimizer::new(criteria);
        optimizer.start();
        optimizer.step();
        assert!(!optimizer.is_running());
        optimizer.evaluate(1.0, &[0]);
        assert!(!optimizer.is_running());
    }
}
