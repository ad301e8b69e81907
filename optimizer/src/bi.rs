use log::info;
use rand::rngs::SmallRng;

use crate::budget::Budget;
use crate::StoppingCriteria;

/// One point of the Pareto frontier: weighted tardiness, makespan, and the
/// permutation that achieved them.
pub type ParetoEntry = (f64, i64, Vec<usize>);

/// Bi-objective optimizer tracking a Pareto set over (weighted tardiness,
/// makespan) instead of a single incumbent.
pub struct BiObjectiveOptimizer {
    budget: Budget,
    pareto_set: Vec<ParetoEntry>,
    history: Vec<(f64, i64)>,
}

fn dominates(a: &(f64, i64), b: &(f64, i64)) -> bool {
    let (wt_a, m_a) = *a;
    let (wt_b, m_b) = *b;
    wt_a <= wt_b && m_a <= m_b && (wt_a < wt_b || m_a < m_b)
}

impl BiObjectiveOptimizer {
    pub fn new(criteria: StoppingCriteria) -> BiObjectiveOptimizer {
        BiObjectiveOptimizer {
            budget: Budget::new(criteria),
            pareto_set: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn start(&mut self) {
        self.budget.start();
        self.pareto_set.clear();
        self.history.clear();
        info!("bi-objective optimizer started");
    }

    /// Evaluates `order` against the current Pareto set. Returns whether
    /// at least one incumbent was evicted by the candidate. A candidate
    /// that exactly ties an incumbent on both objectives is dropped in
    /// favor of the incumbent already held, rather than kept alongside it.
    pub fn evaluate(&mut self, weighted_tardiness: f64, makespan: i64, order: &[usize]) -> bool {
        let candidate_point = (weighted_tardiness, makespan);

        if self
            .pareto_set
            .iter()
            .any(|(wt, m, _)| *wt == weighted_tardiness && *m == makespan)
        {
            self.budget.record_outcome(false);
            self.history.push(candidate_point);
            return false;
        }

        let candidate_dominated = self
            .pareto_set
            .iter()
            .any(|(wt, m, _)| dominates(&(*wt, *m), &candidate_point));

        let is_improvement = if candidate_dominated {
            false
        } else {
            let before = self.pareto_set.len();
            self.pareto_set
                .retain(|(wt, m, _)| !dominates(&candidate_point, &(*wt, *m)));
            let evicted = before - self.pareto_set.len();
            self.pareto_set
                .push((weighted_tardiness, makespan, order.to_vec()));
            evicted > 0
        };

        self.budget.record_outcome(is_improvement);
        self.history.push(candidate_point);
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

    pub fn pareto_set(&self) -> &[ParetoEntry] {
        &self.pareto_set
    }

    pub fn history(&self) -> &[(f64, i64)] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pareto_set_keeps_only_mutually_non_dominated_points() {
        let mut optimizer = BiObjectiveOptimizer::new(StoppingCriteria::unbounded());
        optimizer.start();

        assert!(!optimizer.evaluate(10.0, 20, &[0]));
        assert!(!optimizer.evaluate(12.0, 15, &[1]));
        assert!(!optimizer.evaluate(10.0, 20, &[2]));
        assert!(!optimizer.evaluate(9.0, 25, &[3]));

        let mut points: Vec<(f64, i64)> = optimizer
            .pareto_set()
            .iter()
            .map(|(wt, m, _)| (*wt, *m))
            .collect();
        points.sort_by(|a, b| a.partial_cmp(b).unwrap());

        assert_eq!(points, vec![(9.0, 25), (10.0, 20), (12.0, 15)]);
        assert_eq!(optimizer.history().len(), 4);
    }

    #[test]
    fn strictly_dominating_candidate_evicts_incumbent_and_reports_improvement() {
        let mut optimizer = BiObjectiveOptimizer::new(StoppingCriteria::unbounded());
        optimizer.start();

        assert!(!optimizer.evaluate(10.0, 20, &[0]));
        assert!(optimizer.evaluate(8.0, 18, &[1]));

        assert_eq!(optimizer.pareto_set().len(), 1);
        let (wt, m, order) = &optimizer.pareto_set()[0];
        assert_eq!((*wt, *m), (8.0, 18));
        assert_eq!(order, &vec![1]);
    }

    #[test]
    fn dominated_candidate_is_rejected_and_incumbent_untouched() {
        let mut optimizer = BiObjectiveOptimizer::new(StoppingCriteria::unbounded());
        optimizer.start();

        optimizer.evaluate(8.0, 18, &[0]);
        assert!(!optimizer.evaluate(10.0, 20, &[1]));

        assert_eq!(optimizer.pareto_set().len(), 1);
        assert_eq!(optimizer.pareto_set()[0].2, vec![0]);
    }
}
