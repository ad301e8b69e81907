use std::time::Instant;

use log::warn;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::StoppingCriteria;

/// Shared bookkeeping for both optimizer variants: the iteration/stagnation
/// counters, the wall-clock origin, and the one RNG a run draws all of its
/// randomness from. Kept as its own type so [`SingleObjectiveOptimizer`]
/// and [`BiObjectiveOptimizer`] don't duplicate the stopping-condition
/// logic.
///
/// [`SingleObjectiveOptimizer`]: crate::SingleObjectiveOptimizer
/// [`BiObjectiveOptimizer`]: crate::BiObjectiveOptimizer
pub(crate) struct Budget {
    criteria: StoppingCriteria,
    start_instant: Option<Instant>,
    iteration: u64,
    steps_without_improvement: u64,
    announced_stop: bool,
    rng: SmallRng,
}

impl Budget {
    pub(crate) fn new(criteria: StoppingCriteria) -> Budget {
        let rng = match criteria.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Budget {
            criteria,
            start_instant: None,
            iteration: 0,
            steps_without_improvement: 0,
            announced_stop: false,
            rng,
        }
    }

    pub(crate) fn start(&mut self) {
        if let Some(seed) = self.criteria.seed {
            self.rng = SmallRng::seed_from_u64(seed);
        }
        self.start_instant = self.criteria.max_time.map(|_| Instant::now());
        self.iteration = 0;
        self.steps_without_improvement = 0;
        self.announced_stop = false;
    }

    pub(crate) fn record_outcome(&mut self, is_improvement: bool) {
        if is_improvement {
            self.steps_without_improvement = 0;
        } else {
            self.steps_without_improvement += 1;
        }
    }

    pub(crate) fn step(&mut self) {
        self.iteration += 1;
    }

    pub(crate) fn iteration(&self) -> u64 {
        self.iteration
    }

    pub(crate) fn rng_mut(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// `false` as soon as any bound is violated. Logs the transition from
    /// running to stopped exactly once, naming the bound that fired.
    pub(crate) fn is_running(&mut self) -> bool {
        let mut trigger = None;
        if let (Some(start), Some(max_time)) = (self.start_instant, self.criteria.max_time) {
            if start.elapsed() > max_time {
                trigger = Some("max_time");
            }
        }
        if trigger.is_none() {
            if let Some(early_stopping) = self.criteria.early_stopping {
                if self.steps_without_improvement > early_stopping {
                    trigger = Some("early_stopping");
                }
            }
        }
        if trigger.is_none() {
            if let Some(max_n_iterations) = self.criteria.max_n_iterations {
                if self.iteration >= max_n_iterations {
                    trigger = Some("max_n_iterations");
                }
            }
        }
        if let Some(bound) = trigger {
            if !self.announced_stop {
                self.announced_stop = true;
                warn!(
                    "optimizer stopping at iteration {} ({} bound reached)",
                    self.iteration, bound
                );
            }
            false
        } else {
            true
        }
    }
}
