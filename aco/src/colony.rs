use log::debug;

use heuristics::neh;
use local_search::{
    InsertionNeighborhood, InterchangeNeighborhood, LocalSearchKind, Neighborhood,
    SwapNeighborhood,
};
use model::{Instance, PfspError};
use optimizer::{SingleObjectiveOptimizer, StoppingCriteria};
use solution::{weighted_tardiness, CompletionMatrix, Permutation};

use crate::config::{AcoConfig, Method};
use crate::mmas::Mmas;
use crate::paco::Paco;
use crate::policy::AcoPolicy;

/// The generic ACO loop: construct ants with a policy, apply local
/// search, track the best-so-far through a [`SingleObjectiveOptimizer`].
/// Generic over `P` so the engine never knows which pheromone discipline
/// it drives.
pub struct AntColony<P: AcoPolicy> {
    policy: P,
    local_search: LocalSearchKind,
    n_ants: usize,
    optimizer: SingleObjectiveOptimizer,
    completion: CompletionMatrix,
    best_order: Vec<usize>,
    best_wt: f64,
}

impl<P: AcoPolicy> AntColony<P> {
    pub fn new(
        policy: P,
        n_ants: usize,
        local_search: LocalSearchKind,
        criteria: StoppingCriteria,
    ) -> AntColony<P> {
        AntColony {
            policy,
            local_search,
            n_ants,
            optimizer: SingleObjectiveOptimizer::new(criteria),
            completion: CompletionMatrix::new(0, 0),
            best_order: Vec::new(),
            best_wt: f64::INFINITY,
        }
    }

    fn apply_local_search(&mut self, instance: &Instance, order: &mut Vec<usize>) {
        let neighborhood: &dyn Neighborhood = match self.local_search {
            LocalSearchKind::None => return,
            LocalSearchKind::Swap => &SwapNeighborhood,
            LocalSearchKind::Interchange => &InterchangeNeighborhood,
            LocalSearchKind::Insertion => &InsertionNeighborhood,
        };
        for _ in 0..3 {
            let improved = neighborhood.improve(instance, &mut self.completion, order);
            if !improved {
                break;
            }
        }
    }

    fn evaluate(&mut self, instance: &Instance, order: &[usize]) -> f64 {
        weighted_tardiness(instance, order, &mut self.completion, true)
    }

    /// Builds the NEH seed, locally improves it, and initializes the
    /// policy's pheromone trails from that seed.
    pub fn initialize(&mut self, instance: &Instance) -> Result<(), PfspError> {
        self.optimizer.start();
        self.completion = CompletionMatrix::new(instance.n(), instance.m());

        let seed: Permutation = neh(instance);
        let mut order = seed.into_vec();
        let initial_wt = self.evaluate(instance, &order);
        self.optimizer.evaluate(initial_wt, &order);
        self.best_order = order.clone();
        self.best_wt = initial_wt;

        self.apply_local_search(instance, &mut order);
        let improved_wt = self.evaluate(instance, &order);
        if self.optimizer.evaluate(improved_wt, &order) {
            self.best_order = order.clone();
            self.best_wt = improved_wt;
        }

        self.policy.update_parameters(self.best_wt);
        self.policy.init_pheromones(&self.best_order, self.best_wt);

        debug!("ACO initialized: Zbest = {}", self.best_wt);
        Ok(())
    }

    /// One outer ACO iteration: `n_ants` ant constructions, local search,
    /// pheromone update, parameter update.
    pub fn step(&mut self, instance: &Instance) {
        // The best ant produced by *this* step, tracked separately from
        // the global best-so-far: MMAS deposits from it even when it
        // doesn't beat the incumbent.
        let mut step_best_order: Option<Vec<usize>> = None;
        let mut step_best_wt = f64::INFINITY;

        for _ in 0..self.n_ants {
            let mut order = self
                .policy
                .create_solution(&self.best_order, self.optimizer.rng_mut());
            self.apply_local_search(instance, &mut order);

            if self.policy.pheromones_are_individual() {
                let wt = self.evaluate(instance, &order);
                self.policy.update_pheromones(&order, wt, &self.best_order);
            }

            let wt = self.evaluate(instance, &order);
            if self.optimizer.evaluate(wt, &order) {
                self.best_order = order.clone();
                self.best_wt = wt;
            }
            if wt < step_best_wt {
                step_best_wt = wt;
                step_best_order = Some(order.clone());
            }

            if !self.optimizer.is_running() {
                break;
            }
        }

        if !self.policy.pheromones_are_individual() {
            if let Some(order) = step_best_order {
                self.policy
                    .update_pheromones(&order, step_best_wt, &self.best_order);
            }
        }
        self.policy.update_parameters(self.best_wt);
        self.optimizer.step();
    }

    pub fn is_running(&mut self) -> bool {
        self.optimizer.is_running()
    }

    pub fn best(&self) -> (&[usize], f64) {
        (&self.best_order, self.best_wt)
    }

    pub fn history(&self) -> &[f64] {
        self.optimizer.history()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }
}

/// Assembles an [`AntColony`] from an [`AcoConfig`], the engine's one
/// config-to-object seam: validates the hyperparameters and picks the
/// pheromone policy `Method` names. `Method::Mmas` and `Method::MMmas`
/// both run the [`Mmas`] policy, differing only in the `n_ants`/`rho`
/// `AcoConfig` already carries for each; `Method::Paco` runs [`Paco`].
pub enum AntColonyEngine {
    Mmas(AntColony<Mmas>),
    Paco(AntColony<Paco>),
}

impl AntColonyEngine {
    pub fn from_config(config: &AcoConfig, instance: &Instance) -> Result<AntColonyEngine, PfspError> {
        config.validate()?;

        let criteria = StoppingCriteria {
            max_n_iterations: config.max_n_iterations,
            early_stopping: config.early_stopping,
            max_time: config.max_time,
            seed: config.seed,
        };

        let engine = match config.method {
            Method::Mmas | Method::MMmas => AntColonyEngine::Mmas(AntColony::new(
                Mmas::new(instance.n(), config.rho),
                config.n_ants,
                config.local_search,
                criteria,
            )),
            Method::Paco => AntColonyEngine::Paco(AntColony::new(
                Paco::new(instance.n(), config.rho),
                config.n_ants,
                config.local_search,
                criteria,
            )),
        };
        Ok(engine)
    }

    pub fn initialize(&mut self, instance: &Instance) -> Result<(), PfspError> {
        match self {
            AntColonyEngine::Mmas(colony) => colony.initialize(instance),
            AntColonyEngine::Paco(colony) => colony.initialize(instance),
        }
    }

    pub fn step(&mut self, instance: &Instance) {
        match self {
            AntColonyEngine::Mmas(colony) => colony.step(instance),
            AntColonyEngine::Paco(colony) => colony.step(instance),
        }
    }

    pub fn is_running(&mut self) -> bool {
        match self {
            AntColonyEngine::Mmas(colony) => colony.is_running(),
            AntColonyEngine::Paco(colony) => colony.is_running(),
        }
    }

    pub fn best(&self) -> (&[usize], f64) {
        match self {
            AntColonyEngine::Mmas(colony) => colony.best(),
            AntColonyEngine::Paco(colony) => colony.best(),
        }
    }

    pub fn history(&self) -> &[f64] {
        match self {
            AntColonyEngine::Mmas(colony) => colony.history(),
            AntColonyEngine::Paco(colony) => colony.history(),
        }
    }
}

#[cfg(test)]
mod config_seam_tests {
    use super::*;

    fn tiny_instance() -> Instance {
        Instance::new(
            vec![vec![3, 2], vec![2, 4], vec![1, 3]],
            vec![5, 9, 12],
            vec![1.0, 1.0, 1.0],
        )
        .unwrap()
    }

    #[test]
    fn from_config_rejects_invalid_rho_before_building_a_colony() {
        let instance = tiny_instance();
        let mut config = AcoConfig::for_method(Method::Mmas);
        config.rho = 1.5;
        assert!(AntColonyEngine::from_config(&config, &instance).is_err());
    }

    #[test]
    fn from_config_dispatches_paco_to_the_paco_policy() {
        let instance = tiny_instance();
        let config = AcoConfig::for_method(Method::Paco);
        let mut engine = AntColonyEngine::from_config(&config, &instance).unwrap();
        engine.initialize(&instance).unwrap();
        assert!(matches!(engine, AntColonyEngine::Paco(_)));
        let (_, wt) = engine.best();
        assert!(wt.is_finite());
    }

    #[test]
    fn from_config_dispatches_mmas_and_modified_mmas_to_the_mmas_policy() {
        let instance = tiny_instance();
        for method in [Method::Mmas, Method::MMmas] {
            let config = AcoConfig::for_method(method);
            let engine = AntColonyEngine::from_config(&config, &instance).unwrap();
            assert!(matches!(engine, AntColonyEngine::Mmas(_)));
        }
    }
}
