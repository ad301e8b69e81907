use rand::rngs::SmallRng;

/// Strategy seam for the two pheromone-update disciplines: MMAS (trail
/// bounds updated every iteration, deposited only by the iteration's best
/// ant) and PACO (no evolving bounds, every ant deposits its own trail).
///
/// `AntColony` is generic over this trait and never inspects which
/// concrete policy it holds.
pub trait AcoPolicy {
    /// If `true`, pheromones are deposited by every ant as it is built
    /// (PACO). If `false`, only the best ant of the iteration deposits
    /// (MMAS).
    fn pheromones_are_individual(&self) -> bool;

    /// Initializes the N×N trail matrix from the initial (NEH, possibly
    /// locally improved) solution and its weighted tardiness.
    fn init_pheromones(&mut self, best: &[usize], best_wt: f64);

    /// Builds a new candidate ordering from the current trails and the
    /// global best-so-far.
    fn create_solution(&self, best: &[usize], rng: &mut SmallRng) -> Vec<usize>;

    /// Evaporates and deposits trails for one ant's solution.
    fn update_pheromones(&mut self, order: &[usize], wt: f64, best: &[usize]);

    /// Recomputes any parameters that depend on the current best-so-far
    /// (MMAS's `tau_min`/`tau_max`; a no-op for PACO).
    fn update_parameters(&mut self, best_wt: f64);
}
