use std::time::Duration;

/// The budget an optimizer run is allowed to spend. Every bound is
/// optional; an unset bound never fires. Matches the CLI defaults
/// described alongside this engine: no time bound, no early-stopping
/// bound, unbounded iterations.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoppingCriteria {
    pub max_n_iterations: Option<u64>,
    pub early_stopping: Option<u64>,
    pub max_time: Option<Duration>,
    pub seed: Option<u64>,
}

impl StoppingCriteria {
    pub fn unbounded() -> StoppingCriteria {
        StoppingCriteria::default()
    }
}
