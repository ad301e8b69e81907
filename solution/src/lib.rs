mod kernel;
mod objective;
mod permutation;

pub use kernel::CompletionMatrix;
pub use objective::{makespan, weighted_tardiness};
pub use permutation::Permutation;
