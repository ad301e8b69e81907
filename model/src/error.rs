use thiserror::Error;

/// Construction-time errors for the engine's data types.
///
/// Malformed instance *files* are an external collaborator's concern (see
/// the engine's scope notes) and are never represented here — this enum
/// only covers invariant violations on already-parsed data handed to the
/// engine, plus invalid hyperparameters passed at construction time.
#[derive(Debug, Error)]
pub enum PfspError {
    #[error("instance has inconsistent dimensions: {reason}")]
    Dimension { reason: String },

    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },
}
