use serde::{Deserialize, Serialize};

/// Which neighborhood, if any, the ACO loop applies after each ant's
/// construction. Mirrors the CLI's `--local-search` choice, kept here so
/// the engine can be driven by name without the caller constructing a
/// trait object itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalSearchKind {
    None,
    Swap,
    Interchange,
    Insertion,
}
