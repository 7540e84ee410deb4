use thiserror::Error;

/// Failure modes of the trijet core. All of these are local-return errors:
/// the search is a pure single-pass computation, so there is no partial
/// state to clean up and no retry logic anywhere in the core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrijetError {
    #[error("event has {num_jets} jets but a trijet search requires at least 3")]
    NotEnoughJets { num_jets: usize },

    #[error("cannot choose {k} indices from a range of {s}")]
    InvalidCombination { s: usize, k: usize },

    #[error("unknown search strategy '{0}' (valid: reference, equivalent, transposed, direct, approximate)")]
    UnknownStrategy(String),

    #[error("jet index {index} is out of bounds for {num_jets} jets")]
    JetIndexOutOfBounds { index: usize, num_jets: usize },
}
