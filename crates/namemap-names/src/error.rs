use thiserror::Error;

pub type Result<T> = std::result::Result<T, NameError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The structural snapshot cannot produce a name for `node`.
    #[error("inconsistent class structure at {node}: {reason}")]
    StructuralInconsistency { node: String, reason: &'static str },
}

impl NameError {
    pub(crate) fn inconsistent(node: &impl std::fmt::Debug, reason: &'static str) -> Self {
        NameError::StructuralInconsistency {
            node: format!("{node:?}"),
            reason,
        }
    }
}
