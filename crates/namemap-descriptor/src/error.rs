use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A primitive keyword outside the fixed JVM table (`int`, `void`, ...).
    ///
    /// Callers are expected to hand over already-resolved types, so hitting this is a bug in the
    /// caller rather than bad user input.
    #[error("unsupported primitive type: {0}")]
    UnsupportedPrimitiveKind(String),

    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
}
