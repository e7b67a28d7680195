use thiserror::Error;

/// Raised only by strict construction, see [`crate::Builder::try_build`].
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("prefix {index} renders to a regex the engine rejects: {prefix:?}")]
    InvalidPrefix {
        index: usize,
        prefix: String,
        #[source]
        source: regex::Error,
    },
}
