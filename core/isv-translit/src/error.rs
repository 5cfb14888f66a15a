use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslitError {
    #[error("mapping keys must not be empty")]
    EmptyKey,

    #[error("duplicate mapping key: {0:?}")]
    DuplicateKey(String),
}
