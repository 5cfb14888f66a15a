use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("descriptor contains no abbreviations")]
    Empty,
}
