use alloc::string::String;
use core::fmt;

/// Failures when parsing the small closed vocabularies of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    UnknownCase(String),
    UnknownFlavor(String),
    UnknownScript(String),
    /// A case order must name each of the seven cases exactly once.
    InvalidCaseOrder,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnknownCase(name) => write!(f, "unknown case: {:?}", name),
            ProtocolError::UnknownFlavor(id) => write!(f, "unknown flavorisation type: {:?}", id),
            ProtocolError::UnknownScript(name) => write!(f, "unknown script: {:?}", name),
            ProtocolError::InvalidCaseOrder => {
                write!(f, "case order must list nom, acc, gen, dat, ins, loc and voc exactly once")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}
