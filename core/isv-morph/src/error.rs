use isv_protocol::{Gender, PartOfSpeech};
use thiserror::Error;

/// Why an engine produced an empty table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MorphError {
    #[error("{0:?} is not a single word")]
    InvalidLemma(String),

    #[error("no declension class matches {lemma:?} as {}", .gender.name())]
    NoDeclensionClass { lemma: String, gender: Gender },

    #[error("noun {0:?} has no gender")]
    MissingGender(String),

    #[error("{0:?} does not end in a hard -y or a soft -i")]
    NoAdjectiveEnding(String),

    #[error("no conjugation class matches {0:?}")]
    NoConjugationClass(String),

    #[error("{} has no paradigm", .0.name())]
    NoParadigm(PartOfSpeech),
}
