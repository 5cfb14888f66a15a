use rkyv::{Archive, Deserialize, Serialize};
use crate::morphology::{DescriptorFlags, FlagBits, Gender, PartOfSpeech, VerbType};
use crate::paradigm::Paradigm;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A dictionary entry as handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct WordEntry {
    pub lemma: String,
    /// Disambiguating hint, e.g. the 3sg present `(piše)` of a verb.
    #[cfg_attr(feature = "serde", serde(default))]
    pub addition: Option<String>,
    #[cfg_attr(feature = "serde", serde(alias = "partOfSpeech", alias = "pos"))]
    pub pos_descriptor: String,
}

impl WordEntry {
    pub fn new(lemma: impl Into<String>, pos_descriptor: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            addition: None,
            pos_descriptor: pos_descriptor.into(),
        }
    }

    pub fn with_addition(mut self, addition: impl Into<String>) -> Self {
        self.addition = Some(addition.into());
        self
    }

    pub fn addition(&self) -> &str {
        self.addition.as_deref().unwrap_or("")
    }
}

/// Structured features parsed out of a part-of-speech descriptor.
///
/// The default value is what an unknown descriptor degrades to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct GrammaticalFeatures {
    pub part_of_speech: PartOfSpeech,
    pub gender: Option<Gender>,
    pub animate: bool,
    pub plural: bool,
    pub verb_type: Option<VerbType>,
    #[cfg_attr(feature = "serde", serde(default))]
    #[with(FlagBits)]
    pub flags: DescriptorFlags,
}

impl GrammaticalFeatures {
    pub fn is_reflexive(&self) -> bool {
        self.flags.contains(DescriptorFlags::REFLEXIVE)
    }

    pub fn is_indeclinable(&self) -> bool {
        self.flags.contains(DescriptorFlags::INDECLINABLE)
    }
}

/// Position of an entry in the compiled word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[archive(check_bytes)]
pub struct WordId(pub u32);

/// A word list entry together with its precomputed paradigm.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct CompiledEntry {
    pub id: WordId,
    pub entry: WordEntry,
    pub features: GrammaticalFeatures,
    pub paradigm: Option<Paradigm>,
}

/// Zero-copy archive of precomputed paradigms.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ParadigmArchive {
    pub version: u32,
    pub entries: Vec<CompiledEntry>,
}
