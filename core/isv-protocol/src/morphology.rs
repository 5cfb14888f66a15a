use rkyv::with::{ArchiveWith, DeserializeWith, SerializeWith};
use rkyv::{Archive, Archived, Deserialize, Fallible, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;
use core::fmt;
use core::str::FromStr;

use crate::error::ProtocolError;
use alloc::string::ToString;

/// Grammatical case. Discriminants follow the canonical declension order
/// used for every emitted table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Case {
    #[cfg_attr(feature = "serde", serde(rename = "nom"))]
    Nominative = 0,
    #[cfg_attr(feature = "serde", serde(rename = "acc"))]
    Accusative = 1,
    #[cfg_attr(feature = "serde", serde(rename = "gen"))]
    Genitive = 2,
    #[cfg_attr(feature = "serde", serde(rename = "dat"))]
    Dative = 3,
    #[cfg_attr(feature = "serde", serde(rename = "ins"))]
    Instrumental = 4,
    #[cfg_attr(feature = "serde", serde(rename = "loc"))]
    Locative = 5,
    #[cfg_attr(feature = "serde", serde(rename = "voc"))]
    Vocative = 6,
}

impl Case {
    /// Canonical order: nom, acc, gen, dat, ins, loc, voc.
    pub const ALL: [Case; 7] = [
        Case::Nominative,
        Case::Accusative,
        Case::Genitive,
        Case::Dative,
        Case::Instrumental,
        Case::Locative,
        Case::Vocative,
    ];

    /// Cases an adjective declines for (no vocative).
    pub const ADJECTIVAL: [Case; 6] = [
        Case::Nominative,
        Case::Accusative,
        Case::Genitive,
        Case::Dative,
        Case::Instrumental,
        Case::Locative,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Case::Nominative => "nom",
            Case::Accusative => "acc",
            Case::Genitive => "gen",
            Case::Dative => "dat",
            Case::Instrumental => "ins",
            Case::Locative => "loc",
            Case::Vocative => "voc",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Accusative => "accusative",
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Instrumental => "instrumental",
            Case::Locative => "locative",
            Case::Vocative => "vocative",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Case {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Case::ALL
            .iter()
            .copied()
            .find(|case| lower == case.abbreviation() || lower == case.name())
            .ok_or_else(|| ProtocolError::UnknownCase(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Gender {
    Masculine = 0,
    Feminine = 1,
    Neuter = 2,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Number {
    Singular = 0,
    Plural = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Person {
    First = 1,
    Second = 2,
    Third = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Noun = 0,
    Adjective = 1,
    Verb = 2,
    Adverb = 3,
    Pronoun = 4,
    Numeral = 5,
    Preposition = 6,
    Conjunction = 7,
    Interjection = 8,
    Particle = 9,
    Prefix = 10,
    Suffix = 11,
    #[default]
    Other = 12,
}

impl PartOfSpeech {
    /// Only nouns, adjectives and verbs have a generated paradigm.
    pub const fn has_paradigm(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::Adjective | PartOfSpeech::Verb)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Numeral => "numeral",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Particle => "particle",
            PartOfSpeech::Prefix => "prefix",
            PartOfSpeech::Suffix => "suffix",
            PartOfSpeech::Other => "other",
        }
    }
}

/// Verbal aspect as recorded in the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum VerbType {
    Perfective = 0,
    Imperfective = 1,
    /// Both `ipf.` and `pf.` are listed.
    Biaspectual = 2,
}

impl VerbType {
    pub const fn name(self) -> &'static str {
        match self {
            VerbType::Perfective => "perfective",
            VerbType::Imperfective => "imperfective",
            VerbType::Biaspectual => "imperfective/perfective",
        }
    }
}

/// Degree of comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Degree {
    Positive = 0,
    Comparative = 1,
    Superlative = 2,
}

impl Degree {
    pub const ALL: [Degree; 3] = [Degree::Positive, Degree::Comparative, Degree::Superlative];
}

bitflags! {
    /// Secondary descriptor markers that do not select a paradigm but refine it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct DescriptorFlags: u32 {
        const TRANSITIVE = 1;
        const INTRANSITIVE = 2;
        const REFLEXIVE = 4;
        const AUXILIARY = 8;
        const INDECLINABLE = 16;
        const SINGULAR_ONLY = 32;
    }
}

impl Default for DescriptorFlags {
    fn default() -> Self {
        DescriptorFlags::empty()
    }
}

/// Archives [`DescriptorFlags`] as its bit pattern; unknown bits are dropped on load.
pub struct FlagBits;

impl ArchiveWith<DescriptorFlags> for FlagBits {
    type Archived = Archived<u32>;
    type Resolver = ();

    unsafe fn resolve_with(flags: &DescriptorFlags, pos: usize, _: (), out: *mut Self::Archived) {
        flags.bits().resolve(pos, (), out);
    }
}

impl<S: Fallible + ?Sized> SerializeWith<DescriptorFlags, S> for FlagBits {
    fn serialize_with(_: &DescriptorFlags, _: &mut S) -> Result<(), S::Error> {
        Ok(())
    }
}

impl<D: Fallible + ?Sized> DeserializeWith<Archived<u32>, DescriptorFlags, D> for FlagBits {
    fn deserialize_with(bits: &Archived<u32>, _: &mut D) -> Result<DescriptorFlags, D::Error> {
        Ok(DescriptorFlags::from_bits_truncate(*bits))
    }
}
