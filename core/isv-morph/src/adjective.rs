//! Adjective declension and comparison.

use isv_protocol::{
    AdjectiveCaseRow, AdjectiveParadigm, AdjectivePluralRow, Case, Degree, DegreeForms,
    ParadigmSlot,
};

use crate::error::MorphError;
use crate::phonology::{adjust_ending, chop, ends_in_consonant, ends_soft, is_word, palatalize_last, soften_adjective};

/// An ending and, where animacy splits the masculine, its animate counterpart.
type Split = (&'static str, &'static str);

/// Masculine, neuter, feminine per case in `Case::ADJECTIVAL` order.
const SINGULAR: [[Split; 3]; 6] = [
    [("y", ""), ("o", ""), ("a", "")],
    [("y", "ogo"), ("o", ""), ("ų", "")],
    [("ogo", ""), ("ogo", ""), ("oj", "")],
    [("omu", ""), ("omu", ""), ("oj", "")],
    [("ym", ""), ("ym", ""), ("ojų", "")],
    [("om", ""), ("om", ""), ("oj", "")],
];

/// Masculine, feminine/neuter.
const PLURAL: [[Split; 2]; 6] = [
    [("e", "i"), ("e", "")],
    [("e", "yh"), ("e", "")],
    [("yh", ""), ("yh", "")],
    [("ym", ""), ("ym", "")],
    [("ymi", ""), ("ymi", "")],
    [("yh", ""), ("yh", "")],
];

const COMPARATIVE: &str = "ějši";
const SUPERLATIVE_PREFIX: &str = "naj";

struct AdjectiveStem {
    stem: String,
    soft: bool,
}

impl AdjectiveStem {
    fn parse(lemma: &str) -> Result<Self, MorphError> {
        let invalid = || MorphError::NoAdjectiveEnding(lemma.to_string());
        if !is_word(lemma) {
            return Err(invalid());
        }
        let soft = match lemma.chars().last() {
            Some('y') => false,
            Some('i') => true,
            _ => return Err(invalid()),
        };
        let stem = chop(lemma);
        if !ends_in_consonant(stem) {
            return Err(invalid());
        }
        Ok(Self { stem: stem.to_string(), soft })
    }

    fn form(&self, ending: &str) -> String {
        if ending.is_empty() {
            return String::new();
        }
        format!("{}{}", self.stem, adjust_ending(self.soft, ending, soften_adjective))
    }

    fn slot(&self, (inanimate, animate): Split) -> ParadigmSlot {
        ParadigmSlot::pair(self.form(inanimate), self.form(animate))
    }

    /// `dobr` -> `dobrějši`, `tih` -> `tišejši`, `svěž` -> `svěžejši`.
    fn comparative(&self) -> String {
        let base = palatalize_last(&self.stem).unwrap_or_else(|| self.stem.clone());
        if ends_soft(&base) {
            format!("{base}ejši")
        } else {
            format!("{base}{COMPARATIVE}")
        }
    }
}

/// Adverb from an adjectival form: final `y` -> `o`, final `i` -> `e`.
pub fn adverb(form: &str) -> String {
    match form.chars().last() {
        Some('y') => format!("{}o", chop(form)),
        Some('i') => format!("{}e", chop(form)),
        _ => form.to_string(),
    }
}

pub fn decline(lemma: &str) -> Result<AdjectiveParadigm, MorphError> {
    let stem = AdjectiveStem::parse(lemma)?;

    let singular = core::array::from_fn(|i| {
        let [masculine, neuter, feminine] = SINGULAR[i];
        AdjectiveCaseRow {
            case: Case::ADJECTIVAL[i],
            masculine: stem.slot(masculine),
            neuter: stem.slot(neuter),
            feminine: stem.slot(feminine),
        }
    });

    let plural = core::array::from_fn(|i| {
        let [masculine, feminine_neuter] = PLURAL[i];
        AdjectivePluralRow {
            case: Case::ADJECTIVAL[i],
            masculine: stem.slot(masculine),
            feminine_neuter: stem.slot(feminine_neuter),
        }
    });

    let comparative = stem.comparative();
    let superlative = format!("{SUPERLATIVE_PREFIX}{comparative}");
    let comparison = Degree::ALL.map(|degree| {
        let adjective = match degree {
            Degree::Positive => lemma.to_string(),
            Degree::Comparative => comparative.clone(),
            Degree::Superlative => superlative.clone(),
        };
        DegreeForms {
            degree,
            adverb: adverb(&adjective).into(),
            adjective: adjective.into(),
        }
    });

    Ok(AdjectiveParadigm { singular, plural, comparison })
}
