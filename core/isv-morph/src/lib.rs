//! Paradigm generation for Interslavic nouns, adjectives and verbs.
//!
//! Every public entry point is total: a lemma the rules cannot handle yields
//! a table of the full shape with empty slots. The `try_*` variants report
//! why instead.

pub mod adjective;
pub mod error;
pub mod noun;
pub mod overrides;
pub mod phonology;
pub mod verb;

pub use error::MorphError;

use isv_protocol::{
    AdjectiveParadigm, Case, DescriptorFlags, Gender, GrammaticalFeatures, NounCaseTable,
    Paradigm, ParadigmSlot, PartOfSpeech, VerbFormSet, WordEntry,
};
use tracing::{debug, trace};

/// Seven-case table for `lemma`. Irregular nouns come from the override list.
pub fn try_decline_noun(
    lemma: &str,
    gender: Gender,
    animate: bool,
) -> Result<NounCaseTable, MorphError> {
    if let Some(table) = overrides::lookup(lemma) {
        trace!(lemma, "irregular noun");
        return Ok(table.clone());
    }
    noun::decline_regular(lemma, gender, animate)
}

pub fn decline_noun(lemma: &str, gender: Gender, animate: bool) -> NounCaseTable {
    try_decline_noun(lemma, gender, animate).unwrap_or_else(|err| {
        debug!(%err, "noun left undeclined");
        NounCaseTable::empty()
    })
}

/// Pluralia tantum: `lemma` is the nominative plural.
pub fn try_decline_plural_only(
    lemma: &str,
    gender: Gender,
    animate: bool,
) -> Result<NounCaseTable, MorphError> {
    noun::decline_plural(lemma, gender, animate)
}

pub fn decline_plural_only(lemma: &str, gender: Gender, animate: bool) -> NounCaseTable {
    try_decline_plural_only(lemma, gender, animate).unwrap_or_else(|err| {
        debug!(%err, "plural noun left undeclined");
        NounCaseTable::empty()
    })
}

pub use noun::decline_indeclinable;

pub fn try_decline_adjective(lemma: &str) -> Result<AdjectiveParadigm, MorphError> {
    adjective::decline(lemma)
}

pub fn decline_adjective(lemma: &str) -> AdjectiveParadigm {
    try_decline_adjective(lemma).unwrap_or_else(|err| {
        debug!(%err, "adjective left undeclined");
        AdjectiveParadigm::empty()
    })
}

/// `addition` is the dictionary hint next to the lemma, e.g. `(piše)`; pass
/// `""` when there is none.
pub fn try_conjugate_verb(lemma: &str, addition: &str) -> Result<VerbFormSet, MorphError> {
    verb::conjugate(lemma, addition)
}

pub fn conjugate_verb(lemma: &str, addition: &str) -> VerbFormSet {
    try_conjugate_verb(lemma, addition).unwrap_or_else(|err| {
        debug!(%err, "verb left unconjugated");
        VerbFormSet::empty()
    })
}

fn try_noun_table(
    entry: &WordEntry,
    features: &GrammaticalFeatures,
) -> Result<NounCaseTable, MorphError> {
    let lemma = entry.lemma.trim();
    if features.is_indeclinable() {
        return Ok(decline_indeclinable(lemma));
    }
    let gender = features
        .gender
        .ok_or_else(|| MorphError::MissingGender(lemma.to_string()))?;
    if features.plural {
        return try_decline_plural_only(lemma, gender, features.animate);
    }
    let mut table = try_decline_noun(lemma, gender, features.animate)?;
    if features.flags.contains(DescriptorFlags::SINGULAR_ONLY) {
        for case in Case::ALL {
            table.row_mut(case).plural = ParadigmSlot::empty();
        }
    }
    Ok(table)
}

/// Runs the engine the part of speech selects.
pub fn try_inflect(
    entry: &WordEntry,
    features: &GrammaticalFeatures,
) -> Result<Paradigm, MorphError> {
    let part_of_speech = features.part_of_speech;
    if !part_of_speech.has_paradigm() {
        return Err(MorphError::NoParadigm(part_of_speech));
    }
    match part_of_speech {
        PartOfSpeech::Adjective => try_decline_adjective(entry.lemma.trim()).map(Paradigm::Adjective),
        PartOfSpeech::Verb => {
            try_conjugate_verb(entry.lemma.trim(), entry.addition()).map(Paradigm::Verb)
        }
        _ => try_noun_table(entry, features).map(Paradigm::Noun),
    }
}

/// `None` for parts of speech without a paradigm; otherwise a full-shape
/// table, empty where the rules do not apply.
pub fn inflect(entry: &WordEntry, features: &GrammaticalFeatures) -> Option<Paradigm> {
    match try_inflect(entry, features) {
        Ok(paradigm) => Some(paradigm),
        Err(MorphError::NoParadigm(_)) => None,
        Err(err) => {
            debug!(lemma = %entry.lemma, %err, "empty paradigm");
            Some(match features.part_of_speech {
                PartOfSpeech::Adjective => Paradigm::Adjective(AdjectiveParadigm::empty()),
                PartOfSpeech::Verb => Paradigm::Verb(VerbFormSet::empty()),
                _ => Paradigm::Noun(NounCaseTable::empty()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isv_protocol::{Number, VerbType};
    use proptest::prelude::*;

    const GENDERS: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];

    fn noun(gender: Gender, animate: bool) -> GrammaticalFeatures {
        GrammaticalFeatures {
            part_of_speech: PartOfSpeech::Noun,
            gender: Some(gender),
            animate,
            ..GrammaticalFeatures::default()
        }
    }

    #[test]
    fn test_unmatched_noun_is_empty_but_complete() {
        let table = decline_noun("zzzzz-nonmatching", Gender::Masculine, false);
        assert_eq!(table.rows.len(), 7);
        for (row, case) in table.rows.iter().zip(Case::ALL) {
            assert_eq!(row.case, case);
            assert_eq!(row.singular.primary(), "");
            assert_eq!(row.plural.primary(), "");
        }
        assert!(matches!(
            try_decline_noun("zzzzz-nonmatching", Gender::Masculine, false),
            Err(MorphError::NoDeclensionClass { .. })
        ));
    }

    #[test]
    fn test_overrides_win() {
        for lemma in overrides::lemmas() {
            let expected = overrides::lookup(lemma).unwrap();
            for gender in GENDERS {
                for animate in [false, true] {
                    assert_eq!(&decline_noun(lemma, gender, animate), expected, "{lemma}");
                }
            }
        }
        let t = decline_noun("člověk", Gender::Masculine, true);
        assert_eq!(t.get(Case::Nominative, Number::Plural).primary(), "ljudi");
        assert_eq!(t.get(Case::Vocative, Number::Singular).primary(), "člověče");
    }

    #[test]
    fn test_accusative_syncretism() {
        for lemma in ["brat", "pės", "kraĺ", "otėc", "dědo", "student", "sluga"] {
            let t = decline_noun(lemma, Gender::Masculine, true);
            assert_eq!(t.get(Case::Accusative, Number::Singular), t.get(Case::Genitive, Number::Singular), "{lemma}");
            assert_eq!(t.get(Case::Accusative, Number::Plural), t.get(Case::Genitive, Number::Plural), "{lemma}");
        }
        for (lemma, gender) in [
            ("grad", Gender::Masculine),
            ("slovo", Gender::Neuter),
            ("kost", Gender::Feminine),
            ("imę", Gender::Neuter),
            ("žena", Gender::Feminine),
        ] {
            let t = decline_noun(lemma, gender, false);
            assert_eq!(t.get(Case::Accusative, Number::Singular), t.get(Case::Nominative, Number::Singular), "{lemma}");
        }
    }

    #[test]
    fn test_inflect_dispatch() {
        let features = noun(Gender::Masculine, true);
        let paradigm = inflect(&WordEntry::new("brat", "m.anim."), &features).unwrap();
        let Paradigm::Noun(table) = paradigm else { panic!("expected a noun table") };
        assert_eq!(table.get(Case::Accusative, Number::Singular).primary(), "brata");

        let verb = GrammaticalFeatures {
            part_of_speech: PartOfSpeech::Verb,
            verb_type: Some(VerbType::Imperfective),
            ..GrammaticalFeatures::default()
        };
        let entry = WordEntry::new("pisati", "v.tr. ipf.").with_addition("(piše)");
        let Some(Paradigm::Verb(forms)) = inflect(&entry, &verb) else { panic!("expected verb forms") };
        assert_eq!(forms.present[0].primary(), "pišų");

        let other = GrammaticalFeatures::default();
        assert_eq!(inflect(&WordEntry::new("i", "conj."), &other), None);
        let adverb = GrammaticalFeatures { part_of_speech: PartOfSpeech::Adverb, ..GrammaticalFeatures::default() };
        assert_eq!(
            try_inflect(&WordEntry::new("dobro", "adv."), &adverb),
            Err(MorphError::NoParadigm(PartOfSpeech::Adverb))
        );

        let Some(Paradigm::Adjective(adj)) = inflect(
            &WordEntry::new("grad", "adj."),
            &GrammaticalFeatures { part_of_speech: PartOfSpeech::Adjective, ..GrammaticalFeatures::default() },
        ) else {
            panic!("expected an adjective paradigm")
        };
        assert!(adj.is_empty());
    }

    #[test]
    fn test_noun_flags() {
        let mut features = noun(Gender::Neuter, false);
        features.flags = DescriptorFlags::INDECLINABLE;
        let Some(Paradigm::Noun(t)) = inflect(&WordEntry::new("kakao", "n.indecl."), &features) else { panic!() };
        assert_eq!(t.get(Case::Instrumental, Number::Plural).primary(), "kakao");

        let mut features = noun(Gender::Neuter, false);
        features.flags = DescriptorFlags::SINGULAR_ONLY;
        let Some(Paradigm::Noun(t)) = inflect(&WordEntry::new("zlato", "n.sg."), &features) else { panic!() };
        assert_eq!(t.get(Case::Genitive, Number::Singular).primary(), "zlata");
        assert!(t.rows.iter().all(|r| r.plural.is_empty()));

        let mut features = noun(Gender::Feminine, false);
        features.plural = true;
        let Some(Paradigm::Noun(t)) = inflect(&WordEntry::new("dveri", "f.pl."), &features) else { panic!() };
        assert!(t.rows.iter().all(|r| r.singular.is_empty()));
        assert_eq!(t.get(Case::Nominative, Number::Plural).primary(), "dveri");
    }

    proptest! {
        #[test]
        fn test_noun_tables_keep_their_shape(lemma in "\\PC{0,12}", g in 0usize..3, animate in any::<bool>()) {
            let table = decline_noun(&lemma, GENDERS[g], animate);
            for (row, case) in table.rows.iter().zip(Case::ALL) {
                prop_assert_eq!(row.case, case);
            }
            prop_assert_eq!(table.clone(), decline_noun(&lemma, GENDERS[g], animate));
        }

        #[test]
        fn test_inanimate_accusative_is_nominative(stem in "[bdgklmnprstvz][aeiou][bdklmnprstv]", g in 0usize..2) {
            // consonant-final masculines and o-stem neuters
            let (lemma, gender) = if g == 0 {
                (stem.clone(), Gender::Masculine)
            } else {
                (format!("{stem}o"), Gender::Neuter)
            };
            let table = decline_noun(&lemma, gender, false);
            prop_assert!(!table.is_empty());
            prop_assert_eq!(table.get(Case::Accusative, Number::Singular), table.get(Case::Nominative, Number::Singular));
        }

        #[test]
        fn test_adjective_shape(lemma in "[a-zěčšž]{1,8}[yi]") {
            let p = decline_adjective(&lemma);
            prop_assert_eq!(p.singular.len(), 6);
            prop_assert_eq!(p.plural.len(), 6);
            prop_assert_eq!(p.comparison.len(), 3);
            for (row, case) in p.singular.iter().zip(Case::ADJECTIVAL) {
                prop_assert_eq!(row.case, case);
            }
        }

        #[test]
        fn test_verb_shape_and_determinism(lemma in "[a-zěčšžųę]{1,8}(ti|ći|ovati)?", addition in "(\\([a-zšž]{1,5}e\\))?") {
            let v = conjugate_verb(&lemma, &addition);
            prop_assert_eq!(v.present.len(), 6);
            prop_assert_eq!(v.perfect.len(), 8);
            prop_assert_eq!(v.clone(), conjugate_verb(&lemma, &addition));
            if !v.is_empty() {
                prop_assert!(v.perfect[2].primary().ends_with('l'));
                prop_assert!(v.perfect[3].primary().ends_with("la"));
                prop_assert!(v.perfect[4].primary().ends_with("lo"));
            }
        }
    }
}
