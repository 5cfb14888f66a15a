//! Feature extraction from the compact part-of-speech descriptors of the
//! dictionary (`m.anim.`, `f.pl.`, `adj.`, `v.tr. ipf./pf.`, ...).

pub mod error;
pub mod parser;
pub mod token;

pub use error::DescriptorError;

use isv_protocol::{DescriptorFlags, Gender, GrammaticalFeatures, PartOfSpeech, VerbType};
use tracing::{debug, trace};

use crate::parser::tokenize;
use crate::token::{Tag, Token};

/// Parses a descriptor into features. Never fails: a descriptor without a
/// single abbreviation degrades to `GrammaticalFeatures::default()`.
pub fn extract_features(descriptor: &str) -> GrammaticalFeatures {
    match try_extract_features(descriptor) {
        Ok(features) => features,
        Err(err) => {
            debug!(descriptor, %err, "descriptor degraded to default features");
            GrammaticalFeatures::default()
        }
    }
}

/// Like [`extract_features`], but reports why a descriptor was rejected.
pub fn try_extract_features(descriptor: &str) -> Result<GrammaticalFeatures, DescriptorError> {
    let tokens = tokenize(descriptor)?;
    Ok(classify(&tokens))
}

fn classify(tokens: &[Token<'_>]) -> GrammaticalFeatures {
    let has = |tag: Tag| tokens.iter().any(|t| t.tag == tag);

    for token in tokens.iter().filter(|t| t.tag == Tag::Unknown) {
        trace!(word = token.text, "ignoring unknown descriptor abbreviation");
    }

    let gender = tokens.iter().find_map(|t| match t.tag {
        Tag::Masculine => Some(Gender::Masculine),
        Tag::Feminine => Some(Gender::Feminine),
        Tag::Neuter => Some(Gender::Neuter),
        _ => None,
    });

    // First matching rule wins; gender letters only make a noun when nothing
    // more specific is present.
    let part_of_speech = if has(Tag::Adjective) {
        PartOfSpeech::Adjective
    } else if has(Tag::Adverb) {
        PartOfSpeech::Adverb
    } else if has(Tag::Conjunction) {
        PartOfSpeech::Conjunction
    } else if has(Tag::Preposition) {
        PartOfSpeech::Preposition
    } else if has(Tag::Prefix) {
        PartOfSpeech::Prefix
    } else if has(Tag::Suffix) {
        PartOfSpeech::Suffix
    } else if has(Tag::Pronoun) {
        PartOfSpeech::Pronoun
    } else if has(Tag::Numeral) {
        PartOfSpeech::Numeral
    } else if has(Tag::Interjection) {
        PartOfSpeech::Interjection
    } else if has(Tag::Particle) {
        PartOfSpeech::Particle
    } else if has(Tag::Verb) {
        PartOfSpeech::Verb
    } else if gender.is_some() {
        PartOfSpeech::Noun
    } else {
        PartOfSpeech::Other
    };

    let verb_type = if part_of_speech == PartOfSpeech::Verb {
        match (has(Tag::Perfective), has(Tag::Imperfective)) {
            (true, true) => Some(VerbType::Biaspectual),
            (true, false) => Some(VerbType::Perfective),
            (false, true) => Some(VerbType::Imperfective),
            (false, false) => None,
        }
    } else {
        None
    };

    let mut flags = DescriptorFlags::empty();
    for (tag, flag) in [
        (Tag::Transitive, DescriptorFlags::TRANSITIVE),
        (Tag::Intransitive, DescriptorFlags::INTRANSITIVE),
        (Tag::Reflexive, DescriptorFlags::REFLEXIVE),
        (Tag::Auxiliary, DescriptorFlags::AUXILIARY),
        (Tag::Indeclinable, DescriptorFlags::INDECLINABLE),
        (Tag::SingularOnly, DescriptorFlags::SINGULAR_ONLY),
    ] {
        flags.set(flag, has(tag));
    }

    GrammaticalFeatures {
        part_of_speech,
        gender,
        animate: has(Tag::Animate),
        plural: has(Tag::Plural),
        verb_type,
        flags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_descriptor_degrades_to_defaults() {
        let features = extract_features("");
        assert_eq!(features.part_of_speech, PartOfSpeech::Other);
        assert_eq!(features.gender, None);
        assert!(!features.animate);
        assert!(!features.plural);
        assert_eq!(features.verb_type, None);
        assert_eq!(try_extract_features(""), Err(DescriptorError::Empty));
    }

    #[test]
    fn test_descriptor_without_letters_degrades_to_defaults() {
        assert_eq!(extract_features("42"), GrammaticalFeatures::default());
        assert_eq!(try_extract_features("(+2)"), Err(DescriptorError::Empty));
    }

    #[test]
    fn test_government_notes_do_not_hide_features() {
        let f = extract_features("v.tr. ipf. (+2)");
        assert_eq!(f.part_of_speech, PartOfSpeech::Verb);
        assert_eq!(f.verb_type, Some(VerbType::Imperfective));
        assert!(f.flags.contains(DescriptorFlags::TRANSITIVE));

        let f = extract_features("m.anim.#!");
        assert_eq!(f.gender, Some(Gender::Masculine));
        assert!(f.animate);
    }

    #[test]
    fn test_nouns() {
        let f = extract_features("m.anim.");
        assert_eq!(f.part_of_speech, PartOfSpeech::Noun);
        assert_eq!(f.gender, Some(Gender::Masculine));
        assert!(f.animate);
        assert!(!f.plural);

        let f = extract_features("f.pl.");
        assert_eq!(f.gender, Some(Gender::Feminine));
        assert!(f.plural);

        let f = extract_features("n.indecl.");
        assert_eq!(f.gender, Some(Gender::Neuter));
        assert!(f.is_indeclinable());
    }

    #[test]
    fn test_verbs() {
        let f = extract_features("v.tr. ipf.");
        assert_eq!(f.part_of_speech, PartOfSpeech::Verb);
        assert_eq!(f.verb_type, Some(VerbType::Imperfective));
        assert!(f.flags.contains(DescriptorFlags::TRANSITIVE));

        let f = extract_features("v.refl. ipf./pf.");
        assert_eq!(f.verb_type, Some(VerbType::Biaspectual));
        assert!(f.is_reflexive());

        let f = extract_features("V.INTR. PF.");
        assert_eq!(f.verb_type, Some(VerbType::Perfective));
        assert!(f.flags.contains(DescriptorFlags::INTRANSITIVE));
    }

    #[test]
    fn test_specific_part_of_speech_beats_gender() {
        assert_eq!(extract_features("adj.").part_of_speech, PartOfSpeech::Adjective);
        assert_eq!(extract_features("pron.pers. m.").part_of_speech, PartOfSpeech::Pronoun);
        assert_eq!(extract_features("num.card.").part_of_speech, PartOfSpeech::Numeral);
        assert_eq!(extract_features("prep.").part_of_speech, PartOfSpeech::Preposition);
        assert_eq!(extract_features("phrase").part_of_speech, PartOfSpeech::Other);
    }

    #[test]
    fn test_aspect_is_only_read_for_verbs() {
        assert_eq!(extract_features("m. pf.").verb_type, None);
    }

    proptest! {
        #[test]
        fn test_extraction_is_total_and_deterministic(s in "\\PC{0,24}") {
            let first = extract_features(&s);
            prop_assert_eq!(first, extract_features(&s));
        }
    }
}
