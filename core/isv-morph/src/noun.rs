//! Noun declension.

use isv_protocol::{Case, Gender, NounCaseTable, Number, ParadigmSlot};

use crate::error::MorphError;
use crate::phonology::{
    adjust_ending, chop, drop_fleeting, ends_in_consonant, ends_soft, insert_e, is_word,
    palatalize_last, soften_noun,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclensionClass {
    /// `imę`, `sěmę`: stem grows `-en-`.
    NeuterMen,
    /// `telę`, `kurę`: stem grows `-ęt-`.
    NeuterEnt,
    /// `žena`, `duša`, `sluga`.
    AStem,
    /// `slovo`, `more`.
    NeuterO,
    /// `dědo`, `tato`.
    MasculineO,
    /// `kost`, `noč`.
    FeminineI,
    /// `grad`, `kraĺ`, `pės`.
    MasculineConsonant,
}

/// Endings in `Case::ALL` order. Nominative singular is always the lemma.
struct Endings {
    singular: [&'static str; 7],
    plural: [&'static str; 7],
}

const MASCULINE: Endings = Endings {
    singular: ["", "", "a", "u", "om", "u", "e"],
    plural: ["y", "y", "ov", "am", "ami", "ah", "y"],
};

const NEUTER: Endings = Endings {
    singular: ["", "", "a", "u", "om", "u", ""],
    plural: ["a", "a", "", "am", "ami", "ah", "a"],
};

const A_STEM: Endings = Endings {
    singular: ["a", "", "y", "ě", "ojų", "ě", "o"],
    plural: ["y", "y", "", "am", "ami", "ah", "y"],
};

const CONSONANT_NEUTER: Endings = Endings {
    singular: ["", "", "e", "i", "em", "i", ""],
    plural: ["a", "a", "", "am", "ami", "ah", "a"],
};

const I_STEM: Endings = Endings {
    singular: ["", "", "i", "i", "jų", "i", "i"],
    plural: ["i", "i", "ij", "jam", "jami", "jah", "i"],
};

impl DeclensionClass {
    /// First match wins.
    pub fn classify(lemma: &str, gender: Gender) -> Option<Self> {
        if !is_word(lemma) {
            return None;
        }
        let neuter = gender == Gender::Neuter;
        let class = if neuter && lemma.ends_with("mę") {
            DeclensionClass::NeuterMen
        } else if neuter && lemma.ends_with('ę') {
            DeclensionClass::NeuterEnt
        } else if lemma.ends_with('a') {
            DeclensionClass::AStem
        } else if lemma.ends_with(['o', 'e']) {
            match gender {
                Gender::Neuter => DeclensionClass::NeuterO,
                Gender::Masculine => DeclensionClass::MasculineO,
                Gender::Feminine => return None,
            }
        } else if ends_in_consonant(lemma) {
            match gender {
                Gender::Feminine => DeclensionClass::FeminineI,
                Gender::Masculine => DeclensionClass::MasculineConsonant,
                Gender::Neuter => return None,
            }
        } else {
            return None;
        };
        // a bare ending is not a word
        (!class.stem(lemma).is_empty()).then_some(class)
    }

    fn endings(self) -> &'static Endings {
        match self {
            DeclensionClass::NeuterMen | DeclensionClass::NeuterEnt => &CONSONANT_NEUTER,
            DeclensionClass::AStem => &A_STEM,
            DeclensionClass::NeuterO => &NEUTER,
            DeclensionClass::MasculineO | DeclensionClass::MasculineConsonant => &MASCULINE,
            DeclensionClass::FeminineI => &I_STEM,
        }
    }

    fn stem(self, lemma: &str) -> String {
        match self {
            DeclensionClass::NeuterMen => format!("{}en", chop(lemma)),
            DeclensionClass::NeuterEnt => format!("{lemma}t"),
            DeclensionClass::AStem | DeclensionClass::NeuterO | DeclensionClass::MasculineO => {
                chop(lemma).to_string()
            }
            DeclensionClass::FeminineI | DeclensionClass::MasculineConsonant => lemma.to_string(),
        }
    }

    /// Classes whose nominative ends in a consonant lose a fleeting vowel
    /// before any ending.
    fn has_fleeting_vowel(self) -> bool {
        matches!(self, DeclensionClass::FeminineI | DeclensionClass::MasculineConsonant)
    }

    fn is_masculine_o(self) -> bool {
        matches!(self, DeclensionClass::MasculineO | DeclensionClass::MasculineConsonant)
    }
}

struct Stem<'a> {
    lemma: &'a str,
    class: DeclensionClass,
    base: String,
    /// `more`, `polje`: the lemma's `-e` marks the stem soft.
    soft_lemma: bool,
}

impl<'a> Stem<'a> {
    fn new(lemma: &'a str, class: DeclensionClass) -> Self {
        let soft_lemma = matches!(class, DeclensionClass::NeuterO | DeclensionClass::MasculineO)
            && lemma.ends_with('e');
        Self { lemma, class, base: class.stem(lemma), soft_lemma }
    }

    fn oblique(&self, ending: &str) -> String {
        if self.class.has_fleeting_vowel() && !ending.is_empty() {
            drop_fleeting(&self.base)
        } else {
            self.base.clone()
        }
    }

    fn attach(&self, ending: &str) -> String {
        let stem = self.oblique(ending);
        let soft = self.soft_lemma || ends_soft(&stem);
        stem + &adjust_ending(soft, ending, soften_noun)
    }

    fn vocative(&self) -> String {
        match self.class {
            DeclensionClass::MasculineConsonant => {
                let stem = self.oblique("e");
                if let Some(palatalized) = palatalize_last(&stem) {
                    palatalized + "e"
                } else if ends_soft(&stem) {
                    stem + "u"
                } else {
                    stem + "e"
                }
            }
            DeclensionClass::AStem | DeclensionClass::FeminineI => {
                self.attach(self.class.endings().singular[Case::Vocative.index()])
            }
            _ => self.lemma.to_string(),
        }
    }

    /// Zero-ending genitive plural, with an `e`-inserted variant after a cluster.
    fn genitive_plural(&self, ending: &str) -> ParadigmSlot {
        let form = self.attach(ending);
        if !ending.is_empty() {
            return form.into();
        }
        match insert_e(&form) {
            Some(variant) => ParadigmSlot::pair(form, variant),
            None => form.into(),
        }
    }
}

/// Rule-based declension; the caller has already checked the overrides.
pub fn decline_regular(
    lemma: &str,
    gender: Gender,
    animate: bool,
) -> Result<NounCaseTable, MorphError> {
    let class = DeclensionClass::classify(lemma, gender).ok_or_else(|| {
        MorphError::NoDeclensionClass { lemma: lemma.to_string(), gender }
    })?;
    let stem = Stem::new(lemma, class);
    let endings = class.endings();
    let personal = animate && gender == Gender::Masculine;

    let mut table = NounCaseTable::from_fn(|case| {
        let i = case.index();
        let singular = match case {
            Case::Nominative => lemma.to_string(),
            Case::Vocative => stem.vocative(),
            _ => stem.attach(endings.singular[i]),
        };
        let plural = match case {
            Case::Genitive => stem.genitive_plural(endings.plural[i]),
            Case::Nominative | Case::Vocative if personal && class.is_masculine_o() => {
                stem.attach("i").into()
            }
            _ => stem.attach(endings.plural[i]).into(),
        };
        (singular.into(), plural)
    });

    apply_accusative(&mut table, animate, personal);
    Ok(table)
}

/// Accusative syncretism, applied over the derived forms. The singular
/// follows animacy alone; the plural copies the genitive only for animate
/// masculines.
fn apply_accusative(table: &mut NounCaseTable, animate: bool, personal: bool) {
    let singular = if animate { Case::Genitive } else { Case::Nominative };
    let plural = if personal { Case::Genitive } else { Case::Nominative };
    let singular = table.get(singular, Number::Singular).clone();
    let plural = table.get(plural, Number::Plural).clone();
    let accusative = table.row_mut(Case::Accusative);
    accusative.singular = singular;
    accusative.plural = plural;
}

/// Pluralia tantum: the lemma is the nominative plural, singular slots stay empty.
pub fn decline_plural(
    lemma: &str,
    gender: Gender,
    animate: bool,
) -> Result<NounCaseTable, MorphError> {
    let no_class = || MorphError::NoDeclensionClass { lemma: lemma.to_string(), gender };
    if !is_word(lemma) {
        return Err(no_class());
    }
    let stem = chop(lemma);
    if stem.is_empty() {
        return Err(no_class());
    }
    let class = match lemma.chars().last() {
        Some('a') => DeclensionClass::NeuterO,
        Some('y' | 'e') if gender == Gender::Masculine => DeclensionClass::MasculineConsonant,
        Some('y' | 'e') => DeclensionClass::AStem,
        Some('i') if gender == Gender::Masculine => DeclensionClass::MasculineConsonant,
        Some('i') => DeclensionClass::FeminineI,
        _ => return Err(no_class()),
    };
    let stem = Stem {
        lemma,
        class,
        base: stem.to_string(),
        soft_lemma: lemma.ends_with('e'),
    };
    let endings = class.endings();
    let personal = animate && gender == Gender::Masculine;

    let mut table = NounCaseTable::from_fn(|case| {
        let plural = match case {
            Case::Nominative | Case::Vocative => lemma.into(),
            Case::Genitive => stem.genitive_plural(endings.plural[case.index()]),
            _ => stem.attach(endings.plural[case.index()]).into(),
        };
        (ParadigmSlot::empty(), plural)
    });
    let source = if personal { Case::Genitive } else { Case::Nominative };
    table.row_mut(Case::Accusative).plural = table.get(source, Number::Plural).clone();
    Ok(table)
}

/// Every slot repeats the lemma.
pub fn decline_indeclinable(lemma: &str) -> NounCaseTable {
    NounCaseTable::from_fn(|_| (lemma.into(), lemma.into()))
}
