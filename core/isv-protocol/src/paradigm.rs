use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use alloc::string::String;

use crate::morphology::{Case, Degree, Gender, Number, Person};

/// One cell of a paradigm: a form and, where the language allows two
/// surface realisations, a second one.
///
/// An empty `primary` means the form does not exist; `variant` is then `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ParadigmSlot {
    pub primary: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub variant: Option<String>,
}

impl ParadigmSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(form: impl Into<String>) -> Self {
        Self { primary: form.into(), variant: None }
    }

    /// Two variants; collapses to a single form when they coincide or either is missing.
    pub fn pair(primary: impl Into<String>, variant: impl Into<String>) -> Self {
        let primary = primary.into();
        let variant = variant.into();
        if primary.is_empty() {
            return Self::single(variant);
        }
        if variant.is_empty() || variant == primary {
            return Self::single(primary);
        }
        Self { primary, variant: Some(variant) }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// Non-empty forms in order (0, 1 or 2 items).
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        core::iter::once(self.primary.as_str())
            .filter(|f| !f.is_empty())
            .chain(self.variant.as_deref())
    }

    /// Applies `f` to each existing form. Empty slots stay empty.
    pub fn map(&self, mut f: impl FnMut(&str) -> String) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        Self {
            primary: f(&self.primary),
            variant: self.variant.as_deref().map(f),
        }
    }
}

impl From<&str> for ParadigmSlot {
    fn from(form: &str) -> Self {
        Self::single(form)
    }
}

impl From<String> for ParadigmSlot {
    fn from(form: String) -> Self {
        Self::single(form)
    }
}

/// Singular and plural forms for one case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct CaseRow {
    pub case: Case,
    pub singular: ParadigmSlot,
    pub plural: ParadigmSlot,
}

impl CaseRow {
    pub fn get(&self, number: Number) -> &ParadigmSlot {
        match number {
            Number::Singular => &self.singular,
            Number::Plural => &self.plural,
        }
    }
}

/// Noun declension: always seven rows, in `Case::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NounCaseTable {
    pub rows: [CaseRow; 7],
}

impl NounCaseTable {
    pub fn from_fn(mut f: impl FnMut(Case) -> (ParadigmSlot, ParadigmSlot)) -> Self {
        Self {
            rows: core::array::from_fn(|i| {
                let case = Case::ALL[i];
                let (singular, plural) = f(case);
                CaseRow { case, singular, plural }
            }),
        }
    }

    pub fn empty() -> Self {
        Self::from_fn(|_| (ParadigmSlot::empty(), ParadigmSlot::empty()))
    }

    pub fn row(&self, case: Case) -> &CaseRow {
        &self.rows[case.index()]
    }

    pub fn row_mut(&mut self, case: Case) -> &mut CaseRow {
        &mut self.rows[case.index()]
    }

    pub fn get(&self, case: Case, number: Number) -> &ParadigmSlot {
        self.row(case).get(number)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.singular.is_empty() && r.plural.is_empty())
    }

    pub fn map_forms(&self, mut f: impl FnMut(&str) -> String) -> Self {
        Self::from_fn(|case| {
            let row = self.row(case);
            (row.singular.map(&mut f), row.plural.map(&mut f))
        })
    }
}

/// Singular adjective forms for one case. Oblique masculine and neuter forms coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct AdjectiveCaseRow {
    pub case: Case,
    pub masculine: ParadigmSlot,
    pub neuter: ParadigmSlot,
    pub feminine: ParadigmSlot,
}

/// Plural adjective forms for one case; feminine and neuter share a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct AdjectivePluralRow {
    pub case: Case,
    pub masculine: ParadigmSlot,
    pub feminine_neuter: ParadigmSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct DegreeForms {
    pub degree: Degree,
    pub adjective: ParadigmSlot,
    pub adverb: ParadigmSlot,
}

/// Full adjective paradigm: 6 singular rows, 6 plural rows, 3 degrees.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct AdjectiveParadigm {
    pub singular: [AdjectiveCaseRow; 6],
    pub plural: [AdjectivePluralRow; 6],
    pub comparison: [DegreeForms; 3],
}

impl AdjectiveParadigm {
    pub fn empty() -> Self {
        Self {
            singular: core::array::from_fn(|i| AdjectiveCaseRow {
                case: Case::ADJECTIVAL[i],
                masculine: ParadigmSlot::empty(),
                neuter: ParadigmSlot::empty(),
                feminine: ParadigmSlot::empty(),
            }),
            plural: core::array::from_fn(|i| AdjectivePluralRow {
                case: Case::ADJECTIVAL[i],
                masculine: ParadigmSlot::empty(),
                feminine_neuter: ParadigmSlot::empty(),
            }),
            comparison: core::array::from_fn(|i| DegreeForms {
                degree: Degree::ALL[i],
                adjective: ParadigmSlot::empty(),
                adverb: ParadigmSlot::empty(),
            }),
        }
    }

    /// `None` for the vocative, which adjectives do not distinguish.
    pub fn singular_row(&self, case: Case) -> Option<&AdjectiveCaseRow> {
        self.singular.get(case.index()).filter(|r| r.case == case)
    }

    pub fn plural_row(&self, case: Case) -> Option<&AdjectivePluralRow> {
        self.plural.get(case.index()).filter(|r| r.case == case)
    }

    pub fn degree(&self, degree: Degree) -> &DegreeForms {
        &self.comparison[degree as usize]
    }

    pub fn singular_form(&self, case: Case, gender: Gender) -> Option<&ParadigmSlot> {
        self.singular_row(case).map(|r| match gender {
            Gender::Masculine => &r.masculine,
            Gender::Neuter => &r.neuter,
            Gender::Feminine => &r.feminine,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.forms().all(ParadigmSlot::is_empty)
    }

    fn forms(&self) -> impl Iterator<Item = &ParadigmSlot> {
        self.singular
            .iter()
            .flat_map(|r| [&r.masculine, &r.neuter, &r.feminine])
            .chain(self.plural.iter().flat_map(|r| [&r.masculine, &r.feminine_neuter]))
            .chain(self.comparison.iter().flat_map(|d| [&d.adjective, &d.adverb]))
    }

    pub fn map_forms(&self, mut f: impl FnMut(&str) -> String) -> Self {
        Self {
            singular: core::array::from_fn(|i| {
                let r = &self.singular[i];
                AdjectiveCaseRow {
                    case: r.case,
                    masculine: r.masculine.map(&mut f),
                    neuter: r.neuter.map(&mut f),
                    feminine: r.feminine.map(&mut f),
                }
            }),
            plural: core::array::from_fn(|i| {
                let r = &self.plural[i];
                AdjectivePluralRow {
                    case: r.case,
                    masculine: r.masculine.map(&mut f),
                    feminine_neuter: r.feminine_neuter.map(&mut f),
                }
            }),
            comparison: core::array::from_fn(|i| {
                let d = &self.comparison[i];
                DegreeForms {
                    degree: d.degree,
                    adjective: d.adjective.map(&mut f),
                    adverb: d.adverb.map(&mut f),
                }
            }),
        }
    }
}

/// Person/number order of the simple tenses.
pub const SIMPLE_PERSONS: [(Person, Number); 6] = [
    (Person::First, Number::Singular),
    (Person::Second, Number::Singular),
    (Person::Third, Number::Singular),
    (Person::First, Number::Plural),
    (Person::Second, Number::Plural),
    (Person::Third, Number::Plural),
];

/// Person/number order of the compound tenses; 3rd singular is split by gender.
pub const COMPOUND_PERSONS: [(Person, Number, Option<Gender>); 8] = [
    (Person::First, Number::Singular, None),
    (Person::Second, Number::Singular, None),
    (Person::Third, Number::Singular, Some(Gender::Masculine)),
    (Person::Third, Number::Singular, Some(Gender::Feminine)),
    (Person::Third, Number::Singular, Some(Gender::Neuter)),
    (Person::First, Number::Plural, None),
    (Person::Second, Number::Plural, None),
    (Person::Third, Number::Plural, None),
];

/// Every generated form of a verb.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct VerbFormSet {
    pub infinitive: ParadigmSlot,
    pub imperative: ParadigmSlot,
    pub present_active_participle: ParadigmSlot,
    pub present_passive_participle: ParadigmSlot,
    pub past_active_participle: ParadigmSlot,
    pub past_passive_participle: ParadigmSlot,
    pub gerund: ParadigmSlot,
    /// 1sg, 2sg, 3sg, 1pl, 2pl, 3pl
    pub present: [ParadigmSlot; 6],
    pub imperfect: [ParadigmSlot; 6],
    pub future: [ParadigmSlot; 6],
    /// 1sg, 2sg, 3sg masc, 3sg fem, 3sg neut, 1pl, 2pl, 3pl
    pub perfect: [ParadigmSlot; 8],
    pub pluperfect: [ParadigmSlot; 8],
    pub conditional: [ParadigmSlot; 8],
}

impl VerbFormSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Non-finite forms with their labels, in display order.
    pub fn non_finite(&self) -> [(&'static str, &ParadigmSlot); 7] {
        [
            ("infinitive", &self.infinitive),
            ("imperative", &self.imperative),
            ("present active participle", &self.present_active_participle),
            ("present passive participle", &self.present_passive_participle),
            ("past active participle", &self.past_active_participle),
            ("past passive participle", &self.past_passive_participle),
            ("verbal noun", &self.gerund),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.non_finite().iter().all(|(_, s)| s.is_empty())
            && [&self.present, &self.imperfect, &self.future]
                .iter()
                .all(|t| t.iter().all(ParadigmSlot::is_empty))
            && [&self.perfect, &self.pluperfect, &self.conditional]
                .iter()
                .all(|t| t.iter().all(ParadigmSlot::is_empty))
    }

    pub fn map_forms(&self, mut f: impl FnMut(&str) -> String) -> Self {
        let mut six = |t: &[ParadigmSlot; 6]| -> [ParadigmSlot; 6] {
            core::array::from_fn(|i| t[i].map(&mut f))
        };
        let present = six(&self.present);
        let imperfect = six(&self.imperfect);
        let future = six(&self.future);
        let mut eight = |t: &[ParadigmSlot; 8]| -> [ParadigmSlot; 8] {
            core::array::from_fn(|i| t[i].map(&mut f))
        };
        let perfect = eight(&self.perfect);
        let pluperfect = eight(&self.pluperfect);
        let conditional = eight(&self.conditional);
        Self {
            infinitive: self.infinitive.map(&mut f),
            imperative: self.imperative.map(&mut f),
            present_active_participle: self.present_active_participle.map(&mut f),
            present_passive_participle: self.present_passive_participle.map(&mut f),
            past_active_participle: self.past_active_participle.map(&mut f),
            past_passive_participle: self.past_passive_participle.map(&mut f),
            gerund: self.gerund.map(&mut f),
            present,
            imperfect,
            future,
            perfect,
            pluperfect,
            conditional,
        }
    }
}

/// The paradigm produced for one dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "forms", rename_all = "lowercase"))]
#[archive(check_bytes)]
pub enum Paradigm {
    Noun(NounCaseTable),
    Adjective(AdjectiveParadigm),
    Verb(VerbFormSet),
}

impl Paradigm {
    pub fn is_empty(&self) -> bool {
        match self {
            Paradigm::Noun(t) => t.is_empty(),
            Paradigm::Adjective(t) => t.is_empty(),
            Paradigm::Verb(t) => t.is_empty(),
        }
    }

    /// Per-cell adapter hook, e.g. transliteration before display.
    pub fn map_forms(&self, f: impl FnMut(&str) -> String) -> Self {
        match self {
            Paradigm::Noun(t) => Paradigm::Noun(t.map_forms(f)),
            Paradigm::Adjective(t) => Paradigm::Adjective(t.map_forms(f)),
            Paradigm::Verb(t) => Paradigm::Verb(t.map_forms(f)),
        }
    }
}
