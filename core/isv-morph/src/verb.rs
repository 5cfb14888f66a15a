//! Verb conjugation: non-finite forms, simple tenses and the periphrastic
//! perfect, pluperfect and conditional.

use isv_protocol::{ParadigmSlot, VerbFormSet};

use crate::error::MorphError;
use crate::phonology::{chop, depalatalize, ends_in_consonant, ends_soft, is_vowel, is_word};

pub const FUTURE_AUX: [&str; 6] = ["bųdų", "bųdeš", "bųde", "bųdemo", "bųdete", "bųdųt"];
pub const PERFECT_AUX: [&str; 6] = ["jesm", "jesi", "je", "jesmo", "jeste", "sųt"];
pub const PLUPERFECT_AUX: [&str; 6] = ["běh", "běše", "běše", "běhmo", "běste", "běhų"];
pub const CONDITIONAL_AUX: [&str; 6] = ["byh", "bys", "by", "byhmo", "byste", "by"];

const IMPERFECT: [&str; 6] = ["h", "še", "še", "hmo", "ste", "hų"];
const E_PRESENT: [&str; 6] = ["ų", "eš", "e", "emo", "ete", "ųt"];
const I_PRESENT: [&str; 6] = ["jų", "iš", "i", "imo", "ite", "ęt"];

const REFLEXIVE_PARTICLES: [&str; 2] = [" sę", " se"];

/// Verbal prefixes; they stack, as in `od-po-věděti`.
const PREFIXES: &[&str] = &[
    "do", "iz", "izo", "na", "nad", "nado", "o", "ob", "obo", "od", "odo", "po", "pod", "podo", "pre",
    "pred", "prě", "prěd", "pri", "pro", "raz", "razo", "s", "so", "u", "v", "vo", "vy", "vz", "vzo", "za",
];

/// `-ći` roots with a voiced velar: `moći`, `strěći`, `žeći`.
const VOICED_CI_ROOTS: &[&str] = &["mo", "strě", "že"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConjugationClass {
    /// `byti`, `dati`, `jesti`, `věděti`.
    Athematic,
    Ovati,
    Nuti,
    Ati,
    Eti,
    Iti,
    /// `-yti` and `-uti`.
    Yti,
    /// `-sti` and `-zti`.
    Sti,
    /// `-ći`: `moći` -> `mog-`, `peći` -> `pek-`.
    Ci,
    /// No infinitive class; the addition alone gives the present stem.
    Given,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conjugation {
    /// `-e-` present: `nese`, `dělaje`.
    E,
    /// `-i-` present: `hvali`, `vidi`.
    I,
}

/// Stems every form is built from.
#[derive(Debug, Clone)]
struct Stems {
    class: ConjugationClass,
    infinitive: String,
    present: String,
    conjugation: Conjugation,
    /// Base of the l-participle: `děla-`, `nes-`, `mog-`.
    past: String,
    /// `-ati` verbs also take `dělam, dělaš, ...`.
    contracted: bool,
}

struct Athematic {
    infinitive: &'static str,
    present: [&'static str; 6],
    imperative: &'static str,
    present_active: &'static str,
    present_passive: &'static str,
    past_active: &'static str,
    past_passive: &'static str,
    gerund: &'static str,
    past: &'static str,
    imperfect: &'static str,
    /// Present of prefixed perfectives when it differs: `zabyti` -> `zabųdų`.
    prefixed_present: Option<[&'static str; 6]>,
}

static ATHEMATIC: [Athematic; 4] = [
    Athematic {
        infinitive: "byti",
        present: ["jesm", "jesi", "je", "jesmo", "jeste", "sųt"],
        imperative: "bųdi",
        present_active: "bųdųći",
        present_passive: "",
        past_active: "byvši",
        past_passive: "",
        gerund: "bytje",
        past: "by",
        imperfect: "bě",
        prefixed_present: Some(FUTURE_AUX),
    },
    Athematic {
        infinitive: "dati",
        present: ["dam", "daš", "da", "damo", "date", "dadųt"],
        imperative: "daj",
        present_active: "dadųći",
        present_passive: "",
        past_active: "davši",
        past_passive: "dany",
        gerund: "danje",
        past: "da",
        imperfect: "da",
        prefixed_present: None,
    },
    Athematic {
        infinitive: "jesti",
        present: ["jem", "ješ", "je", "jemo", "jete", "jedęt"],
        imperative: "jej",
        present_active: "jedęći",
        present_passive: "",
        past_active: "jedši",
        past_passive: "jedeny",
        gerund: "jedenje",
        past: "jed",
        imperfect: "jedě",
        prefixed_present: None,
    },
    Athematic {
        infinitive: "věděti",
        present: ["věm", "věš", "vě", "věmo", "věte", "vědęt"],
        imperative: "vědi",
        present_active: "vědęći",
        present_passive: "",
        past_active: "věděvši",
        past_passive: "věděny",
        gerund: "věděnje",
        past: "vědě",
        imperfect: "vědě",
        prefixed_present: None,
    },
];

/// Splits off a trailing reflexive particle: `učiti sę` -> (`učiti`, Some(`sę`)).
pub fn split_reflexive(lemma: &str) -> (&str, Option<&str>) {
    for particle in REFLEXIVE_PARTICLES {
        if let Some(verb) = lemma.strip_suffix(particle) {
            return (verb, Some(particle.trim_start()));
        }
    }
    (lemma, None)
}

fn is_prefix_chain(text: &str) -> bool {
    text.is_empty() || PREFIXES.iter().any(|p| text.strip_prefix(p).is_some_and(is_prefix_chain))
}

/// The irregular verb `infinitive` is built on, with its prefix: `pojesti` -> (`po`, jesti).
fn find_athematic(infinitive: &str) -> Option<(&str, &'static Athematic)> {
    ATHEMATIC.iter().find_map(|verb| {
        let prefix = infinitive.strip_suffix(verb.infinitive)?;
        is_prefix_chain(prefix).then_some((prefix, verb))
    })
}

/// Contents of every `(...)` group, or the whole text when there is none.
fn groups(addition: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = addition;
    while let Some(open) = rest.find('(') {
        let inner = &rest[open + 1..];
        let close = inner.find(')').unwrap_or(inner.len());
        out.push(&inner[..close]);
        rest = inner.get(close + 1..).unwrap_or_default();
    }
    if out.is_empty() {
        out.push(addition);
    }
    out
}

/// Reads a 3sg present out of an addition such as `(piše)`. Case-government
/// notes like `(+2)` are skipped: `(piše), (+4)` still gives `piš-`.
fn present_from_addition(addition: &str) -> Option<(String, Conjugation)> {
    groups(addition.trim()).into_iter().find_map(present_from_group)
}

fn present_from_group(group: &str) -> Option<(String, Conjugation)> {
    let word = group
        .split(|c: char| c == ',' || c == ';' || c == '/' || c.is_whitespace())
        .find(|w| !w.is_empty())?;
    if !is_word(word) {
        return None;
    }
    let stem = chop(word);
    if stem.is_empty() {
        return None;
    }
    match word.chars().last()? {
        'e' => Some((stem.to_string(), Conjugation::E)),
        'i' => Some((stem.to_string(), Conjugation::I)),
        'a' => Some((format!("{word}j"), Conjugation::E)),
        _ => None,
    }
}

impl Stems {
    fn derive(infinitive: &str, addition: &str) -> Result<Self, MorphError> {
        let no_class = || MorphError::NoConjugationClass(infinitive.to_string());
        if !is_word(infinitive) {
            return Err(no_class());
        }
        let given = present_from_addition(addition);

        if let Some(stem) = infinitive.strip_suffix("ći") {
            if !stem.chars().any(is_vowel) {
                return Err(no_class());
            }
            let (present, conjugation, past) = match given {
                Some((present, conjugation)) => {
                    // `može` -> `mog-`, `peče` -> `pek-`
                    let mut past = chop(&present).to_string();
                    let last = present.chars().last().unwrap_or_default();
                    past.push(depalatalize(last).unwrap_or(last));
                    (present, conjugation, past)
                }
                None => {
                    let voiced = VOICED_CI_ROOTS.iter().any(|root| stem.ends_with(root));
                    let (velar, palatal) = if voiced { ('g', 'ž') } else { ('k', 'č') };
                    (format!("{stem}{palatal}"), Conjugation::E, format!("{stem}{velar}"))
                }
            };
            return Ok(Self {
                class: ConjugationClass::Ci,
                infinitive: infinitive.to_string(),
                present,
                conjugation,
                past,
                contracted: false,
            });
        }

        let stem = infinitive.strip_suffix("ti").ok_or_else(no_class)?;
        let (class, present, conjugation) = if let Some(base) = stem.strip_suffix("ova") {
            (ConjugationClass::Ovati, format!("{base}uj"), Conjugation::E)
        } else if stem.ends_with("nu") {
            (ConjugationClass::Nuti, chop(stem).to_string(), Conjugation::E)
        } else if stem.ends_with('a') {
            (ConjugationClass::Ati, format!("{stem}j"), Conjugation::E)
        } else if let Some(base) = stem.strip_suffix('ě') {
            (ConjugationClass::Eti, base.to_string(), Conjugation::I)
        } else if let Some(base) = stem.strip_suffix('i') {
            (ConjugationClass::Iti, base.to_string(), Conjugation::I)
        } else if stem.ends_with(['y', 'u']) {
            (ConjugationClass::Yti, format!("{stem}j"), Conjugation::E)
        } else if stem.ends_with(['s', 'z']) {
            (ConjugationClass::Sti, stem.to_string(), Conjugation::E)
        } else if given.is_some() {
            (ConjugationClass::Given, String::new(), Conjugation::E)
        } else {
            return Err(no_class());
        };

        let mut stems = Self {
            class,
            infinitive: infinitive.to_string(),
            past: if class == ConjugationClass::Sti { present.clone() } else { stem.to_string() },
            contracted: class == ConjugationClass::Ati,
            present,
            conjugation,
        };
        if let Some((present, conjugation)) = given {
            if class == ConjugationClass::Sti {
                // `vesti (vede)` -> `ved-l`
                stems.past = present.clone();
            }
            stems.present = present;
            stems.conjugation = conjugation;
            stems.contracted = false;
        }
        if stems.present.is_empty() || !stems.past.chars().any(is_vowel) {
            return Err(no_class());
        }
        Ok(stems)
    }

    fn present_tense(&self) -> [ParadigmSlot; 6] {
        let p = &self.present;
        match self.conjugation {
            Conjugation::E => core::array::from_fn(|i| {
                let full = format!("{p}{}", E_PRESENT[i]);
                if !self.contracted {
                    return full.into();
                }
                // `dělajų`/`dělam`; the 3pl has no short form
                let short = match i {
                    0 => format!("{}m", chop(p)),
                    1 => format!("{}š", chop(p)),
                    2 => chop(p).to_string(),
                    3 => format!("{}mo", chop(p)),
                    4 => format!("{}te", chop(p)),
                    _ => String::new(),
                };
                ParadigmSlot::pair(full, short)
            }),
            Conjugation::I => core::array::from_fn(|i| {
                if i == 0 {
                    let first = if ends_soft(p) { format!("{p}ų") } else { format!("{p}jų") };
                    return ParadigmSlot::pair(first, format!("{p}im"));
                }
                format!("{p}{}", I_PRESENT[i]).into()
            }),
        }
    }

    fn imperative(&self) -> String {
        if self.present.ends_with('j') {
            self.present.clone()
        } else {
            format!("{}i", self.present)
        }
    }

    fn present_passive(&self) -> String {
        match self.conjugation {
            Conjugation::E => format!("{}emy", self.present),
            Conjugation::I => format!("{}imy", self.present),
        }
    }

    fn imperfect_base(&self) -> String {
        if ends_in_consonant(&self.past) {
            format!("{}ě", self.past)
        } else {
            self.past.clone()
        }
    }

    fn past_active(&self) -> String {
        if ends_in_consonant(&self.past) {
            format!("{}ši", self.past)
        } else {
            format!("{}vši", self.past)
        }
    }

    fn past_passive(&self) -> String {
        match self.past.chars().last() {
            Some('a' | 'ě' | 'e') => format!("{}ny", self.past),
            Some('u' | 'y') => format!("{}ty", self.past),
            _ => format!("{}eny", self.present),
        }
    }
}

/// `dělany` -> `dělanje`, `kryty` -> `krytje`.
fn verbal_noun(past_passive: &str) -> String {
    match past_passive.strip_suffix('y') {
        Some(base) => format!("{base}je"),
        None => String::new(),
    }
}

fn simple(forms: [&str; 6]) -> [ParadigmSlot; 6] {
    forms.map(ParadigmSlot::from)
}

fn with_endings(base: &str, endings: [&str; 6]) -> [ParadigmSlot; 6] {
    endings.map(|e| ParadigmSlot::single(format!("{base}{e}")))
}

fn future(infinitive: &str) -> [ParadigmSlot; 6] {
    if infinitive == "byti" {
        return simple(FUTURE_AUX);
    }
    FUTURE_AUX.map(|aux| ParadigmSlot::single(format!("{aux} {infinitive}")))
}

/// Auxiliary + l-participle. 1st/2nd singular carry the feminine as a variant;
/// the 3rd singular is split into three slots by gender.
fn compound(aux: [&str; 6], past: &str) -> [ParadigmSlot; 8] {
    let masculine = format!("{past}l");
    let feminine = format!("{past}la");
    let neuter = format!("{past}lo");
    let plural = format!("{past}li");
    let with = |aux: &str, participle: &str| format!("{aux} {participle}");
    [
        ParadigmSlot::pair(with(aux[0], &masculine), with(aux[0], &feminine)),
        ParadigmSlot::pair(with(aux[1], &masculine), with(aux[1], &feminine)),
        with(aux[2], &masculine).into(),
        with(aux[2], &feminine).into(),
        with(aux[2], &neuter).into(),
        with(aux[3], &plural).into(),
        with(aux[4], &plural).into(),
        with(aux[5], &plural).into(),
    ]
}

fn finish(mut set: VerbFormSet, past: &str) -> VerbFormSet {
    set.perfect = compound(PERFECT_AUX, past);
    set.pluperfect = compound(PLUPERFECT_AUX, past);
    set.conditional = compound(CONDITIONAL_AUX, past);
    set
}

fn conjugate_athematic(prefix: &str, verb: &Athematic) -> VerbFormSet {
    let with_prefix = |form: &str| -> ParadigmSlot {
        if form.is_empty() {
            ParadigmSlot::empty()
        } else {
            format!("{prefix}{form}").into()
        }
    };
    let present = match verb.prefixed_present {
        Some(present) if !prefix.is_empty() => present,
        _ => verb.present,
    };
    let infinitive = format!("{prefix}{}", verb.infinitive);
    let set = VerbFormSet {
        imperative: with_prefix(verb.imperative),
        present_active_participle: with_prefix(verb.present_active),
        present_passive_participle: with_prefix(verb.present_passive),
        past_active_participle: with_prefix(verb.past_active),
        past_passive_participle: with_prefix(verb.past_passive),
        gerund: with_prefix(verb.gerund),
        present: present.map(with_prefix),
        imperfect: with_endings(&format!("{prefix}{}", verb.imperfect), IMPERFECT),
        future: future(&infinitive),
        infinitive: infinitive.into(),
        ..VerbFormSet::default()
    };
    finish(set, &format!("{prefix}{}", verb.past))
}

fn conjugate_regular(stems: &Stems) -> VerbFormSet {
    let present = stems.present_tense();
    let present_active = match present[5].primary().strip_suffix('t') {
        Some(base) => format!("{base}ći"),
        None => String::new(),
    };
    let past_passive = stems.past_passive();
    let set = VerbFormSet {
        infinitive: stems.infinitive.as_str().into(),
        imperative: stems.imperative().into(),
        present_active_participle: present_active.into(),
        present_passive_participle: stems.present_passive().into(),
        past_active_participle: stems.past_active().into(),
        gerund: verbal_noun(&past_passive).into(),
        past_passive_participle: past_passive.into(),
        present,
        imperfect: with_endings(&stems.imperfect_base(), IMPERFECT),
        future: future(&stems.infinitive),
        ..VerbFormSet::default()
    };
    finish(set, &stems.past)
}

/// Conjugation class of `lemma` (reflexive particle allowed).
pub fn classify(lemma: &str, addition: &str) -> Result<ConjugationClass, MorphError> {
    let (infinitive, _) = split_reflexive(lemma);
    if find_athematic(infinitive).is_some() {
        return Ok(ConjugationClass::Athematic);
    }
    Stems::derive(infinitive, addition).map(|s| s.class)
}

pub fn conjugate(lemma: &str, addition: &str) -> Result<VerbFormSet, MorphError> {
    let (infinitive, particle) = split_reflexive(lemma.trim());
    let set = match find_athematic(infinitive) {
        Some((prefix, verb)) => conjugate_athematic(prefix, verb),
        None => conjugate_regular(&Stems::derive(infinitive, addition)?),
    };
    Ok(match particle {
        Some(particle) => set.map_forms(|form| format!("{form} {particle}")),
        None => set,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primaries(slots: &[ParadigmSlot]) -> Vec<&str> {
        slots.iter().map(ParadigmSlot::primary).collect()
    }

    #[test]
    fn test_classes() {
        use ConjugationClass::*;
        for (lemma, addition, class) in [
            ("byti", "", Athematic),
            ("kupovati", "", Ovati),
            ("tęgnuti", "", Nuti),
            ("dělati", "", Ati),
            ("viděti", "", Eti),
            ("hvaliti", "", Iti),
            ("kryti", "", Yti),
            ("čuti", "", Yti),
            ("nesti", "", Sti),
            ("lězti", "", Sti),
            ("moći", "(može)", Ci),
            ("vzęti", "(vzęme)", Given),
            ("učiti sę", "", Iti),
        ] {
            assert_eq!(classify(lemma, addition), Ok(class), "{lemma}");
        }
        assert_eq!(classify("moći", ""), Ok(Ci));
        assert_eq!(classify("pojesti", ""), Ok(Athematic));
        assert_eq!(classify("glodati", ""), Ok(Ati));
        assert!(classify("vzęti", "(+4)").is_err());
        assert!(classify("dom", "").is_err());
    }

    #[test]
    fn test_ati_with_contracted_forms() {
        let v = conjugate("dělati", "").unwrap();
        assert_eq!(v.present[0].primary(), "dělajų");
        assert_eq!(v.present[0].variant(), Some("dělam"));
        assert_eq!(v.present[2].variant(), Some("děla"));
        assert_eq!(v.present[5].primary(), "dělajųt");
        assert_eq!(v.present[5].variant(), None);
        assert_eq!(v.imperative.primary(), "dělaj");
        assert_eq!(v.present_active_participle.primary(), "dělajųći");
        assert_eq!(v.present_passive_participle.primary(), "dělajemy");
        assert_eq!(v.past_active_participle.primary(), "dělavši");
        assert_eq!(v.past_passive_participle.primary(), "dělany");
        assert_eq!(v.gerund.primary(), "dělanje");
        assert_eq!(primaries(&v.imperfect), ["dělah", "dělaše", "dělaše", "dělahmo", "dělaste", "dělahų"]);
        assert_eq!(v.future[1].primary(), "bųdeš dělati");
    }

    #[test]
    fn test_addition_overrides_present_stem() {
        let v = conjugate("pisati", "(piše)").unwrap();
        assert_eq!(primaries(&v.present), ["pišų", "pišeš", "piše", "pišemo", "pišete", "pišųt"]);
        assert!(v.present.iter().all(|s| s.variant().is_none()));
        assert_eq!(v.imperative.primary(), "piši");
        assert_eq!(v.perfect[2].primary(), "je pisal");
    }

    #[test]
    fn test_i_conjugation() {
        let v = conjugate("hvaliti", "").unwrap();
        assert_eq!(primaries(&v.present), ["hvaljų", "hvališ", "hvali", "hvalimo", "hvalite", "hvalęt"]);
        assert_eq!(v.present[0].variant(), Some("hvalim"));
        assert_eq!(v.present_active_participle.primary(), "hvalęći");
        assert_eq!(v.past_passive_participle.primary(), "hvaleny");
        assert_eq!(v.imperfect[0].primary(), "hvalih");

        let v = conjugate("viděti", "").unwrap();
        assert_eq!(v.perfect[3].primary(), "je viděla");
        assert_eq!(v.past_passive_participle.primary(), "viděny");
    }

    #[test]
    fn test_consonant_stems() {
        let v = conjugate("nesti", "").unwrap();
        assert_eq!(v.present[1].primary(), "neseš");
        assert_eq!(v.imperfect[0].primary(), "nesěh");
        assert_eq!(v.past_active_participle.primary(), "nesši");
        assert_eq!(v.perfect[4].primary(), "je neslo");

        let v = conjugate("moći", "(može)").unwrap();
        assert_eq!(v.present[5].primary(), "možųt");
        assert_eq!(v.conditional[0].primary(), "byh mogl");
        assert_eq!(v.conditional[0].variant(), Some("byh mogla"));

    }

    #[test]
    fn test_ci_verbs_without_addition() {
        let v = conjugate("moći", "").unwrap();
        assert_eq!(v.infinitive.primary(), "moći");
        assert_eq!(primaries(&v.present), ["možų", "možeš", "može", "možemo", "možete", "možųt"]);
        assert_eq!(v.perfect[0].primary(), "jesm mogl");

        let v = conjugate("peći", "").unwrap();
        assert_eq!(v.present[0].primary(), "pečų");
        assert_eq!(v.perfect[3].primary(), "je pekla");

        let v = conjugate("rěći", "").unwrap();
        assert_eq!(v.present[1].primary(), "rěčeš");
        assert_eq!(v.conditional[2].primary(), "by rěkl");
        assert!(!v.is_empty());
    }

    #[test]
    fn test_addition_with_government_note() {
        let v = conjugate("pisati", "(piše), (+4)").unwrap();
        assert_eq!(v.present[0].primary(), "pišų");
        assert_eq!(v.present[5].primary(), "pišųt");

        let v = conjugate("pisati", "(+4) (piše)").unwrap();
        assert_eq!(v.present[0].primary(), "pišų");
    }

    #[test]
    fn test_compound_tenses_split_third_singular() {
        let v = conjugate("kupovati", "").unwrap();
        assert_eq!(
            primaries(&v.pluperfect),
            [
                "běh kupoval",
                "běše kupoval",
                "běše kupoval",
                "běše kupovala",
                "běše kupovalo",
                "běhmo kupovali",
                "běste kupovali",
                "běhų kupovali",
            ]
        );
        assert_eq!(v.present[0].primary(), "kupujų");
        assert_eq!(v.imperative.primary(), "kupuj");
    }

    #[test]
    fn test_athematic() {
        let v = conjugate("byti", "").unwrap();
        assert_eq!(primaries(&v.present), PERFECT_AUX);
        assert_eq!(primaries(&v.imperfect), PLUPERFECT_AUX);
        assert_eq!(primaries(&v.future), FUTURE_AUX);
        assert_eq!(v.perfect[0].primary(), "jesm byl");

        let v = conjugate("dati", "").unwrap();
        assert_eq!(v.present[5].primary(), "dadųt");
        assert_eq!(v.future[0].primary(), "bųdų dati");
    }

    #[test]
    fn test_prefixed_athematic_keeps_prefix() {
        let v = conjugate("pojesti", "").unwrap();
        assert_eq!(primaries(&v.present), ["pojem", "poješ", "poje", "pojemo", "pojete", "pojedęt"]);
        assert_eq!(v.perfect[0].primary(), "jesm pojedl");
        assert_eq!(v.imperative.primary(), "pojej");

        let v = conjugate("prodati", "").unwrap();
        assert_eq!(v.present[5].primary(), "prodadųt");
        assert_eq!(v.past_passive_participle.primary(), "prodany");
        assert_eq!(v.future[0].primary(), "bųdų prodati");

        let v = conjugate("odpověděti", "").unwrap();
        assert_eq!(v.present[0].primary(), "odpověm");
        assert_eq!(v.present[5].primary(), "odpovědęt");

        let v = conjugate("zabyti", "").unwrap();
        assert_eq!(v.present[0].primary(), "zabųdų");
        assert_eq!(v.infinitive.primary(), "zabyti");
        assert_eq!(v.perfect[2].primary(), "je zabyl");
        assert!(v.present_passive_participle.is_empty());

        // not a prefix: regular -ati
        assert_eq!(conjugate("glodati", "").unwrap().present[0].primary(), "glodajų");
    }

    #[test]
    fn test_reflexive_particle_is_appended() {
        let v = conjugate("učiti sę", "").unwrap();
        assert_eq!(v.infinitive.primary(), "učiti sę");
        assert_eq!(v.present[0].primary(), "učų sę");
        assert_eq!(v.present[0].variant(), Some("učim sę"));
        assert_eq!(v.perfect[0].primary(), "jesm učil sę");
        assert_eq!(v.future[5].primary(), "bųdųt učiti sę");
    }

    #[test]
    fn test_unknown_class() {
        assert_eq!(conjugate("xyz", ""), Err(MorphError::NoConjugationClass("xyz".into())));
        assert!(conjugate("", "").is_err());
    }
}
