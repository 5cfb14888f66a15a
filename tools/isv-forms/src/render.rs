//! Plain-text and JSON rendering of paradigms.

use std::fmt::Write;

use isv_protocol::{
    AdjectiveParadigm, CaseOrder, Flavor, Gender, GrammaticalFeatures, NounCaseTable, Number,
    Paradigm, ParadigmSlot, Person, Script, VerbFormSet, COMPOUND_PERSONS, SIMPLE_PERSONS,
};
use isv_translit::Transliterator;
use serde::Serialize;

/// One paradigm as shown in one script.
#[derive(Debug, Serialize)]
pub struct Rendering {
    pub script: Script,
    pub paradigm: Paradigm,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub lemma: &'a str,
    pub features: &'a GrammaticalFeatures,
    pub flavor: Flavor,
    pub renderings: Vec<Rendering>,
}

pub fn render_all(paradigm: &Paradigm, scripts: &[Script], flavor: Flavor) -> Vec<Rendering> {
    scripts
        .iter()
        .map(|&script| {
            let translit = Transliterator::new(script, flavor);
            Rendering { script, paradigm: paradigm.map_forms(|form| translit.apply(form)) }
        })
        .collect()
}

fn cell(slot: &ParadigmSlot) -> String {
    if slot.is_empty() {
        return "-".to_string();
    }
    slot.forms().collect::<Vec<_>>().join(" / ")
}

/// Left-aligned columns, padded by character count.
fn grid(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();
    let mut out = String::new();
    for row in rows {
        let mut line = String::new();
        for (c, text) in row.iter().enumerate() {
            let pad = widths[c].saturating_sub(text.chars().count());
            let _ = write!(line, "{text}{}  ", " ".repeat(pad));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn noun_text(table: &NounCaseTable, order: &CaseOrder) -> String {
    let mut rows = vec![vec!["".to_string(), "singular".to_string(), "plural".to_string()]];
    rows.extend(order.noun_rows(table).map(|row| {
        vec![row.case.abbreviation().to_string(), cell(&row.singular), cell(&row.plural)]
    }));
    grid(&rows)
}

fn adjective_text(paradigm: &AdjectiveParadigm, order: &CaseOrder) -> String {
    let header = ["", "m", "n", "f", "pl m", "pl f/n"];
    let mut rows = vec![header.iter().map(|s| s.to_string()).collect::<Vec<_>>()];
    rows.extend(order.adjective_rows(paradigm).map(|(sg, pl)| {
        vec![
            sg.case.abbreviation().to_string(),
            cell(&sg.masculine),
            cell(&sg.neuter),
            cell(&sg.feminine),
            cell(&pl.masculine),
            cell(&pl.feminine_neuter),
        ]
    }));
    let mut out = grid(&rows);
    out.push('\n');
    let degrees: Vec<Vec<String>> = paradigm
        .comparison
        .iter()
        .map(|d| vec![format!("{:?}", d.degree).to_lowercase(), cell(&d.adjective), cell(&d.adverb)])
        .collect();
    out.push_str(&grid(&degrees));
    out
}

/// `1sg`, `3pl`; the split 3rd singular gets its gender: `3sg f`.
fn person_label(person: Person, number: Number, gender: Option<Gender>) -> String {
    let number = match number {
        Number::Singular => "sg",
        Number::Plural => "pl",
    };
    let mut label = format!("{}{number}", person as u8);
    if let Some(gender) = gender {
        label.push(' ');
        label.extend(gender.name().chars().next());
    }
    label
}

fn verb_text(forms: &VerbFormSet) -> String {
    let mut out = grid(
        &forms
            .non_finite()
            .iter()
            .map(|(label, slot)| vec![label.to_string(), cell(slot)])
            .collect::<Vec<_>>(),
    );

    let simple = [("present", &forms.present), ("imperfect", &forms.imperfect), ("future", &forms.future)];
    let mut rows = vec![std::iter::once(String::new())
        .chain(simple.iter().map(|(name, _)| name.to_string()))
        .collect::<Vec<_>>()];
    for (i, &(person, number)) in SIMPLE_PERSONS.iter().enumerate() {
        rows.push(
            std::iter::once(person_label(person, number, None))
                .chain(simple.iter().map(|(_, tense)| cell(&tense[i])))
                .collect(),
        );
    }
    out.push('\n');
    out.push_str(&grid(&rows));

    let compound = [
        ("perfect", &forms.perfect),
        ("pluperfect", &forms.pluperfect),
        ("conditional", &forms.conditional),
    ];
    let mut rows = vec![std::iter::once(String::new())
        .chain(compound.iter().map(|(name, _)| name.to_string()))
        .collect::<Vec<_>>()];
    for (i, &(person, number, gender)) in COMPOUND_PERSONS.iter().enumerate() {
        rows.push(
            std::iter::once(person_label(person, number, gender))
                .chain(compound.iter().map(|(_, tense)| cell(&tense[i])))
                .collect(),
        );
    }
    out.push('\n');
    out.push_str(&grid(&rows));
    out
}

pub fn paradigm_text(paradigm: &Paradigm, order: &CaseOrder) -> String {
    match paradigm {
        Paradigm::Noun(table) => noun_text(table, order),
        Paradigm::Adjective(table) => adjective_text(table, order),
        Paradigm::Verb(forms) => verb_text(forms),
    }
}

/// Part of speech followed by whatever else the descriptor said:
/// `noun, masculine, animate` or `verb, imperfective`.
fn features_text(features: &GrammaticalFeatures) -> String {
    let mut parts = vec![features.part_of_speech.name()];
    parts.extend(features.gender.map(Gender::name));
    if features.animate {
        parts.push("animate");
    }
    if features.plural {
        parts.push("plural");
    }
    parts.extend(features.verb_type.map(|aspect| aspect.name()));
    parts.join(", ")
}

pub fn report_text(report: &Report<'_>, order: &CaseOrder) -> String {
    let mut out = String::new();
    for rendering in &report.renderings {
        let _ = writeln!(
            out,
            "{} [{}, {}, flavor {}]",
            report.lemma,
            features_text(report.features),
            rendering.script,
            report.flavor
        );
        out.push_str(&paradigm_text(&rendering.paradigm, order));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use isv_protocol::{Case, PartOfSpeech, VerbType};

    #[test]
    fn test_rendering_transliterates_every_cell() {
        let table = isv_morph::decline_noun("kraĺ", Gender::Masculine, true);
        let renderings = render_all(&Paradigm::Noun(table), &Script::ALL, Flavor::Standard);
        let Paradigm::Noun(latin) = &renderings[0].paradigm else { panic!() };
        let Paradigm::Noun(cyrillic) = &renderings[1].paradigm else { panic!() };
        assert_eq!(latin.row(Case::Genitive).singular.primary(), "kralja");
        assert_eq!(cyrillic.row(Case::Genitive).singular.primary(), "краља");
    }

    #[test]
    fn test_noun_text_follows_case_order() {
        let table = isv_morph::decline_noun("grad", Gender::Masculine, false);
        let text = noun_text(&table, &CaseOrder::default());
        let first_cells: Vec<&str> = text.lines().skip(1).filter_map(|l| l.split_whitespace().next()).collect();
        assert_eq!(first_cells, ["nom", "acc", "gen", "loc", "dat", "ins", "voc"]);
        assert!(text.contains("gradom"));
    }

    #[test]
    fn test_empty_cells_are_dashes() {
        let text = noun_text(&NounCaseTable::empty(), &CaseOrder::CANONICAL);
        assert_eq!(text.lines().count(), 8);
        assert!(text.lines().skip(1).all(|l| l.ends_with('-')));
    }

    #[test]
    fn test_verb_text_has_all_sections() {
        let forms = isv_morph::conjugate_verb("dělati", "");
        let text = verb_text(&forms);
        assert!(text.contains("dělajų / dělam"));
        assert!(text.contains("3sg f"));
        assert!(text.contains("conditional"));
    }

    #[test]
    fn test_person_labels() {
        let simple: Vec<String> = SIMPLE_PERSONS.iter().map(|&(p, n)| person_label(p, n, None)).collect();
        assert_eq!(simple, ["1sg", "2sg", "3sg", "1pl", "2pl", "3pl"]);
        let compound: Vec<String> = COMPOUND_PERSONS.iter().map(|&(p, n, g)| person_label(p, n, g)).collect();
        assert_eq!(compound, ["1sg", "2sg", "3sg m", "3sg f", "3sg n", "1pl", "2pl", "3pl"]);
    }

    #[test]
    fn test_report_header_lists_descriptor_features() {
        let noun = GrammaticalFeatures {
            part_of_speech: PartOfSpeech::Noun,
            gender: Some(Gender::Masculine),
            animate: true,
            plural: true,
            ..GrammaticalFeatures::default()
        };
        let paradigm = Paradigm::Noun(isv_morph::decline_noun("brat", Gender::Masculine, true));
        let report = Report {
            lemma: "brat",
            features: &noun,
            flavor: Flavor::Standard,
            renderings: render_all(&paradigm, &[Script::Latin], Flavor::Standard),
        };
        let text = report_text(&report, &CaseOrder::default());
        assert!(text.starts_with("brat [noun, masculine, animate, plural, latin, flavor"), "{text}");

        let verb = GrammaticalFeatures {
            part_of_speech: PartOfSpeech::Verb,
            verb_type: Some(VerbType::Biaspectual),
            ..GrammaticalFeatures::default()
        };
        assert_eq!(features_text(&verb), "verb, imperfective/perfective");
    }
}
