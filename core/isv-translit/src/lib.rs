//! Script transliteration for the Interslavic internal spelling.
//!
//! Generated forms are alphabet-agnostic; a presentation layer passes every
//! cell through [`to_latin`] or [`to_cyrillic`] with the flavor it displays.

pub mod error;
pub mod flavors;
pub mod table;

pub use error::TranslitError;
pub use flavors::table;
pub use table::MappingTable;

use isv_protocol::{Flavor, Script};

/// Renders internal spelling in Latin letters under `flavor`.
pub fn to_latin(text: &str, flavor: Flavor) -> String {
    table(Script::Latin, flavor).apply(text)
}

/// Renders internal spelling in Cyrillic letters under `flavor`.
pub fn to_cyrillic(text: &str, flavor: Flavor) -> String {
    table(Script::Cyrillic, flavor).apply(text)
}

pub fn transliterate(text: &str, script: Script, flavor: Flavor) -> String {
    table(script, flavor).apply(text)
}

/// A transliterator bound to one mapping table, usable as a per-cell formatter.
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'a> {
    table: &'a MappingTable,
}

impl Transliterator<'static> {
    pub fn new(script: Script, flavor: Flavor) -> Self {
        Self { table: table(script, flavor) }
    }
}

impl<'a> Transliterator<'a> {
    /// Binds a caller-built table instead of one of the built-in flavors.
    pub fn with_table(table: &'a MappingTable) -> Self {
        Self { table }
    }

    pub fn apply(&self, text: &str) -> String {
        self.table.apply(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CANONICAL_LETTERS: &str = "aåbcčćdđďeęėěfghijklĺľmnńoȯprŕsśštťuųvyzźž";

    #[test]
    fn test_standard_latin() {
        assert_eq!(to_latin("ględati", Flavor::Standard), "gledati");
        assert_eq!(to_latin("kraĺ", Flavor::Standard), "kralj");
        assert_eq!(to_latin("pės", Flavor::Standard), "pes");
        assert_eq!(to_latin("sȯn", Flavor::Standard), "son");
        assert_eq!(to_latin("svěća", Flavor::Standard), "svěča");
        assert_eq!(to_latin("međa", Flavor::Standard), "medža");
    }

    #[test]
    fn test_etymological_latin_is_identity() {
        for word in ["ględati", "dělajųt", "kraĺ", "Åbc"] {
            assert_eq!(to_latin(word, Flavor::Etymological), word);
        }
    }

    #[test]
    fn test_flavor_differences() {
        assert_eq!(to_latin("lěty", Flavor::Simplified), "leti");
        assert_eq!(to_latin("sȯn", Flavor::Southern), "san");
        assert_eq!(to_latin("svěća", Flavor::Southern), "sveća");
        assert_eq!(to_latin("glåva", Flavor::Northern), "glova");
        assert_eq!(to_latin("dań", Flavor::Northern), "dań");
    }

    #[test]
    fn test_standard_cyrillic() {
        assert_eq!(to_cyrillic("dělajųt", Flavor::Standard), "дєлајут");
        assert_eq!(to_cyrillic("ljudi", Flavor::Standard), "људи");
        assert_eq!(to_cyrillic("konj", Flavor::Standard), "коњ");
        assert_eq!(to_cyrillic("džungla", Flavor::Standard), "џунгла");
        assert_eq!(to_cyrillic("Slovjanski", Flavor::Standard), "Словјански");
        assert_eq!(to_cyrillic("byti", Flavor::Simplified), "бити");
    }

    #[test]
    fn test_etymological_cyrillic_keeps_old_letters() {
        assert_eq!(to_cyrillic("pęt", Flavor::Etymological), "пѧт");
        assert_eq!(to_cyrillic("rųka", Flavor::Etymological), "рѫка");
        assert_eq!(to_cyrillic("sȯn", Flavor::Etymological), "сън");
        assert_eq!(to_cyrillic("lěto", Flavor::Etymological), "лѣто");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(to_cyrillic("grad 42!", Flavor::Standard), "град 42!");
        assert_eq!(to_latin("x-q", Flavor::Standard), "x-q");
    }

    #[test]
    fn test_latin_tables_emit_only_fixed_points() {
        for flavor in Flavor::ALL {
            let latin = table(Script::Latin, flavor);
            for value in latin.values() {
                assert_eq!(latin.apply(value), value, "{flavor:?} re-maps {value:?}");
            }
        }
    }

    #[test]
    fn test_transliterator_matches_free_functions() {
        let t = Transliterator::new(Script::Cyrillic, Flavor::Northern);
        assert_eq!(t.apply("koń"), to_cyrillic("koń", Flavor::Northern));
    }

    #[test]
    fn test_custom_table_prefers_longest_match() {
        let custom = MappingTable::new().with(&[("ie", "X"), ("i", "Y")]);
        let t = Transliterator::with_table(&custom);
        assert_eq!(t.apply("ie"), "X");
        assert_eq!(t.apply("iae"), "Yae");
    }

    proptest! {
        #[test]
        fn test_to_latin_is_idempotent(word in proptest::string::string_regex("[a-zA-Z ]{0,12}").unwrap(),
                                       picks in proptest::collection::vec(0usize..44, 0..12),
                                       flavor_ix in 0usize..5) {
            let letters: Vec<char> = CANONICAL_LETTERS.chars().collect();
            let mut text = word;
            text.extend(picks.iter().map(|i| letters[i % letters.len()]));
            let flavor = Flavor::ALL[flavor_ix];
            let once = to_latin(&text, flavor);
            prop_assert_eq!(to_latin(&once, flavor), once);
        }

        #[test]
        fn test_unmapped_text_is_unchanged(text in "[0-9 .,;:!?()\\-]{0,20}", flavor_ix in 0usize..5) {
            let flavor = Flavor::ALL[flavor_ix];
            prop_assert_eq!(to_latin(&text, flavor), text.clone());
            prop_assert_eq!(to_cyrillic(&text, flavor), text);
        }
    }
}
