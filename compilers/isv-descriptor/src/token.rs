#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Closed vocabulary of descriptor abbreviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Masculine,
    Feminine,
    Neuter,
    Animate,
    Plural,
    SingularOnly,
    Adjective,
    Adverb,
    Verb,
    Perfective,
    Imperfective,
    Transitive,
    Intransitive,
    Reflexive,
    Auxiliary,
    Indeclinable,
    Pronoun,
    Numeral,
    Preposition,
    Conjunction,
    Interjection,
    Particle,
    Prefix,
    Suffix,
    /// A well-formed word outside the vocabulary (e.g. `pers`, `card`).
    Unknown,
}

impl Tag {
    pub fn from_word(word: &str) -> Self {
        match word.to_ascii_lowercase().as_str() {
            "m" => Tag::Masculine,
            "f" => Tag::Feminine,
            "n" => Tag::Neuter,
            "anim" => Tag::Animate,
            "pl" => Tag::Plural,
            "sg" => Tag::SingularOnly,
            "adj" => Tag::Adjective,
            "adv" => Tag::Adverb,
            "v" => Tag::Verb,
            "pf" | "perf" => Tag::Perfective,
            "ipf" | "impf" => Tag::Imperfective,
            "tr" => Tag::Transitive,
            "intr" => Tag::Intransitive,
            "refl" => Tag::Reflexive,
            "aux" => Tag::Auxiliary,
            "indecl" => Tag::Indeclinable,
            "pron" => Tag::Pronoun,
            "num" => Tag::Numeral,
            "prep" => Tag::Preposition,
            "conj" => Tag::Conjunction,
            "intj" => Tag::Interjection,
            "particle" => Tag::Particle,
            "prefix" => Tag::Prefix,
            "suffix" => Tag::Suffix,
            _ => Tag::Unknown,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Token<'a> {
    pub span: Span,
    pub text: &'a str,
    pub tag: Tag,
}
