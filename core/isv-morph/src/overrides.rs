//! Nouns whose declension is listed rather than derived.

use std::collections::HashMap;
use std::sync::LazyLock;

use isv_protocol::NounCaseTable;

type Rows = [(&'static str, &'static str); 7];

/// (singular, plural) per case, in `Case::ALL` order.
const IRREGULAR: &[(&str, Rows)] = &[
    (
        "člověk",
        [
            ("člověk", "ljudi"),
            ("člověka", "ljudij"),
            ("člověka", "ljudij"),
            ("člověku", "ljudjam"),
            ("člověkom", "ljudjami"),
            ("člověku", "ljudjah"),
            ("člověče", "ljudi"),
        ],
    ),
    (
        "oko",
        [
            ("oko", "oči"),
            ("oko", "oči"),
            ("oka", "očij"),
            ("oku", "očam"),
            ("okom", "očami"),
            ("oku", "očah"),
            ("oko", "oči"),
        ],
    ),
    (
        "uho",
        [
            ("uho", "uši"),
            ("uho", "uši"),
            ("uha", "ušij"),
            ("uhu", "ušam"),
            ("uhom", "ušami"),
            ("uhu", "ušah"),
            ("uho", "uši"),
        ],
    ),
    (
        "dětę",
        [
            ("dětę", "děti"),
            ("dětę", "děti"),
            ("dětęte", "dětij"),
            ("dětęti", "dětjam"),
            ("dětętem", "dětjami"),
            ("dětęti", "dětjah"),
            ("dětę", "děti"),
        ],
    ),
    (
        "mati",
        [
            ("mati", "materi"),
            ("mater", "materi"),
            ("matere", "materij"),
            ("materi", "materjam"),
            ("materjų", "materjami"),
            ("materi", "materjah"),
            ("mati", "materi"),
        ],
    ),
    (
        "dȯči",
        [
            ("dȯči", "dȯčeri"),
            ("dȯčer", "dȯčeri"),
            ("dȯčere", "dȯčerij"),
            ("dȯčeri", "dȯčerjam"),
            ("dȯčerjų", "dȯčerjami"),
            ("dȯčeri", "dȯčerjah"),
            ("dȯči", "dȯčeri"),
        ],
    ),
];

static TABLES: LazyLock<HashMap<&'static str, NounCaseTable>> = LazyLock::new(|| {
    IRREGULAR
        .iter()
        .map(|(lemma, rows)| {
            let table = NounCaseTable::from_fn(|case| {
                let (singular, plural) = rows[case.index()];
                (singular.into(), plural.into())
            });
            (*lemma, table)
        })
        .collect()
});

/// The listed table for `lemma`, matched on exact spelling.
pub fn lookup(lemma: &str) -> Option<&'static NounCaseTable> {
    TABLES.get(lemma)
}

pub fn lemmas() -> impl Iterator<Item = &'static str> {
    IRREGULAR.iter().map(|(lemma, _)| *lemma)
}
