//! Per-script, per-flavor mapping tables.
//!
//! Input is the etymological internal spelling. Latin tables only list the
//! letters a flavor rewrites, and any key a Latin table can emit maps to itself.

use std::sync::LazyLock;

use isv_protocol::{Flavor, Script};

use crate::table::MappingTable;

/// Etymological letters reduced to the standard alphabet.
const STANDARD_LATIN: &[(&str, &str)] = &[
    ("å", "a"),
    ("ę", "e"),
    ("ų", "u"),
    ("ė", "e"),
    ("ȯ", "o"),
    ("ŕ", "r"),
    ("ĺ", "lj"),
    ("ľ", "lj"),
    ("ń", "nj"),
    ("ť", "t"),
    ("ď", "d"),
    ("ś", "s"),
    ("ź", "z"),
    ("ć", "č"),
    ("đ", "dž"),
];

const SIMPLIFIED_LATIN: &[(&str, &str)] = &[("ě", "e"), ("y", "i")];

const SOUTHERN_LATIN: &[(&str, &str)] = &[
    ("ě", "e"),
    ("y", "i"),
    ("ȯ", "a"),
    // South Slavic keeps the soft affricates
    ("ć", "ć"),
    ("đ", "đ"),
];

const NORTHERN_LATIN: &[(&str, &str)] = &[
    ("å", "o"),
    ("ų", "u"),
    ("ė", "e"),
    ("ȯ", "o"),
    ("ŕ", "r"),
    ("ĺ", "ľ"),
    ("ć", "č"),
    ("đ", "dž"),
];

/// Letters shared by every Cyrillic flavor. Digraphs must stay listed so that
/// they are never split into two single-letter substitutions.
const BASE_CYRILLIC: &[(&str, &str)] = &[
    ("a", "а"),
    ("b", "б"),
    ("c", "ц"),
    ("č", "ч"),
    ("d", "д"),
    ("dž", "џ"),
    ("e", "е"),
    ("ě", "є"),
    ("f", "ф"),
    ("g", "г"),
    ("h", "х"),
    ("i", "и"),
    ("j", "ј"),
    ("k", "к"),
    ("l", "л"),
    ("lj", "љ"),
    ("m", "м"),
    ("n", "н"),
    ("nj", "њ"),
    ("o", "о"),
    ("p", "п"),
    ("r", "р"),
    ("s", "с"),
    ("š", "ш"),
    ("t", "т"),
    ("u", "у"),
    ("v", "в"),
    ("y", "ы"),
    ("z", "з"),
    ("ž", "ж"),
];

const ETYMOLOGICAL_CYRILLIC: &[(&str, &str)] = &[
    ("å", "а̊"),
    ("ę", "ѧ"),
    ("ų", "ѫ"),
    ("ė", "ь"),
    ("ȯ", "ъ"),
    ("ě", "ѣ"),
    ("ŕ", "рь"),
    ("ĺ", "ль"),
    ("ľ", "ль"),
    ("ń", "нь"),
    ("ť", "ть"),
    ("ď", "дь"),
    ("ś", "сь"),
    ("ź", "зь"),
    ("ć", "ћ"),
    ("đ", "ђ"),
];

const STANDARD_CYRILLIC: &[(&str, &str)] = &[
    ("å", "а"),
    ("ę", "е"),
    ("ų", "у"),
    ("ė", "е"),
    ("ȯ", "о"),
    ("ŕ", "р"),
    ("ĺ", "љ"),
    ("ľ", "љ"),
    ("ń", "њ"),
    ("ť", "т"),
    ("ď", "д"),
    ("ś", "с"),
    ("ź", "з"),
    ("ć", "ч"),
    ("đ", "џ"),
];

const SIMPLIFIED_CYRILLIC: &[(&str, &str)] = &[("ě", "е"), ("y", "и")];

const SOUTHERN_CYRILLIC: &[(&str, &str)] = &[
    ("ě", "е"),
    ("y", "и"),
    ("ȯ", "а"),
    ("ć", "ћ"),
    ("đ", "ђ"),
];

const NORTHERN_CYRILLIC: &[(&str, &str)] = &[
    ("å", "о"),
    ("ų", "у"),
    ("ė", "е"),
    ("ȯ", "о"),
    ("ŕ", "р"),
    ("ĺ", "ль"),
    ("ľ", "ль"),
    ("ń", "нь"),
    ("ť", "ть"),
    ("ď", "дь"),
    ("ś", "сь"),
    ("ź", "зь"),
    ("ę", "я"),
    ("ć", "ч"),
    ("đ", "џ"),
];

fn latin(flavor: Flavor) -> MappingTable {
    match flavor {
        Flavor::Etymological => MappingTable::new(),
        Flavor::Standard => MappingTable::new().with(STANDARD_LATIN),
        Flavor::Simplified => MappingTable::new().with(STANDARD_LATIN).with(SIMPLIFIED_LATIN),
        Flavor::Southern => MappingTable::new().with(STANDARD_LATIN).with(SOUTHERN_LATIN),
        Flavor::Northern => MappingTable::new().with(NORTHERN_LATIN),
    }
}

fn cyrillic(flavor: Flavor) -> MappingTable {
    let base = MappingTable::new().with(BASE_CYRILLIC);
    match flavor {
        Flavor::Etymological => base.with(ETYMOLOGICAL_CYRILLIC),
        Flavor::Standard => base.with(STANDARD_CYRILLIC),
        Flavor::Simplified => base.with(STANDARD_CYRILLIC).with(SIMPLIFIED_CYRILLIC),
        Flavor::Southern => base.with(STANDARD_CYRILLIC).with(SOUTHERN_CYRILLIC),
        Flavor::Northern => base.with(NORTHERN_CYRILLIC),
    }
}

static LATIN: LazyLock<[MappingTable; 5]> = LazyLock::new(|| Flavor::ALL.map(latin));
static CYRILLIC: LazyLock<[MappingTable; 5]> = LazyLock::new(|| Flavor::ALL.map(cyrillic));

/// The read-only table for `script` under `flavor`; built once per process.
pub fn table(script: Script, flavor: Flavor) -> &'static MappingTable {
    let tables = match script {
        Script::Latin => &*LATIN,
        Script::Cyrillic => &*CYRILLIC,
    };
    &tables[flavor as usize]
}
