//! Sound rules applied where a stem meets an ending.

const VOWELS: &[char] = &['a', 'å', 'e', 'ę', 'ė', 'ě', 'i', 'o', 'ȯ', 'u', 'ų', 'y'];

/// Consonants after which hard endings turn soft.
const SOFT: &[char] = &[
    'c', 'č', 'ć', 'đ', 'ď', 'j', 'ĺ', 'ľ', 'ń', 'ŕ', 'ś', 'š', 'ť', 'ź', 'ž',
];

/// Consonants that attract an inserted `e` in a zero-ending genitive plural.
const INSERTION_TRIGGERS: &[char] = &['k', 'l', 'n', 'r', 'c'];

/// A cluster opened by one of these keeps its zero ending: `bank`, `mark`, `vojn`.
const SONORANTS: &[char] = &['j', 'l', 'ĺ', 'm', 'n', 'ń', 'r', 'ŕ', 'v'];

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&lower(c))
}

pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

pub fn is_soft(c: char) -> bool {
    SOFT.contains(&lower(c))
}

pub fn ends_soft(stem: &str) -> bool {
    stem.chars().last().is_some_and(is_soft)
}

pub fn ends_in_consonant(word: &str) -> bool {
    word.chars().last().is_some_and(is_consonant)
}

/// A single word of letters with at least one vowel.
pub fn is_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic) && text.chars().any(is_vowel)
}

/// Removes the last character of `word`.
pub fn chop(word: &str) -> &str {
    match word.char_indices().last() {
        Some((i, _)) => &word[..i],
        None => word,
    }
}

/// Drops a fleeting `ė`/`ȯ` from the last syllable: `pės` -> `ps`, `otėc` -> `otc`.
pub fn drop_fleeting(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let Some(pos) = chars.iter().rposition(|&c| is_vowel(c)) else {
        return stem.to_string();
    };
    if pos == 0 || pos + 1 >= chars.len() || !matches!(lower(chars[pos]), 'ė' | 'ȯ') {
        return stem.to_string();
    }
    chars
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != pos)
        .map(|(_, &c)| c)
        .collect()
}

/// First palatalisation: k -> č, g -> ž, h -> š, c -> č.
pub fn palatalize(c: char) -> Option<char> {
    match c {
        'k' | 'c' => Some('č'),
        'g' => Some('ž'),
        'h' => Some('š'),
        _ => None,
    }
}

/// Reverses [`palatalize`] for the velars; used to recover `mog-` from `može`.
pub fn depalatalize(c: char) -> Option<char> {
    match c {
        'č' => Some('k'),
        'ž' => Some('g'),
        'š' => Some('h'),
        _ => None,
    }
}

pub fn palatalize_last(stem: &str) -> Option<String> {
    let last = stem.chars().last()?;
    palatalize(last).map(|p| {
        let mut out = chop(stem).to_string();
        out.push(p);
        out
    })
}

/// Rewrites the first letter of `ending` through `rule` when the stem is soft.
pub fn adjust_ending(soft: bool, ending: &str, rule: fn(char) -> Option<char>) -> String {
    if !soft {
        return ending.to_string();
    }
    let mut chars = ending.chars();
    match chars.next().and_then(rule) {
        Some(replacement) => {
            let mut out = String::with_capacity(ending.len());
            out.push(replacement);
            out.push_str(chars.as_str());
            out
        }
        None => ending.to_string(),
    }
}

/// Noun endings after a soft stem: o -> e, y -> e, ě -> i.
pub fn soften_noun(c: char) -> Option<char> {
    match c {
        'o' | 'y' => Some('e'),
        'ě' => Some('i'),
        _ => None,
    }
}

/// Adjective endings after a soft stem: y -> i, o -> e.
pub fn soften_adjective(c: char) -> Option<char> {
    match c {
        'y' => Some('i'),
        'o' => Some('e'),
        _ => None,
    }
}

/// `sestr` -> `sester`, `okn` -> `oken`, `desk` -> `desek`; `None` unless the
/// stem ends in an obstruent followed by a trigger consonant.
pub fn insert_e(stem: &str) -> Option<String> {
    let mut rev = stem.chars().rev();
    let last = rev.next()?;
    let before = lower(rev.next()?);
    if !INSERTION_TRIGGERS.contains(&lower(last)) || !is_consonant(before) || SONORANTS.contains(&before) {
        return None;
    }
    let mut out = chop(stem).to_string();
    out.push('e');
    out.push(last);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleeting_vowels() {
        assert_eq!(drop_fleeting("pės"), "ps");
        assert_eq!(drop_fleeting("sȯn"), "sn");
        assert_eq!(drop_fleeting("otėc"), "otc");
        assert_eq!(drop_fleeting("grad"), "grad");
        // word-initial and final vowels stay
        assert_eq!(drop_fleeting("ȯt"), "ȯt");
        assert_eq!(drop_fleeting("kofė"), "kofė");
    }

    #[test]
    fn test_softness() {
        assert!(ends_soft("kraĺ"));
        assert!(ends_soft("muž"));
        assert!(!ends_soft("grad"));
        assert_eq!(adjust_ending(true, "om", soften_noun), "em");
        assert_eq!(adjust_ending(true, "ě", soften_noun), "i");
        assert_eq!(adjust_ending(false, "om", soften_noun), "om");
        assert_eq!(adjust_ending(true, "ym", soften_adjective), "im");
    }

    #[test]
    fn test_palatalization() {
        assert_eq!(palatalize_last("člověk").as_deref(), Some("člověč"));
        assert_eq!(palatalize_last("bog").as_deref(), Some("bož"));
        assert_eq!(palatalize_last("grad"), None);
        assert_eq!(depalatalize('ž'), Some('g'));
    }

    #[test]
    fn test_e_insertion() {
        assert_eq!(insert_e("sestr").as_deref(), Some("sester"));
        assert_eq!(insert_e("okn").as_deref(), Some("oken"));
        assert_eq!(insert_e("desk").as_deref(), Some("desek"));
        assert_eq!(insert_e("měst"), None);
        assert_eq!(insert_e("žen"), None);
        // sonorant + trigger is left alone
        assert_eq!(insert_e("bank"), None);
        assert_eq!(insert_e("mark"), None);
        assert_eq!(insert_e("vojn"), None);
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("dělo"));
        assert!(!is_word("zzzzz-nonmatching"));
        assert!(!is_word("brr"));
        assert!(!is_word("dva slova"));
        assert!(!is_word(""));
    }
}
