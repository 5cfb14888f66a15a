use std::collections::HashMap;

use crate::error::TranslitError;

/// Grapheme mapping with longest-match lookup.
///
/// Keys are stored lowercase; the case of the source is re-applied to the
/// replacement when a match is made.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: HashMap<String, String>,
    /// Length in chars of the longest key.
    max_key_len: usize,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict constructor: rejects empty and duplicate keys.
    pub fn try_from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self, TranslitError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (key, value) in pairs {
            let key = key.as_ref();
            if key.is_empty() {
                return Err(TranslitError::EmptyKey);
            }
            if table.contains(key) {
                return Err(TranslitError::DuplicateKey(key.to_string()));
            }
            table.insert(key, value);
        }
        Ok(table)
    }

    /// Adds or replaces a mapping.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let key = key.to_lowercase();
        self.max_key_len = self.max_key_len.max(key.chars().count());
        self.entries.insert(key, value.into());
    }

    /// Layers `pairs` over the current entries, later pairs winning.
    pub fn with(mut self, pairs: &[(&str, &str)]) -> Self {
        for (key, value) in pairs {
            self.insert(key, *value);
        }
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Scans left to right, trying the longest key first at each position.
    /// Characters without a mapping are copied unchanged.
    pub fn apply(&self, text: &str) -> String {
        if self.entries.is_empty() {
            return text.to_string();
        }
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut window = String::with_capacity(self.max_key_len * 4);
        let mut i = 0;

        'scan: while i < chars.len() {
            let longest = self.max_key_len.min(chars.len() - i);
            for len in (1..=longest).rev() {
                let source = &chars[i..i + len];
                window.clear();
                window.extend(source.iter().flat_map(|c| c.to_lowercase()));
                if let Some(replacement) = self.entries.get(&window) {
                    push_with_case(&mut out, source, chars.get(i + len).copied(), replacement);
                    i += len;
                    continue 'scan;
                }
            }
            out.push(chars[i]);
            i += 1;
        }
        out
    }
}

/// `next` is the character following the match; a single capital followed by
/// another capital is treated as part of an all-caps word.
fn push_with_case(out: &mut String, source: &[char], next: Option<char>, replacement: &str) {
    let first_upper = source.first().is_some_and(|c| c.is_uppercase());
    if !first_upper {
        out.push_str(replacement);
        return;
    }
    let all_upper = if source.len() > 1 {
        source.iter().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase())
    } else {
        next.is_some_and(char::is_uppercase)
    };
    if all_upper {
        out.push_str(&replacement.to_uppercase());
        return;
    }
    let mut rest = replacement.chars();
    if let Some(first) = rest.next() {
        out.extend(first.to_uppercase());
        out.push_str(rest.as_str());
    }
}
