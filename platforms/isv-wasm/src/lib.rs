use isv_protocol::{
    ArchivedParadigmArchive, CompiledEntry, Flavor, Gender, GrammaticalFeatures, Paradigm,
    ParadigmArchive, Script, WordEntry,
};
use rkyv::{AlignedVec, Deserialize};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The structured response sent back to JavaScript
#[derive(Debug, Serialize)]
pub struct WordForms {
    pub lemma: String,
    pub features: GrammaticalFeatures,
    /// `None` for parts of speech that do not inflect
    pub paradigm: Option<Paradigm>,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn parse_flavor(flavor: &str) -> Result<Flavor, String> {
    if flavor.trim().is_empty() {
        return Ok(Flavor::default());
    }
    flavor.parse().map_err(|e| format!("{e}"))
}

fn parse_gender(gender: &str) -> Result<Gender, String> {
    match gender.trim().to_ascii_lowercase().as_str() {
        "m" | "masculine" => Ok(Gender::Masculine),
        "f" | "feminine" => Ok(Gender::Feminine),
        "n" | "neuter" => Ok(Gender::Neuter),
        other => Err(format!("unknown gender: {other:?}")),
    }
}

/// Descriptor in, forms out, rendered in `script`.
fn word_forms(lemma: &str, descriptor: &str, addition: &str, script: Script, flavor: Flavor) -> WordForms {
    let mut entry = WordEntry::new(lemma, descriptor);
    if !addition.trim().is_empty() {
        entry = entry.with_addition(addition);
    }
    let features = isv_descriptor::extract_features(&entry.pos_descriptor);
    let translit = isv_translit::Transliterator::new(script, flavor);
    let paradigm = isv_morph::inflect(&entry, &features).map(|p| p.map_forms(|form| translit.apply(form)));
    WordForms { lemma: entry.lemma, features, paradigm }
}

#[wasm_bindgen(js_name = extractFeatures)]
pub fn extract_features(descriptor: &str) -> Result<JsValue, JsError> {
    to_js(&isv_descriptor::extract_features(descriptor))
}

#[wasm_bindgen(js_name = declineNoun)]
pub fn decline_noun(lemma: &str, gender: &str, animate: bool) -> Result<JsValue, JsError> {
    let gender = parse_gender(gender).map_err(|e| JsError::new(&e))?;
    to_js(&isv_morph::decline_noun(lemma, gender, animate))
}

#[wasm_bindgen(js_name = declineAdjective)]
pub fn decline_adjective(lemma: &str) -> Result<JsValue, JsError> {
    to_js(&isv_morph::decline_adjective(lemma))
}

#[wasm_bindgen(js_name = conjugateVerb)]
pub fn conjugate_verb(lemma: &str, addition: &str) -> Result<JsValue, JsError> {
    to_js(&isv_morph::conjugate_verb(lemma, addition))
}

/// Full pipeline for one dictionary row. `script` is "latin" or "cyrillic".
#[wasm_bindgen]
pub fn inflect(
    lemma: &str,
    descriptor: &str,
    addition: &str,
    script: &str,
    flavor: &str,
) -> Result<JsValue, JsError> {
    let script: Script = script.parse().map_err(|e| JsError::new(&format!("{e}")))?;
    let flavor = parse_flavor(flavor).map_err(|e| JsError::new(&e))?;
    to_js(&word_forms(lemma, descriptor, addition, script, flavor))
}

#[wasm_bindgen(js_name = toLatin)]
pub fn to_latin(text: &str, flavor: &str) -> Result<String, JsError> {
    let flavor = parse_flavor(flavor).map_err(|e| JsError::new(&e))?;
    Ok(isv_translit::to_latin(text, flavor))
}

#[wasm_bindgen(js_name = toCyrillic)]
pub fn to_cyrillic(text: &str, flavor: &str) -> Result<String, JsError> {
    let flavor = parse_flavor(flavor).map_err(|e| JsError::new(&e))?;
    Ok(isv_translit::to_cyrillic(text, flavor))
}

/// A precompiled paradigm archive running in the browser
#[wasm_bindgen]
pub struct ParadigmStore {
    // Owned, aligned copy of the bytes fetched by JS
    data: AlignedVec,
}

impl ParadigmStore {
    fn load(bytes: &[u8]) -> Result<Self, String> {
        let mut data = AlignedVec::with_capacity(bytes.len());
        data.extend_from_slice(bytes);
        rkyv::check_archived_root::<ParadigmArchive>(&data).map_err(|e| format!("invalid paradigm archive: {e}"))?;
        Ok(Self { data })
    }

    fn archive(&self) -> &ArchivedParadigmArchive {
        // Validated in `load`
        unsafe { rkyv::archived_root::<ParadigmArchive>(&self.data) }
    }

    fn entry(&self, lemma: &str) -> Option<CompiledEntry> {
        let archived = self.archive().entries.iter().find(|e| e.entry.lemma.as_str() == lemma)?;
        let entry: Result<CompiledEntry, _> = archived.deserialize(&mut rkyv::Infallible);
        entry.ok()
    }
}

#[wasm_bindgen]
impl ParadigmStore {
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<u8>) -> Result<ParadigmStore, JsError> {
        Self::load(&data).map_err(|e| JsError::new(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> u32 {
        self.archive().version
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.archive().entries.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.archive().entries.is_empty()
    }

    /// The stored entry rendered in `script`, or `undefined`.
    pub fn lookup(&self, lemma: &str, script: &str, flavor: &str) -> Result<JsValue, JsError> {
        let Some(entry) = self.entry(lemma) else {
            return Ok(JsValue::UNDEFINED);
        };
        let script: Script = script.parse().map_err(|e| JsError::new(&format!("{e}")))?;
        let flavor = parse_flavor(flavor).map_err(|e| JsError::new(&e))?;
        let translit = isv_translit::Transliterator::new(script, flavor);
        to_js(&WordForms {
            lemma: entry.entry.lemma,
            features: entry.features,
            paradigm: entry.paradigm.map(|p| p.map_forms(|form| translit.apply(form))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isv_protocol::{Case, PartOfSpeech, WordId};

    #[test]
    fn test_word_forms_in_cyrillic() {
        let forms = word_forms("žena", "f.", "", Script::Cyrillic, Flavor::Standard);
        assert_eq!(forms.features.part_of_speech, PartOfSpeech::Noun);
        let Some(Paradigm::Noun(table)) = forms.paradigm else { panic!("expected a noun") };
        assert_eq!(table.row(Case::Nominative).plural.primary(), "жены");
    }

    #[test]
    fn test_uninflected_word_has_no_paradigm() {
        let forms = word_forms("i", "conj.", "", Script::Latin, Flavor::Standard);
        assert!(forms.paradigm.is_none());
    }

    #[test]
    fn test_parsers() {
        assert_eq!(parse_flavor(""), Ok(Flavor::Standard));
        assert_eq!(parse_flavor("S"), Ok(Flavor::Northern));
        assert!(parse_flavor("x").is_err());
        assert_eq!(parse_gender("F"), Ok(Gender::Feminine));
        assert!(parse_gender("common").is_err());
    }

    #[test]
    fn test_store_validates_and_finds() {
        let entry = WordEntry::new("grad", "m.");
        let features = isv_descriptor::extract_features(&entry.pos_descriptor);
        let paradigm = isv_morph::inflect(&entry, &features);
        let archive = ParadigmArchive {
            version: 1,
            entries: vec![CompiledEntry { id: WordId(0), entry, features, paradigm }],
        };
        let bytes = rkyv::to_bytes::<_, 1024>(&archive).unwrap();

        let store = ParadigmStore::load(&bytes).unwrap();
        assert_eq!(store.len(), 1);
        let grad = store.entry("grad").unwrap();
        assert_eq!(grad.entry, archive.entries[0].entry);
        assert!(matches!(grad.paradigm, Some(Paradigm::Noun(_))));
        assert!(store.entry("město").is_none());

        assert!(ParadigmStore::load(&[0u8; 3]).is_err());
    }
}
