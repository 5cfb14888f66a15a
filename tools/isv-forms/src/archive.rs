//! Precomputed paradigm archives.

use anyhow::anyhow;
use isv_descriptor::extract_features;
use isv_protocol::{ArchivedParadigmArchive, CompiledEntry, ParadigmArchive, WordEntry, WordId};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::{AlignedVec, Deserialize};
use serde::Deserialize as SerdeDeserialize;
use tracing::{debug, info};

pub const ARCHIVE_VERSION: u32 = 1;

/// Either a bare array of entries or `{ "version": .., "entries": [..] }`.
#[derive(Debug, SerdeDeserialize)]
#[serde(untagged)]
pub enum WordList {
    Entries(Vec<WordEntry>),
    Versioned {
        #[serde(default)]
        version: Option<u32>,
        entries: Vec<WordEntry>,
    },
}

impl WordList {
    pub fn into_entries(self) -> Vec<WordEntry> {
        match self {
            WordList::Entries(entries) => entries,
            WordList::Versioned { version, entries } => {
                debug!(?version, "versioned word list");
                entries
            }
        }
    }
}

pub fn compile(entries: Vec<WordEntry>) -> ParadigmArchive {
    let entries: Vec<CompiledEntry> = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let features = extract_features(&entry.pos_descriptor);
            let paradigm = isv_morph::inflect(&entry, &features);
            if paradigm.as_ref().is_some_and(|p| p.is_empty()) {
                debug!(lemma = %entry.lemma, "no forms generated");
            }
            CompiledEntry { id: WordId(i as u32), entry, features, paradigm }
        })
        .collect();
    let with_paradigm = entries.iter().filter(|e| e.paradigm.is_some()).count();
    info!(entries = entries.len(), with_paradigm, "compiled word list");
    ParadigmArchive { version: ARCHIVE_VERSION, entries }
}

pub fn to_bytes(archive: &ParadigmArchive) -> anyhow::Result<AlignedVec> {
    let mut serializer = AllocSerializer::<4096>::default();
    serializer
        .serialize_value(archive)
        .map_err(|e| anyhow!("rkyv serialization failed: {e:?}"))?;
    Ok(serializer.into_serializer().into_inner())
}

/// Copies `bytes` into an aligned buffer so it can be validated in place.
pub fn align(bytes: &[u8]) -> AlignedVec {
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);
    aligned
}

/// Validates the archive before handing out a zero-copy view.
pub fn view(bytes: &[u8]) -> anyhow::Result<&ArchivedParadigmArchive> {
    let archive = rkyv::check_archived_root::<ParadigmArchive>(bytes)
        .map_err(|e| anyhow!("invalid paradigm archive: {e}"))?;
    if archive.version != ARCHIVE_VERSION {
        return Err(anyhow!(
            "archive version {} is not supported (expected {ARCHIVE_VERSION})",
            archive.version
        ));
    }
    Ok(archive)
}

/// Deserializes the first entry whose lemma matches.
pub fn find(archive: &ArchivedParadigmArchive, lemma: &str) -> anyhow::Result<Option<CompiledEntry>> {
    let Some(archived) = archive.entries.iter().find(|e| e.entry.lemma.as_str() == lemma) else {
        return Ok(None);
    };
    let entry: CompiledEntry = archived
        .deserialize(&mut rkyv::Infallible)
        .map_err(|e| anyhow!("{e:?}"))?;
    Ok(Some(entry))
}
