//! Lexicon snapshots using `MessagePack`.
//!
//! A snapshot stores the entries in insertion order. Loading replays them
//! through [`Lexicon::insert`], so indexes and duplicate reports are
//! rebuilt exactly as they were.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use parlance_foundation::{Error, LexicalEntry, Result};

use crate::lexicon::Lexicon;

/// On-disk form of a lexicon.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    entries: Vec<LexicalEntry>,
}

/// Serializes a lexicon to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(lexicon: &Lexicon) -> Result<Vec<u8>> {
    let snapshot = Snapshot {
        entries: lexicon.entries().iter().map(|e| (**e).clone()).collect(),
    };
    rmp_serde::to_vec_named(&snapshot).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a lexicon from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<Lexicon> {
    let snapshot: Snapshot =
        rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))?;
    Ok(Lexicon::from_entries(snapshot.entries))
}

/// Saves a lexicon to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(lexicon: &Lexicon, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(lexicon)?;

    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))?;

    writer
        .flush()
        .map_err(|e| Error::io(format!("failed to flush file '{}': {e}", path.display())))?;

    Ok(())
}

/// Loads a lexicon from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file '{}': {e}", path.display())))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

    from_bytes(&bytes)
}
