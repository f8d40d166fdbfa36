//! Whole-file JSON read/write.
//!
//! Whole-buffer operations only: no streaming, no locking, and no atomic
//! replacement guarantee on overwrite. Decode failures coming from a file
//! name the file path instead of an input preview.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::codec::{self, parse_value};
use crate::error::{Error, Result};
use crate::options::{DecodeOptions, EncodeOptions};

/// Read the file at `path` and decode it as an untyped [`Value`].
///
/// Any read failure (missing file, permission denial, I/O error) maps to
/// [`Error::FileRead`] with the path; the causes are not distinguished.
pub fn get_contents_value(
    path: impl AsRef<Path>,
    options: Option<DecodeOptions>,
) -> Result<Value> {
    let path = path.as_ref();
    let text = read_text(path)?;
    parse_value(&text, options).map_err(|message| Error::Decode {
        message,
        input: path.display().to_string(),
    })
}

/// Read the file at `path` and decode it into a caller-defined record type.
pub fn get_contents<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    options: Option<DecodeOptions>,
) -> Result<T> {
    let path = path.as_ref();
    let value = get_contents_value(path, options)?;
    serde_json::from_value(value).map_err(|e| Error::Decode {
        message: e.to_string(),
        input: path.display().to_string(),
    })
}

/// Encode `value` and write it to `path`, fully overwriting any existing
/// file.
///
/// Encode failures propagate unchanged; write failures map to
/// [`Error::FileWrite`] with the path.
pub fn put_contents<T: Serialize>(
    value: &T,
    path: impl AsRef<Path>,
    options: Option<EncodeOptions>,
) -> Result<()> {
    let path = path.as_ref();
    let text = codec::encode(value, options)?;
    write_text(path, &text)
}

/// [`put_contents`] for an already-built [`Value`].
pub fn put_contents_value(
    value: &Value,
    path: impl AsRef<Path>,
    options: Option<EncodeOptions>,
) -> Result<()> {
    let path = path.as_ref();
    let text = codec::encode_value(value, options)?;
    write_text(path, &text)
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
