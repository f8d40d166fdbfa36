use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unified failure type for every operation in this crate.
///
/// Each variant carries the operation that failed, the underlying codec/OS
/// description, and either the file path or a truncated preview of the
/// offending input. Nothing is swallowed and nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a file failed before any JSON was seen. Missing file,
    /// permission denial, and I/O errors are not distinguished; the `source`
    /// keeps the OS description.
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing encoded text to a file failed.
    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The codec rejected the input text. `input` is a truncated preview of
    /// the text, or the source file path when decoding a file.
    #[error("JSON decode failed: {message} (input: {input})")]
    Decode { message: String, input: String },

    /// The value could not be encoded. `value` is a truncated debug rendering
    /// of the offending value, or its type name when it never reached the
    /// value model.
    #[error("JSON encode failed: {message} (value: {value})")]
    Encode { message: String, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display_names_path() {
        let err = Error::FileRead {
            path: PathBuf::from("/etc/app/config.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let text = err.to_string();
        assert!(text.contains("/etc/app/config.json"));
        assert!(text.contains("no such file"));
    }

    #[test]
    fn test_decode_error_display_names_input() {
        let err = Error::Decode {
            message: "expected value at line 1 column 1".to_string(),
            input: "{broken…".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("expected value"));
        assert!(text.contains("{broken…"));
    }
}
