//! json-io — defaulted JSON encode/decode and whole-file JSON I/O with
//! explicit errors.
//!
//! A thin layer over `serde_json` and `std::fs` exposing four operations:
//! decode text into a value, encode a value into text, read-and-decode a
//! JSON file, encode-and-write a JSON file. The layer applies a sensible
//! default encode-option bundle (see [`EncodeOptions`]) and turns every
//! underlying failure into one explicit [`Error`].
//!
//! Every call is synchronous and stateless; functions are safe to invoke
//! concurrently from multiple threads.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//!
//! let text = json_io::encode_value(&json!({"port": 8080}), None)?;
//! let value = json_io::decode_value(&text, None)?;
//! assert_eq!(value["port"], 8080);
//! # Ok::<(), json_io::Error>(())
//! ```

pub mod codec;
pub mod encoder;
pub mod error;
pub mod file;
pub mod options;
pub mod truncate;

// Re-exports for convenience
pub use codec::{decode, decode_value, encode, encode_value, is_valid};
pub use error::{Error, Result};
pub use file::{get_contents, get_contents_value, put_contents, put_contents_value};
pub use options::{DecodeOptions, EncodeOptions, DEFAULT_MAX_DEPTH};
pub use truncate::{truncate, TruncateOptions};
