//! Decode/encode entry points.
//!
//! Decoding delegates to `serde_json` and layers the nesting limit on top;
//! encoding runs the option-applying writer from [`crate::encoder`]. Every
//! codec failure is mapped to [`Error`] at the call site, before anything
//! else runs.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::encoder::JsonEncoder;
use crate::error::{Error, Result};
use crate::options::{DecodeOptions, EncodeOptions};
use crate::truncate::truncate;

/// Decode JSON text into an untyped [`Value`].
///
/// Objects decode into ordered string-keyed maps. Fails with
/// [`Error::Decode`] carrying the codec's description and a truncated
/// preview of the input.
pub fn decode_value(text: &str, options: Option<DecodeOptions>) -> Result<Value> {
    parse_value(text, options).map_err(|message| Error::Decode {
        message,
        input: preview(text),
    })
}

/// Decode JSON text into a caller-defined record type.
///
/// The structured counterpart of [`decode_value`]: the same text, shaped
/// into any `Deserialize` type instead of a map tree.
pub fn decode<T: DeserializeOwned>(text: &str, options: Option<DecodeOptions>) -> Result<T> {
    let value = decode_value(text, options)?;
    serde_json::from_value(value).map_err(|e| Error::Decode {
        message: e.to_string(),
        input: preview(text),
    })
}

/// Encode a [`Value`] into JSON text.
///
/// With `None`, the default option bundle of [`EncodeOptions`] applies; an
/// explicit bundle is used exactly as given. Fails with [`Error::Encode`]
/// carrying a truncated debug rendering of the value.
pub fn encode_value(value: &Value, options: Option<EncodeOptions>) -> Result<String> {
    let opts = options.unwrap_or_default();
    JsonEncoder::new(opts).encode(value).map_err(|e| Error::Encode {
        message: e.to_string(),
        value: debug_preview(value),
    })
}

/// Encode any serializable value into JSON text.
pub fn encode<T: Serialize>(value: &T, options: Option<EncodeOptions>) -> Result<String> {
    let tree = serde_json::to_value(value).map_err(|e| Error::Encode {
        message: e.to_string(),
        value: std::any::type_name::<T>().to_string(),
    })?;
    encode_value(&tree, options)
}

/// Whether `text` parses as JSON at all. No value tree is built.
pub fn is_valid(text: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok()
}

/// Parse and depth-check, reporting only the failure message. Callers attach
/// their own input context (text preview or file path).
pub(crate) fn parse_value(
    text: &str,
    options: Option<DecodeOptions>,
) -> std::result::Result<Value, String> {
    let opts = options.unwrap_or_default();
    let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let depth = value_depth(&value);
    if depth > opts.max_depth {
        return Err(format!(
            "maximum nesting depth of {} exceeded (input nests {} levels)",
            opts.max_depth, depth
        ));
    }
    Ok(value)
}

fn value_depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(value_depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(value_depth).max().unwrap_or(0),
        _ => 0,
    }
}

fn preview(text: &str) -> String {
    let (text, _) = truncate(text, None);
    text.into_owned()
}

fn debug_preview(value: &Value) -> String {
    let rendered = format!("{value:?}");
    let (text, _) = truncate(&rendered, None);
    text.into_owned()
}
