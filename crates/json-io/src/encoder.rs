//! Option-applying JSON writer.
//!
//! [`JsonEncoder`] walks a `serde_json::Value` and assembles JSON text
//! according to [`EncodeOptions`]. It is an option layer, not a codec: leaf
//! formatting and string escaping delegate to `serde_json`, and the writer
//! only adjusts that output where a flag asks for it.

use std::fmt::Write as _;

use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::options::EncodeOptions;

/// Largest integer magnitude a double holds losslessly (2^53 − 1).
const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncoderError {
    #[error("maximum nesting depth of {0} exceeded")]
    DepthExceeded(usize),
}

pub struct JsonEncoder {
    opts: EncodeOptions,
    out: String,
}

impl JsonEncoder {
    pub fn new(opts: EncodeOptions) -> Self {
        Self {
            opts,
            out: String::new(),
        }
    }

    /// Encode `value` into JSON text.
    pub fn encode(&mut self, value: &Value) -> Result<String, EncoderError> {
        self.out.clear();
        self.write_any(value, 0)?;
        Ok(std::mem::take(&mut self.out))
    }

    fn write_any(&mut self, value: &Value, depth: usize) -> Result<(), EncoderError> {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(n) => self.write_number(n),
            Value::String(s) => self.write_str(s),
            Value::Array(items) => self.write_arr(items, depth)?,
            Value::Object(map) => self.write_obj(map, depth)?,
        }
        Ok(())
    }

    fn write_number(&mut self, n: &Number) {
        if self.opts.bigint_as_string {
            if let Some(i) = n.as_i64() {
                if i.unsigned_abs() > MAX_SAFE_INTEGER {
                    let _ = write!(self.out, "\"{i}\"");
                    return;
                }
            } else if let Some(u) = n.as_u64() {
                if u > MAX_SAFE_INTEGER {
                    let _ = write!(self.out, "\"{u}\"");
                    return;
                }
            }
        }

        if !self.opts.preserve_zero_fraction && !n.is_i64() && !n.is_u64() {
            if let Some(f) = n.as_f64() {
                // Whole floats drop the fraction only while they still fit an
                // exact integer; beyond 2^53 the digits would be fabricated.
                if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER as f64 {
                    let _ = write!(self.out, "{}", f as i64);
                    return;
                }
            }
        }

        // serde_json's representation, which keeps the zero fraction on
        // whole floats (`2.0`) and round-trips every value exactly.
        let _ = write!(self.out, "{n}");
    }

    fn write_str(&mut self, s: &str) {
        let escaped = serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""));
        if self.opts.unescaped_unicode && self.opts.unescaped_slashes {
            self.out.push_str(&escaped);
            return;
        }

        // serde_json never escapes `/` or non-ASCII itself, and every escape
        // it does emit is pure ASCII, so adjusting its output per character
        // cannot corrupt an existing escape sequence.
        for ch in escaped.chars() {
            match ch {
                '/' if !self.opts.unescaped_slashes => self.out.push_str("\\/"),
                c if !c.is_ascii() && !self.opts.unescaped_unicode => {
                    let mut units = [0u16; 2];
                    for unit in c.encode_utf16(&mut units) {
                        let _ = write!(self.out, "\\u{unit:04x}");
                    }
                }
                c => self.out.push(c),
            }
        }
    }

    fn write_arr(&mut self, items: &[Value], depth: usize) -> Result<(), EncoderError> {
        let next = self.enter(depth)?;
        if self.opts.force_object {
            // JSON arrays carry no distinguishing keys; the force-object flag
            // renders them as objects keyed by decimal index.
            self.out.push('{');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    self.out.push(',');
                }
                self.break_line(next);
                let _ = write!(self.out, "\"{i}\":");
                if self.opts.pretty {
                    self.out.push(' ');
                }
                self.write_any(item, next)?;
            }
            if !items.is_empty() {
                self.break_line(depth);
            }
            self.out.push('}');
            return Ok(());
        }

        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.break_line(next);
            self.write_any(item, next)?;
        }
        if !items.is_empty() {
            self.break_line(depth);
        }
        self.out.push(']');
        Ok(())
    }

    fn write_obj(&mut self, map: &Map<String, Value>, depth: usize) -> Result<(), EncoderError> {
        let next = self.enter(depth)?;
        self.out.push('{');
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.break_line(next);
            self.write_str(key);
            self.out.push(':');
            if self.opts.pretty {
                self.out.push(' ');
            }
            self.write_any(value, next)?;
        }
        if !map.is_empty() {
            self.break_line(depth);
        }
        self.out.push('}');
        Ok(())
    }

    fn enter(&self, depth: usize) -> Result<usize, EncoderError> {
        let next = depth + 1;
        if next > self.opts.max_depth {
            return Err(EncoderError::DepthExceeded(self.opts.max_depth));
        }
        Ok(next)
    }

    fn break_line(&mut self, level: usize) {
        if !self.opts.pretty {
            return;
        }
        self.out.push('\n');
        for _ in 0..level {
            self.out.push_str("  ");
        }
    }
}
