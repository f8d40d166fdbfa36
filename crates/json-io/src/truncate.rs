use std::borrow::Cow;

/// Options for preview truncation.
#[derive(Debug, Clone)]
pub struct TruncateOptions {
    /// Maximum length of the result in characters, marker included.
    /// Default is 100.
    pub max_length: usize,
    /// Marker appended when content was dropped. Default is a single
    /// ellipsis character.
    pub marker: String,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            max_length: 100,
            marker: "…".to_string(),
        }
    }
}

/// Truncate a string for use in a human-readable message.
///
/// Returns the input unchanged (borrowed) when it fits within
/// `max_length`. Otherwise returns a prefix sized so that prefix plus
/// marker stay within the limit, and reports the truncation in the second
/// tuple element.
///
/// Lengths are measured in Unicode scalar values, so multi-byte content
/// near the limit is never split inside a code point.
///
/// # Examples
///
/// ```
/// use json_io::truncate;
///
/// let (text, truncated) = truncate("short", None);
/// assert_eq!(text, "short");
/// assert!(!truncated);
///
/// let long = "x".repeat(150);
/// let (text, truncated) = truncate(&long, None);
/// assert_eq!(text.chars().count(), 100);
/// assert!(truncated);
/// ```
pub fn truncate(s: &str, options: Option<TruncateOptions>) -> (Cow<'_, str>, bool) {
    let opts = options.unwrap_or_default();
    if s.chars().count() <= opts.max_length {
        return (Cow::Borrowed(s), false);
    }

    let marker_len = opts.marker.chars().count();
    let keep = opts.max_length.saturating_sub(marker_len);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(&opts.marker);
    (Cow::Owned(out), true)
}
