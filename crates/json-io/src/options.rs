/// Nesting limit applied when an options bundle does not override it.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Encoder option bundle.
///
/// `Default` is the bundle applied when a caller passes `None` for the
/// options parameter. [`EncodeOptions::none`] turns every flag off for
/// callers that mean "explicitly no options" rather than "no preference";
/// individual flags can be toggled from either base with struct update
/// syntax:
///
/// ```
/// use json_io::EncodeOptions;
///
/// let opts = EncodeOptions {
///     force_object: false,
///     ..Default::default()
/// };
/// assert!(opts.unescaped_unicode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Encode arrays as objects keyed by decimal index, so an empty array
    /// becomes `{}` instead of `[]`. Default is `true`.
    pub force_object: bool,
    /// Integers outside the float-safe range (magnitude above 2^53 − 1) are
    /// emitted as JSON strings instead of bare digits. Default is `true`.
    pub bigint_as_string: bool,
    /// Emit `/` literally instead of `\/`. Default is `true`.
    pub unescaped_slashes: bool,
    /// Emit non-ASCII text as literal UTF-8 instead of `\uXXXX` escapes.
    /// Default is `true`.
    pub unescaped_unicode: bool,
    /// Keep a decimal point on whole floats (`2.0`, not `2`), so a round trip
    /// does not turn a float into an integer. Default is `true`.
    pub preserve_zero_fraction: bool,
    /// Two-space indented output. Default is `false`.
    pub pretty: bool,
    /// Maximum container nesting the encoder will follow. Default is 512.
    pub max_depth: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            force_object: true,
            bigint_as_string: true,
            unescaped_slashes: true,
            unescaped_unicode: true,
            preserve_zero_fraction: true,
            pretty: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EncodeOptions {
    /// Every flag off: the codec's bare behavior.
    pub fn none() -> Self {
        Self {
            force_object: false,
            bigint_as_string: false,
            unescaped_slashes: false,
            unescaped_unicode: false,
            preserve_zero_fraction: false,
            pretty: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decoder options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum container nesting accepted, checked against the decoded value.
    /// Inputs nesting past serde_json's own recursion guard fail during the
    /// parse itself. Default is 512.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
