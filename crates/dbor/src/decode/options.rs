/// Default value of [`DecodeOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Configuration options for the DBOR decoder.
///
/// These options control input acceptance only; the value produced for an
/// accepted input never depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Whether to reject integer tokens wider than their magnitude requires.
    ///
    /// The encoder always emits the minimal token width, so for any value
    /// there is exactly one canonical byte sequence. Some foreign DBOR
    /// encoders disagree on widths in edge cases; setting this to `false`
    /// accepts their zero-padded tails instead of failing with
    /// [`NonCanonical`](crate::DecodeErrorKind::NonCanonical).
    ///
    /// # Default
    ///
    /// `true`
    pub strict_canonical: bool,

    /// Maximum number of nested sequence levels the decoder will enter.
    ///
    /// Decoding recurses once per sequence level, so a hostile input of a
    /// few kilobytes could otherwise overflow the call stack. Inputs nesting
    /// deeper than this fail with
    /// [`NestingTooDeep`](crate::DecodeErrorKind::NestingTooDeep).
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_DEPTH`] (1024)
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict_canonical: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
