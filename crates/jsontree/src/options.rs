/// Default capacity of the tokenizer's read buffer, in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Default initial capacity of the tokenizer's scratch buffer, in bytes.
pub const DEFAULT_SCRATCH_CAPACITY: usize = DEFAULT_BUFFER_SIZE * 2;

/// Configuration options for the [`Tokenizer`](crate::Tokenizer).
///
/// # Examples
///
/// ```rust
/// use jsontree::{Tokenizer, TokenizerOptions};
///
/// let options = TokenizerOptions {
///     buffer_size: 8,
///     ..Default::default()
/// };
/// let mut tokenizer = Tokenizer::with_options(&b"[1, 2, 3]"[..], options);
/// let root = tokenizer.parse().unwrap();
/// assert_eq!(root.size(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TokenizerOptions {
    /// Capacity of the read buffer, i.e. the largest chunk requested from the
    /// byte source in one read.
    ///
    /// Tokens longer than the buffer are reassembled in the scratch buffer,
    /// so any size works; small sizes only cost more reads. A size of `0` is
    /// treated as `1`.
    ///
    /// # Default
    ///
    /// `4096`
    pub buffer_size: usize,

    /// Initial capacity of the scratch buffer used for strings with escapes
    /// and for tokens that span reads. The buffer grows as needed.
    ///
    /// # Default
    ///
    /// `8192`
    pub scratch_capacity: usize,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            scratch_capacity: DEFAULT_SCRATCH_CAPACITY,
        }
    }
}

/// Configuration options for the [`Parser`](crate::Parser).
///
/// # Default
///
/// Only objects, arrays and empty input are accepted at the top level.
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Whether a bare scalar (string, number, boolean or `null`) is accepted
    /// as a complete document.
    ///
    /// RFC 8259 permits any value at the top level. By default the parser is
    /// stricter and rejects documents such as `123` or `"text"` with a
    /// syntax error. Enabling this option restores RFC behavior.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_scalar_root: bool,

    /// Initial capacity of the container stack, i.e. the nesting depth that
    /// can be reached without reallocating. Deeper documents are still
    /// parsed.
    ///
    /// # Default
    ///
    /// `32`
    pub stack_capacity: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_scalar_root: false,
            stack_capacity: 32,
        }
    }
}
