use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

/// Position in the input (byte index)
pub type Pos = usize;

/// A span in the input, with a start position and length
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// Starting position of the span in bytes
    pub start: Pos,
    /// Length of the span in bytes
    pub len: usize,
}

impl Span {
    /// Creates a new span with the given start position and length
    pub const fn new(start: Pos, len: usize) -> Self {
        Span { start, len }
    }

    /// Length of the span
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the span covers no bytes
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The byte range covered by this span
    pub const fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// The command line as one string, essentially `tokens.join(" ")`, plus the
/// offset of every token in it. Diagnostics render against this text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FlatArgs {
    text: String,
    offsets: Vec<Pos>,
    lens: Vec<usize>,
}

impl FlatArgs {
    pub(crate) fn new<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut flat = FlatArgs::default();
        for token in tokens {
            let token = token.as_ref();
            if !flat.text.is_empty() {
                flat.text.push(' ');
            }
            flat.offsets.push(flat.text.len());
            flat.lens.push(token.len());
            flat.text.push_str(token);
        }
        tracing::trace!("flattened args: {:?}", flat.text);
        tracing::trace!("arg offsets: {:?}", flat.offsets);
        flat
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Span of the token at `index`, or an empty span at the end of the text
    /// when `index` is out of range.
    pub(crate) fn span_of(&self, index: usize) -> Span {
        match (self.offsets.get(index), self.lens.get(index)) {
            (Some(&start), Some(&len)) => Span::new(start, len),
            _ => Span::new(self.text.len(), 0),
        }
    }
}
