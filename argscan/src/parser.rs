use alloc::string::String;
use alloc::vec::Vec;

use crate::{classify::classify, error::ArgsError, parsed::ParsedArgs};

/// Holds a command line and the result of classifying it.
///
/// The tokens can be given up front ([`with_args`](Self::with_args),
/// [`from_std_args`](Self::from_std_args)) or at parse time
/// ([`parse_from`](Self::parse_from)). Tokens given first win: once the parser
/// holds a non-empty command line, tokens passed to `parse_from` are ignored.
///
/// ```
/// use argscan::ArgsParser;
///
/// let mut parser = ArgsParser::new();
/// let args = parser.parse_from(["serve", "--port", "8080"])?;
/// assert_eq!(args.get_int("--port", &["-p"])?, Some(8080));
/// # Ok::<(), argscan::ArgsError>(())
/// ```
///
/// Parsing takes `&mut self` and reading takes `&self`, so a parser can be
/// shared across threads once parsed.
#[derive(Debug, Clone, Default)]
pub struct ArgsParser {
    raw: Vec<String>,
    parsed: ParsedArgs,
}

impl ArgsParser {
    /// A parser with no tokens. Supply them with [`parse_from`](Self::parse_from).
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser holding `args`.
    pub fn with_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            raw: args.into_iter().map(Into::into).collect(),
            parsed: ParsedArgs::default(),
        }
    }

    /// A parser holding the arguments of the current process, without the
    /// program name.
    ///
    /// # Panics
    ///
    /// Like [`std::env::args`], if an argument is not valid unicode.
    pub fn from_std_args() -> Self {
        Self::with_args(std::env::args().skip(1))
    }

    /// The tokens this parser holds.
    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    /// Classify the held tokens. Each call replaces the previous result.
    ///
    /// This does not fail today: every command line classifies. The `Result`
    /// leaves room for checks that can.
    pub fn parse(&mut self) -> Result<&ParsedArgs, ArgsError> {
        self.parsed = classify(&self.raw);
        Ok(&self.parsed)
    }

    /// Classify `args`, unless this parser already holds tokens, in which case
    /// those are classified and `args` is ignored.
    pub fn parse_from<I, S>(&mut self, args: I) -> Result<&ParsedArgs, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.raw.is_empty() {
            self.raw = args.into_iter().map(Into::into).collect();
        } else {
            tracing::debug!(
                "parser already holds {} tokens, ignoring the ones passed to parse_from",
                self.raw.len()
            );
        }
        self.parse()
    }

    /// The result of the last parse. Empty until [`parse`](Self::parse) or
    /// [`parse_from`](Self::parse_from) has been called.
    pub fn parsed(&self) -> &ParsedArgs {
        &self.parsed
    }
}
