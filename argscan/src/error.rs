use alloc::string::String;
use core::fmt;
use core::num::ParseIntError;

use crate::{
    parsed::ArgPair,
    span::{FlatArgs, Span},
};

/// An error raised while reading parsed arguments, with input info, so that it
/// can be formatted nicely.
///
/// Lookups that find nothing are not errors, they return `None`. This is for
/// values that were found but are unusable as requested.
///
/// With the `rich-diagnostics` feature, `Display` and `Debug` render a report
/// that points at the offending token in the command line.
pub struct ArgsError {
    kind: ArgsErrorKind,

    /// Where the bad value is, in `flattened_args`
    span: Span,

    /// Where its key is, in `flattened_args`
    #[cfg_attr(not(feature = "rich-diagnostics"), allow(dead_code))]
    key_span: Span,

    /// All CLI arguments joined by a space
    flattened_args: String,
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArgsErrorKind {
    /// The value of `key` was requested as an integer, but it is not base-10
    /// integer text.
    InvalidInteger {
        /// The flag the value was given for
        key: String,
        /// The value as given
        value: String,
        /// Why it didn't parse
        source: ParseIntError,
    },
}

impl fmt::Display for ArgsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsErrorKind::InvalidInteger { key, value, source } => {
                write!(f, "value `{value}` of `{key}` is not an integer: {source}")
            }
        }
    }
}

impl ArgsError {
    pub(crate) fn invalid_integer(pair: &ArgPair, source: ParseIntError, input: &FlatArgs) -> Self {
        Self {
            kind: ArgsErrorKind::InvalidInteger {
                key: pair.key().to_owned(),
                value: pair.value().to_owned(),
                source,
            },
            span: input.span_of(pair.index() + 1),
            key_span: input.span_of(pair.index()),
            flattened_args: input.text().to_owned(),
        }
    }

    /// The specific error that occurred
    pub fn kind(&self) -> &ArgsErrorKind {
        &self.kind
    }

    /// Where the offending value is in [`flattened_args`](Self::flattened_args)
    pub fn span(&self) -> Span {
        self.span
    }

    /// All CLI arguments joined by a space
    pub fn flattened_args(&self) -> &str {
        &self.flattened_args
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self.kind {
            ArgsErrorKind::InvalidInteger { .. } => "args::invalid_integer",
        }
    }

    /// Suggestion on how to fix the command line
    pub fn help(&self) -> String {
        match &self.kind {
            ArgsErrorKind::InvalidInteger { key, .. } => {
                format!("pass a whole number in base 10, like `{key} 42`")
            }
        }
    }
}

#[cfg(feature = "rich-diagnostics")]
impl ArgsError {
    fn to_ariadne_report(&self) -> ariadne::Report<'static, core::ops::Range<usize>> {
        use ariadne::{Color, Config, IndexType, Label, Report, ReportKind};

        let label = match &self.kind {
            ArgsErrorKind::InvalidInteger { source, .. } => format!("{source}"),
        };

        Report::build(ReportKind::Error, self.span.range())
            .with_config(Config::default().with_index_type(IndexType::Byte))
            .with_code(self.code())
            .with_message(&self.kind)
            .with_label(
                Label::new(self.span.range())
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .with_label(
                Label::new(self.key_span.range())
                    .with_message("requested as an integer")
                    .with_color(Color::Blue),
            )
            .with_help(self.help())
            .finish()
    }

    fn write_report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = alloc::vec::Vec::new();
        self.to_ariadne_report()
            .write(
                ariadne::Source::from(self.flattened_args.as_str()),
                &mut buf,
            )
            .map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "rich-diagnostics")]
        {
            self.write_report(f)
        }

        #[cfg(not(feature = "rich-diagnostics"))]
        {
            write!(f, "{}", self.kind)
        }
    }
}

impl fmt::Debug for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl core::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.kind {
            ArgsErrorKind::InvalidInteger { source, .. } => Some(source),
        }
    }
}
