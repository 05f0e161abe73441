use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use crate::parsed::ParsedArgs;

/// Human-readable, colored rendering of a [`ParsedArgs`], see [`ParsedArgs::dump`].
pub struct Dump<'a> {
    parsed: &'a ParsedArgs,
}

/// One row of a section: a key and, for positional and key-value entries, a value.
#[derive(Debug)]
struct DumpLine<'a> {
    key: String,
    value: Option<&'a str>,
}

impl ParsedArgs {
    /// Render the three categories for humans, one section each:
    ///
    /// ```text
    /// positional
    ///   0  build
    /// options
    ///   -v
    /// arguments
    ///   --jobs..  4
    ///   --target  x86
    /// ```
    ///
    /// The output contains ANSI color codes.
    pub fn dump(&self) -> Dump<'_> {
        Dump { parsed: self }
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positional = self
            .parsed
            .positional
            .iter()
            .enumerate()
            .map(|(index, token)| DumpLine {
                key: index.to_string(),
                value: Some(token.as_str()),
            })
            .collect();
        let options = self
            .parsed
            .options
            .iter()
            .map(|option| DumpLine {
                key: option.clone(),
                value: None,
            })
            .collect();
        let arguments = self
            .parsed
            .args
            .iter()
            .map(|pair| DumpLine {
                key: pair.key().to_owned(),
                value: Some(pair.value()),
            })
            .collect();

        write_section(f, "positional", positional, |key| key.dimmed().to_string())?;
        write_section(f, "options", options, |key| key.yellow().to_string())?;
        write_section(f, "arguments", arguments, |key| key.cyan().to_string())
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    lines: Vec<DumpLine<'_>>,
    paint_key: impl Fn(&str) -> String,
) -> fmt::Result {
    writeln!(f, "{}", title.bold())?;

    if lines.is_empty() {
        return writeln!(f, "  {}", "(none)".dimmed());
    }

    let max_key = lines
        .iter()
        .filter(|line| line.value.is_some())
        .map(|line| line.key.width())
        .max()
        .unwrap_or(0);

    for line in &lines {
        match line.value {
            Some(value) => {
                let padding = ".".repeat(max_key.saturating_sub(line.key.width()));
                writeln!(
                    f,
                    "  {}{}  {}",
                    paint_key(&line.key),
                    padding.bright_black(),
                    value
                )?;
            }
            None => writeln!(f, "  {}", paint_key(&line.key))?,
        }
    }

    Ok(())
}
