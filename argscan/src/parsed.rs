//! The result of a classification pass and the lookups on top of it.
//!
//! Lookups take a primary name plus a slice of aliases. The two are one
//! unordered set of equivalent names: no alias takes precedence over another.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{error::ArgsError, span::FlatArgs};

/// A flag immediately followed by its value, like `--name value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgPair {
    key: String,
    value: String,
    index: usize,
}

impl ArgPair {
    pub(crate) fn new(key: &str, value: &str, index: usize) -> Self {
        Self {
            key: key.to_owned(),
            value: value.to_owned(),
            index,
        }
    }

    /// The flag, including its leading hyphens.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The token that followed the flag.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Position of the key in the input tokens. The value sits at `index + 1`.
    pub fn index(&self) -> usize {
        self.index
    }

    fn matches(&self, name: &str, aliases: &[&str]) -> bool {
        names_contain(name, aliases, &self.key)
    }
}

fn names_contain(name: &str, aliases: &[&str], candidate: &str) -> bool {
    name == candidate || aliases.iter().any(|alias| *alias == candidate)
}

/// Tokens sorted into positional arguments, options and key-value arguments.
///
/// Produced by [`classify`](crate::classify) or [`ArgsParser::parse`](crate::ArgsParser::parse),
/// and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub(crate) positional: Vec<String>,
    pub(crate) options: Vec<String>,
    pub(crate) args: Vec<ArgPair>,
    pub(crate) source: FlatArgs,
}

impl ParsedArgs {
    /// Positional arguments, in input order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// The positional argument at `index`, if there is one.
    ///
    /// ```
    /// let args = argscan::classify(&["run", "--fast"]);
    /// assert_eq!(args.at(0), Some("run"));
    /// assert_eq!(args.at(1), None);
    /// ```
    pub fn at(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Options (flags without a value), in input order. A flag given twice
    /// appears twice.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Whether `name` or any of `aliases` was given as an option.
    ///
    /// Only options count: a flag that took a value is an argument, see
    /// [`get_string`](Self::get_string).
    pub fn has_option(&self, name: &str, aliases: &[&str]) -> bool {
        self.options
            .iter()
            .any(|option| names_contain(name, aliases, option))
    }

    /// Key-value arguments, in input order, duplicates included.
    pub fn args(&self) -> &[ArgPair] {
        &self.args
    }

    /// Every value given for `name` or any of `aliases`, in input order.
    ///
    /// ```
    /// let args = argscan::classify(&["-I", "a", "--include", "b", "-I", "c"]);
    /// assert_eq!(args.get("--include", &["-I"]), ["a", "b", "c"]);
    /// assert!(args.get("--exclude", &[]).is_empty());
    /// ```
    pub fn get(&self, name: &str, aliases: &[&str]) -> Vec<&str> {
        self.args
            .iter()
            .filter(|pair| pair.matches(name, aliases))
            .map(ArgPair::value)
            .collect()
    }

    /// The value given for `name` or any of `aliases`. When several were given,
    /// the last one wins.
    ///
    /// ```
    /// let args = argscan::classify(&["--name", "foo", "-n", "bar"]);
    /// assert_eq!(args.get_string("--name", &["-n"]), Some("bar"));
    /// assert_eq!(args.get_string("--name", &[]), Some("foo"));
    /// ```
    pub fn get_string(&self, name: &str, aliases: &[&str]) -> Option<&str> {
        self.last_pair(name, aliases).map(ArgPair::value)
    }

    /// Like [`get_string`](Self::get_string), with the value parsed as a base-10
    /// integer.
    ///
    /// `Ok(None)` means the argument was not given. A value that is not an
    /// integer is an error rather than a default, since no integer can stand in
    /// for "invalid".
    pub fn get_int(&self, name: &str, aliases: &[&str]) -> Result<Option<i64>, ArgsError> {
        let Some(pair) = self.last_pair(name, aliases) else {
            return Ok(None);
        };

        match pair.value.parse::<i64>() {
            Ok(n) => Ok(Some(n)),
            Err(source) => {
                tracing::debug!(
                    "value {:?} of {:?} is not an integer: {source}",
                    pair.value,
                    pair.key
                );
                Err(ArgsError::invalid_integer(pair, source, &self.source))
            }
        }
    }

    fn last_pair(&self, name: &str, aliases: &[&str]) -> Option<&ArgPair> {
        self.args
            .iter()
            .rev()
            .find(|pair| pair.matches(name, aliases))
    }

    /// Number of tokens accounted for: every positional argument and option
    /// counts once, every key-value argument twice. Empty tokens don't count.
    pub fn len(&self) -> usize {
        self.positional.len() + self.options.len() + 2 * self.args.len()
    }

    /// Whether nothing was classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use crate::classify;

    #[test]
    fn test_aliases_form_one_set() {
        argscan_testhelpers::setup();

        let args = classify(&["-g", "a", "--grep", "b"]);
        assert_eq!(args.get_string("--grep", &["-g"]), Some("b"));
        assert_eq!(args.get_string("-g", &["--grep"]), Some("b"));
        assert_eq!(args.get_string("--missing", &["-g"]), Some("a"));
    }

    #[test]
    fn test_duplicate_names_match_each_pair_once() {
        argscan_testhelpers::setup();

        let args = classify(&["-x", "1", "-x", "2"]);
        assert_eq!(args.get("-x", &["-x", "-x"]), ["1", "2"]);
    }

    #[test]
    fn test_has_option_ignores_arguments() {
        argscan_testhelpers::setup();

        let args = classify(&["--verbose", "yes", "--quiet"]);
        assert!(!args.has_option("--verbose", &[]));
        assert!(args.has_option("--quiet", &[]));
        assert!(!args.has_option("--nope", &["-n"]));
    }

    #[test]
    fn test_get_int_signs() {
        argscan_testhelpers::setup();

        let args = classify(&["--a", "+7", "--b", "0042"]);
        assert_eq!(args.get_int("--a", &[]).ok(), Some(Some(7)));
        assert_eq!(args.get_int("--b", &[]).ok(), Some(Some(42)));
        assert_eq!(args.get_int("--c", &[]).ok(), Some(None));
    }

    #[test]
    fn test_get_int_uses_last_value() {
        argscan_testhelpers::setup();

        // only the winning value is coerced
        let args = classify(&["-n", "oops", "-n", "3"]);
        assert_eq!(args.get_int("-n", &[]).ok(), Some(Some(3)));

        let args = classify(&["-n", "3", "-n", "oops"]);
        assert!(args.get_int("-n", &[]).is_err());
    }
}
