use crate::{
    arg::TokenKind,
    parsed::{ArgPair, ParsedArgs},
    span::FlatArgs,
};

/// Sort `tokens` into positional arguments, options and key-value arguments.
///
/// This is a single left-to-right pass:
///
/// - empty tokens are skipped
/// - a non-flag token is positional, unless the token before it is a flag
/// - a flag followed by a non-flag token forms a key-value pair, and the value is
///   consumed along with it
/// - any other flag is an option
///
/// Classification never fails: every sequence of tokens has exactly one result.
/// Each category keeps the input order of its entries.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> ParsedArgs {
    let mut parsed = ParsedArgs {
        source: FlatArgs::new(tokens),
        ..ParsedArgs::default()
    };
    let kind_at = |index: usize| TokenKind::of(tokens[index].as_ref());

    let mut index = 0;
    while index < tokens.len() {
        let token = tokens[index].as_ref();
        let kind = kind_at(index);

        match kind {
            TokenKind::Empty => {
                tracing::trace!("#{index}: skipping empty token");
            }

            // Not tracked as "consumed": a value token is skipped over by the pair
            // arm below, so its predecessor being a flag means it was never reached.
            TokenKind::Data if index == 0 || !kind_at(index - 1).is_flag() => {
                tracing::trace!("#{index}: positional {token:?}");
                parsed.positional.push(token.to_owned());
            }

            TokenKind::Flag
                if tokens
                    .get(index + 1)
                    .is_some_and(|next| TokenKind::of(next.as_ref()) == TokenKind::Data) =>
            {
                let value = tokens[index + 1].as_ref();
                tracing::trace!("#{index}: argument {token:?} = {value:?}");
                parsed.args.push(ArgPair::new(token, value, index));
                index += 1;
            }

            _ => {
                debug_assert!(
                    kind.is_flag(),
                    "#{index}: value token {token:?} was not consumed by the flag before it"
                );
                tracing::trace!("#{index}: option {token:?}");
                parsed.options.push(token.to_owned());
            }
        }

        index += 1;
    }

    tracing::debug!(
        positional = parsed.positional.len(),
        options = parsed.options.len(),
        args = parsed.args.len(),
        "classified {} tokens",
        tokens.len()
    );
    parsed
}
