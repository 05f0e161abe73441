/// The leading character that marks a token as flag-like.
///
/// Only the first character is inspected, so `-a` and `--all` are both flags,
/// and so is `-5`.
pub const FLAG_PREFIX: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    // ``, skipped wherever it appears
    Empty,

    // `-{a}` or `--{a}`
    Flag,

    // `{a}`
    Data,
}

impl TokenKind {
    pub(crate) fn of(token: &str) -> Self {
        match token.chars().next() {
            None => TokenKind::Empty,
            Some(FLAG_PREFIX) => TokenKind::Flag,
            Some(_) => TokenKind::Data,
        }
    }

    pub(crate) fn is_flag(self) -> bool {
        self == TokenKind::Flag
    }
}

#[cfg(test)]
mod tests {
    use super::TokenKind;

    #[test]
    fn test_token_kinds() {
        assert_eq!(TokenKind::of(""), TokenKind::Empty);
        assert_eq!(TokenKind::of("pos"), TokenKind::Data);
        assert_eq!(TokenKind::of("-a"), TokenKind::Flag);
        assert_eq!(TokenKind::of("--all"), TokenKind::Flag);
        assert_eq!(TokenKind::of("-"), TokenKind::Flag);
        assert_eq!(TokenKind::of("a-b"), TokenKind::Data);
    }

    #[test]
    fn test_negative_numbers_are_flags() {
        assert!(TokenKind::of("-5").is_flag());
        assert!(TokenKind::of("-0.5").is_flag());
    }

    #[test]
    fn test_non_ascii_first_char() {
        assert_eq!(TokenKind::of("ünïcode"), TokenKind::Data);
        assert_eq!(TokenKind::of("—dash"), TokenKind::Data);
    }
}
