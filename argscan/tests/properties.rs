use argscan::classify;
use bolero::check;

/// Build a command line from fuzzer bytes, drawing tokens from a small pool so
/// that flags, values and empty tokens all show up next to each other.
fn tokens_from(bytes: &[u8]) -> Vec<String> {
    bytes
        .iter()
        .take(32)
        .map(|b| match b % 6 {
            0 => String::new(),
            1 => "-a".to_owned(),
            2 => "--long".to_owned(),
            3 => "-".to_owned(),
            4 => format!("v{}", b / 6),
            _ => "pos".to_owned(),
        })
        .collect()
}

#[test]
fn every_non_empty_token_is_accounted_for() {
    argscan_testhelpers::setup();

    check!().with_type::<Vec<u8>>().for_each(|bytes: &Vec<u8>| {
        let tokens = tokens_from(bytes);
        let args = classify(&tokens);

        let non_empty = tokens.iter().filter(|t| !t.is_empty()).count();
        assert_eq!(
            args.positional().len() + args.options().len() + 2 * args.args().len(),
            non_empty,
            "{tokens:?}"
        );
    });
}

#[test]
fn categories_keep_input_order() {
    argscan_testhelpers::setup();

    check!().with_type::<Vec<u8>>().for_each(|bytes: &Vec<u8>| {
        let tokens = tokens_from(bytes);
        let args = classify(&tokens);

        // pairs point at a flag followed by its value, in increasing order
        let mut last = None;
        for pair in args.args() {
            assert!(last.is_none_or(|prev| pair.index() > prev + 1), "{tokens:?}");
            assert_eq!(tokens[pair.index()], pair.key());
            assert_eq!(tokens[pair.index() + 1], pair.value());
            last = Some(pair.index());
        }

        // options and positionals are subsequences of the input
        for category in [args.options(), args.positional()] {
            let mut rest = tokens.iter();
            for entry in category {
                assert!(rest.any(|t| t == entry), "{tokens:?}");
            }
        }
    });
}

#[test]
fn flags_are_never_positional_or_values() {
    argscan_testhelpers::setup();

    check!().with_type::<Vec<u8>>().for_each(|bytes: &Vec<u8>| {
        let tokens = tokens_from(bytes);
        let args = classify(&tokens);

        assert!(args.positional().iter().all(|p| !p.starts_with('-')));
        assert!(args.options().iter().all(|o| o.starts_with('-')));
        assert!(
            args.args()
                .iter()
                .all(|a| a.key().starts_with('-') && !a.value().starts_with('-'))
        );
    });
}

#[test]
fn last_value_is_the_rightmost_pair() {
    argscan_testhelpers::setup();

    check!().with_type::<Vec<u8>>().for_each(|bytes: &Vec<u8>| {
        let tokens = tokens_from(bytes);
        let args = classify(&tokens);

        let all = args.get("-a", &["--long"]);
        assert_eq!(args.get_string("--long", &["-a"]), all.last().copied());
    });
}
