use proptest::prelude::*;

use passgen::{generate, GenerateError, Options, Symbols};

fn arb_symbols() -> impl Strategy<Value = Symbols> {
    prop_oneof![
        Just(Symbols::Disabled),
        Just(Symbols::Default),
        "[!@#$%^&*?]{1,6}".prop_map(Symbols::Custom),
    ]
}

prop_compose! {
    fn arb_options()(
        length in 0usize..40,
        numbers in any::<bool>(),
        symbols in arb_symbols(),
        exclude in "[a-z0-9!@#]{0,8}",
        uppercase in any::<bool>(),
        lowercase in any::<bool>(),
        exclude_similar_characters in any::<bool>(),
        strict in any::<bool>(),
    ) -> Options {
        Options {
            length,
            numbers,
            symbols,
            exclude,
            uppercase,
            lowercase,
            exclude_similar_characters,
            strict,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generated_passwords_honour_options(options in arb_options()) {
        match generate(&options) {
            Ok(password) => {
                let password = password.as_str();
                prop_assert_eq!(password.chars().count(), options.length);
                if options.exclude_similar_characters {
                    prop_assert!(!password.chars().any(|ch| "ilLI|`oO0".contains(ch)));
                }
                if !options.lowercase {
                    prop_assert!(!password.chars().any(|ch| ch.is_ascii_lowercase()));
                }
                if !options.uppercase {
                    prop_assert!(!password.chars().any(|ch| ch.is_ascii_uppercase()));
                }
                if !options.numbers {
                    prop_assert!(!password.chars().any(|ch| ch.is_ascii_digit()));
                }
                if options.strict {
                    if options.lowercase {
                        prop_assert!(password.chars().any(|ch| ch.is_ascii_lowercase()));
                    }
                    if options.uppercase {
                        prop_assert!(password.chars().any(|ch| ch.is_ascii_uppercase()));
                    }
                    if options.numbers {
                        prop_assert!(password.chars().any(|ch| ch.is_ascii_digit()));
                    }
                    if let Symbols::Custom(custom) = &options.symbols {
                        prop_assert!(password.chars().any(|ch| custom.contains(ch)));
                    }
                }
            }
            Err(GenerateError::EmptyPool) => {}
            Err(GenerateError::StrictLengthViolation { required, length }) => {
                prop_assert!(options.strict);
                prop_assert!(required > length);
            }
            Err(GenerateError::UnsatisfiableConstraints { .. }) => {
                prop_assert!(options.strict);
            }
        }
    }

    #[test]
    fn excluded_characters_are_absent(exclude in "[a-zA-Z]{1,10}") {
        let options = Options {
            length: 200,
            exclude: exclude.clone(),
            ..Options::default()
        };
        let password = generate(&options).unwrap();
        prop_assert!(!password.as_str().chars().any(|ch| exclude.contains(ch)));
    }
}
