//! Assembling the alphabet a password is drawn from.

use log::debug;

use crate::charset::{self, CharacterClass};
use crate::{GenerateError, Options};

/// Build the pool of candidate characters for `options`.
///
/// Enabled classes are concatenated in the order lowercase, uppercase, numbers, symbols. Similar
/// characters are then stripped (if requested), and finally each character of `options.exclude`,
/// taken from last to first, removes the first matching character still in the pool.
pub fn build_pool(options: &Options) -> Result<Vec<char>, GenerateError> {
    let mut pool = Vec::new();
    for class in CharacterClass::ALL {
        if class.is_enabled(options) {
            pool.extend(class.characters(options).chars());
        }
    }
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }

    if options.exclude_similar_characters {
        pool.retain(|&ch| !charset::is_similar(ch));
    }

    for excluded in options.exclude.chars().rev() {
        if let Some(idx) = pool.iter().position(|&ch| ch == excluded) {
            pool.remove(idx);
        }
    }

    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }
    debug!("built a pool of {} characters", pool.len());
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbols;

    fn pool_string(options: &Options) -> String {
        build_pool(options).unwrap().into_iter().collect()
    }

    #[test]
    fn default_pool_is_letters() {
        assert_eq!(
            pool_string(&Options::default()),
            format!("{}{}", charset::LOWERCASE, charset::UPPERCASE)
        );
    }

    #[test]
    fn classes_in_fixed_order() {
        let options = Options {
            numbers: true,
            symbols: Symbols::Default,
            ..Options::default()
        };
        let expected = format!(
            "{}{}{}{}",
            charset::LOWERCASE,
            charset::UPPERCASE,
            charset::NUMBERS,
            charset::SYMBOLS
        );
        assert_eq!(pool_string(&options), expected);
    }

    #[test]
    fn custom_symbols_are_appended_verbatim() {
        let options = Options {
            lowercase: false,
            uppercase: false,
            symbols: Symbols::Custom("!!?".to_owned()),
            ..Options::default()
        };
        assert_eq!(pool_string(&options), "!!?");
    }

    #[test]
    fn similar_characters_removed() {
        let options = Options {
            numbers: true,
            symbols: Symbols::Default,
            exclude_similar_characters: true,
            ..Options::default()
        };
        let pool = pool_string(&options);
        assert!(!pool.chars().any(charset::is_similar));
        assert!(pool.contains('1'));
        assert!(pool.contains('~'));
    }

    #[test]
    fn exclude_removes_one_occurrence_per_character() {
        let options = Options {
            lowercase: false,
            uppercase: false,
            symbols: Symbols::Custom("!!!?".to_owned()),
            exclude: "!!".to_owned(),
            ..Options::default()
        };
        assert_eq!(pool_string(&options), "!?");
    }

    #[test]
    fn exclude_ignores_absent_characters() {
        let options = Options {
            exclude: "0123".to_owned(),
            ..Options::default()
        };
        assert_eq!(build_pool(&options).unwrap().len(), 52);
    }

    #[test]
    fn no_classes_is_empty_pool() {
        let options = Options {
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: Symbols::Disabled,
            ..Options::default()
        };
        assert!(matches!(build_pool(&options), Err(GenerateError::EmptyPool)));
    }

    #[test]
    fn everything_excluded_is_empty_pool() {
        let options = Options {
            lowercase: false,
            uppercase: false,
            numbers: true,
            exclude: charset::NUMBERS.to_owned(),
            ..Options::default()
        };
        assert!(matches!(build_pool(&options), Err(GenerateError::EmptyPool)));
    }
}
