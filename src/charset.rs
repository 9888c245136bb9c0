//! The character classes a password can draw from.

use std::fmt;

use crate::options::{Options, Symbols};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "\\!@#$%^&*()+_-=}{[]|:;\"/?.><,`~'";

/// Characters which are easily confused with one another when read by a human.
pub const SIMILAR_CHARACTERS: &str = "ilLI|`oO0";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// All classes, in the order they contribute to a pool.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn canonical(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Whether `options` turns this class on.
    pub fn is_enabled(self, options: &Options) -> bool {
        match self {
            CharacterClass::Lowercase => options.lowercase,
            CharacterClass::Uppercase => options.uppercase,
            CharacterClass::Numbers => options.numbers,
            CharacterClass::Symbols => options.symbols.is_enabled(),
        }
    }

    /// The characters this class contributes under `options`.
    ///
    /// This differs from [`CharacterClass::canonical`] only for symbols, where an explicit symbol
    /// string replaces the canonical set.
    pub fn characters(self, options: &Options) -> &str {
        match (self, &options.symbols) {
            (CharacterClass::Symbols, Symbols::Custom(custom)) => custom.as_str(),
            _ => self.canonical(),
        }
    }

    /// Membership predicate used when checking strict-mode coverage.
    pub fn matches(self, ch: char, options: &Options) -> bool {
        match self {
            CharacterClass::Lowercase => ch.is_ascii_lowercase(),
            CharacterClass::Uppercase => ch.is_ascii_uppercase(),
            CharacterClass::Numbers => ch.is_ascii_digit(),
            CharacterClass::Symbols => self.characters(options).contains(ch),
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

pub fn is_similar(ch: char) -> bool {
    SIMILAR_CHARACTERS.contains(ch)
}
