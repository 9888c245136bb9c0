use serde::{Deserialize, Serialize};

/// Settings for a single password.
///
/// All fields are always present; when deserializing, any field missing from the input takes the
/// value from [`Options::default`]. Unknown fields are rejected rather than ignored.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub length: usize,
    pub numbers: bool,
    pub symbols: Symbols,
    /// Characters to remove from the pool. Each occurrence here removes one occurrence there.
    pub exclude: String,
    pub uppercase: bool,
    pub lowercase: bool,
    pub exclude_similar_characters: bool,
    /// Require at least one character from every enabled class.
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            length: 10,
            numbers: false,
            symbols: Symbols::Disabled,
            exclude: String::new(),
            uppercase: true,
            lowercase: true,
            exclude_similar_characters: false,
            strict: false,
        }
    }
}

impl Options {
    /// The shortest password that could possibly satisfy strict mode.
    ///
    /// Lowercase is always counted, even when it is disabled.
    pub fn min_strict_length(&self) -> usize {
        1 + usize::from(self.numbers)
            + usize::from(self.symbols.is_enabled())
            + usize::from(self.uppercase)
    }
}

/// Which symbols, if any, a password may contain.
///
/// In configuration files this is written as `true`, `false`, or a string of the exact symbols to
/// use.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(from = "SymbolsRepr", into = "SymbolsRepr")]
pub enum Symbols {
    #[default]
    Disabled,
    /// The canonical symbol set.
    Default,
    /// Exactly these symbols, in place of the canonical set.
    Custom(String),
}

impl Symbols {
    pub fn is_enabled(&self) -> bool {
        match self {
            Symbols::Disabled => false,
            Symbols::Default => true,
            Symbols::Custom(s) => !s.is_empty(),
        }
    }
}

impl From<bool> for Symbols {
    fn from(enabled: bool) -> Symbols {
        if enabled {
            Symbols::Default
        } else {
            Symbols::Disabled
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum SymbolsRepr {
    Flag(bool),
    Custom(String),
}

impl From<SymbolsRepr> for Symbols {
    fn from(repr: SymbolsRepr) -> Symbols {
        match repr {
            SymbolsRepr::Flag(b) => Symbols::from(b),
            SymbolsRepr::Custom(s) => Symbols::Custom(s),
        }
    }
}

impl From<Symbols> for SymbolsRepr {
    fn from(symbols: Symbols) -> SymbolsRepr {
        match symbols {
            Symbols::Disabled => SymbolsRepr::Flag(false),
            Symbols::Default => SymbolsRepr::Flag(true),
            Symbols::Custom(s) => SymbolsRepr::Custom(s),
        }
    }
}
