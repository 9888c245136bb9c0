//! Random password generation over a configurable character pool.
//!
//! A password is drawn character by character from a pool assembled from the enabled
//! [`CharacterClass`]es. Characters are picked with an unbiased sampler fed by a cryptographically
//! secure generator. In strict mode a password is only returned once it contains at least one
//! character from every enabled class.
//!
//! ```no_run
//! let options = passgen::Options {
//!     length: 16,
//!     numbers: true,
//!     symbols: passgen::Symbols::Default,
//!     strict: true,
//!     ..Default::default()
//! };
//! let password = passgen::generate(&options)?;
//! println!("{}", password.as_str());
//! # Ok::<(), passgen::GenerateError>(())
//! ```

use rand::rngs::OsRng;

pub mod charset;
mod options;
pub mod password_generation;
mod pool;
pub mod sampler;

pub use charset::CharacterClass;
pub use options::{Options, Symbols};
pub use password_generation::Generator;
pub use pool::build_pool;

/// Generate one password, using the operating system's random number generator.
///
/// Each call starts with an empty byte buffer. Callers generating passwords repeatedly should keep
/// a [`Generator`] around instead, so unused random bytes carry over between passwords.
pub fn generate(options: &Options) -> Result<Password, GenerateError> {
    Generator::new(OsRng).generate(options)
}

/// Generate `amount` independent passwords with the same options.
///
/// The options are validated even when `amount` is zero. The byte buffer is shared across the
/// batch but not kept after it; see [`Generator`] for reuse across calls.
pub fn generate_multiple(amount: usize, options: &Options) -> Result<Vec<Password>, GenerateError> {
    Generator::new(OsRng).generate_multiple(amount, options)
}

/// A generated password.
///
/// Its `Debug` output never includes the password itself.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Password(String);

opaque_debug::implement!(Password);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<Password> for String {
    fn from(password: Password) -> String {
        password.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("at least one of lowercase, uppercase, numbers or symbols must leave characters in the pool")]
    EmptyPool,
    #[error(
        "a length of {length} is too short for strict mode with these classes \
         (at least {required} is needed)"
    )]
    StrictLengthViolation { required: usize, length: usize },
    #[error("strict mode could not be satisfied: no {class} character after {attempts} attempts")]
    UnsatisfiableConstraints {
        class: CharacterClass,
        attempts: usize,
    },
}
