//! Utilities for generating passwords.

use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::pool::build_pool;
use crate::sampler::IndexSampler;
use crate::{CharacterClass, GenerateError, Options, Password};

/// How many candidates strict mode draws before giving up, unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Generates passwords from a cryptographically secure random number generator.
///
/// Each generator owns its sampler (and so its buffer of unused random bytes), which carries over
/// from one password to the next.
pub struct Generator<R> {
    sampler: IndexSampler<R>,
    max_attempts: usize,
}

impl Default for Generator<OsRng> {
    fn default() -> Generator<OsRng> {
        Generator::new(OsRng)
    }
}

impl<R> Generator<R>
where
    R: RngCore + CryptoRng,
{
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            sampler: IndexSampler::new(rng),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Limit how many candidates strict mode may reject before failing with
    /// [`GenerateError::UnsatisfiableConstraints`].
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Generator<R> {
        self.max_attempts = max_attempts;
        self
    }

    /// Generate a single password.
    pub fn generate(&mut self, options: &Options) -> Result<Password, GenerateError> {
        check_strict_length(options)?;
        let pool = build_pool(options)?;
        self.draw(options, &pool)
    }

    /// Generate a single password from a pool that has already been built for `options`.
    pub fn generate_from_pool(
        &mut self,
        options: &Options,
        pool: &[char],
    ) -> Result<Password, GenerateError> {
        check_strict_length(options)?;
        if pool.is_empty() {
            return Err(GenerateError::EmptyPool);
        }
        self.draw(options, pool)
    }

    /// Generate `amount` passwords, each drawn independently with the same options.
    ///
    /// The options are checked, and the pool built, once up front; any error is returned before
    /// a single password is drawn.
    pub fn generate_multiple(
        &mut self,
        amount: usize,
        options: &Options,
    ) -> Result<Vec<Password>, GenerateError> {
        check_strict_length(options)?;
        let pool = build_pool(options)?;
        let mut passwords = Vec::with_capacity(amount);
        for _ in 0..amount {
            passwords.push(self.draw(options, &pool)?);
        }
        debug!("generated {} passwords", passwords.len());
        Ok(passwords)
    }

    fn draw(&mut self, options: &Options, pool: &[char]) -> Result<Password, GenerateError> {
        if !options.strict {
            return Ok(Password(self.draw_candidate(options.length, pool)));
        }

        let required = CharacterClass::ALL
            .into_iter()
            .filter(|class| class.is_enabled(options))
            .collect::<Vec<_>>();

        // A class with nothing left in the pool can never be satisfied.
        if let Some(class) = first_missing(&required, pool.iter().copied(), options) {
            return Err(GenerateError::UnsatisfiableConstraints { class, attempts: 0 });
        }

        let mut missing = None;
        for attempt in 1..=self.max_attempts {
            let candidate = self.draw_candidate(options.length, pool);
            match first_missing(&required, candidate.chars(), options) {
                None => return Ok(Password(candidate)),
                Some(class) => {
                    debug!("strict mode rejected candidate {attempt}: no {class} character");
                    missing = Some(class);
                }
            }
        }

        Err(GenerateError::UnsatisfiableConstraints {
            // With zero attempts allowed nothing was drawn; blame the first required class.
            class: missing
                .or_else(|| required.first().copied())
                .unwrap_or(CharacterClass::Lowercase),
            attempts: self.max_attempts,
        })
    }

    fn draw_candidate(&mut self, length: usize, pool: &[char]) -> String {
        (0..length)
            .map(|_| pool[self.sampler.next_index(pool.len())])
            .collect()
    }
}

fn check_strict_length(options: &Options) -> Result<(), GenerateError> {
    if options.strict {
        let required = options.min_strict_length();
        if required > options.length {
            return Err(GenerateError::StrictLengthViolation {
                required,
                length: options.length,
            });
        }
    }
    Ok(())
}

/// The first of `required` with no member among `chars`.
fn first_missing(
    required: &[CharacterClass],
    chars: impl Iterator<Item = char> + Clone,
    options: &Options,
) -> Option<CharacterClass> {
    required
        .iter()
        .copied()
        .find(|class| !chars.clone().any(|ch| class.matches(ch, options)))
}
