//! Uniform index sampling on top of a random byte source.

use log::trace;
use rand::{CryptoRng, RngCore};

/// Number of random bytes fetched from the underlying generator at a time.
pub const BATCH_SIZE: usize = 256;

/// Produces uniformly distributed indices in `[0, max)` from a stream of random bytes.
///
/// Bytes are fetched from the wrapped generator in batches of [`BATCH_SIZE`], the first batch on
/// the first draw. To avoid modulo bias, a byte is only used if it falls below the largest
/// multiple of `max` that fits in a byte; anything above that is discarded and another byte is
/// drawn.
///
/// The buffer is not shared: anything that wants to sample from several threads should give each
/// one its own sampler.
pub struct IndexSampler<R> {
    rng: R,
    buffer: [u8; BATCH_SIZE],
    cursor: usize,
}

impl<R> IndexSampler<R>
where
    R: RngCore + CryptoRng,
{
    pub fn new(rng: R) -> IndexSampler<R> {
        IndexSampler {
            rng,
            buffer: [0; BATCH_SIZE],
            cursor: BATCH_SIZE,
        }
    }

    /// Return an index drawn uniformly from `[0, max)`.
    ///
    /// # Panics
    ///
    /// If `max` is zero.
    pub fn next_index(&mut self, max: usize) -> usize {
        assert!(max > 0, "cannot sample an index from an empty range");

        if max <= 256 {
            // For max == 1 the limit is 256, so every byte is accepted and reduces to 0.
            let limit = 256 - 256 % max;
            loop {
                let b = usize::from(self.next_byte());
                if b < limit {
                    return b % max;
                }
            }
        }

        // A single byte can't cover the range; use as few whole bytes as will.
        let width = bytes_needed(max);
        let max = max as u128;
        let span = 1u128 << (8 * width);
        let limit = span - span % max;
        loop {
            let mut v = 0u128;
            for _ in 0..width {
                v = (v << 8) | u128::from(self.next_byte());
            }
            if v < limit {
                return (v % max) as usize;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn rng(&self) -> &R {
        &self.rng
    }

    fn next_byte(&mut self) -> u8 {
        if self.cursor >= BATCH_SIZE {
            self.rng.fill_bytes(&mut self.buffer);
            self.cursor = 0;
            trace!("refilled sampler buffer with {} random bytes", BATCH_SIZE);
        }
        let b = self.buffer[self.cursor];
        self.cursor += 1;
        b
    }
}

fn bytes_needed(max: usize) -> usize {
    let bits = usize::BITS - (max - 1).leading_zeros();
    ((bits + 7) / 8) as usize
}
