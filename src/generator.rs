use tracing::{debug, instrument};

use crate::entropy::{BlockSource, ChaChaSource, BLOCK_WORDS};
use crate::mix::{fold_digit, mix_block};

/// Starting carry for the mixing fold
pub(crate) const SEED: i32 = 129_512_581;

/// State-carrying behavior of a [`DigitGenerator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The raw mixed value is carried into the next call
    Seeded,
    /// Every call starts over from the seed constant
    Seedless,
}

/// Produces pseudo-random decimal digits in `[0, 9]`
///
/// Owns the carried state and a [`BlockSource`]. Each call draws one block of
/// raw words, folds it into the carry and reduces the mixed value to a digit.
///
/// # Example
///
/// ```
/// use digitmix::DigitGenerator;
///
/// let mut gen = DigitGenerator::seeded();
/// assert!(gen.next_digit() <= 9);
/// ```
#[derive(Debug, Clone)]
pub struct DigitGenerator<S = ChaChaSource> {
    source: S,
    carry: i32,
    variant: Variant,
}

impl DigitGenerator<ChaChaSource> {
    /// Create a generator that carries state across calls
    pub fn seeded() -> Self {
        Self::with_source(ChaChaSource::new(), Variant::Seeded)
    }

    /// Create a generator that restarts from the seed constant on every call
    ///
    /// Only the block source advances between calls, so consecutive digits
    /// still differ even though the carry does not move.
    pub fn seedless() -> Self {
        Self::with_source(ChaChaSource::new(), Variant::Seedless)
    }
}

impl<S: BlockSource> DigitGenerator<S> {
    /// Assemble a generator from a custom block source
    ///
    /// # Arguments
    /// * `source` - supplier of raw word blocks
    /// * `variant` - whether the mixed value persists across calls
    pub fn with_source(source: S, variant: Variant) -> Self {
        Self {
            source,
            carry: SEED,
            variant,
        }
    }

    /// Last raw mixed value, or the seed constant before any successful call
    pub fn carry(&self) -> i32 {
        self.carry
    }

    /// Produce the next digit in `[0, 9]`
    ///
    /// A source failure is not surfaced: the call returns the digit-folded
    /// carry and leaves all state untouched.
    #[instrument(skip(self))]
    pub fn next_digit(&mut self) -> u8 {
        let carry = match self.variant {
            Variant::Seeded => self.carry,
            Variant::Seedless => SEED,
        };
        let mut block = [0i32; BLOCK_WORDS];
        if self.source.fill(&mut block).is_err() {
            debug!("source failed, falling back to carried value");
            return fold_digit(carry);
        }
        let mixed = mix_block(carry, &mut block);
        if self.variant == Variant::Seeded {
            self.carry = mixed;
        }
        fold_digit(mixed)
    }
}
