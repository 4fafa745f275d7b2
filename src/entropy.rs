use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};
use tracing::debug;

use crate::error::{Error, Result};
use crate::generator::SEED;

/// Number of raw 32-bit words consumed by one generation call
pub const BLOCK_WORDS: usize = 32;

/// Supplier of raw word blocks for the mixing fold
///
/// One block is requested per generated digit. A source that cannot produce
/// another block returns [`Error::Exhausted`] and leaves the block untouched.
pub trait BlockSource {
    fn fill(&mut self, block: &mut [i32; BLOCK_WORDS]) -> Result<()>;
}

/// Default block source: a ChaCha8 stream seeded from a fixed constant
///
/// Not cryptographically secure, and deliberately so: every run yields the
/// same stream.
#[derive(Debug, Clone)]
pub struct ChaChaSource {
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(SEED as u64),
        }
    }
}

impl Default for ChaChaSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockSource for ChaChaSource {
    fn fill(&mut self, block: &mut [i32; BLOCK_WORDS]) -> Result<()> {
        for word in block.iter_mut() {
            *word = self.rng.next_u32() as i32;
        }
        Ok(())
    }
}

/// Wrapper limiting how many blocks the inner source may yield
#[derive(Debug, Clone)]
pub struct BoundedSource<S> {
    inner: S,
    remaining: usize,
}

impl<S: BlockSource> BoundedSource<S> {
    /// # Arguments
    /// * `inner` - the wrapped source
    /// * `blocks` - how many blocks to allow before reporting exhaustion
    pub fn new(inner: S, blocks: usize) -> Self {
        Self {
            inner,
            remaining: blocks,
        }
    }
}

impl<S: BlockSource> BlockSource for BoundedSource<S> {
    fn fill(&mut self, block: &mut [i32; BLOCK_WORDS]) -> Result<()> {
        if self.remaining == 0 {
            debug!("no blocks remaining");
            return Err(Error::Exhausted);
        }
        self.inner.fill(block)?;
        self.remaining -= 1;
        Ok(())
    }
}
