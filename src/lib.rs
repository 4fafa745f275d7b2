//! Seeded pseudo-random digit generator
//!
//! Produces decimal digits in `[0, 9]` by folding blocks of raw 32-bit words
//! into a carried state with bitwise mixing, then reducing the mixed value to
//! digit range
//!
//! Raw words come from a [`BlockSource`][BlockSource]; the default source is a
//! ChaCha8 stream seeded from a fixed constant, so the seeded generator yields
//! the same sequence on every run. The output is not uniform and not suitable
//! for anything cryptographic
//!
//! The crate exposes debug logs through the [`tracing`][tracing] crate
//!
//! ## Crate usage
//!
//! # Example
//!
//! ```
//! use digitmix::DigitGenerator;
//!
//! let mut gen = DigitGenerator::seeded();
//! let digit = gen.next_digit();
//! assert!(digit <= 9);
//! ```

mod entropy;
mod error;
mod generator;
mod mix;
mod sum;

pub mod driver;

pub use entropy::{BlockSource, BoundedSource, ChaChaSource, BLOCK_WORDS};
pub use error::{Error, Result};
pub use generator::{DigitGenerator, Variant};
pub use mix::fold_digit;
pub use sum::add;
