//! Loop drawing digit pairs and writing their sums

use std::io::Write;

use tracing::{debug, instrument};

use crate::entropy::BlockSource;
use crate::generator::DigitGenerator;
use crate::sum::add;
use crate::Result;

/// Run the generator for `iterations` rounds, writing one line per round
///
/// Each round draws two digits, adds them and writes
/// `"<a> + <b> = <sum>"` to `out`. Digit draws cannot fail, so the only
/// error path is a failed write.
///
/// # Arguments
/// * `gen` - the generator to draw from
/// * `iterations` - number of lines to write
/// * `out` - sink for the formatted lines
#[instrument(skip(gen, out))]
pub fn run<S: BlockSource, W: Write>(
    gen: &mut DigitGenerator<S>,
    iterations: u32,
    out: &mut W,
) -> Result<()> {
    debug!("running {} rounds", iterations);
    for _ in 0..iterations {
        let a = gen.next_digit();
        let b = gen.next_digit();
        writeln!(out, "{} + {} = {}", a, b, add(a as i32, b as i32))?;
    }
    Ok(())
}
