mod app;

use crate::app::App;
use anyhow::Result;
use digitmix::{driver, DigitGenerator};

fn main() -> Result<()> {
    let app: App = App::new();
    app.init_logging();
    let mut out = std::io::stdout();
    if app.seedless {
        let mut gen = DigitGenerator::seedless();
        driver::run(&mut gen, app.iterations, &mut out)?;
    } else {
        let mut gen = DigitGenerator::seeded();
        driver::run(&mut gen, app.iterations, &mut out)?;
    }
    Ok(())
}
