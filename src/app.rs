use clap::Parser;
use clap_verbosity_flag::Verbosity;

#[derive(Debug, Parser)]
#[clap(about = "Print digit addition lines from the mixing generator")]
pub(crate) struct App {
    /// Number of lines to print
    #[clap(short, long, default_value_t = 10)]
    pub(crate) iterations: u32,
    /// Restart from the seed constant on every draw instead of carrying state
    #[clap(short, long)]
    pub(crate) seedless: bool,
    #[clap(flatten)]
    pub(crate) verbose: Verbosity,
}

impl App {
    pub(crate) fn new() -> Self {
        Self::parse()
    }
    pub(crate) fn init_logging(&self) {
        pretty_env_logger::formatted_builder()
            .filter_level(self.verbose.log_level_filter())
            .init()
    }
}
