mod cli;

use log::{LevelFilter, error};

use crate::cli::Cli;

fn init_logging(cli: &Cli) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_default_env();
    if let Some(level) = cli.log_level() {
        builder.filter_level(level);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse_or_default();
    init_logging(&cli);

    let stdout = std::io::stdout();
    if let Err(e) = albums::run(&mut stdout.lock()) {
        error!("Failed to write output: {}", e);
    }
}
