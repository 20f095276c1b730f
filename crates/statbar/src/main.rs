//! statbar CLI

use clap::Parser;
use statbar::{init_tracing, run, Bar, Cli, RunError};
use statbar_diagnostic::TracingSink;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = start(&cli) {
        eprintln!("statbar: {err}");
        std::process::exit(1);
    }
}

fn start(cli: &Cli) -> Result<(), RunError> {
    let config = cli.to_config(TracingSink::new());
    let bar = Bar::new(config);
    run(&bar, std::io::stdin().lock(), std::io::stdout().lock(), cli.output)
}
