use std::{io::ErrorKind, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use eller_maze::{
    app::App,
    config::{Cli, Config},
    logging,
};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Usage errors exit with 1; --help and --version are not errors.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let _guard = logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("[main] run failed: {:?}", err);
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::try_from(cli)?;
    let app = App::new(config);

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    match app.run(&mut out) {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("[main] stdout closed, stopping early");
            Ok(())
        }
        result => result.context("failed to write maze to stdout"),
    }
}
