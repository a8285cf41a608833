use clap::Parser;
use stockdata::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
