use clap::Parser;
use stocksent::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    stocksent::logging::init_cli_logger(cli.verbose);
    run(cli)
}
