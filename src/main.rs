use hello_world::utils::logger;
use hello_world::{greet_stdout, CliConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::load();

    logger::init_cli_logger();
    tracing::debug!("Ignoring {} command-line argument(s)", config.ignored_count());

    // A failed write is the environment's problem; the exit status stays 0.
    if let Err(e) = greet_stdout() {
        tracing::debug!("Greeting not delivered: {} (broken pipe: {})", e, e.is_broken_pipe());
    }

    ExitCode::SUCCESS
}
