use kata_cli::cli::{build_cli, config_path, dispatch, log_directive};
use kata_cli::logging::init_tracing;
use kata_cli::CliConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let config = match CliConfig::load(config_path(&matches).as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(
        log_directive(&matches).as_deref(),
        &config.log_filter,
        config.log_format,
    ) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match dispatch(&matches, &config, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("command failed: {e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
