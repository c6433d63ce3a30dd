//! Command-line definition and dispatch

use crate::commands::{run_calc, run_util, UtilCommand};
use crate::config::CliConfig;
use crate::session::{self, Session};
use anyhow::{anyhow, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Build the `kata` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("kata")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Arithmetic, utility, and todo-list commands")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .global(true)
                .help("Tracing filter (overrides RUST_LOG and the config file)"),
        )
        .subcommand(
            Command::new("calc")
                .about("Evaluate one arithmetic operation")
                .arg(
                    Arg::new("operation")
                        .required(true)
                        .help("add, subtract, multiply, divide, power, sqrt, percentage, factorial"),
                )
                .arg(
                    Arg::new("operands")
                        .num_args(0..)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .help("Numeric operands"),
                ),
        )
        .subcommand(
            Command::new("util")
                .about("Run one utility function")
                .subcommand_required(true)
                .subcommand(text_command("palindrome", "Check whether text is a palindrome"))
                .subcommand(
                    Command::new("max").about("Largest of the given numbers").arg(
                        Arg::new("values")
                            .num_args(0..)
                            .allow_negative_numbers(true)
                            .value_parser(value_parser!(f64)),
                    ),
                )
                .subcommand(text_command("json", "Parse and pretty-print JSON"))
                .subcommand(
                    Command::new("dedupe")
                        .about("Distinct items in first-occurrence order")
                        .arg(Arg::new("items").num_args(0..)),
                )
                .subcommand(text_command("email", "Check whether text is a plausible email"))
                .subcommand(text_command("capitalize", "Capitalize text"))
                .subcommand(text_command("age", "Age in years from a YYYY-MM-DD birth date")),
        )
        .subcommand(
            Command::new("todo")
                .about("Interactive todo session reading commands from stdin")
                .arg(
                    Arg::new("quiet")
                        .long("quiet")
                        .short('q')
                        .action(ArgAction::SetTrue)
                        .help("Do not print a prompt"),
                ),
        )
}

fn text_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(Arg::new("text").required(true).allow_hyphen_values(true))
}

/// Config file path from parsed arguments
#[must_use]
pub fn config_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("config").cloned()
}

/// Log filter from parsed arguments
#[must_use]
pub fn log_directive(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("log").cloned()
}

/// Run the selected subcommand
///
/// # Errors
/// Command failures and I/O errors.
pub fn dispatch<R: BufRead, W: Write>(
    matches: &ArgMatches,
    config: &CliConfig,
    input: R,
    mut output: W,
) -> Result<()> {
    match matches.subcommand() {
        Some(("calc", args)) => {
            let op = required(args, "operation")?;
            let operands: Vec<f64> = args
                .get_many::<f64>("operands")
                .map(|v| v.copied().collect())
                .unwrap_or_default();
            writeln!(output, "{}", run_calc(&op, &operands)?)?;
        }
        Some(("util", args)) => {
            let command = util_command(args)?;
            writeln!(output, "{}", run_util(&command)?)?;
        }
        Some(("todo", args)) => {
            let prompt = if args.get_flag("quiet") {
                ""
            } else {
                config.prompt.as_str()
            };
            let mut session = Session::new(config.todo.clone());
            tracing::info!("starting todo session");
            session::run(&mut session, input, output, prompt)?;
            tracing::info!(remaining = session.list().len(), "todo session ended");
        }
        Some((other, _)) => return Err(anyhow!("unknown command '{other}'")),
        None => return Err(anyhow!("no command given")),
    }
    Ok(())
}

fn util_command(args: &ArgMatches) -> Result<UtilCommand> {
    let command = match args.subcommand() {
        Some(("palindrome", a)) => UtilCommand::Palindrome(required(a, "text")?),
        Some(("max", a)) => UtilCommand::Max(
            a.get_many::<f64>("values")
                .map(|v| v.copied().collect())
                .unwrap_or_default(),
        ),
        Some(("json", a)) => UtilCommand::Json(required(a, "text")?),
        Some(("dedupe", a)) => UtilCommand::Dedupe(
            a.get_many::<String>("items")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
        ),
        Some(("email", a)) => UtilCommand::Email(required(a, "text")?),
        Some(("capitalize", a)) => UtilCommand::Capitalize(required(a, "text")?),
        Some(("age", a)) => UtilCommand::Age(required(a, "text")?),
        Some((other, _)) => return Err(anyhow!("unknown utility '{other}'")),
        None => return Err(anyhow!("no utility given")),
    };
    Ok(command)
}

fn required(args: &ArgMatches, id: &str) -> Result<String> {
    args.get_one::<String>(id)
        .cloned()
        .ok_or_else(|| anyhow!("missing argument '{id}'"))
}
