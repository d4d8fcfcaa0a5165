use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use desigit::areas::desigit::Desigit;
use desigit::areas::launcher::{DEFAULT_PROGRAM, Launcher};
use desigit::artifacts::translator::error::{TranslateError, USAGE_EXIT_CODE};
use desigit::logging;
use is_terminal::IsTerminal;
use std::ffi::OsString;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "desigit",
    about = "Git with Hinglish commands",
    long_about = "Use Hindi-English (Hinglish) words to run git commands. \
    The first argument is translated to the matching git subcommand, \
    everything after it is passed to git unchanged.",
    disable_version_flag = true,
    subcommand_value_name = "COMMAND",
    help_template = r"
{name} - {about}

USAGE:
    {name} [OPTIONS] <COMMAND> [ARGS]...

OPTIONS:
{options}

Run `{name} --list` to see every command.
",
)]
struct Cli {
    #[arg(short = 'V', long, help = "Show version information")]
    version: bool,
    #[arg(long, help = "List all available commands")]
    list: bool,
    #[arg(long, help = "Show usage examples")]
    examples: bool,
    #[arg(long, value_name = "COMMAND", help = "Show help for a command")]
    explain: Option<String>,
    #[arg(
        long,
        env = "DESIGIT_GIT",
        value_name = "PATH",
        default_value = DEFAULT_PROGRAM,
        help = "The git executable to run"
    )]
    git_path: OsString,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(external_subcommand)]
    Alias(Vec<OsString>),
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("warning: failed to initialise logging: {err:#}");
    }

    let cli = Cli::parse();
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(code) => exit_code(code),
        Err(err) => {
            let label = if std::io::stderr().is_terminal() {
                "error:".red().bold().to_string()
            } else {
                "error:".to_string()
            };

            match err.downcast_ref::<TranslateError>() {
                Some(translate_err) => {
                    eprintln!("{label} {translate_err}");
                    exit_code(translate_err.exit_code())
                }
                None => {
                    eprintln!("{label} {err:#}");
                    exit_code(USAGE_EXIT_CODE)
                }
            }
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let desigit = Desigit::new(Launcher::new(cli.git_path), Box::new(std::io::stdout()));

    if cli.version {
        desigit.version()?;
    } else if cli.list {
        desigit.list_aliases()?;
    } else if cli.examples {
        desigit.show_examples()?;
    } else if let Some(alias) = cli.explain {
        desigit.explain(&alias)?;
    } else {
        let invocation = match cli.command {
            Some(Commands::Alias(invocation)) => invocation,
            None => Vec::new(),
        };

        return desigit.run(invocation);
    }

    Ok(0)
}

/// Codes outside `0..=255` cannot be reported faithfully and collapse to 1.
fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
