use std::{
    io::{self, IsTerminal},
    path::PathBuf,
    process,
};

use appver::{bump, update_file, PropertiesError, Strictness, Version, VersionError, DEFAULT_PATH};
use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Version(#[from] VersionError),

    #[error("{0}")]
    Properties(#[from] PropertiesError),
}

/// Bumps an app's semantic version and writes it, along with an incremented build code, to its
/// properties file.
///
/// Prints the new version to standard output.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The current version, as `MAJOR.MINOR.PATCH`
    current_version: String,

    /// The part to bump: `major`, `minor`, or `patch`. Any other value leaves the version as it is
    /// (unless `--strict`).
    #[arg(allow_hyphen_values = true)]
    bump_type: String,

    /// Anything after the bump type is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,

    /// The properties file holding `appVersionName` and `appVersionCode`
    #[arg(short, long, env = "APPVER_FILE", default_value = DEFAULT_PATH)]
    file: PathBuf,

    /// Compute and report the new version without writing the properties file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Fail on an unrecognized bump type or a properties file without `appVersionName`
    #[arg(long)]
    strict: bool,

    /// Log more to standard error. Repeat for even more. `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn strictness(&self) -> Strictness {
        if self.strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            // missing positionals get a plain usage line on stdout, not clap's error report
            ErrorKind::MissingRequiredArgument
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                println!("{}", Cli::command().render_usage());
                process::exit(1);
            }
            _ => e.exit(),
        },
    };

    init_logging(cli.verbose);

    match do_work(&cli) {
        Ok(version) => println!("{version}"),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn do_work(cli: &Cli) -> Result<Version, CliError> {
    if !cli.rest.is_empty() {
        debug!(ignored = ?cli.rest, "ignoring arguments after the bump type");
    }

    let strictness = cli.strictness();
    let next = bump(&cli.current_version, &cli.bump_type, strictness)?;
    let rewritten = update_file(&cli.file, &next, strictness, cli.dry_run)?;

    info!(
        file = %cli.file.display(),
        version = %next,
        version_code = ?rewritten.version_code.map(|change| change.to),
        dry_run = cli.dry_run,
        "updated properties"
    );
    Ok(next)
}
