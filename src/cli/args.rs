//! Command-line argument parsing.
//!
//! The first argument after the program name selects the command; the rest
//! are its positional arguments.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    SignIn {
        email: String,
        password: String,
    },
    SignUp {
        name: String,
        email: String,
        password: String,
    },
    SignOut,
    WhoAmI,
    Providers,
    Availability {
        provider_id: String,
        date: NaiveDate,
    },
    Book {
        provider_id: String,
        date: NaiveDate,
        hour: u8,
    },
    Profile {
        name: String,
        email: String,
        password: Option<PasswordArgs>,
    },
    Avatar {
        path: PathBuf,
    },
}

/// `<old> <new> <confirm>` of the profile command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordArgs {
    pub old: String,
    pub new: String,
    pub confirmation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing <{argument}> for `{command}`")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Unexpected argument for `{command}`: {argument}")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid hour {0:?}, expected 0-23")]
    InvalidHour(String),
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: gobarber <command> [arguments]

Commands:
  signin <email> <password>
  signup <name> <email> <password>
  signout
  whoami
  providers
  availability <provider-id> <YYYY-MM-DD>
  book <provider-id> <YYYY-MM-DD> <hour>
  profile <name> <email> [<old-password> <new-password> <confirmation>]
  avatar <jpeg-path>

Options:
  -V, --version    Print version
  -h, --help       Print this help

Environment:
  GOBARBER_API_URL        API base URL (default http://localhost:3333)
  GOBARBER_SESSION_FILE   Session file (default ~/.gobarber/session.json)
  GOBARBER_TIMEOUT_SECS   Request timeout in seconds
  RUST_LOG                Log filter (default gobarber=info)";

struct Positional<I> {
    command: &'static str,
    args: I,
}

impl<I: Iterator<Item = String>> Positional<I> {
    fn next(&mut self, argument: &'static str) -> Result<String, ArgsError> {
        self.args.next().ok_or(ArgsError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    fn finish(mut self) -> Result<(), ArgsError> {
        match self.args.next() {
            Some(argument) => Err(ArgsError::UnexpectedArgument {
                command: self.command,
                argument,
            }),
            None => Ok(()),
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ArgsError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ArgsError::InvalidDate(value.to_string()))
}

fn parse_hour(value: &str) -> Result<u8, ArgsError> {
    value
        .parse::<u8>()
        .ok()
        .filter(|h| *h < 24)
        .ok_or_else(|| ArgsError::InvalidHour(value.to_string()))
}

/// Parse command-line arguments (typically `std::env::args()`).
///
/// ```
/// use gobarber::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["gobarber".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let mut args = args.skip(1);
    let Some(first) = args.next() else {
        return Ok(CliCommand::Help);
    };

    let command: &'static str = match first.as_str() {
        "--version" | "-V" => return Ok(CliCommand::Version),
        "--help" | "-h" | "help" => return Ok(CliCommand::Help),
        "signin" => "signin",
        "signup" => "signup",
        "signout" => "signout",
        "whoami" => "whoami",
        "providers" => "providers",
        "availability" => "availability",
        "book" => "book",
        "profile" => "profile",
        "avatar" => "avatar",
        _ => return Err(ArgsError::UnknownCommand(first)),
    };
    let mut p = Positional { command, args };

    let parsed = match command {
        "signin" => CliCommand::SignIn {
            email: p.next("email")?,
            password: p.next("password")?,
        },
        "signup" => CliCommand::SignUp {
            name: p.next("name")?,
            email: p.next("email")?,
            password: p.next("password")?,
        },
        "signout" => CliCommand::SignOut,
        "whoami" => CliCommand::WhoAmI,
        "providers" => CliCommand::Providers,
        "availability" => CliCommand::Availability {
            provider_id: p.next("provider-id")?,
            date: parse_date(&p.next("date")?)?,
        },
        "book" => CliCommand::Book {
            provider_id: p.next("provider-id")?,
            date: parse_date(&p.next("date")?)?,
            hour: parse_hour(&p.next("hour")?)?,
        },
        "profile" => {
            let name = p.next("name")?;
            let email = p.next("email")?;
            let password = match p.args.next() {
                Some(old) => Some(PasswordArgs {
                    old,
                    new: p.next("new-password")?,
                    confirmation: p.next("confirmation")?,
                }),
                None => None,
            };
            CliCommand::Profile {
                name,
                email,
                password,
            }
        }
        _ => CliCommand::Avatar {
            path: PathBuf::from(p.next("jpeg-path")?),
        },
    };

    p.finish()?;
    Ok(parsed)
}
