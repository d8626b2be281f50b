//! Command line argument parsing
//!
//! The whole CLI surface is one optional positional port argument.

use std::fmt;

/// Port used when no argument is given.
pub const DEFAULT_PORT: u16 = 8000;

/// Invalid command line invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum ArgError {
    /// The port argument is not a valid 16-bit port number.
    InvalidPort(String),
    /// More than one positional argument was given.
    TooManyArgs,
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort(arg) => write!(f, "Invalid port number: {arg}"),
            Self::TooManyArgs => write!(f, "Too many arguments"),
        }
    }
}

impl std::error::Error for ArgError {}

/// Parse the optional positional port argument.
///
/// `args` must not include the program name. No argument means
/// [`DEFAULT_PORT`].
pub fn parse_port<I>(mut args: I) -> Result<u16, ArgError>
where
    I: Iterator<Item = String>,
{
    let port = match args.next() {
        None => DEFAULT_PORT,
        Some(arg) => arg
            .parse::<u16>()
            .map_err(|_| ArgError::InvalidPort(arg))?,
    };

    if args.next().is_some() {
        return Err(ArgError::TooManyArgs);
    }

    Ok(port)
}
