//! Textual command scripts for host drivers and test harnesses.
//!
//! A script is one command per line, `#` starts a comment, blank lines
//! are skipped:
//!
//! ```text
//! # warm something up
//! set 90
//! start
//! tick 90   # run the clock down
//! open
//! ```
//!
//! Commands: `open`, `close`, `start`, `stop`, `reset`, `set <secs>`,
//! `tick [n]` (a bare `tick` is one tick). This is a driver-side
//! convenience, not a wire protocol: the parsed result is an ordinary
//! `Vec<OvenInput>`.

mod error;

pub use error::ScriptError;

use crate::core::{OvenAction, OvenInput};
use crate::machine::OvenControl;

/// Parse a script into the inputs it denotes.
///
/// # Example
///
/// ```rust
/// use magnetron::core::{OvenAction, OvenInput};
/// use magnetron::script;
///
/// let inputs = script::parse("set 5\nstart\ntick 2").unwrap();
/// assert_eq!(inputs.len(), 4);
/// assert_eq!(inputs[0], OvenAction::SetTime(5).into());
/// assert_eq!(inputs[3], OvenInput::Tick);
/// ```
pub fn parse(source: &str) -> Result<Vec<OvenInput>, ScriptError> {
    let mut inputs = Vec::new();

    for (number, raw) in source.lines().enumerate() {
        let line = number + 1;
        let text = raw.split('#').next().unwrap_or("");
        let mut tokens = text.split_whitespace();
        let Some(command) = tokens.next() else {
            continue;
        };
        let argument = tokens.next();

        match command {
            "open" => {
                reject_argument(command, argument, line)?;
                inputs.push(OvenAction::OpenDoor.into());
            }
            "close" => {
                reject_argument(command, argument, line)?;
                inputs.push(OvenAction::CloseDoor.into());
            }
            "start" => {
                reject_argument(command, argument, line)?;
                inputs.push(OvenAction::Start.into());
            }
            "stop" => {
                reject_argument(command, argument, line)?;
                inputs.push(OvenAction::Stop.into());
            }
            "reset" => {
                reject_argument(command, argument, line)?;
                inputs.push(OvenInput::Reset);
            }
            "set" => {
                let value = argument.ok_or(ScriptError::MissingDuration { line })?;
                let secs = parse_number(value, line)?;
                inputs.push(OvenAction::SetTime(secs).into());
            }
            "tick" => {
                let count = match argument {
                    Some(value) => parse_number(value, line)?,
                    None => 1,
                };
                inputs.extend(std::iter::repeat(OvenInput::Tick).take(count as usize));
            }
            other => {
                return Err(ScriptError::UnknownCommand {
                    command: other.to_string(),
                    line,
                });
            }
        }
    }

    Ok(inputs)
}

/// Parse a script and apply it to a control surface.
///
/// Parsing happens up front: a script with any bad line applies
/// nothing.
///
/// # Example
///
/// ```rust
/// use magnetron::{script, Oven, OvenControl};
///
/// let mut oven = Oven::new();
/// script::run(&mut oven, "set 90\nstart\ntick 30").unwrap();
/// assert!(oven.is_magnetron_on());
/// assert_eq!(oven.time_remaining(), 60);
/// ```
pub fn run<T: OvenControl + ?Sized>(oven: &mut T, source: &str) -> Result<(), ScriptError> {
    for input in parse(source)? {
        oven.apply(input);
    }
    Ok(())
}

fn reject_argument(
    command: &str,
    argument: Option<&str>,
    line: usize,
) -> Result<(), ScriptError> {
    match argument {
        Some(_) => Err(ScriptError::UnexpectedArgument {
            command: command.to_string(),
            line,
        }),
        None => Ok(()),
    }
}

fn parse_number(value: &str, line: usize) -> Result<u32, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        value: value.to_string(),
        line,
    })
}
